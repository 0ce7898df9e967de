//! Network file loading, conversion and introspection.

use std::path::Path;

use mf_flow::TransitNetwork;
use mf_graph::{Building, NetworkBuilder, Track};
use mf_project::{NetworkFile, ProjectError};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Overview of a network file for listing.
#[derive(Debug, Clone)]
pub struct NetworkSummary {
    pub name: String,
    pub building_count: usize,
    pub track_count: usize,
    /// Tracks the engine ignores because an endpoint is unknown.
    pub dropped_tracks: usize,
    pub passenger_count: usize,
    pub shift_count: usize,
    pub warnings: Vec<String>,
}

/// Load and validate a network file (`.yaml`, `.yml` or `.json`).
pub fn load_network(path: &Path) -> AppResult<NetworkFile> {
    let file = mf_project::load(path).map_err(|err| match err {
        ProjectError::Io(source) => AppError::NetworkFileRead {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })?;
    debug!(path = %path.display(), name = %file.name, "loaded network file");
    Ok(file)
}

pub fn to_buildings(file: &NetworkFile) -> Vec<Building> {
    file.buildings
        .iter()
        .map(|def| Building::new(def.id, def.occupancy))
        .collect()
}

pub fn to_tracks(file: &NetworkFile) -> Vec<Track> {
    file.tracks
        .iter()
        .map(|def| Track::new(def.id, def.from, def.to, def.capacity).with_cost(def.cost))
        .collect()
}

fn builder_for(file: &NetworkFile) -> AppResult<NetworkBuilder> {
    let buildings = to_buildings(file);
    let tracks = to_tracks(file);
    let mut builder = NetworkBuilder::new();
    builder.add_buildings(&buildings)?;
    builder.add_tracks(&tracks)?;
    Ok(builder)
}

/// Build a queryable network with fresh residual capacities.
pub fn build_network(file: &NetworkFile) -> AppResult<TransitNetwork> {
    let graph = builder_for(file)?.build()?;
    Ok(TransitNetwork::from_graph(graph))
}

pub fn summarize(file: &NetworkFile) -> AppResult<NetworkSummary> {
    let warnings = mf_project::validate_network(file)
        .map_err(|e| AppError::Project(e.to_string()))?
        .iter()
        .map(ToString::to_string)
        .collect();

    Ok(NetworkSummary {
        name: file.name.clone(),
        building_count: file.buildings.len(),
        track_count: file.tracks.len(),
        dropped_tracks: builder_for(file)?.dropped_tracks(),
        passenger_count: file.passengers.len(),
        shift_count: file.shifts.len(),
        warnings,
    })
}
