//! Spanning track selection ("best metro system").
//!
//! Tracks are scored by goodness, the capacity a track can really carry
//! (clamped by both endpoint occupancies) divided by its cost, floored.
//! Kruskal-style selection then keeps the best tracks that do not close a
//! cycle until every building is linked.

use mf_core::{Capacity, NodeId, TrackId, bounded_capacity, floor_ratio};
use mf_graph::{Building, BuildingRegistry, Track};
use tracing::debug;

use crate::error::{PlanError, PlanResult};
use crate::union_find::UnionFind;

/// A track with resolved endpoints and its goodness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredTrack {
    pub track: TrackId,
    pub from: NodeId,
    pub to: NodeId,
    pub goodness: Capacity,
}

/// Score every track whose endpoints are both registered, best first.
///
/// Equal goodness keeps input order. Tracks touching an unknown building
/// are skipped.
///
/// # Errors
///
/// [`PlanError::ZeroCost`] for the first scored track with `cost == 0`.
pub fn rank_tracks(registry: &BuildingRegistry, tracks: &[Track]) -> PlanResult<Vec<ScoredTrack>> {
    let mut scored = Vec::with_capacity(tracks.len());
    for track in tracks {
        let (Some(from), Some(to)) = (registry.node_id(track.from), registry.node_id(track.to)) else {
            debug!(track = %track.id, "skipping track with unknown endpoint");
            continue;
        };
        let from_occ = registry.occupancy(track.from).unwrap_or(0);
        let to_occ = registry.occupancy(track.to).unwrap_or(0);
        let usable = bounded_capacity(track.capacity, from_occ, to_occ);
        let goodness = floor_ratio(usable, track.cost).ok_or(PlanError::ZeroCost { track: track.id })?;
        scored.push(ScoredTrack {
            track: track.id,
            from,
            to,
            goodness,
        });
    }

    // sort_by is stable: ties stay in input order
    scored.sort_by(|a, b| b.goodness.cmp(&a.goodness));
    Ok(scored)
}

/// Pick tracks linking the buildings, highest goodness first.
///
/// Returns the selected track ids in selection order. Selection stops once
/// `buildings - 1` tracks are taken; if the tracks cannot link every
/// building the result is a spanning forest. Duplicate buildings keep their
/// first occurrence.
pub fn best_metro_system(buildings: &[Building], tracks: &[Track]) -> PlanResult<Vec<TrackId>> {
    let mut registry = BuildingRegistry::new();
    for building in buildings {
        registry.insert(building.id, building.occupancy)?;
    }
    select_spanning(&registry, tracks)
}

/// Same as [`best_metro_system`] over an already populated registry.
pub fn select_spanning(registry: &BuildingRegistry, tracks: &[Track]) -> PlanResult<Vec<TrackId>> {
    let target = registry.len().saturating_sub(1);
    let mut sets = UnionFind::new(registry.len());
    let mut selected = Vec::with_capacity(target);

    for candidate in rank_tracks(registry, tracks)? {
        if selected.len() >= target {
            break;
        }
        if sets.union(candidate.from.slot(), candidate.to.slot()) {
            selected.push(candidate.track);
        }
    }

    debug!(
        buildings = registry.len(),
        selected = selected.len(),
        "selected metro tracks"
    );
    Ok(selected)
}
