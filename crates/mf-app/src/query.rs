//! Queries over a loaded network.

use mf_core::{BuildingId, Flow, TrackId};
use mf_flow::TransitNetwork;
use mf_planner::{PassengerRegistry, Shift};
use mf_project::NetworkFile;

use crate::error::{AppError, AppResult};
use crate::network_service::{to_buildings, to_tracks};

/// One answered passenger-flow query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowAnswer {
    pub start: BuildingId,
    pub end: BuildingId,
    pub passengers: Flow,
}

/// Group a flat `start end start end ...` list into queries.
pub fn pair_queries(raw: &[u32]) -> AppResult<Vec<(BuildingId, BuildingId)>> {
    if raw.is_empty() || raw.len() % 2 != 0 {
        return Err(AppError::InvalidInput(format!(
            "expected pairs of building ids, got {} value(s)",
            raw.len()
        )));
    }
    Ok(raw
        .chunks_exact(2)
        .map(|pair| (BuildingId(pair[0]), BuildingId(pair[1])))
        .collect())
}

/// Answer queries in order on one network; later queries see earlier flow.
pub fn run_sequential(
    network: &mut TransitNetwork,
    queries: &[(BuildingId, BuildingId)],
) -> Vec<FlowAnswer> {
    queries
        .iter()
        .map(|&(start, end)| FlowAnswer {
            start,
            end,
            passengers: network.max_passengers(start, end),
        })
        .collect()
}

/// Answer each query against its own copy of `network`.
pub fn run_isolated(network: &TransitNetwork, queries: &[(BuildingId, BuildingId)]) -> Vec<FlowAnswer> {
    network
        .max_passengers_isolated(queries)
        .into_iter()
        .zip(queries)
        .map(|(passengers, &(start, end))| FlowAnswer {
            start,
            end,
            passengers,
        })
        .collect()
}

pub fn best_metro(file: &NetworkFile) -> AppResult<Vec<TrackId>> {
    Ok(mf_planner::best_metro_system(
        &to_buildings(file),
        &to_tracks(file),
    )?)
}

pub fn search_passengers(file: &NetworkFile, prefix: &str) -> Vec<String> {
    let mut registry = PassengerRegistry::new();
    registry.add_passengers(&file.passengers);
    registry.search(prefix)
}

pub fn ticket_checkers(file: &NetworkFile) -> usize {
    let schedule: Vec<Shift> = file
        .shifts
        .iter()
        .map(|def| Shift::new(def.start, def.end))
        .collect();
    mf_planner::hire_ticket_checkers(&schedule)
}
