//! Query facade over a built transit network.

use mf_core::{BuildingId, Capacity, Flow, MfResult, NodeId};
use mf_graph::{Building, ResidualGraph, Track};
use tracing::debug;

use crate::augment::{FlowOutcome, max_flow};

/// A transit network ready to answer passenger-flow queries.
///
/// Queries consume residual capacity and nothing restores it: asking the
/// same question twice returns at most what the first call returned.
#[derive(Debug, Clone)]
pub struct TransitNetwork {
    graph: ResidualGraph,
}

impl TransitNetwork {
    /// Build the network from buildings and tracks.
    ///
    /// Duplicate buildings keep their first occurrence; tracks touching an
    /// unknown building are dropped.
    pub fn new(buildings: &[Building], tracks: &[Track]) -> MfResult<Self> {
        Ok(Self::from_graph(ResidualGraph::from_parts(buildings, tracks)?))
    }

    pub fn from_graph(graph: ResidualGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &ResidualGraph {
        &self.graph
    }

    pub fn contains(&self, building: BuildingId) -> bool {
        self.graph.registry().contains(building)
    }

    pub fn occupancy(&self, building: BuildingId) -> Option<Capacity> {
        self.graph.registry().occupancy(building)
    }

    /// Maximum number of people that can travel from `start` to `end` at once.
    ///
    /// Unknown buildings yield 0. When `start == end` the answer is the
    /// residual capacity of the first self-loop track at that building, or 0
    /// without one; further self-loops there are not added in.
    pub fn max_passengers(&mut self, start: BuildingId, end: BuildingId) -> Flow {
        self.max_passengers_detailed(start, end).total
    }

    /// Like [`TransitNetwork::max_passengers`], also reporting how many
    /// augmenting paths were used.
    pub fn max_passengers_detailed(&mut self, start: BuildingId, end: BuildingId) -> FlowOutcome {
        let (Some(source), Some(sink)) = (self.graph.node_of(start), self.graph.node_of(end)) else {
            debug!(%start, %end, "query on unknown building");
            return FlowOutcome::default();
        };

        if source == sink {
            let total = self.self_loop_residual(source);
            debug!(building = %start, total, "self-loop query");
            return FlowOutcome {
                total,
                augmentations: 0,
            };
        }

        let outcome = max_flow(&mut self.graph, source, sink);
        debug!(
            %start,
            %end,
            total = outcome.total,
            augmentations = outcome.augmentations,
            "max passengers"
        );
        outcome
    }

    fn self_loop_residual(&self, node: NodeId) -> Flow {
        self.graph
            .out_edges(node)
            .iter()
            .map(|&e| &self.graph.edges()[e.slot()])
            .find(|edge| edge.to == node)
            .map_or(0, |edge| Flow::from(edge.residual()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf_core::TrackId;

    fn b(id: u32, occupancy: u32) -> Building {
        Building::new(BuildingId(id), occupancy)
    }

    fn t(id: u32, from: u32, to: u32, capacity: u32) -> Track {
        Track::new(TrackId(id), BuildingId(from), BuildingId(to), capacity)
    }

    #[test]
    fn accessors_reflect_registry() {
        let net = TransitNetwork::new(&[b(1, 100)], &[]).unwrap();
        assert!(net.contains(BuildingId(1)));
        assert!(!net.contains(BuildingId(2)));
        assert_eq!(net.occupancy(BuildingId(1)), Some(100));
        assert_eq!(net.occupancy(BuildingId(2)), None);
    }

    #[test]
    fn detailed_reports_augmentations() {
        let mut net = TransitNetwork::new(
            &[b(1, 1000), b(2, 1000)],
            &[t(1, 1, 2, 100), t(2, 1, 2, 50), t(3, 1, 2, 25)],
        )
        .unwrap();

        let outcome = net.max_passengers_detailed(BuildingId(1), BuildingId(2));
        assert_eq!(outcome.total, 175);
        assert_eq!(outcome.augmentations, 3);
    }

    #[test]
    fn self_loop_query_does_not_touch_residuals() {
        let mut net = TransitNetwork::new(&[b(1, 100)], &[t(1, 1, 1, 80)]).unwrap();
        assert_eq!(net.max_passengers(BuildingId(1), BuildingId(1)), 80);
        assert_eq!(net.max_passengers(BuildingId(1), BuildingId(1)), 80);
    }

    #[test]
    fn first_self_loop_only() {
        // Two self-loops at one building: only the first is reported.
        let mut net =
            TransitNetwork::new(&[b(1, 100)], &[t(1, 1, 1, 30), t(2, 1, 1, 60)]).unwrap();
        assert_eq!(net.max_passengers(BuildingId(1), BuildingId(1)), 30);
    }
}
