//! Flow accumulation over repeated augmenting paths.

use mf_core::{Capacity, EdgeId, Flow, NodeId};
use mf_graph::ResidualGraph;
use tracing::trace;

use crate::bfs::find_augmenting_path;

/// Result of one max-flow run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowOutcome {
    /// Total flow pushed from source to sink.
    pub total: Flow,
    /// Number of augmenting paths used.
    pub augmentations: usize,
}

/// Smallest residual capacity along a path (0 for an empty path).
pub fn bottleneck(graph: &ResidualGraph, path: &[EdgeId]) -> Capacity {
    path.iter()
        .map(|e| graph.edges()[e.slot()].residual())
        .min()
        .unwrap_or(0)
}

/// Push flow from `source` to `sink` until no augmenting path remains.
///
/// Each round finds a shortest path, pushes its bottleneck along every edge
/// (draining the edge, filling its pair) and adds it to the total. Every
/// round adds at least 1, so the loop ends after at most the total capacity
/// leaving `source` rounds. The residual state is left as the run ends.
pub fn max_flow(graph: &mut ResidualGraph, source: NodeId, sink: NodeId) -> FlowOutcome {
    let mut outcome = FlowOutcome::default();

    while let Some(parents) = find_augmenting_path(graph, source, sink) {
        let path = parents.trace(graph, source, sink);
        let amount = bottleneck(graph, &path);
        debug_assert!(amount > 0, "augmenting path with zero bottleneck");

        for &edge in &path {
            graph.push_flow(edge, amount);
        }

        outcome.total += Flow::from(amount);
        outcome.augmentations += 1;
        trace!(
            hops = path.len(),
            bottleneck = amount,
            total = outcome.total,
            "augmented"
        );
    }

    outcome
}
