//! Shortest augmenting path search.

use std::collections::VecDeque;

use mf_core::{EdgeId, NodeId};
use mf_graph::ResidualGraph;

/// For every node a BFS reached, the edge it was entered through.
#[derive(Debug, Clone)]
pub struct ParentMap {
    entries: Vec<Option<EdgeId>>,
}

impl ParentMap {
    fn new(node_count: usize) -> Self {
        Self {
            entries: vec![None; node_count],
        }
    }

    /// Edge used to reach `node`, or `None` if the search never entered it.
    pub fn entering(&self, node: NodeId) -> Option<EdgeId> {
        self.entries.get(node.slot()).copied().flatten()
    }

    /// Edges from `source` to `sink`, in travel order.
    ///
    /// # Panics
    ///
    /// Panics if the chain of parents from `sink` does not lead back to
    /// `source`, which only happens if the map came from a different search.
    pub fn trace(&self, graph: &ResidualGraph, source: NodeId, sink: NodeId) -> Vec<EdgeId> {
        let mut path = Vec::new();
        let mut current = sink;
        while current != source {
            let Some(edge_id) = self.entering(current) else {
                panic!("node {current} was not reached from {source}");
            };
            path.push(edge_id);
            current = graph.edges()[edge_id.slot()].from;
        }
        path.reverse();
        path
    }
}

/// Breadth-first search from `source` over edges with residual capacity left.
///
/// Nodes are marked visited when enqueued and the search stops the moment
/// `sink` is first reached, so the path found is a shortest one by edge
/// count. Ties between equally short paths go to the edge listed first in
/// the adjacency, i.e. the track added first.
///
/// Returns `None` when `sink` cannot be reached, including when
/// `source == sink` (the source is visited before any edge is followed).
pub fn find_augmenting_path(graph: &ResidualGraph, source: NodeId, sink: NodeId) -> Option<ParentMap> {
    let node_count = graph.registry().len();
    if source.slot() >= node_count || sink.slot() >= node_count {
        return None;
    }

    let mut parents = ParentMap::new(node_count);
    let mut visited = vec![false; node_count];
    let mut queue = VecDeque::new();
    visited[source.slot()] = true;
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        for &edge_id in graph.out_edges(node) {
            let edge = &graph.edges()[edge_id.slot()];
            if visited[edge.to.slot()] || edge.residual() == 0 {
                continue;
            }

            parents.entries[edge.to.slot()] = Some(edge_id);
            if edge.to == sink {
                return Some(parents);
            }
            visited[edge.to.slot()] = true;
            queue.push_back(edge.to);
        }
    }

    None
}
