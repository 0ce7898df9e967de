//! Residual graph validation logic.

use std::collections::HashSet;

use mf_core::{EdgeId, MfResult, NodeId};

use crate::error::GraphError;
use crate::graph::{Edge, EdgeKind};
use crate::registry::BuildingRegistry;

/// Validate the registry: node IDs match their slots, lookup covers every node.
pub(crate) fn validate_registry(registry: &BuildingRegistry) -> MfResult<()> {
    for (i, node) in registry.nodes().iter().enumerate() {
        if node.id.slot() != i {
            return Err(GraphError::NonContiguous { what: "node", index: i }.into());
        }
        if registry.node_id(node.building) != Some(node.id) {
            return Err(GraphError::IdNotFound { what: "BuildingId" }.into());
        }
    }
    if registry.lookup_len() != registry.len() {
        return Err(GraphError::NonContiguous {
            what: "registry lookup",
            index: registry.lookup_len(),
        }
        .into());
    }
    Ok(())
}

/// Validate the edge arena: endpoints exist, pairs are mutual and mirrored,
/// and every pair's residuals sum to the forward capacity.
pub(crate) fn validate_edges(registry: &BuildingRegistry, edges: &[Edge]) -> MfResult<()> {
    let node_count = registry.len();

    for (i, edge) in edges.iter().enumerate() {
        if edge.id.slot() != i {
            return Err(GraphError::NonContiguous { what: "edge", index: i }.into());
        }

        for node in [edge.from, edge.to] {
            if node.slot() >= node_count {
                return Err(GraphError::InvalidNodeRef {
                    edge: edge.id,
                    node,
                }
                .into());
            }
        }

        // Pair must exist, point back, mirror the endpoints, and have the other kind
        let pair = edges.get(edge.pair.slot()).ok_or(GraphError::BrokenPair {
            edge: edge.id,
            pair: edge.pair,
        })?;
        if pair.pair != edge.id
            || pair.from != edge.to
            || pair.to != edge.from
            || pair.kind == edge.kind
            || pair.track != edge.track
        {
            return Err(GraphError::BrokenPair {
                edge: edge.id,
                pair: edge.pair,
            }
            .into());
        }

        match edge.kind {
            EdgeKind::Reverse => {
                if edge.capacity != 0 {
                    return Err(GraphError::ReverseCapacity {
                        edge: edge.id,
                        capacity: edge.capacity,
                    }
                    .into());
                }
            }
            EdgeKind::Forward => {
                let sum = u64::from(edge.residual) + u64::from(pair.residual);
                if sum != u64::from(edge.capacity) {
                    return Err(GraphError::PairImbalance {
                        forward: edge.id,
                        sum,
                        capacity: edge.capacity,
                    }
                    .into());
                }
            }
        }
    }

    Ok(())
}

/// Validate adjacency lists for consistency.
pub(crate) fn validate_adjacency(
    registry: &BuildingRegistry,
    edges: &[Edge],
    node_edge_offsets: &[usize],
    node_edges: &[EdgeId],
) -> MfResult<()> {
    // Offsets array must have nodes.len() + 1 entries
    if node_edge_offsets.len() != registry.len() + 1 {
        return Err(GraphError::NonContiguous {
            what: "adjacency offsets",
            index: node_edge_offsets.len(),
        }
        .into());
    }

    for node in registry.nodes() {
        let idx = node.id.slot();
        let start = node_edge_offsets[idx];
        let end = node_edge_offsets[idx + 1];

        let mut previous: Option<EdgeId> = None;
        for &edge_id in &node_edges[start..end] {
            let edge = edges
                .get(edge_id.slot())
                .ok_or(GraphError::InconsistentAdjacency {
                    edge: edge_id,
                    node: node.id,
                })?;

            // Edge must start at this node
            if edge.from != node.id {
                return Err(GraphError::InconsistentAdjacency {
                    edge: edge_id,
                    node: node.id,
                }
                .into());
            }

            // Insertion order is observable: lists stay sorted by creation
            if previous.is_some_and(|p| p >= edge_id) {
                return Err(GraphError::InconsistentAdjacency {
                    edge: edge_id,
                    node: node.id,
                }
                .into());
            }
            previous = Some(edge_id);
        }
    }

    // Every edge appears in exactly one adjacency list
    let mut seen: HashSet<EdgeId> = HashSet::with_capacity(node_edges.len());
    for &edge_id in node_edges {
        if !seen.insert(edge_id) {
            return Err(GraphError::InconsistentAdjacency {
                edge: edge_id,
                node: edges
                    .get(edge_id.slot())
                    .map_or(NodeId::from_index(0), |e| e.from),
            }
            .into());
        }
    }
    if let Some(missing) = edges.iter().find(|e| !seen.contains(&e.id)) {
        return Err(GraphError::InconsistentAdjacency {
            edge: missing.id,
            node: missing.from,
        }
        .into());
    }

    Ok(())
}
