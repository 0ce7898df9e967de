//! Graph-specific error types.

use mf_core::{Capacity, EdgeId, MfError, NodeId};

/// Residual graph construction and validation errors.
///
/// All of these describe a broken arena, never bad caller input: unknown
/// buildings in tracks are dropped by the builder instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge refers to a node that doesn't exist.
    InvalidNodeRef { edge: EdgeId, node: NodeId },

    /// An edge's pair index is out of range or doesn't point back.
    BrokenPair { edge: EdgeId, pair: EdgeId },

    /// Forward and reverse residuals no longer add up to the forward capacity.
    PairImbalance {
        forward: EdgeId,
        sum: u64,
        capacity: Capacity,
    },

    /// A reverse edge was created with non-zero capacity.
    ReverseCapacity { edge: EdgeId, capacity: Capacity },

    /// Arena or registry slot doesn't match its stored ID.
    NonContiguous { what: &'static str, index: usize },

    /// Adjacency list is inconsistent (edge in node's list but edge doesn't start at node).
    InconsistentAdjacency { edge: EdgeId, node: NodeId },

    /// ID not found in the registry.
    IdNotFound { what: &'static str },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::InvalidNodeRef { edge, node } => {
                write!(f, "Edge {} refers to non-existent node {}", edge, node)
            }
            GraphError::BrokenPair { edge, pair } => {
                write!(f, "Edge {} is not paired back by edge {}", edge, pair)
            }
            GraphError::PairImbalance {
                forward,
                sum,
                capacity,
            } => {
                write!(
                    f,
                    "Residual pair of edge {} sums to {} but capacity is {}",
                    forward, sum, capacity
                )
            }
            GraphError::ReverseCapacity { edge, capacity } => {
                write!(f, "Reverse edge {} has capacity {} (expected 0)", edge, capacity)
            }
            GraphError::NonContiguous { what, index } => {
                write!(f, "{} at slot {} carries a different ID", what, index)
            }
            GraphError::InconsistentAdjacency { edge, node } => {
                write!(
                    f,
                    "Edge {} in node {}'s adjacency list but doesn't start at that node",
                    edge, node
                )
            }
            GraphError::IdNotFound { what } => {
                write!(f, "{} not found in registry", what)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for MfError {
    fn from(err: GraphError) -> Self {
        MfError::Invariant {
            what: err.to_string(),
        }
    }
}
