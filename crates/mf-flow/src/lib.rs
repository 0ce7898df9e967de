//! Maximum passenger flow over a transit network.
//!
//! This crate answers "how many people can move from building A to building
//! B at once" with Edmonds-Karp: breadth-first search for the shortest
//! augmenting path in the residual graph, repeated until the sink is cut off.
//! Residual capacities are consumed by each query and are not restored, so
//! later queries on the same network see the flow earlier ones committed.

pub mod augment;
pub mod batch;
pub mod bfs;
pub mod network;

pub use augment::{FlowOutcome, bottleneck, max_flow};
pub use bfs::{ParentMap, find_augmenting_path};
pub use network::TransitNetwork;
