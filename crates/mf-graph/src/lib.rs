//! mf-graph: residual flow graph for metroflow.
//!
//! Provides:
//! - Input records (Building, Track) and the edge arena (Edge, ResidualGraph)
//! - Building registry mapping external building ids to arena nodes
//! - Builder that turns buildings + tracks into paired forward/reverse edges
//! - Structural validation of the arena before it is handed out
//!
//! # Example
//!
//! ```
//! use mf_core::{BuildingId, TrackId};
//! use mf_graph::{Building, NetworkBuilder, Track};
//!
//! let mut builder = NetworkBuilder::new();
//! builder.add_building(&Building::new(BuildingId(1), 100)).unwrap();
//! builder.add_building(&Building::new(BuildingId(2), 200)).unwrap();
//! builder.add_track(&Track::new(TrackId(1), BuildingId(1), BuildingId(2), 50)).unwrap();
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.registry().len(), 2);
//! assert_eq!(graph.edges().len(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod registry;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::NetworkBuilder;
pub use error::GraphError;
pub use graph::{Building, Edge, EdgeKind, ResidualGraph, Track};
pub use registry::{BuildingRegistry, Node};
