//! mf-core: stable foundation for metroflow.
//!
//! Contains:
//! - ids (external building/track identifiers + compact arena handles)
//! - numeric (capacity and flow types, bounded-capacity helper)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{MfError, MfResult};
pub use ids::*;
pub use numeric::*;
