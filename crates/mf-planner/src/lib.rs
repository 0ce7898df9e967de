//! Planning utilities that sit next to the flow engine.
//!
//! - [`best_metro_system`]: pick a spanning set of tracks, best goodness first
//! - [`PassengerRegistry`]: case-insensitive prefix search over rider names
//! - [`hire_ticket_checkers`]: greedy selection of non-overlapping shifts

pub mod error;
pub mod passengers;
pub mod spanning;
pub mod staffing;
pub mod union_find;

pub use error::{PlanError, PlanResult};
pub use passengers::PassengerRegistry;
pub use spanning::{ScoredTrack, best_metro_system, rank_tracks, select_spanning};
pub use staffing::{Shift, hire_ticket_checkers};
pub use union_find::UnionFind;
