//! Shared service layer for metroflow frontends.
//!
//! Loads network files, turns them into engine types and runs the queries
//! the CLI exposes.

pub mod error;
pub mod network_service;
pub mod query;

pub use error::{AppError, AppResult};
pub use network_service::{
    NetworkSummary, build_network, load_network, summarize, to_buildings, to_tracks,
};
pub use query::{
    FlowAnswer, best_metro, pair_queries, run_isolated, run_sequential, search_passengers,
    ticket_checkers,
};
