//! Error types for the mf-app service layer.

use std::path::PathBuf;

/// Application error wrapping the backend crates' errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to read network file: {path}")]
    NetworkFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Network construction failed: {0}")]
    Network(String),

    #[error("Planning failed: {0}")]
    Planning(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for mf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<mf_project::ProjectError> for AppError {
    fn from(err: mf_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<mf_core::MfError> for AppError {
    fn from(err: mf_core::MfError) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<mf_planner::PlanError> for AppError {
    fn from(err: mf_planner::PlanError) -> Self {
        AppError::Planning(err.to_string())
    }
}
