//! mf-project: network description files and their validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, ValidationWarning, validate_network};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported file format: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<NetworkFile> {
    let content = std::fs::read_to_string(path)?;
    let file: NetworkFile = serde_yaml::from_str(&content)?;
    validate_network(&file)?;
    Ok(file)
}

pub fn load_json(path: &Path) -> ProjectResult<NetworkFile> {
    let content = std::fs::read_to_string(path)?;
    let file: NetworkFile = serde_json::from_str(&content)?;
    validate_network(&file)?;
    Ok(file)
}

/// Load by extension: `.json` as JSON, `.yaml`/`.yml` as YAML.
pub fn load(path: &Path) -> ProjectResult<NetworkFile> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => load_json(path),
        Some("yaml" | "yml") => load_yaml(path),
        _ => Err(ProjectError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}
