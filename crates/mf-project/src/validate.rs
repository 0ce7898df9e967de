//! Network file validation.

use std::collections::HashSet;
use std::fmt;

use mf_core::{BuildingId, TrackId};

use crate::schema::{LATEST_VERSION, NetworkFile};

/// Problems that make a file unusable.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Findings the engine tolerates but a user probably did not intend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Only the first occurrence of the building is used.
    DuplicateBuilding { id: BuildingId },
    /// The track is ignored by every query.
    DanglingTrack { track: TrackId, missing: BuildingId },
    /// Max-flow queries accept it; metro selection rejects it.
    ZeroCostTrack { track: TrackId },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::DuplicateBuilding { id } => {
                write!(f, "building {id} is listed more than once; the first entry wins")
            }
            ValidationWarning::DanglingTrack { track, missing } => {
                write!(f, "track {track} references unknown building {missing} and is ignored")
            }
            ValidationWarning::ZeroCostTrack { track } => {
                write!(f, "track {track} has zero cost")
            }
        }
    }
}

/// Check a network file, returning the non-fatal findings on success.
pub fn validate_network(file: &NetworkFile) -> Result<Vec<ValidationWarning>, ValidationError> {
    if file.version == 0 || file.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    let mut warnings = Vec::new();

    let mut buildings = HashSet::new();
    for building in &file.buildings {
        if !buildings.insert(building.id) {
            warnings.push(ValidationWarning::DuplicateBuilding { id: building.id });
        }
    }

    let mut track_ids = HashSet::new();
    for track in &file.tracks {
        if !track_ids.insert(track.id) {
            return Err(ValidationError::DuplicateId {
                id: track.id.to_string(),
                context: "tracks".to_string(),
            });
        }
        if let Some(&missing) = [track.from, track.to].iter().find(|b| !buildings.contains(*b)) {
            warnings.push(ValidationWarning::DanglingTrack {
                track: track.id,
                missing,
            });
        }
        if track.cost == 0 {
            warnings.push(ValidationWarning::ZeroCostTrack { track: track.id });
        }
    }

    for (i, name) in file.passengers.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: format!("passengers[{i}]"),
                value: format!("{name:?}"),
                reason: "passenger names must not be blank".to_string(),
            });
        }
    }

    Ok(warnings)
}
