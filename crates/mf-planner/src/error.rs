use mf_core::{MfError, TrackId};
use thiserror::Error;

pub type PlanResult<T> = Result<T, PlanError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("track {track} has zero cost, goodness is undefined")]
    ZeroCost { track: TrackId },

    #[error("building registry failed: {0}")]
    Registry(#[from] MfError),
}
