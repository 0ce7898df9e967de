//! Network description file schema.

use mf_core::{BuildingId, Capacity, TrackId};
use serde::{Deserialize, Serialize};

/// Highest file format version this crate reads.
pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkFile {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub buildings: Vec<BuildingDef>,
    #[serde(default)]
    pub tracks: Vec<TrackDef>,
    #[serde(default)]
    pub passengers: Vec<String>,
    #[serde(default)]
    pub shifts: Vec<ShiftDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildingDef {
    pub id: BuildingId,
    pub occupancy: Capacity,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackDef {
    pub id: TrackId,
    pub from: BuildingId,
    pub to: BuildingId,
    #[serde(default = "default_cost")]
    pub cost: Capacity,
    pub capacity: Capacity,
}

fn default_cost() -> Capacity {
    1
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShiftDef {
    pub start: i64,
    pub end: i64,
}
