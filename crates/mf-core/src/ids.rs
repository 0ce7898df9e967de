use core::fmt;
use core::num::NonZeroU32;

use crate::error::{MfError, MfResult};

/// Compact arena handle used inside the residual graph.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized, which the
///   BFS parent map relies on
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Number of distinct handles; valid indices are `0..MAX_SLOTS`.
    pub const MAX_SLOTS: usize = u32::MAX as usize;

    /// Create an Id from a 0-based index by storing index+1.
    ///
    /// # Panics
    ///
    /// Panics if `index == u32::MAX`.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::MIN.checked_add(index).expect("index+1 fits in u32"))
    }

    /// Create an Id from a `usize` arena position, failing once the arena
    /// outgrows the handle space.
    pub fn try_from_usize(index: usize) -> MfResult<Self> {
        u32::try_from(index)
            .ok()
            .and_then(|raw| NonZeroU32::MIN.checked_add(raw))
            .map(Self)
            .ok_or(MfError::IndexOob {
                what: "arena slot",
                index,
                len: Self::MAX_SLOTS,
            })
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// Recover the 0-based index as a `usize`, for slice access.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Arena handle aliases (no runtime cost).
pub type NodeId = Id;
pub type EdgeId = Id;

/// Opaque identifier of a building, as supplied by the caller.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BuildingId(pub u32);

/// Opaque identifier of a track, as supplied by the caller.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TrackId(pub u32);

impl fmt::Debug for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuildingId({})", self.0)
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}", self.0)
    }
}

impl fmt::Debug for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrackId({})", self.0)
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

impl From<u32> for BuildingId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<u32> for TrackId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip_index() {
        for i in [0_u32, 1, 2, 42, 10_000] {
            let id = Id::from_index(i);
            assert_eq!(id.index(), i);
            assert_eq!(id.slot(), i as usize);
        }
    }

    #[test]
    fn arena_positions_past_handle_space_are_rejected() {
        let last = Id::try_from_usize(Id::MAX_SLOTS - 1).unwrap();
        assert_eq!(last.index(), u32::MAX - 1);
        assert_eq!(Id::try_from_usize(3).unwrap(), Id::from_index(3));

        for index in [Id::MAX_SLOTS, usize::MAX] {
            assert_eq!(
                Id::try_from_usize(index),
                Err(MfError::IndexOob {
                    what: "arena slot",
                    index,
                    len: Id::MAX_SLOTS,
                })
            );
        }
    }

    #[test]
    #[should_panic(expected = "index+1 fits in u32")]
    fn from_index_rejects_last_u32() {
        let _ = Id::from_index(u32::MAX);
    }

    #[test]
    fn option_id_is_small() {
        // Option<Id> is the parent-map slot type; it must not grow.
        assert_eq!(
            core::mem::size_of::<Id>(),
            core::mem::size_of::<Option<Id>>()
        );
    }

    #[test]
    fn external_ids_display() {
        assert_eq!(BuildingId(7).to_string(), "B7");
        assert_eq!(TrackId(3).to_string(), "T3");
        assert_eq!(BuildingId::from(7), BuildingId(7));
    }
}
