//! Strongly typed, zero-cost boid identifier.
//!
//! `BoidId` is `Copy + Ord + Hash` so it can be used as a map key or sorted
//! without ceremony.  The inner integer is `pub` to allow direct indexing
//! into parallel `Vec`s via `id.0 as usize`, but callers should prefer the
//! `.index()` helper for clarity.

use std::fmt;

/// Index of a boid in the flock's storage.  Max ~4.3 billion boids.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoidId(pub u32);

impl BoidId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: BoidId = BoidId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for BoidId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for BoidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoidId({})", self.0)
    }
}

impl From<BoidId> for usize {
    #[inline(always)]
    fn from(id: BoidId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for BoidId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<BoidId, Self::Error> {
        u32::try_from(n).map(BoidId)
    }
}
