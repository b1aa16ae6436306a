//! Strongly typed courier identifier.
//!
//! The inner integer is `pub` to allow direct indexing into per-courier
//! `Vec`s, but callers should prefer `.index()`.

use std::fmt;

/// Index of a courier within a fleet.  Assigned in input order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourierId(pub u32);

impl CourierId {
    /// Sentinel meaning "no valid ID".
    pub const INVALID: CourierId = CourierId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for CourierId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for CourierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CourierId({})", self.0)
    }
}

impl From<CourierId> for usize {
    #[inline(always)]
    fn from(id: CourierId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for CourierId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<CourierId, Self::Error> {
        u32::try_from(n).map(CourierId)
    }
}
