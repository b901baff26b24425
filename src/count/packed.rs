use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width of each sub-count inside a packed value.
pub const SUB_COUNT_BITS: u32 = 16;

/// Largest value either sub-count can hold without spilling.
pub const SUB_COUNT_MAX: u32 = 0xFFFF;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    #[error("search count {0} does not fit in 16 bits")]
    SearchOverflow(u32),
    #[error("exact count {0} does not fit in 16 bits")]
    ExactOverflow(u32),
}

/// Two sub-counts sharing one `u32`.
///
/// The low 16 bits hold the *search* count, the high 16 bits the *exact*
/// count. Arithmetic on the packed word is not sub-count aware: a search
/// count that grows past `0xFFFF` carries into the exact count. Use
/// [`PackedCount::try_pack`] when the inputs are untrusted and
/// [`PackedCount::carries_into`] to detect a carry before adding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackedCount(u32);

impl PackedCount {
    pub const ZERO: PackedCount = PackedCount(0);

    /// One search observation.
    pub const ONE_SEARCH: PackedCount = PackedCount(1);

    /// One exact observation.
    pub const ONE_EXACT: PackedCount = PackedCount(1 << SUB_COUNT_BITS);

    pub const fn from_raw(raw: u32) -> Self {
        PackedCount(raw)
    }

    /// Packs two sub-counts. Bits above the 16-bit width of either field
    /// are dropped.
    pub const fn pack(exact: u32, search: u32) -> Self {
        PackedCount((exact << SUB_COUNT_BITS) | (search & SUB_COUNT_MAX))
    }

    /// Packs two sub-counts, rejecting either one if it does not fit.
    pub fn try_pack(exact: u32, search: u32) -> Result<Self, PackError> {
        if search > SUB_COUNT_MAX {
            return Err(PackError::SearchOverflow(search));
        }
        if exact > SUB_COUNT_MAX {
            return Err(PackError::ExactOverflow(exact));
        }
        Ok(Self::pack(exact, search))
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn search_count(self) -> u32 {
        search_count(self.0)
    }

    pub const fn exact_count(self) -> u32 {
        exact_count(self.0)
    }

    pub const fn combined_count(self) -> u32 {
        combined_count(self.0)
    }

    /// True if `self + other` would not keep both sub-counts intact:
    /// either the search fields sum past 16 bits, or the whole word wraps.
    pub fn carries_into(self, other: PackedCount) -> bool {
        self.search_count() + other.search_count() > SUB_COUNT_MAX
            || self.0.checked_add(other.0).is_none()
    }

    /// Naive packed addition. Wraps on the 32-bit word and lets the search
    /// field carry into the exact field.
    #[must_use]
    pub const fn wrapping_add(self, other: PackedCount) -> Self {
        PackedCount(self.0.wrapping_add(other.0))
    }
}

impl From<u32> for PackedCount {
    fn from(raw: u32) -> Self {
        PackedCount(raw)
    }
}

impl From<PackedCount> for u32 {
    fn from(count: PackedCount) -> Self {
        count.0
    }
}

impl fmt::Display for PackedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exact={} search={}", self.exact_count(), self.search_count())
    }
}

/// Low 16 bits of a packed value.
pub const fn search_count(value: u32) -> u32 {
    value & SUB_COUNT_MAX
}

/// High 16 bits of a packed value (logical shift).
pub const fn exact_count(value: u32) -> u32 {
    value >> SUB_COUNT_BITS
}

pub const fn combined_count(value: u32) -> u32 {
    search_count(value) + exact_count(value)
}
