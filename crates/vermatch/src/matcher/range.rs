//! Inclusive version range

use std::fmt;

use crate::Version;

/// An inclusive `[low, high]` range of versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    low: Version,
    high: Version,
}

impl Range {
    /// Create a new range. `low > high` is allowed but contains nothing.
    pub fn new(low: Version, high: Version) -> Self {
        Range { low, high }
    }

    pub fn low(&self) -> &Version {
        &self.low
    }

    pub fn high(&self) -> &Version {
        &self.high
    }

    /// Check if no version can fall inside this range
    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }

    /// Check if `version` lies between both ends, ends included
    pub fn contains(&self, version: &Version) -> bool {
        &self.low <= version && version <= &self.high
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low.to_full_string(), self.high.to_full_string())
    }
}
