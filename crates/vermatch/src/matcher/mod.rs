//! Range matching over versions

mod builder;
mod range;

use std::fmt;

use crate::error::Result;
use crate::{Mode, Version};

pub use builder::MatcherBuilder;
pub use range::Range;

/// A set of range constraints evaluated against candidate versions.
///
/// `min` and `max` are inclusive. `between` is an extra inclusive range
/// that widens the match: a candidate matches when it is inside min/max
/// *or* inside `between`. Anything equal to an `except` entry never
/// matches. With no min, max or between, every version matches.
///
/// All bounds are parsed when the matcher is built, so a malformed bound
/// fails there and never at match time.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    min: Option<Version>,
    max: Option<Version>,
    except: Vec<Version>,
    between: Option<Range>,
    mode: Mode,
}

impl Matcher {
    /// Build a matcher from strict version strings.
    ///
    /// To match a single version pass it as both `min` and `max`. To match
    /// every version but a few, leave the bounds empty and list them in
    /// `except`.
    pub fn new(
        min: Option<&str>,
        max: Option<&str>,
        except: &[&str],
        between: Option<(&str, &str)>,
    ) -> Result<Self> {
        let mut builder = MatcherBuilder::new();
        if let Some(min) = min {
            builder = builder.min(min);
        }
        if let Some(max) = max {
            builder = builder.max(max);
        }
        for version in except {
            builder = builder.except(*version);
        }
        if let Some((low, high)) = between {
            builder = builder.between(low, high);
        }
        builder.build()
    }

    pub fn builder() -> MatcherBuilder {
        MatcherBuilder::new()
    }

    /// A matcher that accepts every version
    pub fn any() -> Self {
        Self::default()
    }

    pub fn min(&self) -> Option<&Version> {
        self.min.as_ref()
    }

    pub fn max(&self) -> Option<&Version> {
        self.max.as_ref()
    }

    pub fn except(&self) -> &[Version] {
        &self.except
    }

    pub fn between(&self) -> Option<&Range> {
        self.between.as_ref()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Check if `candidate` satisfies this matcher
    pub fn matches(&self, candidate: &Version) -> bool {
        if self.except.iter().any(|excluded| excluded == candidate) {
            log::trace!("{} is excluded by {}", candidate.to_full_string(), self);
            return false;
        }

        let in_bounds = match (&self.min, &self.max) {
            (None, None) => self.between.is_none(),
            (Some(min), None) => candidate >= min,
            (None, Some(max)) => candidate <= max,
            (Some(min), Some(max)) => candidate >= min && candidate <= max,
        };

        let in_between = self.between.as_ref().is_some_and(|range| range.contains(candidate));
        let matched = in_bounds || in_between;
        log::trace!("{} against {}: {}", candidate.to_full_string(), self, matched);

        matched
    }

    /// Parse `candidate` with this matcher's grammar and check it
    pub fn matches_str(&self, candidate: &str) -> Result<bool> {
        let version = Version::parse(candidate, self.mode)?;
        Ok(self.matches(&version))
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bounds = Vec::new();
        if let Some(min) = &self.min {
            bounds.push(format!(">={}", min.to_full_string()));
        }
        if let Some(max) = &self.max {
            bounds.push(format!("<={}", max.to_full_string()));
        }

        let mut out = bounds.join(" ");
        if let Some(range) = &self.between {
            if !out.is_empty() {
                out.push_str(" || ");
            }
            out.push_str(&range.to_string());
        }
        if out.is_empty() {
            out.push('*');
        }

        for version in &self.except {
            out.push_str(&format!(" !={}", version.to_full_string()));
        }

        write!(f, "{}", out)
    }
}
