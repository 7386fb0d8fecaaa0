//! Version parsing, ordering and range matching
//!
//! Versions follow a dotted numeric grammar with optional prerelease
//! identifiers and build metadata (`1.2.3-rc.1+build.7`). The strict
//! grammar requires exactly `major.minor.patch`; the permissive one accepts
//! any number of numeric components (`1`, `1.2`, `1.2.3.4`).
//!
//! ```
//! use vermatch::{Matcher, Mode, Version};
//!
//! let candidate = Version::parse("3.2.1-rc.8", Mode::Strict).unwrap();
//! let matcher = Matcher::new(Some("3.0.0"), Some("3.2.1-rc.12"), &[], None).unwrap();
//!
//! assert!(matcher.matches(&candidate));
//! assert!(candidate < "3.2.1".parse::<Version>().unwrap());
//! ```

mod comparator;
mod error;
pub mod grammar;
mod identifier;
pub mod matcher;
mod operator;
mod semver;
mod version;

use std::cmp::Ordering;

pub use comparator::Comparator;
pub use error::{Result, VersionError};
pub use grammar::{is_valid, InvalidModeError, Mode, Parts};
pub use identifier::Identifier;
pub use matcher::{Matcher, MatcherBuilder, Range};
pub use operator::{InvalidOperatorError, Operator};
pub use semver::Semver;
pub use version::Version;

/// Parse a version string against the grammar of `mode`.
pub fn parse(version: &str, mode: Mode) -> Result<Version> {
    Version::parse(version, mode)
}

/// Find the first version inside free text, or an empty string.
pub fn extract_first_match(text: &str, mode: Mode) -> &str {
    grammar::extract_first_match(text, mode)
}

/// Three-way comparison of two versions. Build metadata is ignored.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.cmp(b)
}
