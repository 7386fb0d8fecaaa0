//! Parsed version with total ordering

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::str::FromStr;

use crate::error::{Result, VersionError};
use crate::grammar::{self, is_valid_identifier, Mode};
use crate::identifier::{parse_prerelease, Identifier};
use crate::matcher::Matcher;

/// A parsed version string.
///
/// Ordering and equality look at the core components and the prerelease
/// only. Build metadata is kept for rendering but never compared, so
/// `1.2.3+a == 1.2.3+b`.
///
/// `Display` renders the core only (`1.2.3`); use
/// [`Version::to_full_string`] for the prerelease and build as well.
#[derive(Debug, Clone)]
pub struct Version {
    source: String,
    core: Vec<u64>,
    prerelease: Vec<Identifier>,
    build: String,
    mode: Mode,
}

impl Version {
    /// Parse a version string against the grammar of `mode`.
    pub fn parse(version: &str, mode: Mode) -> Result<Self> {
        if !grammar::is_valid(version, mode) {
            log::trace!("Rejected {} version string {:?}", mode, version);
            return Err(VersionError::InvalidVersionString(version.to_string()));
        }

        let parts = grammar::split(version);
        let core = parse_core(parts.core)
            .ok_or_else(|| VersionError::InvalidVersionString(version.to_string()))?;
        let prerelease = parse_prerelease(parts.prerelease)?;

        log::trace!("Parsed {} as core {:?}, prerelease {:?}", version, core, prerelease);

        Ok(Version {
            source: version.to_string(),
            core,
            prerelease,
            build: parts.build.to_string(),
            mode,
        })
    }

    /// Build a version from parts that are already separated.
    ///
    /// Each prerelease identifier is checked individually, so a bad one is
    /// reported with its 1-based position. The version counts as strict
    /// when it has exactly three core components.
    pub fn from_parts(core: &[u64], prerelease: &[&str], build: &str) -> Result<Self> {
        let mut source = join(core);
        if !prerelease.is_empty() {
            source.push('-');
            source.push_str(&prerelease.join("."));
        }
        if !build.is_empty() {
            source.push('+');
            source.push_str(build);
        }

        if core.is_empty() || (!build.is_empty() && !build.split('.').all(is_valid_identifier)) {
            return Err(VersionError::InvalidVersionString(source));
        }

        let prerelease = prerelease
            .iter()
            .enumerate()
            .map(|(i, identifier)| Identifier::parse(identifier, i + 1))
            .collect::<Result<Vec<_>>>()?;

        Ok(Version {
            source,
            core: core.to_vec(),
            prerelease,
            build: build.to_string(),
            mode: if core.len() == 3 { Mode::Strict } else { Mode::Permissive },
        })
    }

    pub fn major(&self) -> u64 {
        self.core[0]
    }

    /// `None` for permissive versions such as `1`.
    pub fn minor(&self) -> Option<u64> {
        self.core.get(1).copied()
    }

    /// `None` for permissive versions such as `1` or `1.2`.
    pub fn patch(&self) -> Option<u64> {
        self.core.get(2).copied()
    }

    pub fn core(&self) -> &[u64] {
        &self.core
    }

    pub fn prerelease(&self) -> &[Identifier] {
        &self.prerelease
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    pub fn build(&self) -> Option<&str> {
        if self.build.is_empty() {
            None
        } else {
            Some(&self.build)
        }
    }

    /// Grammar this version was accepted under
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Core components as numeric identifiers, then the prerelease identifiers.
    pub fn iter(&self) -> impl Iterator<Item = Identifier> + '_ {
        self.core
            .iter()
            .map(|&n| Identifier::Numeric(n))
            .chain(self.prerelease.iter().cloned())
    }

    /// The text this version was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Core, prerelease and build metadata, e.g. `3.9.3-alpha.1+42`.
    pub fn to_full_string(&self) -> String {
        let mut full = join(&self.core);
        if !self.prerelease.is_empty() {
            full.push('-');
            full.push_str(&join(&self.prerelease));
        }
        if !self.build.is_empty() {
            full.push('+');
            full.push_str(&self.build);
        }
        full
    }

    /// Check this version against a matcher.
    pub fn satisfies(&self, matcher: &Matcher) -> bool {
        matcher.matches(self)
    }
}

fn parse_core(core: &str) -> Option<Vec<u64>> {
    core.split('.').map(|part| part.parse().ok()).collect()
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Compare two sequences position by position. A missing trailing element
/// loses against any present one.
fn compare_padded<T: Ord>(a: &[T], b: &[T]) -> Ordering {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| a.get(i).cmp(&b.get(i)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn compare_prerelease(a: &[Identifier], b: &[Identifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        // A release ranks above any of its prereleases
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => compare_padded(a, b),
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_padded(&self.core, &other.core)
            .then_with(|| compare_prerelease(&self.prerelease, &other.prerelease))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.core.hash(state);
        self.prerelease.hash(state);
    }
}

impl Index<usize> for Version {
    type Output = u64;

    fn index(&self, index: usize) -> &u64 {
        &self.core[index]
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", join(&self.core))
    }
}

impl FromStr for Version {
    type Err = VersionError;

    /// Parses with the strict grammar.
    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s, Mode::Strict)
    }
}
