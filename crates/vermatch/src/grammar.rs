//! Version string grammar: validation, extraction and splitting

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

/// Pieces of a version string after splitting.
///
/// Every slice borrows from the input. Missing parts are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parts<'a> {
    pub core: &'a str,
    pub prerelease: &'a str,
    pub build: &'a str,
}

/// Which grammar a version string is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Exactly `major.minor.patch` plus optional prerelease and build.
    #[default]
    Strict,
    /// One or more numeric components plus optional prerelease and build.
    Permissive,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Strict => "strict",
            Mode::Permissive => "permissive",
        }
    }

    fn anchored(&self) -> &'static Regex {
        match self {
            Mode::Strict => &*STRICT_RE,
            Mode::Permissive => &*PERMISSIVE_RE,
        }
    }

    fn unanchored(&self) -> &'static Regex {
        match self {
            Mode::Strict => &*STRICT_SEARCH_RE,
            Mode::Permissive => &*PERMISSIVE_SEARCH_RE,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid grammar mode \"{0}\", expected \"strict\" or \"permissive\"")]
pub struct InvalidModeError(pub String);

impl FromStr for Mode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Mode::Strict),
            "permissive" => Ok(Mode::Permissive),
            _ => Err(InvalidModeError(s.to_string())),
        }
    }
}

const SUFFIX_REGEX: &str = concat!(
    r"(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?",
    r"(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?",
);

lazy_static! {
    static ref STRICT_REGEX: String = format!(r"[0-9]+\.[0-9]+\.[0-9]+{}", SUFFIX_REGEX);
    static ref PERMISSIVE_REGEX: String = format!(r"[0-9]+(?:\.[0-9]+)*{}", SUFFIX_REGEX);

    static ref STRICT_RE: Regex = Regex::new(&format!("^{}$", *STRICT_REGEX)).unwrap();
    static ref PERMISSIVE_RE: Regex = Regex::new(&format!("^{}$", *PERMISSIVE_REGEX)).unwrap();

    static ref STRICT_SEARCH_RE: Regex = Regex::new(&STRICT_REGEX).unwrap();
    static ref PERMISSIVE_SEARCH_RE: Regex = Regex::new(&PERMISSIVE_REGEX).unwrap();

    static ref IDENTIFIER_RE: Regex = Regex::new(r"^[0-9A-Za-z-]+$").unwrap();
}

/// Check whether the whole string matches the grammar of `mode`.
pub fn is_valid(version: &str, mode: Mode) -> bool {
    mode.anchored().is_match(version)
}

/// Find the first substring of `text` matching the grammar of `mode`.
///
/// A match directly followed by `.` and a digit is part of a longer dotted
/// token (`1.2.3.4` in strict mode) and is skipped. Returns an empty string
/// when nothing matches.
pub fn extract_first_match(text: &str, mode: Mode) -> &str {
    mode.unanchored()
        .find_iter(text)
        .find(|m| !continues_dotted_number(&text[m.end()..]))
        .map(|m| m.as_str())
        .unwrap_or("")
}

fn continues_dotted_number(rest: &str) -> bool {
    let bytes = rest.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_digit() => true,
        Some(b'.') => bytes.get(1).is_some_and(|b| b.is_ascii_digit()),
        _ => false,
    }
}

/// Whether a single prerelease or build identifier is made of `[0-9A-Za-z-]` only.
pub fn is_valid_identifier(identifier: &str) -> bool {
    IDENTIFIER_RE.is_match(identifier)
}

/// Split a version string into core, prerelease and build.
///
/// The first `-` ends the core, since identifiers may contain `-` but the
/// core never does. Build metadata starts after the last `+` of the
/// remainder; without a `-`, the core itself may still carry a `+build`.
/// The input is not validated.
pub fn split(version: &str) -> Parts<'_> {
    let (mut core, mut prerelease) = match version.find('-') {
        Some(pos) => (&version[..pos], &version[pos + 1..]),
        None => (version, ""),
    };
    let mut build = "";

    if let Some(pos) = prerelease.rfind('+') {
        build = &prerelease[pos + 1..];
        prerelease = &prerelease[..pos];
    }
    if let Some(pos) = core.rfind('+') {
        build = &core[pos + 1..];
        core = &core[..pos];
    }

    Parts {
        core,
        prerelease,
        build,
    }
}
