//! Prerelease identifiers

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Result, VersionError};
use crate::grammar::is_valid_identifier;

/// One dot-separated prerelease identifier.
///
/// Identifiers made only of ASCII digits are numeric, anything else is an
/// opaque token. A numeric identifier always ranks above a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Numeric(u64),
    Alphanumeric(String),
}

impl Identifier {
    /// Parse the identifier found at 1-based `position` of a prerelease.
    pub fn parse(identifier: &str, position: usize) -> Result<Self> {
        let invalid = || VersionError::InvalidIdentifier {
            position,
            identifier: identifier.to_string(),
        };

        if !is_valid_identifier(identifier) {
            return Err(invalid());
        }

        if identifier.bytes().all(|b| b.is_ascii_digit()) {
            return identifier.parse().map(Identifier::Numeric).map_err(|_| invalid());
        }

        Ok(Identifier::Alphanumeric(identifier.to_string()))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Alphanumeric(a), Identifier::Alphanumeric(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::Alphanumeric(_)) => Ordering::Greater,
            (Identifier::Alphanumeric(_), Identifier::Numeric(_)) => Ordering::Less,
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::Alphanumeric(s) => write!(f, "{}", s),
        }
    }
}

/// Parse a dot-separated prerelease. An empty string yields no identifiers.
pub(crate) fn parse_prerelease(prerelease: &str) -> Result<Vec<Identifier>> {
    if prerelease.is_empty() {
        return Ok(Vec::new());
    }

    prerelease
        .split('.')
        .enumerate()
        .map(|(i, identifier)| Identifier::parse(identifier, i + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric() {
        assert_eq!(Identifier::parse("17", 1).unwrap(), Identifier::Numeric(17));
        assert_eq!(Identifier::parse("007", 1).unwrap(), Identifier::Numeric(7));
        assert!(Identifier::parse("1", 1).unwrap().is_numeric());
    }

    #[test]
    fn test_parse_alphanumeric() {
        assert_eq!(
            Identifier::parse("rc-1", 1).unwrap(),
            Identifier::Alphanumeric("rc-1".to_string())
        );
        assert_eq!(
            Identifier::parse("1a", 1).unwrap(),
            Identifier::Alphanumeric("1a".to_string())
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            Identifier::parse("al_pha", 3),
            Err(VersionError::InvalidIdentifier {
                position: 3,
                identifier: "al_pha".to_string(),
            })
        );
        assert!(Identifier::parse("", 1).is_err());
        assert!(Identifier::parse("99999999999999999999999", 1).is_err());
    }

    #[test]
    fn test_ordering() {
        let num = |n| Identifier::Numeric(n);
        let tok = |s: &str| Identifier::Alphanumeric(s.to_string());

        assert!(num(4) < num(17));
        assert!(tok("alpha") < tok("beta"));
        assert!(tok("beta") < tok("rc"));
        assert!(tok("Zeta") < tok("alpha"));
        assert!(num(0) > tok("alpha"));
        assert!(tok("zzz") < num(0));
        assert_eq!(num(1).cmp(&num(1)), Ordering::Equal);
    }

    #[test]
    fn test_parse_prerelease() {
        assert!(parse_prerelease("").unwrap().is_empty());
        assert_eq!(
            parse_prerelease("alpha.1.release.3").unwrap(),
            vec![
                Identifier::Alphanumeric("alpha".to_string()),
                Identifier::Numeric(1),
                Identifier::Alphanumeric("release".to_string()),
                Identifier::Numeric(3),
            ]
        );
        assert_eq!(
            parse_prerelease("alpha..1"),
            Err(VersionError::InvalidIdentifier {
                position: 2,
                identifier: String::new(),
            })
        );
    }
}
