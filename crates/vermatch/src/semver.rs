//! Semver facade providing high-level version operations

use std::cmp::Ordering;

use crate::{Matcher, Mode, Version};

/// Main facade for version operations over plain strings
pub struct Semver;

impl Semver {
    /// Check if a version string satisfies a matcher
    ///
    /// The version is parsed with the matcher's grammar; unparsable input
    /// never satisfies anything.
    pub fn satisfies(version: &str, matcher: &Matcher) -> bool {
        matcher.matches_str(version).unwrap_or(false)
    }

    /// Return all versions that satisfy the given matcher, in input order
    pub fn satisfied_by(versions: &[&str], matcher: &Matcher) -> Vec<String> {
        versions
            .iter()
            .filter(|v| Self::satisfies(v, matcher))
            .map(|v| v.to_string())
            .collect()
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str], mode: Mode) -> Vec<String> {
        Self::usort(versions, mode, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str], mode: Mode) -> Vec<String> {
        Self::usort(versions, mode, false)
    }

    fn usort(versions: &[&str], mode: Mode, ascending: bool) -> Vec<String> {
        // Keep the original index so input text is returned untouched
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| match Version::parse(v, mode) {
                Ok(version) => Some((version, i)),
                Err(err) => {
                    log::debug!("Skipping {}: {}", v, err);
                    None
                }
            })
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp: Ordering = a.cmp(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfies() {
        let matcher = Matcher::new(Some("1.0.0"), Some("2.0.0"), &["1.5.0"], None).unwrap();
        assert!(Semver::satisfies("1.2.3", &matcher));
        assert!(Semver::satisfies("2.0.0", &matcher));
        assert!(!Semver::satisfies("1.5.0", &matcher));
        assert!(!Semver::satisfies("2.0.1", &matcher));
        assert!(!Semver::satisfies("1.2", &matcher));
        assert!(!Semver::satisfies("garbage", &matcher));
    }

    #[test]
    fn test_satisfied_by() {
        let versions = vec!["1.0.0", "1.2.0", "1.9999.9999", "2.0.0", "2.1.0", "0.9999.9999"];
        let matcher = Matcher::new(Some("1.0.0"), Some("2.0.0-0"), &[], None).unwrap();
        assert_eq!(
            Semver::satisfied_by(&versions, &matcher),
            vec!["1.0.0", "1.2.0", "1.9999.9999"]
        );

        let versions2 = vec!["1.0.0", "1.1.0", "2.9.9", "3.0.0", "4.0.0", "4.1.0"];
        let matcher2 = Matcher::new(Some("4.0.0"), None, &[], Some(("1.1.0", "2.9.9"))).unwrap();
        assert_eq!(
            Semver::satisfied_by(&versions2, &matcher2),
            vec!["1.1.0", "2.9.9", "4.0.0", "4.1.0"]
        );
    }

    #[test]
    fn test_sort() {
        let versions = vec!["1.0", "0.1", "0.1", "3.2.1", "2.4.0-alpha", "2.4.0", "2.4"];
        let sorted = Semver::sort(&versions, Mode::Permissive);
        assert_eq!(sorted, vec!["0.1", "0.1", "1.0", "2.4", "2.4.0-alpha", "2.4.0", "3.2.1"]);
    }

    #[test]
    fn test_sort_skips_invalid() {
        let versions = vec!["1.0.0", "dev-master", "0.9.0", "1.0"];
        let sorted = Semver::sort(&versions, Mode::Strict);
        assert_eq!(sorted, vec!["0.9.0", "1.0.0"]);
    }

    #[test]
    fn test_sort_is_stable_for_build_metadata() {
        let versions = vec!["1.0.0+b", "1.0.0+a", "0.1.0"];
        let sorted = Semver::sort(&versions, Mode::Strict);
        assert_eq!(sorted, vec!["0.1.0", "1.0.0+b", "1.0.0+a"]);
    }

    #[test]
    fn test_rsort() {
        let versions = vec!["1.0", "0.1", "0.1", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let rsorted = Semver::rsort(&versions, Mode::Permissive);
        assert_eq!(rsorted, vec!["3.2.1", "2.4.0", "2.4.0-alpha", "1.0", "0.1", "0.1"]);
    }
}
