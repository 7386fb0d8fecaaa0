//! Builder for matchers

use crate::error::Result;
use crate::{Mode, Version};

use super::{Matcher, Range};

/// Collects bound strings and parses them all when [`build`](Self::build) is called.
#[derive(Debug, Clone, Default)]
pub struct MatcherBuilder {
    min: Option<String>,
    max: Option<String>,
    except: Vec<String>,
    between: Option<(String, String)>,
    mode: Mode,
}

impl MatcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inclusive lower bound
    pub fn min(mut self, version: impl Into<String>) -> Self {
        self.min = Some(version.into());
        self
    }

    /// Inclusive upper bound
    pub fn max(mut self, version: impl Into<String>) -> Self {
        self.max = Some(version.into());
        self
    }

    /// Exclude one version; may be called repeatedly
    pub fn except(mut self, version: impl Into<String>) -> Self {
        self.except.push(version.into());
        self
    }

    /// Additional inclusive range, matched when min/max does not match
    pub fn between(mut self, low: impl Into<String>, high: impl Into<String>) -> Self {
        self.between = Some((low.into(), high.into()));
        self
    }

    /// Grammar used for every bound and for [`Matcher::matches_str`]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn build(self) -> Result<Matcher> {
        let mode = self.mode;
        let parse = |version: &str| Version::parse(version, mode);

        let min = self.min.as_deref().map(parse).transpose()?;
        let max = self.max.as_deref().map(parse).transpose()?;
        let except = self
            .except
            .iter()
            .map(|version| parse(version))
            .collect::<Result<Vec<_>>>()?;
        let between = match &self.between {
            Some((low, high)) => Some(Range::new(parse(low)?, parse(high)?)),
            None => None,
        };

        if let Some(range) = &between {
            if range.is_empty() {
                log::warn!("Range {} is inverted and will never match", range);
            }
        }

        let matcher = Matcher {
            min,
            max,
            except,
            between,
            mode,
        };
        log::debug!("Built {} matcher {}", mode, matcher);

        Ok(matcher)
    }
}
