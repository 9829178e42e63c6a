//! Version constraints before and after normalization

use std::fmt;

use crate::range::canonical::encode_version;
use crate::range::comparator::Comparator;
use crate::range::scheme::NormalizedVersion;

/// A constraint as written, before its version has been normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawConstraint {
    pub comparator: Comparator,
    /// Percent-decoded version string; empty for [`Comparator::Wildcard`]
    pub raw_version: String,
}

impl RawConstraint {
    pub fn new(comparator: Comparator, raw_version: impl Into<String>) -> Self {
        Self {
            comparator,
            raw_version: raw_version.into(),
        }
    }

    pub fn wildcard() -> Self {
        Self::new(Comparator::Wildcard, "")
    }

    pub fn is_wildcard(&self) -> bool {
        self.comparator == Comparator::Wildcard
    }
}

impl fmt::Display for RawConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wildcard() {
            return f.write_str("*");
        }
        write!(
            f,
            "{}{}",
            self.comparator.prefix(),
            encode_version(&self.raw_version)
        )
    }
}

/// A constraint of a validated range
#[derive(Debug, Clone)]
pub struct Constraint {
    pub comparator: Comparator,
    pub version: NormalizedVersion,
    /// The version as written, kept for rendering and diagnostics
    pub raw_version: String,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.comparator.prefix(),
            encode_version(&self.raw_version)
        )
    }
}
