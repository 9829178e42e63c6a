//! Version containment against validated ranges

use tracing::warn;

use crate::range::comparator::Comparator;
use crate::range::constraint::Constraint;
use crate::range::error::VersError;
use crate::range::scheme::NormalizedVersion;
use crate::range::types::{RangeConstraints, VersionRange};

impl VersionRange {
    /// Check whether `version` is inside this range
    ///
    /// `version` must have been normalized under this range's scheme id.
    /// Simplified and unsimplified forms of a range give the same answer.
    pub fn contains(&self, version: &NormalizedVersion) -> Result<bool, VersError> {
        if version.scheme_id() != self.scheme_id() {
            return Err(VersError::CrossSchemeComparison {
                range: self.scheme_id().to_string(),
                version: version.scheme_id().to_string(),
            });
        }

        let constraints = match &self.constraints {
            RangeConstraints::Wildcard => return Ok(true),
            RangeConstraints::List(constraints) => constraints,
        };

        // Equality with a constraint version decides on its own
        for constraint in constraints {
            if self.scheme.compare(version, &constraint.version)?.is_eq() {
                if constraint.comparator.includes_version() {
                    return Ok(true);
                }
                if constraint.comparator == Comparator::Ne {
                    return Ok(false);
                }
            }
        }

        let bounds: Vec<&Constraint> = constraints
            .iter()
            .filter(|c| c.comparator.is_lower_bound() || c.comparator.is_upper_bound())
            .collect();

        for (i, current) in bounds.iter().enumerate() {
            let ordering = self.scheme.compare(version, &current.version)?;

            if i == 0 && current.comparator.is_upper_bound() && ordering.is_lt() {
                return Ok(true);
            }
            if i == bounds.len() - 1 && current.comparator.is_lower_bound() && ordering.is_gt() {
                return Ok(true);
            }
            if let Some(next) = bounds.get(i + 1)
                && current.comparator.is_lower_bound()
                && next.comparator.is_upper_bound()
                && ordering.is_gt()
                && self.scheme.compare(version, &next.version)?.is_lt()
            {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Normalize `version` with this range's scheme and check containment
    pub fn contains_raw(&self, version: &str) -> Result<bool, VersError> {
        let version = self.scheme.normalize(version)?;
        self.contains(&version)
    }

    /// Return the candidates contained in this range, in input order
    ///
    /// Candidates the scheme cannot parse are skipped.
    pub fn select<'a, S: AsRef<str>>(&self, versions: &'a [S]) -> Vec<&'a str> {
        versions
            .iter()
            .map(|v| <S as AsRef<str>>::as_ref(v))
            .filter(|v| {
                self.contains_raw(v)
                    .inspect_err(|e| warn!("Skipping version '{}': {}", v, e))
                    .unwrap_or(false)
            })
            .collect()
    }
}
