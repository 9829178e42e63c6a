//! Validated version range

use crate::range::constraint::Constraint;
use crate::range::scheme::SchemeHandle;

/// Constraints of a validated range
#[derive(Debug, Clone)]
pub(crate) enum RangeConstraints {
    /// `*`: every version of the scheme
    Wildcard,
    /// Sorted by version, duplicate free, alternating bounds
    List(Vec<Constraint>),
}

/// A version range that passed validation
///
/// Only [`validate`](crate::range::validator::validate) creates values of
/// this type, so every `VersionRange` satisfies the range invariants:
/// constraints sorted by version, no duplicate versions, `*` used alone and
/// lower/upper bounds alternating once `!=` constraints are ignored.
#[derive(Debug, Clone)]
pub struct VersionRange {
    pub(crate) scheme: SchemeHandle,
    pub(crate) constraints: RangeConstraints,
}

impl VersionRange {
    pub(crate) fn wildcard(scheme: SchemeHandle) -> Self {
        Self {
            scheme,
            constraints: RangeConstraints::Wildcard,
        }
    }

    pub(crate) fn from_sorted(scheme: SchemeHandle, constraints: Vec<Constraint>) -> Self {
        Self {
            scheme,
            constraints: RangeConstraints::List(constraints),
        }
    }

    /// Versioning scheme id, always lowercase
    pub fn scheme_id(&self) -> &str {
        self.scheme.id()
    }

    /// Scheme used to normalize and order this range's versions
    pub fn scheme(&self) -> &SchemeHandle {
        &self.scheme
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self.constraints, RangeConstraints::Wildcard)
    }

    /// Constraints sorted by version; empty for the `*` range
    pub fn constraints(&self) -> &[Constraint] {
        match &self.constraints {
            RangeConstraints::Wildcard => &[],
            RangeConstraints::List(constraints) => constraints,
        }
    }
}

/// Two ranges are equal when they use the same scheme id and have the same
/// comparators, raw versions and normalized versions in the same order.
impl PartialEq for VersionRange {
    fn eq(&self, other: &Self) -> bool {
        if self.scheme_id() != other.scheme_id() || self.is_wildcard() != other.is_wildcard() {
            return false;
        }

        let (lhs, rhs) = (self.constraints(), other.constraints());
        lhs.len() == rhs.len()
            && lhs.iter().zip(rhs).all(|(a, b)| {
                a.comparator == b.comparator
                    && a.raw_version == b.raw_version
                    && self.scheme.equals(&a.version, &b.version).unwrap_or(false)
            })
    }
}
