//! Simplification of validated ranges
//!
//! Removes constraints made redundant by a neighbouring bound, e.g. a `>`
//! directly followed by another `>`, while leaving the set of contained
//! versions unchanged.

use tracing::debug;

use crate::range::comparator::Comparator;
use crate::range::constraint::Constraint;
use crate::range::scheme::SchemeHandle;
use crate::range::types::{RangeConstraints, VersionRange};

impl VersionRange {
    /// Return the minimal equivalent range
    ///
    /// Simplifying an already simple range returns an equal range.
    pub fn simplify(&self) -> VersionRange {
        let RangeConstraints::List(constraints) = &self.constraints else {
            return self.clone();
        };

        let bounded = constraints
            .iter()
            .filter(|c| c.comparator != Comparator::Ne)
            .count();
        if bounded <= 1 {
            return self.clone();
        }

        VersionRange::from_sorted(
            self.scheme.clone(),
            simplify_constraints(&self.scheme, constraints.clone()),
        )
    }
}

/// Drop redundant constraints from a version-sorted list
pub(crate) fn simplify_constraints(
    scheme: &SchemeHandle,
    constraints: Vec<Constraint>,
) -> Vec<Constraint> {
    let (unequal, rest): (Vec<_>, Vec<_>) = constraints
        .into_iter()
        .partition(|c| c.comparator == Comparator::Ne);

    let mut simplified = drop_redundant(rest);
    simplified.extend(unequal);
    simplified.sort_by(|a, b| scheme.order(&a.version, &b.version));
    simplified
}

/// A lower bound makes a following `=`, `>` or `>=` redundant
fn covers_next(current: Comparator, next: Comparator) -> bool {
    current.is_lower_bound() && matches!(next, Comparator::Eq | Comparator::Gt | Comparator::Gte)
}

/// A following `<` or `<=` makes an upper-closing constraint redundant
fn covered_by_next(current: Comparator, next: Comparator) -> bool {
    current.is_upper_closing() && next.is_upper_bound()
}

/// Scan with a (previous, current, next) window where `previous` is the last
/// kept constraint. Every `continue` drops exactly one constraint, so the
/// loop terminates.
fn drop_redundant(rest: Vec<Constraint>) -> Vec<Constraint> {
    let mut kept: Vec<Constraint> = Vec::with_capacity(rest.len());
    let mut pending = rest.into_iter().peekable();
    let mut revisit: Option<Constraint> = None;

    while let Some(current) = revisit.take().or_else(|| pending.next()) {
        if let Some(next) = pending.peek() {
            if covers_next(current.comparator, next.comparator) {
                debug!("Dropping '{}' covered by '{}'", next, current);
                pending.next();
                revisit = Some(current);
                continue;
            }

            if covered_by_next(current.comparator, next.comparator) {
                debug!("Dropping '{}' covered by '{}'", current, next);
                revisit = kept.pop();
                continue;
            }

            if let Some(previous) = kept.last() {
                if covers_next(previous.comparator, current.comparator) {
                    debug!("Dropping '{}' covered by '{}'", current, previous);
                    continue;
                }

                if covered_by_next(previous.comparator, current.comparator) {
                    debug!("Dropping '{}' covered by '{}'", previous, current);
                    kept.pop();
                }
            }
        }

        kept.push(current);
    }

    kept
}
