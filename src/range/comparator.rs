//! Constraint comparators

/// Comparator of a single version constraint
///
/// A constraint written without a comparator means equality and is
/// represented by [`Comparator::Eq`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// `1.2.3` (no prefix)
    Eq,
    /// `!=1.2.3`
    Ne,
    /// `<1.2.3`
    Lt,
    /// `<=1.2.3`
    Lte,
    /// `>1.2.3`
    Gt,
    /// `>=1.2.3`
    Gte,
    /// `*`, only valid as the sole constraint of a range
    Wildcard,
}

/// Comparator prefixes in matching precedence: two-character operators first
const PREFIXES: [(&str, Comparator); 5] = [
    (">=", Comparator::Gte),
    ("<=", Comparator::Lte),
    ("!=", Comparator::Ne),
    ("<", Comparator::Lt),
    (">", Comparator::Gt),
];

impl Comparator {
    /// Returns the operator as written in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Eq => "=",
            Comparator::Ne => "!=",
            Comparator::Lt => "<",
            Comparator::Lte => "<=",
            Comparator::Gt => ">",
            Comparator::Gte => ">=",
            Comparator::Wildcard => "*",
        }
    }

    /// Returns the prefix used in the canonical form (`Eq` has none)
    pub fn prefix(&self) -> &'static str {
        match self {
            Comparator::Eq => "",
            other => other.as_str(),
        }
    }

    /// Split a constraint token into its comparator and the remaining version
    pub fn split_prefix(token: &str) -> (Comparator, &str) {
        PREFIXES
            .iter()
            .find_map(|(prefix, comparator)| {
                token
                    .strip_prefix(*prefix)
                    .map(|version| (*comparator, version))
            })
            .unwrap_or((Comparator::Eq, token))
    }

    /// `>` and `>=` open an interval
    pub fn is_lower_bound(&self) -> bool {
        matches!(self, Comparator::Gt | Comparator::Gte)
    }

    /// `<` and `<=` close an interval
    pub fn is_upper_bound(&self) -> bool {
        matches!(self, Comparator::Lt | Comparator::Lte)
    }

    /// `=`, `<` and `<=`: constraints after which an interval is closed
    pub fn is_upper_closing(&self) -> bool {
        matches!(self, Comparator::Eq | Comparator::Lt | Comparator::Lte)
    }

    /// Comparators whose own version is part of the range
    pub fn includes_version(&self) -> bool {
        matches!(self, Comparator::Eq | Comparator::Lte | Comparator::Gte)
    }

    /// Whether `next` may directly follow `self` in a validated range,
    /// once `!=` constraints are set aside
    pub fn may_precede(&self, next: Comparator) -> bool {
        if self.is_upper_closing() {
            matches!(next, Comparator::Eq | Comparator::Gt | Comparator::Gte)
        } else if self.is_lower_bound() {
            next.is_upper_bound()
        } else {
            false
        }
    }
}

impl std::fmt::Display for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
