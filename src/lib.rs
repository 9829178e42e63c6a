//! Parser, validator and matcher for `vers` version range specifiers
//!
//! A `vers` string such as `vers:npm/>=1.2.0|<2.0.0` names a versioning
//! scheme and a list of constraints over versions of that scheme:
//!
//! ```
//! let range: vers::VersionRange = "vers:npm/>=1.2.0|<2.0.0".parse()?;
//!
//! assert!(range.contains_raw("1.4.2")?);
//! assert!(!range.contains_raw("2.0.0")?);
//! # Ok::<(), vers::VersError>(())
//! ```
//!
//! The [`range`] module holds the scheme-agnostic core, [`schemes`] the
//! bundled versioning schemes and [`config`] the file based configuration
//! used by the `vers` binary.

pub mod config;
pub mod range;
pub mod schemes;

use std::str::FromStr;

pub use range::comparator::Comparator;
pub use range::constraint::{Constraint, RawConstraint};
pub use range::error::VersError;
pub use range::parser::ParsedRange;
pub use range::registry::SchemeRegistry;
pub use range::scheme::{InvalidVersion, NormalizedVersion, SchemeHandle, VersionScheme};
pub use range::types::VersionRange;
pub use range::validator::validate;

/// The process-wide registry
///
/// Returns the installed registry, or installs the bundled schemes when
/// none was installed yet.
pub fn registry() -> &'static SchemeRegistry {
    SchemeRegistry::global_or_init(schemes::builtin_registry)
}

/// Parse a `vers` string without validating it
pub fn parse(input: &str) -> Result<ParsedRange, VersError> {
    input.parse()
}

/// Return the minimal equivalent of `range`
pub fn simplify(range: &VersionRange) -> VersionRange {
    range.simplify()
}

/// Check whether `version` is inside `range`
pub fn contains(range: &VersionRange, version: &NormalizedVersion) -> Result<bool, VersError> {
    range.contains(version)
}

/// Parse, validate and simplify `input`, rendering its canonical form
pub fn canonicalize(input: &str) -> Result<String, VersError> {
    let range: VersionRange = input.parse()?;
    Ok(range.canonical())
}

/// Parses and validates against the process-wide [`registry`]
impl FromStr for VersionRange {
    type Err = VersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(&parse(s)?, registry())
    }
}
