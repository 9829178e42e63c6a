use thiserror::Error;

use crate::range::scheme::InvalidVersion;

/// Errors raised while parsing, validating or matching a `vers` string.
///
/// Every variant carries the raw substring that caused it so callers can
/// point users at the offending part of their input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersError {
    #[error("Invalid URI scheme '{0}', expected 'vers'")]
    BadUriScheme(String),

    #[error("Missing versioning scheme")]
    MissingVersioningScheme,

    #[error("Invalid versioning scheme '{0}': must match [a-z0-9.+-]+")]
    InvalidVersioningScheme(String),

    #[error("Empty version constraint list")]
    EmptyConstraintList,

    #[error("Missing version in constraint '{0}'")]
    EmptyVersion(String),

    #[error("Wildcard '*' must be used alone: '{0}'")]
    WildcardMisuse(String),

    #[error("Unescaped comparator character in version of constraint '{0}'")]
    ReservedCharacter(String),

    #[error("Invalid percent-encoding in version '{0}'")]
    InvalidPercentEncoding(String),

    #[error("Unknown versioning scheme: {0}")]
    UnknownVersioningScheme(String),

    #[error("Invalid version '{raw}' for scheme {scheme}: {source}")]
    UnparsableVersion {
        scheme: String,
        raw: String,
        #[source]
        source: InvalidVersion,
    },

    #[error("Duplicate version: '{first}' and '{second}'")]
    DuplicateVersion { first: String, second: String },

    #[error("'{current}' must not be followed by '{next}' (ignoring '!=')")]
    IllegalAdjacency { current: String, next: String },

    #[error("Cannot compare a {version} version against a {range} range")]
    CrossSchemeComparison { range: String, version: String },
}
