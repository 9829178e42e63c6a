//! Semantic versioning scheme backed by the `semver` crate

use semver::Version;

use crate::range::scheme::{InvalidVersion, VersionScheme};

/// Semantic versioning as used by npm, Cargo, Go modules and NuGet
pub struct SemverScheme;

impl VersionScheme for SemverScheme {
    type Version = Version;

    fn normalize(&self, raw: &str) -> Result<Version, InvalidVersion> {
        parse_version(raw)
    }
}

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "1" or "1.2" by padding with zeros, and
/// strips a leading `v` as written in Go module and git tag versions.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "v1.2" -> Version(1, 2, 0)
/// - "1.2-beta.1" -> Version(1, 2, 0, pre: beta.1)
pub fn parse_version(version: &str) -> Result<Version, InvalidVersion> {
    let version = version.strip_prefix(['v', 'V']).unwrap_or(version);

    // Pad only the core, pre-release and build metadata keep their dots
    let (core, suffix) = match version.find(['-', '+']) {
        Some(at) => version.split_at(at),
        None => (version, ""),
    };
    let normalized = match core.split('.').count() {
        1 => format!("{core}.0.0{suffix}"),
        2 => format!("{core}.0{suffix}"),
        _ => version.to_string(),
    };

    Version::parse(&normalized).map_err(|e| InvalidVersion::new(e.to_string()))
}
