//! Range construction utilities

use vers::{NormalizedVersion, SchemeRegistry, VersionRange, schemes};

/// Parse and validate `input` against the bundled schemes
pub fn range(input: &str) -> VersionRange {
    input
        .parse()
        .unwrap_or_else(|e| panic!("'{input}' should be valid: {e}"))
}

/// Parse and validate `input` against `registry`
pub fn range_in(registry: &SchemeRegistry, input: &str) -> VersionRange {
    let parsed = vers::parse(input).unwrap();
    vers::validate(&parsed, registry).unwrap()
}

/// Normalize `raw` with the bundled scheme registered as `scheme_id`
pub fn version(scheme_id: &str, raw: &str) -> NormalizedVersion {
    schemes::builtin_registry()
        .lookup(scheme_id)
        .unwrap()
        .normalize(raw)
        .unwrap()
}

/// The constraint versions of `range` followed by `extra`
pub fn probe_versions(range: &VersionRange, extra: &[&str]) -> Vec<String> {
    range
        .constraints()
        .iter()
        .map(|c| c.raw_version.clone())
        .chain(extra.iter().map(|v| v.to_string()))
        .collect()
}
