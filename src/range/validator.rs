//! Validation of parsed ranges
//!
//! Checks run in a fixed order and the first violation is returned:
//!
//! 1. scheme id syntax
//! 2. scheme lookup
//! 3. version normalization
//! 4. wildcard used alone
//! 5. duplicate versions, found between neighbours of the sorted list
//! 6. comparator adjacency, on the version-sorted list

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::range::comparator::Comparator;
use crate::range::constraint::Constraint;
use crate::range::error::VersError;
use crate::range::parser::ParsedRange;
use crate::range::registry::SchemeRegistry;
use crate::range::types::VersionRange;

static SCHEME_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9.+-]+$").expect("scheme id pattern is valid"));

/// Validate `parsed` against the schemes of `registry`
///
/// Never modifies its input; returns a new, sorted [`VersionRange`].
pub fn validate(
    parsed: &ParsedRange,
    registry: &SchemeRegistry,
) -> Result<VersionRange, VersError> {
    validate_inner(parsed, registry)
        .inspect(|range| debug!("Validated {}", range))
        .inspect_err(|e| debug!("Rejected range for scheme '{}': {}", parsed.raw_scheme_id, e))
}

fn validate_inner(
    parsed: &ParsedRange,
    registry: &SchemeRegistry,
) -> Result<VersionRange, VersError> {
    if !SCHEME_ID_RE.is_match(&parsed.raw_scheme_id) {
        return Err(VersError::InvalidVersioningScheme(parsed.raw_scheme_id.clone()));
    }

    let scheme = registry.lookup(&parsed.scheme_id)?;

    let mut constraints: Vec<Constraint> = Vec::with_capacity(parsed.constraints.len());
    let mut wildcards = 0;
    for raw in &parsed.constraints {
        if raw.is_wildcard() {
            wildcards += 1;
            continue;
        }
        constraints.push(Constraint {
            comparator: raw.comparator,
            version: scheme.normalize(&raw.raw_version)?,
            raw_version: raw.raw_version.clone(),
        });
    }

    match (wildcards, parsed.constraints.len()) {
        (0, 0) => return Err(VersError::EmptyConstraintList),
        (0, _) => {}
        (1, 1) => return Ok(VersionRange::wildcard(scheme)),
        _ => {
            let list = parsed
                .constraints
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("|");
            return Err(VersError::WildcardMisuse(list));
        }
    }

    // Stable sort: equal versions stay in input order, so the duplicate
    // pair with the earliest first member is the one reported
    let mut indexed: Vec<(usize, Constraint)> = constraints.into_iter().enumerate().collect();
    indexed.sort_by(|(_, a), (_, b)| scheme.order(&a.version, &b.version));

    if let Some((first, second)) = indexed
        .windows(2)
        .filter(|pair| scheme.order(&pair[0].1.version, &pair[1].1.version).is_eq())
        .map(|pair| (&pair[0], &pair[1]))
        .min_by_key(|(first, second)| (first.0, second.0))
    {
        return Err(VersError::DuplicateVersion {
            first: first.1.to_string(),
            second: second.1.to_string(),
        });
    }

    let constraints: Vec<Constraint> = indexed.into_iter().map(|(_, c)| c).collect();

    let bounds: Vec<&Constraint> = constraints
        .iter()
        .filter(|c| c.comparator != Comparator::Ne)
        .collect();
    if let Some(pair) = bounds
        .windows(2)
        .find(|pair| !pair[0].comparator.may_precede(pair[1].comparator))
    {
        return Err(VersError::IllegalAdjacency {
            current: pair[0].to_string(),
            next: pair[1].to_string(),
        });
    }

    Ok(VersionRange::from_sorted(scheme, constraints))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::constraint::RawConstraint;
    use crate::range::scheme::{InvalidVersion, MockVersionScheme, VersionScheme};
    use rstest::rstest;

    struct Numeric;

    impl VersionScheme for Numeric {
        type Version = u64;

        fn normalize(&self, raw: &str) -> Result<u64, InvalidVersion> {
            raw.parse()
                .map_err(|e: std::num::ParseIntError| InvalidVersion::new(e.to_string()))
        }
    }

    fn registry() -> SchemeRegistry {
        let mut registry = SchemeRegistry::new();
        registry.register("num", Numeric);
        registry
    }

    fn check(input: &str) -> Result<VersionRange, VersError> {
        let parsed: ParsedRange = input.parse()?;
        validate(&parsed, &registry())
    }

    fn rendered(range: &VersionRange) -> Vec<String> {
        range.constraints().iter().map(ToString::to_string).collect()
    }

    #[rstest]
    #[case("vers:num/3|1|2", vec!["1", "2", "3"])]
    #[case("vers:num/<5|>=1", vec![">=1", "<5"])]
    #[case("vers:num/>=1|<=3|>=7|<=9", vec![">=1", "<=3", ">=7", "<=9"])]
    #[case("vers:num/!=4|>=1|!=2|<9", vec![">=1", "!=2", "!=4", "<9"])]
    #[case("vers:num/<1|3|>5", vec!["<1", "3", ">5"])]
    #[case("vers:num/!=1|!=2", vec!["!=1", "!=2"])]
    #[case("vers:num/1|>=2", vec!["1", ">=2"])]
    fn validate_sorts_constraints_by_version(#[case] input: &str, #[case] expected: Vec<&str>) {
        let range = check(input).unwrap();

        assert_eq!(rendered(&range), expected);
    }

    #[test]
    fn validate_accepts_lone_wildcard() {
        let range = check("vers:num/*").unwrap();

        assert!(range.is_wildcard());
        assert!(range.constraints().is_empty());
    }

    #[rstest]
    #[case("vers:Num/1", VersError::InvalidVersioningScheme("Num".to_string()))]
    #[case("vers:n_m/1", VersError::InvalidVersioningScheme("n_m".to_string()))]
    #[case("vers:deb/1", VersError::UnknownVersioningScheme("deb".to_string()))]
    #[case("vers:num/1|*", VersError::WildcardMisuse("1|*".to_string()))]
    #[case("vers:num/1|>=1", VersError::DuplicateVersion {
        first: "1".to_string(),
        second: ">=1".to_string(),
    })]
    #[case("vers:num/!=01|<1", VersError::DuplicateVersion {
        first: "!=01".to_string(),
        second: "<1".to_string(),
    })]
    #[case("vers:num/5|2|02|05", VersError::DuplicateVersion {
        first: "5".to_string(),
        second: "05".to_string(),
    })]
    #[case("vers:num/3|!=7|>=07|<9|3", VersError::DuplicateVersion {
        first: "3".to_string(),
        second: "3".to_string(),
    })]
    #[case("vers:num/<1|<2", VersError::IllegalAdjacency {
        current: "<1".to_string(),
        next: "<2".to_string(),
    })]
    #[case("vers:num/>1|>2", VersError::IllegalAdjacency {
        current: ">1".to_string(),
        next: ">2".to_string(),
    })]
    #[case("vers:num/1|<2", VersError::IllegalAdjacency {
        current: "1".to_string(),
        next: "<2".to_string(),
    })]
    #[case("vers:num/>=1|!=2|3", VersError::IllegalAdjacency {
        current: ">=1".to_string(),
        next: "3".to_string(),
    })]
    fn validate_reports_first_violation(#[case] input: &str, #[case] expected: VersError) {
        assert_eq!(check(input).unwrap_err(), expected);
    }

    #[test]
    fn validate_reports_unparsable_version_before_structure_errors() {
        let err = check("vers:num/x|*").unwrap_err();

        assert!(matches!(
            err,
            VersError::UnparsableVersion { ref raw, .. } if raw == "x"
        ));
    }

    #[test]
    fn validate_does_not_modify_its_input() {
        let parsed: ParsedRange = "vers:num/3|1".parse().unwrap();
        let before = parsed.clone();

        validate(&parsed, &registry()).unwrap();

        assert_eq!(parsed, before);
    }

    #[test]
    fn validate_rejects_empty_constraint_list_built_by_hand() {
        let parsed = ParsedRange::new("num", vec![]);

        assert_eq!(
            validate(&parsed, &registry()).unwrap_err(),
            VersError::EmptyConstraintList
        );
    }

    #[test]
    fn validate_normalizes_each_version_once() {
        let mut scheme = MockVersionScheme::new();
        scheme
            .expect_normalize()
            .times(2)
            .returning(|raw| raw.parse::<u64>().map_err(|e| InvalidVersion::new(e.to_string())));
        let mut registry = SchemeRegistry::new();
        registry.register("mock", scheme);
        let parsed = ParsedRange::new(
            "mock",
            vec![
                RawConstraint::new(Comparator::Gte, "1"),
                RawConstraint::new(Comparator::Lt, "2"),
            ],
        );

        let range = validate(&parsed, &registry).unwrap();

        assert_eq!(range.constraints().len(), 2);
    }
}
