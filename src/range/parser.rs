//! Constraint list parsing
//!
//! Produces an unvalidated [`ParsedRange`]. Nothing here knows about
//! versioning schemes: versions stay raw strings until validation.

use std::str::FromStr;

use percent_encoding::percent_decode_str;

use crate::range::comparator::Comparator;
use crate::range::constraint::RawConstraint;
use crate::range::error::VersError;
use crate::range::tokenizer::tokenize;

/// A syntactically well-formed, not yet validated version range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRange {
    /// Versioning scheme as written in the input
    pub raw_scheme_id: String,
    /// Lower-cased versioning scheme used for registry lookup
    pub scheme_id: String,
    /// Constraints in order of appearance
    pub constraints: Vec<RawConstraint>,
}

impl ParsedRange {
    pub fn new(scheme_id: &str, constraints: Vec<RawConstraint>) -> Self {
        Self {
            raw_scheme_id: scheme_id.to_string(),
            scheme_id: scheme_id.to_ascii_lowercase(),
            constraints,
        }
    }
}

impl FromStr for ParsedRange {
    type Err = VersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(s)?;
        let constraints = parse_constraints(&tokens.constraints)?;
        Ok(Self::new(&tokens.scheme_id, constraints))
    }
}

/// Parse a `|`-separated constraint list
///
/// Leading and trailing `|` are ignored, so `*|` and `|*` both read as `*`.
pub fn parse_constraints(list: &str) -> Result<Vec<RawConstraint>, VersError> {
    let list = list.trim_matches('|');
    if list == "*" {
        return Ok(vec![RawConstraint::wildcard()]);
    }
    if list.starts_with('*') {
        return Err(VersError::WildcardMisuse(list.to_string()));
    }

    let constraints = list
        .split('|')
        .filter(|token| !token.is_empty())
        .map(parse_constraint)
        .collect::<Result<Vec<_>, _>>()?;

    if constraints.is_empty() {
        return Err(VersError::EmptyConstraintList);
    }

    Ok(constraints)
}

/// Parse a single constraint token such as `>=1.0.0`
pub fn parse_constraint(token: &str) -> Result<RawConstraint, VersError> {
    if token == "*" {
        return Ok(RawConstraint::wildcard());
    }

    let (comparator, version) = Comparator::split_prefix(token);
    if version.is_empty() {
        return Err(VersError::EmptyVersion(token.to_string()));
    }
    if version.contains('*') {
        return Err(VersError::WildcardMisuse(token.to_string()));
    }
    // Comparators are matched once; a second one must be percent-encoded
    if version.contains(['<', '>', '=', '!']) {
        return Err(VersError::ReservedCharacter(token.to_string()));
    }

    let raw_version = if version.contains('%') {
        percent_decode_str(version)
            .decode_utf8()
            .map_err(|_| VersError::InvalidPercentEncoding(version.to_string()))?
            .into_owned()
    } else {
        version.to_string()
    };

    Ok(RawConstraint::new(comparator, raw_version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_single_implicit_equality() {
        let range: ParsedRange = "vers:npm/1.2.3".parse().unwrap();

        assert_eq!(range.scheme_id, "npm");
        assert_eq!(
            range.constraints,
            vec![RawConstraint::new(Comparator::Eq, "1.2.3")]
        );
    }

    #[test]
    fn keeps_constraints_in_order_of_appearance() {
        let range: ParsedRange = "vers:gem/<2.3.0|>=2.2.0|!= 2.2.1".parse().unwrap();

        assert_eq!(
            range.constraints,
            vec![
                RawConstraint::new(Comparator::Lt, "2.3.0"),
                RawConstraint::new(Comparator::Gte, "2.2.0"),
                RawConstraint::new(Comparator::Ne, "2.2.1"),
            ]
        );
    }

    #[test]
    fn keeps_scheme_id_as_written_next_to_lowercase_form() {
        let range: ParsedRange = "vers:PyPI/1.0".parse().unwrap();

        assert_eq!(range.raw_scheme_id, "PyPI");
        assert_eq!(range.scheme_id, "pypi");
    }

    #[rstest]
    #[case("*", vec![RawConstraint::wildcard()])]
    #[case("*|", vec![RawConstraint::wildcard()])]
    #[case("|*", vec![RawConstraint::wildcard()])]
    #[case("<1.0%3D", vec![RawConstraint::new(Comparator::Lt, "1.0=")])]
    #[case("|1.0||2.0|", vec![
        RawConstraint::new(Comparator::Eq, "1.0"),
        RawConstraint::new(Comparator::Eq, "2.0"),
    ])]
    #[case("1.0|*", vec![
        RawConstraint::new(Comparator::Eq, "1.0"),
        RawConstraint::wildcard(),
    ])]
    #[case("1.0.0%2Bbuild.1", vec![RawConstraint::new(Comparator::Eq, "1.0.0+build.1")])]
    #[case("<1.0%7C2", vec![RawConstraint::new(Comparator::Lt, "1.0|2")])]
    fn parse_constraints_returns_expected(
        #[case] list: &str,
        #[case] expected: Vec<RawConstraint>,
    ) {
        assert_eq!(parse_constraints(list).unwrap(), expected);
    }

    #[rstest]
    #[case("*|1.0", VersError::WildcardMisuse("*|1.0".to_string()))]
    #[case("*1.0", VersError::WildcardMisuse("*1.0".to_string()))]
    #[case(">=*", VersError::WildcardMisuse(">=*".to_string()))]
    #[case("1.0|>=", VersError::EmptyVersion(">=".to_string()))]
    #[case("!=", VersError::EmptyVersion("!=".to_string()))]
    #[case("|||", VersError::EmptyConstraintList)]
    #[case("1.0%FF", VersError::InvalidPercentEncoding("1.0%FF".to_string()))]
    #[case("==1.0", VersError::ReservedCharacter("==1.0".to_string()))]
    #[case(">>1.0", VersError::ReservedCharacter(">>1.0".to_string()))]
    #[case("1<2", VersError::ReservedCharacter("1<2".to_string()))]
    #[case(">=1.0|!=!2", VersError::ReservedCharacter("!=!2".to_string()))]
    #[case("*|1.0|", VersError::WildcardMisuse("*|1.0".to_string()))]
    fn parse_constraints_rejects_malformed_lists(#[case] list: &str, #[case] expected: VersError) {
        assert_eq!(parse_constraints(list).unwrap_err(), expected);
    }
}
