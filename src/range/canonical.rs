//! Canonical string rendering

use std::borrow::Cow;
use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::range::types::{RangeConstraints, VersionRange};

/// Characters that must not appear literally in a rendered version
const RESERVED: &[char] = &['<', '>', '=', '!', '*', '|', '%', ' ', '\t'];

const VERSION_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'=')
    .add(b'!')
    .add(b'*')
    .add(b'|');

/// Percent-encode `raw` when it contains a character with a meaning in the
/// `vers` syntax, otherwise return it unchanged
pub(crate) fn encode_version(raw: &str) -> Cow<'_, str> {
    if raw.contains(RESERVED) {
        Cow::Owned(utf8_percent_encode(raw, VERSION_ENCODE_SET).to_string())
    } else {
        Cow::Borrowed(raw)
    }
}

impl VersionRange {
    /// Render the canonical form of the simplified range
    pub fn canonical(&self) -> String {
        self.simplify().to_string()
    }
}

/// Renders the range as is, without simplifying it first
impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vers:{}/", self.scheme_id())?;

        let constraints = match &self.constraints {
            RangeConstraints::Wildcard => return f.write_str("*"),
            RangeConstraints::List(constraints) => constraints,
        };

        for (i, constraint) in constraints.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}", constraint)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::parser::ParsedRange;
    use crate::range::registry::SchemeRegistry;
    use crate::range::scheme::{InvalidVersion, VersionScheme};
    use crate::range::validator::validate;
    use rstest::rstest;

    /// Orders versions by their text; accepts any string
    struct Text;

    impl VersionScheme for Text {
        type Version = String;

        fn normalize(&self, raw: &str) -> Result<String, InvalidVersion> {
            Ok(raw.to_string())
        }
    }

    fn range(input: &str) -> VersionRange {
        let mut registry = SchemeRegistry::new();
        registry.register("text", Text);
        let parsed: ParsedRange = input.parse().unwrap();
        validate(&parsed, &registry).unwrap()
    }

    #[rstest]
    #[case("1.0.0", "1.0.0")]
    #[case("1.0.0+build.1", "1.0.0+build.1")]
    #[case("1.0|2", "1.0%7C2")]
    #[case("a<b", "a%3Cb")]
    #[case("100%", "100%25")]
    #[case("a b", "a%20b")]
    fn encode_version_escapes_reserved_characters(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(encode_version(raw), expected);
    }

    #[rstest]
    #[case("vers:text/*", "vers:text/*")]
    #[case("vers:text/ b | a ", "vers:text/a|b")]
    #[case("vers:text/<c|>=a", "vers:text/>=a|<c")]
    #[case("vers:text/!=b|>=a|<c", "vers:text/>=a|!=b|<c")]
    #[case("vers:text/a%7Cb", "vers:text/a%7Cb")]
    #[case("vers:text/x%2By", "vers:text/x+y")]
    fn canonical_renders_sorted_space_free_form(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(range(input).canonical(), expected);
    }

    #[test]
    fn canonical_form_parses_back_to_the_same_range() {
        let original = range("vers:text/>=a%25|!=b%3D|<c");

        assert_eq!(range(&original.canonical()), original);
    }
}
