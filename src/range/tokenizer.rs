//! Lexical split of a `vers` string into scheme id and constraint list

use crate::range::error::VersError;

/// URI scheme every version range specifier starts with
pub const URI_SCHEME: &str = "vers";

/// Pieces of a `vers` string, whitespace already removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    /// Versioning scheme as written
    pub scheme_id: String,
    /// Everything after the first `/`
    pub constraints: String,
}

/// Split `input` into versioning scheme and raw constraint list
///
/// Spaces and tabs are insignificant anywhere in the input.
pub fn tokenize(input: &str) -> Result<Tokens, VersError> {
    let compact: String = input.chars().filter(|c| !matches!(c, ' ' | '\t')).collect();

    let Some((uri_scheme, specifier)) = compact.split_once(':') else {
        return Err(VersError::BadUriScheme(compact));
    };
    if uri_scheme != URI_SCHEME {
        return Err(VersError::BadUriScheme(uri_scheme.to_string()));
    }

    let Some((scheme_id, constraints)) = specifier.split_once('/') else {
        return Err(VersError::MissingVersioningScheme);
    };
    if scheme_id.is_empty() {
        return Err(VersError::MissingVersioningScheme);
    }
    if constraints.is_empty() {
        return Err(VersError::EmptyConstraintList);
    }

    Ok(Tokens {
        scheme_id: scheme_id.to_string(),
        constraints: constraints.to_string(),
    })
}
