//! Plain string ordering, offered as the fallback for unknown schemes

use crate::range::scheme::{InvalidVersion, VersionScheme};

/// Orders versions byte-wise; accepts any non-empty string
pub struct LexicographicScheme;

impl VersionScheme for LexicographicScheme {
    type Version = String;

    fn normalize(&self, raw: &str) -> Result<String, InvalidVersion> {
        if raw.is_empty() {
            return Err(InvalidVersion::new("empty version"));
        }
        Ok(raw.to_string())
    }
}
