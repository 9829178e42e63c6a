//! PyPI versioning scheme using PEP 440 versions

use std::str::FromStr;

use pep508_rs::pep440_rs::Version;

use crate::range::scheme::{InvalidVersion, VersionScheme};

/// PEP 440 versions, where `1.0` and `1.0.0` are the same version
pub struct Pep440Scheme;

impl VersionScheme for Pep440Scheme {
    type Version = Version;

    fn normalize(&self, raw: &str) -> Result<Version, InvalidVersion> {
        Version::from_str(raw).map_err(|e| InvalidVersion::new(e.to_string()))
    }
}
