//! Bundled versioning schemes
//!
//! The range core does not depend on this module; it only provides ready
//! made [`VersionScheme`](crate::range::scheme::VersionScheme)
//! implementations for common ecosystems.

pub mod generic;
pub mod lexicographic;
pub mod pep440;
pub mod semver;

use std::sync::Arc;

pub use generic::{GenericScheme, GenericVersion};
pub use lexicographic::LexicographicScheme;
pub use pep440::Pep440Scheme;
pub use semver::SemverScheme;

use crate::range::registry::SchemeRegistry;

const SEMVER_IDS: &[&str] = &["npm", "semver", "cargo", "golang", "nuget", "composer"];
const GENERIC_IDS: &[&str] = &["generic", "maven", "gem"];

/// Registry with every bundled scheme under its ecosystem ids
pub fn builtin_registry() -> SchemeRegistry {
    let mut registry = SchemeRegistry::new();

    let semver = Arc::new(SemverScheme);
    for id in SEMVER_IDS {
        registry.register_shared(id, Arc::clone(&semver));
    }

    let generic = Arc::new(GenericScheme);
    for id in GENERIC_IDS {
        registry.register_shared(id, Arc::clone(&generic));
    }

    registry.register("pypi", Pep440Scheme);
    registry
}
