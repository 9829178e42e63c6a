//! Generic dotted versioning scheme
//!
//! Versions are a run of numeric release segments optionally followed by a
//! qualifier, e.g. `7.0.0-M1` or `2.0.0.pre1`. This covers the common shape
//! of Maven and RubyGems versions without their ecosystem-specific aliases.

use std::cmp::Ordering;
use std::fmt;

use crate::range::scheme::{InvalidVersion, VersionScheme};

/// Release segments first, then the qualifier
pub struct GenericScheme;

impl VersionScheme for GenericScheme {
    type Version = GenericVersion;

    fn normalize(&self, raw: &str) -> Result<GenericVersion, InvalidVersion> {
        GenericVersion::parse(raw)
    }
}

/// A qualifier chunk; alphabetic chunks sort before numeric ones
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Chunk {
    Alpha(String),
    Numeric(u64),
}

#[derive(Debug, Clone)]
pub struct GenericVersion {
    /// Release segments with trailing zeros removed
    release: Vec<u64>,
    qualifier: Vec<Chunk>,
    raw: String,
}

impl GenericVersion {
    pub fn parse(raw: &str) -> Result<Self, InvalidVersion> {
        if raw.is_empty() {
            return Err(InvalidVersion::new("empty version"));
        }

        let mut release = Vec::new();
        let mut rest = raw;
        loop {
            let end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            if end == 0 {
                break;
            }
            let segment = &rest[..end];
            release.push(parse_number(segment)?);
            rest = &rest[end..];
            match rest.strip_prefix('.') {
                Some(next) if next.starts_with(|c: char| c.is_ascii_digit()) => rest = next,
                _ => break,
            }
        }

        while release.last() == Some(&0) {
            release.pop();
        }

        Ok(Self {
            release,
            qualifier: split_qualifier(rest)?,
            raw: raw.to_string(),
        })
    }
}

fn parse_number(digits: &str) -> Result<u64, InvalidVersion> {
    digits
        .parse()
        .map_err(|_| InvalidVersion::new(format!("number '{}' is too large", digits)))
}

/// Split at separators and at every switch between digits and letters
fn split_qualifier(qualifier: &str) -> Result<Vec<Chunk>, InvalidVersion> {
    let mut chunks = Vec::new();
    let mut rest = qualifier;

    while let Some(c) = rest.chars().next() {
        if matches!(c, '.' | '-' | '_' | '+') {
            rest = &rest[c.len_utf8()..];
            continue;
        }

        let numeric = c.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != numeric || matches!(c, '.' | '-' | '_' | '+'))
            .unwrap_or(rest.len());
        let text = &rest[..end];
        chunks.push(if numeric {
            Chunk::Numeric(parse_number(text)?)
        } else {
            Chunk::Alpha(text.to_lowercase())
        });
        rest = &rest[end..];
    }

    Ok(chunks)
}

impl Ord for GenericVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let width = self.release.len().max(other.release.len());
        let segment = |release: &[u64], i: usize| release.get(i).copied().unwrap_or(0);
        let release = (0..width)
            .map(|i| segment(&self.release, i).cmp(&segment(&other.release, i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal);

        release.then_with(|| match (self.qualifier.is_empty(), other.qualifier.is_empty()) {
            (true, true) => Ordering::Equal,
            // A qualified version precedes its bare release
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.qualifier.cmp(&other.qualifier),
        })
    }
}

impl PartialOrd for GenericVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for GenericVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for GenericVersion {}

impl fmt::Display for GenericVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
