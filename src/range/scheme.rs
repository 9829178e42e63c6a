//! Versioning scheme abstraction
//!
//! The core never orders versions itself. Each versioning scheme (semver,
//! PEP 440, ...) plugs in through [`VersionScheme`] and is reached at run
//! time through a type-erased [`SchemeHandle`] obtained from the registry.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::range::error::VersError;

/// Reason a scheme rejected a version string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct InvalidVersion {
    reason: String,
}

impl InvalidVersion {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Trait for ecosystem-specific version syntax and ordering
///
/// The `Ord` implementation of [`VersionScheme::Version`] must be a strict
/// total order; two versions are considered the same version exactly when
/// they compare `Equal`.
#[cfg_attr(test, automock(type Version = u64;))]
pub trait VersionScheme: Send + Sync + 'static {
    /// Normalized version produced by this scheme
    type Version: Ord + fmt::Display + fmt::Debug + Send + Sync + 'static;

    /// Parse and normalize a raw version string
    fn normalize(&self, raw: &str) -> Result<Self::Version, InvalidVersion>;
}

/// Object-safe view of a [`VersionScheme`]
trait ErasedScheme: Send + Sync {
    fn normalize_erased(&self, raw: &str) -> Result<ErasedVersion, InvalidVersion>;

    fn compare_erased(&self, a: &(dyn Any + Send + Sync), b: &(dyn Any + Send + Sync))
    -> Option<Ordering>;
}

struct ErasedVersion {
    value: Arc<dyn Any + Send + Sync>,
    display: String,
}

impl<S: VersionScheme> ErasedScheme for S {
    fn normalize_erased(&self, raw: &str) -> Result<ErasedVersion, InvalidVersion> {
        let version = VersionScheme::normalize(self, raw)?;
        Ok(ErasedVersion {
            display: version.to_string(),
            value: Arc::new(version),
        })
    }

    fn compare_erased(
        &self,
        a: &(dyn Any + Send + Sync),
        b: &(dyn Any + Send + Sync),
    ) -> Option<Ordering> {
        let a = a.downcast_ref::<S::Version>()?;
        let b = b.downcast_ref::<S::Version>()?;
        Some(a.cmp(b))
    }
}

/// A version normalized by a registered scheme
///
/// Carries the id of the scheme that produced it; comparing it against a
/// range of another scheme is an error.
#[derive(Clone)]
pub struct NormalizedVersion {
    scheme_id: Arc<str>,
    value: Arc<dyn Any + Send + Sync>,
    display: String,
}

impl NormalizedVersion {
    /// Id of the scheme that normalized this version
    pub fn scheme_id(&self) -> &str {
        &self.scheme_id
    }
}

impl fmt::Display for NormalizedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl fmt::Debug for NormalizedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NormalizedVersion")
            .field(&self.scheme_id)
            .field(&self.display)
            .finish()
    }
}

/// A registered scheme resolved for one scheme id
#[derive(Clone)]
pub struct SchemeHandle {
    id: Arc<str>,
    scheme: Arc<dyn ErasedScheme>,
}

impl SchemeHandle {
    pub(crate) fn new<S: VersionScheme>(id: &str, scheme: Arc<S>) -> Self {
        Self {
            id: Arc::from(id),
            scheme,
        }
    }

    /// Re-key this handle under another scheme id, sharing the scheme
    pub(crate) fn renamed(&self, id: &str) -> Self {
        Self {
            id: Arc::from(id),
            scheme: Arc::clone(&self.scheme),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Normalize a raw version string with this scheme
    pub fn normalize(&self, raw: &str) -> Result<NormalizedVersion, VersError> {
        let erased =
            self.scheme
                .normalize_erased(raw)
                .map_err(|source| VersError::UnparsableVersion {
                    scheme: self.id.to_string(),
                    raw: raw.to_string(),
                    source,
                })?;

        Ok(NormalizedVersion {
            scheme_id: Arc::clone(&self.id),
            value: erased.value,
            display: erased.display,
        })
    }

    /// Compare two versions normalized by this scheme
    pub fn compare(
        &self,
        a: &NormalizedVersion,
        b: &NormalizedVersion,
    ) -> Result<Ordering, VersError> {
        for version in [a, b] {
            if version.scheme_id != self.id {
                return Err(self.cross_scheme(version));
            }
        }

        self.scheme
            .compare_erased(&*a.value, &*b.value)
            .ok_or_else(|| self.cross_scheme(b))
    }

    pub fn equals(&self, a: &NormalizedVersion, b: &NormalizedVersion) -> Result<bool, VersError> {
        Ok(self.compare(a, b)? == Ordering::Equal)
    }

    /// Ordering for versions this handle minted itself, e.g. the constraints
    /// of one validated range. Those always share the scheme's value type.
    pub(crate) fn order(&self, a: &NormalizedVersion, b: &NormalizedVersion) -> Ordering {
        self.scheme
            .compare_erased(&*a.value, &*b.value)
            .unwrap_or(Ordering::Equal)
    }

    fn cross_scheme(&self, version: &NormalizedVersion) -> VersError {
        VersError::CrossSchemeComparison {
            range: self.id.to_string(),
            version: version.scheme_id.to_string(),
        }
    }
}

impl fmt::Debug for SchemeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SchemeHandle").field(&self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Numeric;

    impl VersionScheme for Numeric {
        type Version = u64;

        fn normalize(&self, raw: &str) -> Result<u64, InvalidVersion> {
            raw.parse()
                .map_err(|e: std::num::ParseIntError| InvalidVersion::new(e.to_string()))
        }
    }

    struct Text;

    impl VersionScheme for Text {
        type Version = String;

        fn normalize(&self, raw: &str) -> Result<String, InvalidVersion> {
            Ok(raw.to_string())
        }
    }

    #[test]
    fn compare_orders_versions_of_the_same_scheme() {
        let handle = SchemeHandle::new("num", Arc::new(Numeric));
        let two = handle.normalize("2").unwrap();
        let ten = handle.normalize("10").unwrap();

        assert_eq!(handle.compare(&two, &ten).unwrap(), Ordering::Less);
        assert!(handle.equals(&ten, &handle.normalize("010").unwrap()).unwrap());
    }

    #[test]
    fn normalize_failure_names_scheme_and_raw_version() {
        let handle = SchemeHandle::new("num", Arc::new(Numeric));

        let err = handle.normalize("x1").unwrap_err();

        assert!(matches!(
            err,
            VersError::UnparsableVersion { ref scheme, ref raw, .. } if scheme == "num" && raw == "x1"
        ));
    }

    #[test]
    fn compare_rejects_version_of_another_scheme_id() {
        let num = SchemeHandle::new("num", Arc::new(Numeric));
        let text = SchemeHandle::new("text", Arc::new(Text));
        let a = num.normalize("1").unwrap();
        let b = text.normalize("1").unwrap();

        assert_eq!(
            num.compare(&a, &b).unwrap_err(),
            VersError::CrossSchemeComparison {
                range: "num".to_string(),
                version: "text".to_string(),
            }
        );
    }

    #[test]
    fn renamed_handle_shares_the_scheme_under_a_new_id() {
        let num = SchemeHandle::new("num", Arc::new(Numeric));
        let alias = num.renamed("int");

        let version = alias.normalize("7").unwrap();

        assert_eq!(version.scheme_id(), "int");
        assert_eq!(version.to_string(), "7");
    }

    #[test]
    fn mocked_scheme_is_called_through_the_handle() {
        let mut scheme = MockVersionScheme::new();
        scheme
            .expect_normalize()
            .times(1)
            .returning(|_| Ok(3));
        let handle = SchemeHandle::new("mock", Arc::new(scheme));

        let version = handle.normalize("3").unwrap();

        assert_eq!(version.to_string(), "3");
    }
}
