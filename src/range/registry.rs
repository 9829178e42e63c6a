//! Registry of versioning schemes keyed by scheme id
//!
//! A registry is built once, single-threaded, and then only read. The
//! process-wide instance lives in a [`OnceLock`], so after it has been
//! published every thread may look schemes up without locking.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use tracing::{debug, warn};

use crate::range::error::VersError;
use crate::range::scheme::{SchemeHandle, VersionScheme};

static GLOBAL: OnceLock<SchemeRegistry> = OnceLock::new();

/// Mapping from scheme id to versioning scheme
#[derive(Debug, Clone, Default)]
pub struct SchemeRegistry {
    schemes: HashMap<String, SchemeHandle>,
    fallback: Option<SchemeHandle>,
}

impl SchemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `scheme` under `id`, replacing any previous registration
    pub fn register<S: VersionScheme>(&mut self, id: &str, scheme: S) -> &mut Self {
        self.register_shared(id, Arc::new(scheme))
    }

    /// Register one scheme instance under `id`; used to share a scheme
    /// between several ids without cloning it
    pub fn register_shared<S: VersionScheme>(&mut self, id: &str, scheme: Arc<S>) -> &mut Self {
        let id = id.to_ascii_lowercase();
        let handle = SchemeHandle::new(&id, scheme);
        self.schemes.insert(id, handle);
        self
    }

    /// Make the scheme registered as `target` available as `alias` as well
    pub fn alias(&mut self, alias: &str, target: &str) -> Result<&mut Self, VersError> {
        let alias = alias.to_ascii_lowercase();
        let handle = self
            .schemes
            .get(&target.to_ascii_lowercase())
            .ok_or_else(|| VersError::UnknownVersioningScheme(target.to_string()))?
            .renamed(&alias);
        self.schemes.insert(alias, handle);
        Ok(self)
    }

    /// Scheme used for ids that were never registered
    ///
    /// Without a fallback, looking up an unknown id is an error.
    pub fn with_fallback<S: VersionScheme>(&mut self, scheme: S) -> &mut Self {
        self.fallback = Some(SchemeHandle::new("", Arc::new(scheme)));
        self
    }

    /// Resolve the scheme registered for `id`
    pub fn lookup(&self, id: &str) -> Result<SchemeHandle, VersError> {
        if let Some(handle) = self.schemes.get(id) {
            return Ok(handle.clone());
        }

        match &self.fallback {
            Some(fallback) => {
                warn!("Unknown versioning scheme '{}', using fallback ordering", id);
                Ok(fallback.renamed(id))
            }
            None => Err(VersError::UnknownVersioningScheme(id.to_string())),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.schemes.contains_key(id)
    }

    /// Registered scheme ids in sorted order
    pub fn scheme_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.schemes.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Publish this registry as the process-wide registry
    ///
    /// Fails, handing the registry back, when one was already published.
    pub fn install(self) -> Result<(), SchemeRegistry> {
        GLOBAL.set(self).inspect(|_| debug!("Scheme registry installed"))
    }

    /// The process-wide registry, if one was published
    pub fn global() -> Option<&'static SchemeRegistry> {
        GLOBAL.get()
    }

    /// The process-wide registry, publishing `init()` if none was yet
    pub fn global_or_init(init: impl FnOnce() -> SchemeRegistry) -> &'static SchemeRegistry {
        GLOBAL.get_or_init(init)
    }
}
