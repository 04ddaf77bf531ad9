//! Backend registry.
//!
//! The registry is built once from a [`PluginSource`] and is immutable
//! afterwards. Backends are kept sorted by name: when several backends would
//! take a call, the lexicographically first one wins, on every run.
//!
//! Use [`Registry::global`] for the process-wide registry discovered from
//! `inventory`, or [`RegistryBuilder`] to assemble one by hand.

mod builder;
#[cfg(feature = "inventory")]
mod inventory;
mod source;

pub use builder::RegistryBuilder;
#[cfg(feature = "inventory")]
pub use inventory::{BackendInfoRegistration, BackendRegistration, InventorySource};
pub use source::{
    BackendEntryPoint, BackendLoader, InfoEntryPoint, InfoLoader, PluginSource, StaticSource,
};

use std::{
    collections::BTreeMap,
    fmt,
    sync::{Arc, OnceLock},
};
use switchyard_core::{Backend, BackendInfo, BoxError, TargetId};

/// One installed backend.
pub struct BackendRecord {
    entry: BackendEntryPoint,
    info: Option<InfoEntryPoint>,
    loaded_info: OnceLock<BackendInfo>,
}

impl BackendRecord {
    fn new(entry: BackendEntryPoint, info: Option<InfoEntryPoint>) -> Self {
        Self {
            entry,
            info,
            loaded_info: OnceLock::new(),
        }
    }

    /// The backend name.
    pub fn name(&self) -> &str {
        self.entry.name()
    }

    /// Whether the backend published information about itself.
    pub fn has_info(&self) -> bool {
        self.info.is_some()
    }

    /// The backend's information, loaded on first access.
    ///
    /// A successful load is cached; a failed one is retried on the next
    /// access.
    pub fn info(&self) -> Result<Option<&BackendInfo>, BoxError> {
        let Some(entry) = self.info.as_ref() else {
            return Ok(None);
        };
        if let Some(info) = self.loaded_info.get() {
            return Ok(Some(info));
        }
        let info = entry.load()?;
        Ok(Some(self.loaded_info.get_or_init(|| info)))
    }

    /// Cheap pre-check: `false` only if the backend's information rules
    /// `target` out. Backends without information are always candidates.
    pub fn may_handle(&self, target: &TargetId) -> Result<bool, BoxError> {
        Ok(self.info()?.is_none_or(|info| info.supports(target)))
    }

    /// Load the backend implementation.
    ///
    /// Not cached here; the entry point decides whether loading is repeated.
    pub fn load(&self) -> Result<Arc<dyn Backend>, BoxError> {
        self.entry.load()
    }
}

impl fmt::Debug for BackendRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendRecord")
            .field("name", &self.name())
            .field("has_info", &self.has_info())
            .finish()
    }
}

/// An immutable, thread-safe set of installed backends, ordered by name.
#[derive(Default)]
pub struct Registry {
    backends: BTreeMap<String, BackendRecord>,
}

static GLOBAL: OnceLock<Arc<Registry>> = OnceLock::new();

impl Registry {
    /// A registry with no backends.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Discover backends from a plugin source.
    ///
    /// Each backend is paired with the first information entry of the same
    /// name. Nothing is loaded here.
    pub fn discover(source: &dyn PluginSource) -> Self {
        let mut infos: BTreeMap<String, InfoEntryPoint> = BTreeMap::new();
        for info in source.backend_infos() {
            infos.entry(info.name().to_owned()).or_insert(info);
        }

        let mut backends = BTreeMap::new();
        for entry in source.backends() {
            let name = entry.name().to_owned();
            let info = infos.get(&name).cloned();
            if backends
                .insert(name.clone(), BackendRecord::new(entry, info))
                .is_some()
            {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    backend = %name,
                    "backend registered twice, keeping the last entry"
                );
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            count = backends.len(),
            backends = ?backends.keys().collect::<Vec<_>>(),
            "discovered dispatch backends"
        );

        Self { backends }
    }

    /// The process-wide registry.
    ///
    /// Discovered from `inventory` on the first call and cached for the
    /// lifetime of the process; backends registered later are not seen.
    /// Without the `inventory` feature the registry is empty.
    pub fn global() -> Arc<Registry> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::discover(&default_source()))))
    }

    /// Iterate over backends in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = &BackendRecord> {
        self.backends.values()
    }

    /// Backend names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.backends.keys().map(String::as_str)
    }

    /// Look up a backend by name.
    pub fn get(&self, name: &str) -> Option<&BackendRecord> {
        self.backends.get(name)
    }

    /// Get the number of installed backends.
    pub fn len(&self) -> usize {
        self.backends.len()
    }

    /// Check if no backend is installed.
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.backends.values()).finish()
    }
}

#[cfg(feature = "inventory")]
fn default_source() -> InventorySource {
    InventorySource
}

#[cfg(not(feature = "inventory"))]
fn default_source() -> StaticSource {
    StaticSource::new()
}
