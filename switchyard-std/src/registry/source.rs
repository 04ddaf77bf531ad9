//! Plugin sources: where the registry discovers backends.

use std::{fmt, sync::Arc};
use switchyard_core::{Backend, BackendInfo, BoxError, EntryGroup};

/// Loader producing a backend implementation.
pub type BackendLoader = Arc<dyn Fn() -> Result<Arc<dyn Backend>, BoxError> + Send + Sync>;

/// Loader producing backend information.
pub type InfoLoader = Arc<dyn Fn() -> Result<BackendInfo, BoxError> + Send + Sync>;

/// A named, lazily loadable backend in the `switchyard_backends` group.
#[derive(Clone)]
pub struct BackendEntryPoint {
    name: String,
    loader: BackendLoader,
}

impl BackendEntryPoint {
    /// Create an entry point from a loader.
    pub fn new<F>(name: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn Backend>, BoxError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            loader: Arc::new(loader),
        }
    }

    /// Create an entry point that always hands out the same instance.
    pub fn from_backend<B: Backend>(name: impl Into<String>, backend: B) -> Self {
        let backend: Arc<dyn Backend> = Arc::new(backend);
        Self::new(name, move || Ok(Arc::clone(&backend)))
    }

    /// The backend name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The group this entry point belongs to.
    pub fn group(&self) -> EntryGroup {
        EntryGroup::Backends
    }

    /// Load the backend.
    pub fn load(&self) -> Result<Arc<dyn Backend>, BoxError> {
        (self.loader)()
    }
}

impl fmt::Debug for BackendEntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendEntryPoint")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A named, lazily loadable [`BackendInfo`] in the `switchyard_backend_infos` group.
#[derive(Clone)]
pub struct InfoEntryPoint {
    name: String,
    loader: InfoLoader,
}

impl InfoEntryPoint {
    /// Create an entry point from a loader.
    pub fn new<F>(name: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Result<BackendInfo, BoxError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            loader: Arc::new(loader),
        }
    }

    /// Create an entry point for a ready value.
    pub fn from_info(name: impl Into<String>, info: BackendInfo) -> Self {
        Self::new(name, move || Ok(info.clone()))
    }

    /// The backend name this information describes.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The group this entry point belongs to.
    pub fn group(&self) -> EntryGroup {
        EntryGroup::BackendInfos
    }

    /// Load the information.
    pub fn load(&self) -> Result<BackendInfo, BoxError> {
        (self.loader)()
    }
}

impl fmt::Debug for InfoEntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfoEntryPoint")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A plugin registration surface.
///
/// Each method lists the entries of one group. Listing must be cheap: nothing
/// should be loaded until the registry asks for it.
pub trait PluginSource {
    /// Entries of the `switchyard_backends` group.
    fn backends(&self) -> Vec<BackendEntryPoint>;

    /// Entries of the `switchyard_backend_infos` group.
    fn backend_infos(&self) -> Vec<InfoEntryPoint>;
}

/// A plugin source backed by explicit lists.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    backends: Vec<BackendEntryPoint>,
    infos: Vec<InfoEntryPoint>,
}

impl StaticSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a backend entry point.
    pub fn with_backend(mut self, entry: BackendEntryPoint) -> Self {
        self.backends.push(entry);
        self
    }

    /// Add an information entry point.
    pub fn with_info(mut self, entry: InfoEntryPoint) -> Self {
        self.infos.push(entry);
        self
    }

    pub(crate) fn push_backend(&mut self, entry: BackendEntryPoint) {
        self.backends.push(entry);
    }

    pub(crate) fn push_info(&mut self, entry: InfoEntryPoint) {
        self.infos.push(entry);
    }
}

impl PluginSource for StaticSource {
    fn backends(&self) -> Vec<BackendEntryPoint> {
        self.backends.clone()
    }

    fn backend_infos(&self) -> Vec<InfoEntryPoint> {
        self.infos.clone()
    }
}
