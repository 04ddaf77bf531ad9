use super::{
    Registry,
    source::{BackendEntryPoint, InfoEntryPoint, StaticSource},
};
use std::sync::Arc;
use switchyard_core::{Backend, BackendInfo, BoxError};

/// Builder for constructing a [`Registry`] from in-process backends.
///
/// Registration order does not matter: the built registry is ordered by
/// backend name.
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .register("simd", SimdBackend)
///     .register_with_info("gpu", GpuBackend::new(), gpu_info)
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    source: StaticSource,
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a backend without information.
    pub fn register<B: Backend>(mut self, name: &str, backend: B) -> Self {
        self.register_mut(name, backend);
        self
    }

    /// Register a backend without information (mutable version).
    pub fn register_mut<B: Backend>(&mut self, name: &str, backend: B) {
        self.source
            .push_backend(BackendEntryPoint::from_backend(name, backend));
    }

    /// Register a backend together with its information.
    pub fn register_with_info<B: Backend>(
        mut self,
        name: &str,
        backend: B,
        info: BackendInfo,
    ) -> Self {
        self.source
            .push_backend(BackendEntryPoint::from_backend(name, backend));
        self.source.push_info(InfoEntryPoint::from_info(name, info));
        self
    }

    /// Register a backend through a loader, called every time the backend is needed.
    pub fn register_loader<F>(mut self, name: &str, loader: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn Backend>, BoxError> + Send + Sync + 'static,
    {
        self.source.push_backend(BackendEntryPoint::new(name, loader));
        self
    }

    /// Attach lazily loaded information to a backend name.
    pub fn info_loader<F>(mut self, name: &str, loader: F) -> Self
    where
        F: Fn() -> Result<BackendInfo, BoxError> + Send + Sync + 'static,
    {
        self.source.push_info(InfoEntryPoint::new(name, loader));
        self
    }

    /// Build the immutable registry.
    pub fn build(self) -> Registry {
        Registry::discover(&self.source)
    }
}
