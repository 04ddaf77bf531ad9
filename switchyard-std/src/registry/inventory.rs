//! # Link-time backend registration using Inventory
//!
//! Backend crates advertise themselves with [`register_backend!`], which
//! submits a [`BackendRegistration`] (and optionally a
//! [`BackendInfoRegistration`]) to `inventory`. [`InventorySource`] lists
//! them for the registry.
//!
//! # Example
//!
//! ```rust,ignore
//! use switchyard_std::register_backend;
//!
//! register_backend!("gpu", GpuBackend::new());
//! register_backend!("simd", SimdBackend, info = simd_info());
//! ```
//!
//! [`register_backend!`]: crate::register_backend

use super::source::{BackendEntryPoint, InfoEntryPoint, PluginSource};
use std::sync::Arc;
use switchyard_core::{Backend, BackendInfo, BoxError};

/// Registration entry for a backend in the `switchyard_backends` group.
///
/// This struct is submitted to `inventory` for automatic collection.
pub struct BackendRegistration {
    /// The backend name.
    pub name: &'static str,
    /// Loads the backend.
    pub load: fn() -> Result<Arc<dyn Backend>, BoxError>,
}

impl BackendRegistration {
    /// Create a new registration entry.
    pub const fn new(name: &'static str, load: fn() -> Result<Arc<dyn Backend>, BoxError>) -> Self {
        Self { name, load }
    }
}

inventory::collect!(BackendRegistration);

/// Registration entry for backend information in the `switchyard_backend_infos` group.
pub struct BackendInfoRegistration {
    /// Name of the backend the information describes.
    pub name: &'static str,
    /// Loads the information.
    pub load: fn() -> Result<BackendInfo, BoxError>,
}

impl BackendInfoRegistration {
    /// Create a new registration entry.
    pub const fn new(name: &'static str, load: fn() -> Result<BackendInfo, BoxError>) -> Self {
        Self { name, load }
    }
}

inventory::collect!(BackendInfoRegistration);

/// Plugin source listing everything submitted through `inventory`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InventorySource;

impl PluginSource for InventorySource {
    fn backends(&self) -> Vec<BackendEntryPoint> {
        inventory::iter::<BackendRegistration>()
            .map(|reg| BackendEntryPoint::new(reg.name, reg.load))
            .collect()
    }

    fn backend_infos(&self) -> Vec<InfoEntryPoint> {
        inventory::iter::<BackendInfoRegistration>()
            .map(|reg| InfoEntryPoint::new(reg.name, reg.load))
            .collect()
    }
}
