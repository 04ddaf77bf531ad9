//! # switchyard - Backend Dispatch for Library Functions
//!
//! `switchyard` lets a library mark functions as *dispatchable*. Calls to such
//! a function are offered to externally registered backends, which can take
//! them over with their own implementation; if none does, the library's own
//! body runs.
//!
//! Dispatching costs nothing when unused: with no backend installed, or with
//! `SWITCHYARD_NO_DISPATCHING=1`, the wrapper is built in direct mode and
//! never looks at the registry again.
//!
//! ## Library side
//!
//! ```rust,ignore
//! #[switchyard::dispatchable]
//! pub fn foo(x: i64) -> i64 {
//!     x * 2
//! }
//!
//! assert_eq!(foo(21)?, 42);
//! ```
//!
//! ## Backend side
//!
//! ```rust,ignore
//! use switchyard::prelude::*;
//!
//! struct Tripler;
//!
//! impl Backend for Tripler {
//!     fn accepts(&self, target: &TargetId, _args: &dyn Any) -> Result<bool, BoxError> {
//!         Ok(target.function() == "foo")
//!     }
//!
//!     fn resolve(&self, _target: &TargetId) -> Result<Option<Implementation>, BoxError> {
//!         Ok(Some(Implementation::infallible(|(x,): (i64,)| x * 3)))
//!     }
//! }
//!
//! switchyard::register_backend!("tripler", Tripler);
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

extern crate self as switchyard;

pub use switchyard_core::{
    // Backend contract
    Backend,
    BackendFn,
    BackendInfo,
    // Errors
    BoxError,
    DispatchError,
    // Notification
    DispatchNotification,
    EntryGroup,
    Implementation,
    NO_DISPATCHING_ENV,
    RANK_NAMESPACE,
    // Targets
    TargetId,
    TargetIdError,
};

pub use switchyard_std::{
    Dispatchable, DispatchableBuilder, LogSink, NotificationSink, Registry, RegistryBuilder,
    Settings,
};

/// Backend registry and plugin sources.
pub mod registry {
    #[cfg(feature = "inventory")]
    pub use switchyard_std::registry::{
        BackendInfoRegistration, BackendRegistration, InventorySource,
    };
    pub use switchyard_std::registry::{
        BackendEntryPoint, BackendLoader, BackendRecord, InfoEntryPoint, InfoLoader,
        PluginSource, Registry, RegistryBuilder, StaticSource,
    };
}

/// Testing utilities.
pub mod testing {
    pub use switchyard_std::testing::{RecordingSink, ScriptedBackend};
}

/// Prelude module - common imports for backend and library authors.
///
/// # Usage
///
/// ```rust,ignore
/// use switchyard::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Backend, BackendInfo, BoxError, DispatchError, Dispatchable, Implementation, TargetId,
    };
    pub use std::any::Any;
}

#[cfg(feature = "macros")]
pub use switchyard_macros::dispatchable;

#[cfg(feature = "inventory")]
pub use switchyard_std::{inventory, register_backend};
