//! # switchyard-std
//!
//! Standard implementations for the switchyard backend dispatch framework.
//!
//! This crate provides:
//! - **Registry**: [`Registry`], [`RegistryBuilder`] and the plugin sources it
//!   discovers backends from
//! - **Dispatcher**: [`Dispatchable`], the wrapper around a dispatchable function
//! - **Settings**: [`Settings`], the runtime toggle
//! - **Notification sinks**: [`LogSink`] and the [`NotificationSink`] trait
//! - **Testing utilities**: scripted backends and a recording sink

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core contracts
pub use switchyard_core;

// Modules
pub mod dispatchable;
pub mod notify;
pub mod registry;
pub mod settings;
pub mod testing;

#[cfg(feature = "inventory")]
mod macros;

pub use dispatchable::{Dispatchable, DispatchableBuilder};
pub use notify::{LogSink, NotificationSink};
pub use registry::{Registry, RegistryBuilder};
pub use settings::Settings;

#[cfg(feature = "inventory")]
pub use inventory;
