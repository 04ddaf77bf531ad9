//! # switchyard-core
//!
//! Core contracts for the switchyard backend dispatch framework.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! backend crates that only need to describe what they implement, without
//! pulling in the registry and dispatcher from `switchyard-std`.
//!
//! # Vocabulary
//!
//! ## Target ([`TargetId`])
//!
//! Every dispatchable function is addressed by a stable string key of the
//! form `<public-module-path>:<function-name>`, e.g.
//! `switchyard_image.restoration:richardson_lucy`. Backends and the registry
//! speak only in these keys.
//!
//! ## Backend ([`Backend`])
//!
//! An externally registered plugin. For each call it is asked two separate
//! questions:
//!
//! - **accepts**: does it want this call, given the target and the arguments?
//! - **resolve**: does it actually have an [`Implementation`] of the target?
//!
//! A backend may accept on coarse criteria and still resolve nothing; the
//! dispatcher then moves on to the next candidate.
//!
//! ## Backend information ([`BackendInfo`])
//!
//! Optional metadata listing the targets a backend supports. When present it
//! acts as a cheap filter that avoids loading backends that cannot help.
//!
//! # Error Types
//!
//! - [`DispatchError`] - Errors returned from a dispatched call
//! - [`TargetIdError`] - Malformed target identifiers

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod backend;
mod error;
mod implementation;
mod info;
mod notification;
mod target;

// Re-exports
pub use backend::{Backend, EntryGroup};
pub use error::{BoxError, DispatchError, TargetIdError};
pub use implementation::{BackendFn, Implementation};
pub use info::BackendInfo;
pub use notification::{DispatchNotification, NO_DISPATCHING_ENV};
pub use target::{RANK_NAMESPACE, TargetId};
