//! The backend capability trait.
//!
//! A backend is an optional plugin that offers alternative implementations of
//! dispatchable functions. It is consulted in two steps so that a backend can
//! turn a call down on cheap criteria (argument types, sizes, devices) before
//! it is asked for the callable itself.

use crate::{error::BoxError, implementation::Implementation, target::TargetId};
use std::{any::Any, fmt};

/// A backend offering alternative implementations of dispatchable functions.
///
/// # Example
///
/// ```rust
/// use std::any::Any;
/// use switchyard_core::{Backend, BoxError, Implementation, TargetId};
///
/// struct Tripler;
///
/// impl Backend for Tripler {
///     fn accepts(&self, target: &TargetId, args: &dyn Any) -> Result<bool, BoxError> {
///         Ok(target.function() == "foo" && args.is::<(i64,)>())
///     }
///
///     fn resolve(&self, target: &TargetId) -> Result<Option<Implementation>, BoxError> {
///         let triple = Implementation::infallible(|(x,): (i64,)| x * 3);
///         Ok((target.function() == "foo").then_some(triple))
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a switchyard backend",
    label = "missing `Backend` implementation",
    note = "Backends must implement `accepts` and `resolve`."
)]
pub trait Backend: Send + Sync + 'static {
    /// Decide whether this backend wants to handle the call.
    ///
    /// `args` is the argument tuple of the call, exactly as the caller passed
    /// it. Downcast it to inspect the values.
    fn accepts(&self, target: &TargetId, args: &dyn Any) -> Result<bool, BoxError>;

    /// Return the implementation of `target`, if this backend has one.
    fn resolve(&self, target: &TargetId) -> Result<Option<Implementation>, BoxError>;
}

/// The two groups of the plugin registration surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryGroup {
    /// Backend implementations.
    Backends,
    /// Optional backend information.
    BackendInfos,
}

impl EntryGroup {
    /// The fixed group identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            EntryGroup::Backends => "switchyard_backends",
            EntryGroup::BackendInfos => "switchyard_backend_infos",
        }
    }
}

impl fmt::Display for EntryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
