//! Dispatch notifications.

use crate::target::TargetId;
use std::fmt;

/// Environment variable that disables dispatching when set to `"1"`.
pub const NO_DISPATCHING_ENV: &str = "SWITCHYARD_NO_DISPATCHING";

/// Issued every time a call is dispatched to a backend.
///
/// Users are never redirected silently: the dispatcher hands one of these to
/// its notification sink before running the backend's implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchNotification {
    backend: String,
    target: TargetId,
}

impl DispatchNotification {
    /// Create a notification for a call to `target` taken by `backend`.
    pub fn new(backend: impl Into<String>, target: TargetId) -> Self {
        Self {
            backend: backend.into(),
            target,
        }
    }

    /// Name of the backend that took the call.
    pub fn backend(&self) -> &str {
        &self.backend
    }

    /// The dispatched target.
    pub fn target(&self) -> &TargetId {
        &self.target
    }
}

impl fmt::Display for DispatchNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Call to '{}' was dispatched to the '{}' backend. Set {}=1 to disable this.",
            self.target, self.backend, NO_DISPATCHING_ENV
        )
    }
}
