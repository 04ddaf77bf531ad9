//! Error types for switchyard.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`DispatchError`] - Errors surfaced by a dispatched call
//! - [`TargetIdError`] - Errors parsing a target identifier

use thiserror::Error;

/// A boxed error type for errors raised by backends.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while dispatching a call.
///
/// Errors raised by a backend are carried verbatim: the dispatcher neither
/// retries nor falls back to the original function once a backend fails.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A backend failed while loading, deciding, resolving or executing.
    #[error(transparent)]
    Backend(BoxError),

    /// A backend resolved an implementation with the wrong signature.
    #[error(
        "backend '{backend}' resolved '{target}' to an implementation that is not `{expected}`"
    )]
    SignatureMismatch {
        /// Name of the offending backend.
        backend: String,
        /// Target that was being dispatched.
        target: String,
        /// Type name of the expected implementation.
        expected: &'static str,
    },
}

/// Errors that can occur when parsing a target identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetIdError {
    /// The identifier has no `:` between module and function.
    #[error("target identifier '{0}' is missing the ':' separator")]
    MissingSeparator(String),

    /// The module part is empty.
    #[error("target identifier '{0}' has an empty module path")]
    EmptyModule(String),

    /// The function part is empty.
    #[error("target identifier '{0}' has an empty function name")]
    EmptyFunction(String),
}

impl From<BoxError> for DispatchError {
    fn from(err: BoxError) -> Self {
        DispatchError::Backend(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_is_transparent() {
        let source: BoxError = "backend only implements 'foo'".into();
        let err = DispatchError::from(source);
        assert_eq!(err.to_string(), "backend only implements 'foo'");
    }

    #[test]
    fn mismatch_names_backend_and_target() {
        let err = DispatchError::SignatureMismatch {
            backend: "fake1".into(),
            target: "pkg.mod:foo".into(),
            expected: "u32",
        };
        let msg = err.to_string();
        assert!(msg.contains("'fake1'"));
        assert!(msg.contains("'pkg.mod:foo'"));
    }
}
