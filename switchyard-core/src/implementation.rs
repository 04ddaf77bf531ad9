//! Type-erased backend implementations.

use crate::error::BoxError;
use std::{any::Any, fmt, sync::Arc};

/// The concrete callable a backend hands out for a target.
///
/// Arguments arrive as the same tuple the dispatchable function was called
/// with; errors are returned to the caller unchanged.
pub type BackendFn<A, R> = Arc<dyn Fn(A) -> Result<R, BoxError> + Send + Sync>;

/// A type-erased implementation returned by [`Backend::resolve`].
///
/// The dispatcher downcasts it back to the signature of the function being
/// dispatched. Cloning is O(1).
///
/// # Example
///
/// ```rust
/// use switchyard_core::Implementation;
///
/// let triple = Implementation::infallible(|(x,): (i64,)| x * 3);
/// let f = triple.downcast::<(i64,), i64>().unwrap();
/// assert_eq!(f((14,)).unwrap(), 42);
/// ```
///
/// [`Backend::resolve`]: crate::Backend::resolve
#[derive(Clone)]
pub struct Implementation {
    inner: Arc<dyn Any + Send + Sync>,
    signature: &'static str,
}

impl Implementation {
    /// Wrap a fallible callable.
    pub fn new<A, R, F>(f: F) -> Self
    where
        A: 'static,
        R: 'static,
        F: Fn(A) -> Result<R, BoxError> + Send + Sync + 'static,
    {
        let erased: BackendFn<A, R> = Arc::new(f);
        Self {
            inner: Arc::new(erased),
            signature: std::any::type_name::<BackendFn<A, R>>(),
        }
    }

    /// Wrap a callable that cannot fail.
    pub fn infallible<A, R, F>(f: F) -> Self
    where
        A: 'static,
        R: 'static,
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self::new(move |args: A| Ok(f(args)))
    }

    /// Recover the typed callable, if the signature matches.
    pub fn downcast<A: 'static, R: 'static>(&self) -> Option<BackendFn<A, R>> {
        self.inner.downcast_ref::<BackendFn<A, R>>().cloned()
    }

    /// Type name of the wrapped callable, for diagnostics.
    pub fn signature(&self) -> &'static str {
        self.signature
    }
}

impl fmt::Debug for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Implementation")
            .field("signature", &self.signature)
            .finish()
    }
}
