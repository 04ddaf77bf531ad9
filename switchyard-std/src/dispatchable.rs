//! # Dispatchable functions
//!
//! [`Dispatchable`] wraps a plain function so that each call can be taken
//! over by an installed backend.
//!
//! The choice between *direct* and *dispatching* mode is made once, when the
//! wrapper is built: with dispatching disabled or no backend installed, a call
//! goes straight to the original function without touching the registry.
//!
//! In dispatching mode, every call walks the registry in name order:
//!
//! 1. skip backends whose [`BackendInfo`] does not list the target;
//! 2. load the backend and ask [`Backend::accepts`];
//! 3. ask [`Backend::resolve`]; a backend that accepts but resolves nothing
//!    is passed over;
//! 4. notify the sink and run the first resolved implementation.
//!
//! If nobody takes the call, the original function runs. Backend errors end
//! the call immediately and are returned verbatim.
//!
//! # Example
//!
//! ```rust,ignore
//! fn foo((x,): (i64,)) -> i64 {
//!     x * 2
//! }
//!
//! let foo = Dispatchable::new(TargetId::for_function(module_path!(), "foo"), foo);
//! let r = foo.call((42,))?;
//! ```
//!
//! [`BackendInfo`]: switchyard_core::BackendInfo
//! [`Backend::accepts`]: switchyard_core::Backend::accepts
//! [`Backend::resolve`]: switchyard_core::Backend::resolve

use crate::{
    notify::{LogSink, NotificationSink},
    registry::Registry,
    settings::Settings,
};
use std::{any::Any, fmt, sync::Arc};
use switchyard_core::{DispatchError, DispatchNotification, TargetId};

/// A function whose calls may be dispatched to a backend.
///
/// `A` is the argument tuple and `R` the return type of the original
/// function.
pub struct Dispatchable<A, R> {
    target: TargetId,
    original: fn(A) -> R,
    route: Option<Route>,
}

struct Route {
    registry: Arc<Registry>,
    sink: Arc<dyn NotificationSink>,
}

impl<A: 'static, R: 'static> Dispatchable<A, R> {
    /// Wrap `original` using the global registry, the process environment
    /// and the [`LogSink`].
    pub fn new(target: TargetId, original: fn(A) -> R) -> Self {
        Self::builder(target, original).build()
    }

    /// Start building a wrapper with injected collaborators.
    pub fn builder(target: TargetId, original: fn(A) -> R) -> DispatchableBuilder<A, R> {
        DispatchableBuilder {
            target,
            original,
            registry: None,
            settings: None,
            sink: None,
        }
    }

    /// The target identifier of the wrapped function.
    pub fn target(&self) -> &TargetId {
        &self.target
    }

    /// The original function.
    pub fn original(&self) -> fn(A) -> R {
        self.original
    }

    /// Whether calls go straight to the original function.
    pub fn is_direct(&self) -> bool {
        self.route.is_none()
    }

    /// Call the function, dispatching to a backend if one takes the call.
    pub fn call(&self, args: A) -> Result<R, DispatchError> {
        let Some(route) = &self.route else {
            return Ok((self.original)(args));
        };

        for record in route.registry.iter() {
            if !record
                .may_handle(&self.target)
                .map_err(DispatchError::Backend)?
            {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    backend = record.name(),
                    target = %self.target,
                    "not in supported functions"
                );
                continue;
            }

            let backend = record.load().map_err(DispatchError::Backend)?;

            if !backend
                .accepts(&self.target, &args as &dyn Any)
                .map_err(DispatchError::Backend)?
            {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    backend = record.name(),
                    target = %self.target,
                    "backend declined"
                );
                continue;
            }

            let Some(implementation) = backend
                .resolve(&self.target)
                .map_err(DispatchError::Backend)?
            else {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    backend = record.name(),
                    target = %self.target,
                    "backend accepted without an implementation"
                );
                continue;
            };

            let func = implementation.downcast::<A, R>().ok_or_else(|| {
                DispatchError::SignatureMismatch {
                    backend: record.name().to_owned(),
                    target: self.target.to_string(),
                    expected: std::any::type_name::<fn(A) -> R>(),
                }
            })?;

            let notification = DispatchNotification::new(record.name(), self.target.clone());
            route.sink.notify(&notification);
            return func(args).map_err(DispatchError::Backend);
        }

        Ok((self.original)(args))
    }
}

impl<A, R> fmt::Debug for Dispatchable<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatchable")
            .field("target", &self.target)
            .field("direct", &self.route.is_none())
            .finish()
    }
}

/// Builder for [`Dispatchable`].
///
/// Anything left unset falls back to the global registry, the process
/// environment and [`LogSink`].
pub struct DispatchableBuilder<A, R> {
    target: TargetId,
    original: fn(A) -> R,
    registry: Option<Arc<Registry>>,
    settings: Option<Settings>,
    sink: Option<Arc<dyn NotificationSink>>,
}

impl<A: 'static, R: 'static> DispatchableBuilder<A, R> {
    /// Use `registry` instead of the global one.
    pub fn registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Use `settings` instead of reading the environment.
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Send notifications to `sink`.
    pub fn sink(mut self, sink: impl NotificationSink) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Send notifications to a shared sink.
    pub fn shared_sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the wrapper, choosing direct or dispatching mode.
    pub fn build(self) -> Dispatchable<A, R> {
        let Self {
            target,
            original,
            registry,
            settings,
            sink,
        } = self;

        let direct = |target: TargetId, original: fn(A) -> R| Dispatchable {
            target,
            original,
            route: None,
        };

        if settings.unwrap_or_else(Settings::from_env).is_disabled() {
            return direct(target, original);
        }

        let registry = registry.unwrap_or_else(Registry::global);
        if registry.is_empty() {
            return direct(target, original);
        }

        Dispatchable {
            target,
            original,
            route: Some(Route {
                registry,
                sink: sink.unwrap_or_else(|| Arc::new(LogSink)),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        registry::RegistryBuilder,
        testing::{RecordingSink, ScriptedBackend},
    };
    use switchyard_core::BackendInfo;

    fn double((x,): (i64,)) -> i64 {
        x * 2
    }

    fn target() -> TargetId {
        TargetId::for_function("pkg::mod", "foo")
    }

    #[test]
    fn test_direct_without_backends() {
        let f = Dispatchable::builder(target(), double as fn((i64,)) -> i64)
            .registry(Arc::new(Registry::empty()))
            .settings(Settings::enabled())
            .build();
        assert!(f.is_direct());
        assert!(std::ptr::fn_addr_eq(f.original(), double as fn((i64,)) -> i64));
        assert_eq!(f.call((21,)).unwrap(), 42);
    }

    #[test]
    fn test_direct_with_injected_settings_and_empty_registry() {
        for settings in [Settings::enabled(), Settings::disabled()] {
            let f = Dispatchable::builder(target(), double as fn((i64,)) -> i64)
                .registry(Arc::new(Registry::empty()))
                .settings(settings)
                .sink(RecordingSink::new())
                .build();
            assert!(f.is_direct());
            assert_eq!(f.target(), &target());
            assert_eq!(f.call((5,)).unwrap(), 10);
        }
    }

    #[test]
    fn test_direct_when_disabled_despite_backends() {
        let backend = ScriptedBackend::accepting().implementing("foo", |(x,): (i64,)| x * 3);
        let probe = backend.clone();
        let registry = RegistryBuilder::new().register("fake1", backend).build();
        let f = Dispatchable::builder(target(), double as fn((i64,)) -> i64)
            .registry(Arc::new(registry))
            .settings(Settings::disabled())
            .build();

        assert!(f.is_direct());
        assert_eq!(f.call((5,)).unwrap(), 10);
        assert_eq!(probe.accept_calls(), 0);
    }

    #[test]
    fn test_failing_info_loader_is_returned() {
        let registry = RegistryBuilder::new()
            .register("alpha", ScriptedBackend::accepting())
            .info_loader("alpha", || Ok(BackendInfo::parse(["malformed-no-colon"])?))
            .build();
        let f = Dispatchable::builder(target(), double as fn((i64,)) -> i64)
            .registry(Arc::new(registry))
            .settings(Settings::enabled())
            .sink(RecordingSink::new())
            .build();

        let err = f.call((1,)).unwrap_err();
        assert!(matches!(err, DispatchError::Backend(_)));
        assert!(err.to_string().contains("malformed-no-colon"));
    }

    #[test]
    fn test_dispatches_to_backend() {
        let sink = RecordingSink::new();
        let registry = RegistryBuilder::new()
            .register(
                "fake1",
                ScriptedBackend::accepting().implementing("foo", |(x,): (i64,)| x * 3),
            )
            .build();
        let f = Dispatchable::builder(target(), double as fn((i64,)) -> i64)
            .registry(Arc::new(registry))
            .settings(Settings::enabled())
            .sink(sink.clone())
            .build();

        assert!(!f.is_direct());
        assert_eq!(f.call((14,)).unwrap(), 42);
        assert_eq!(sink.backends(), vec!["fake1".to_string()]);
    }

    #[test]
    fn test_signature_mismatch() {
        let registry = RegistryBuilder::new()
            .register(
                "odd",
                ScriptedBackend::accepting().implementing("foo", |(x,): (u8,)| x),
            )
            .build();
        let f = Dispatchable::builder(target(), double as fn((i64,)) -> i64)
            .registry(Arc::new(registry))
            .settings(Settings::enabled())
            .sink(RecordingSink::new())
            .build();

        match f.call((1,)) {
            Err(DispatchError::SignatureMismatch { backend, target, .. }) => {
                assert_eq!(backend, "odd");
                assert_eq!(target, "pkg.mod:foo");
            }
            other => panic!("expected a signature mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_debug_shows_mode() {
        let f = Dispatchable::builder(target(), double as fn((i64,)) -> i64)
            .settings(Settings::disabled())
            .build();
        let shown = format!("{f:?}");
        assert!(shown.contains("pkg.mod:foo"));
        assert!(shown.contains("direct: true"));
    }
}
