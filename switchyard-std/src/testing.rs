//! Testing utilities for switchyard.
//!
//! This module provides utilities to make testing dispatchable functions and
//! backends easier.
//!
//! # Features
//!
//! - [`ScriptedBackend`]: A backend whose decisions are programmed up front
//! - [`RecordingSink`]: A notification sink that records every notification

use crate::notify::NotificationSink;
use std::{
    any::Any,
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};
use switchyard_core::{Backend, BoxError, DispatchNotification, Implementation, TargetId};

// ============================================================================
// Scripted Backend
// ============================================================================

type Predicate = Arc<dyn Fn(&TargetId, &dyn Any) -> Result<bool, BoxError> + Send + Sync>;

/// A backend programmed with fixed answers.
///
/// Implementations are keyed by function name (the part of the target after
/// the `:`). Clones share their call counters, so a test can keep one clone
/// and hand the other to a registry.
///
/// # Example
///
/// ```rust,ignore
/// let backend = ScriptedBackend::accepting().implementing("foo", |(x,): (i64,)| x * 3);
/// let probe = backend.clone();
///
/// let registry = RegistryBuilder::new().register("fake", backend).build();
/// // ... call a dispatchable `foo` ...
/// assert_eq!(probe.accept_calls(), 1);
/// ```
#[derive(Clone)]
pub struct ScriptedBackend {
    predicate: Predicate,
    implementations: HashMap<String, Implementation>,
    resolve_error: Option<String>,
    accept_calls: Arc<AtomicUsize>,
    resolve_calls: Arc<AtomicUsize>,
}

impl ScriptedBackend {
    /// A backend accepting every call.
    pub fn accepting() -> Self {
        Self::with_predicate(|_, _| Ok(true))
    }

    /// A backend declining every call.
    pub fn declining() -> Self {
        Self::with_predicate(|_, _| Ok(false))
    }

    /// A backend whose accept predicate always fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::with_predicate(move |_, _| Err(message.clone().into()))
    }

    /// A backend accepting calls for which `predicate` holds.
    pub fn accepting_if<F>(predicate: F) -> Self
    where
        F: Fn(&TargetId, &dyn Any) -> bool + Send + Sync + 'static,
    {
        Self::with_predicate(move |target, args| Ok(predicate(target, args)))
    }

    fn with_predicate<F>(predicate: F) -> Self
    where
        F: Fn(&TargetId, &dyn Any) -> Result<bool, BoxError> + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            implementations: HashMap::new(),
            resolve_error: None,
            accept_calls: Arc::new(AtomicUsize::new(0)),
            resolve_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Provide an implementation for `function`.
    pub fn implementing<A, R, F>(mut self, function: &str, f: F) -> Self
    where
        A: 'static,
        R: 'static,
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        self.implementations
            .insert(function.to_owned(), Implementation::infallible(f));
        self
    }

    /// Provide a fallible implementation for `function`.
    pub fn implementing_fallible<A, R, F>(mut self, function: &str, f: F) -> Self
    where
        A: 'static,
        R: 'static,
        F: Fn(A) -> Result<R, BoxError> + Send + Sync + 'static,
    {
        self.implementations
            .insert(function.to_owned(), Implementation::new(f));
        self
    }

    /// Make `resolve` fail with `message`.
    pub fn resolve_failing(mut self, message: impl Into<String>) -> Self {
        self.resolve_error = Some(message.into());
        self
    }

    /// Number of times `accepts` was called.
    pub fn accept_calls(&self) -> usize {
        self.accept_calls.load(Ordering::SeqCst)
    }

    /// Number of times `resolve` was called.
    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }
}

impl Backend for ScriptedBackend {
    fn accepts(&self, target: &TargetId, args: &dyn Any) -> Result<bool, BoxError> {
        self.accept_calls.fetch_add(1, Ordering::SeqCst);
        (self.predicate)(target, args)
    }

    fn resolve(&self, target: &TargetId) -> Result<Option<Implementation>, BoxError> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ref message) = self.resolve_error {
            return Err(message.clone().into());
        }
        Ok(self.implementations.get(target.function()).cloned())
    }
}

// ============================================================================
// Recording Sink
// ============================================================================

/// A sink that records all notifications it receives.
///
/// # Example
///
/// ```rust,ignore
/// let sink = RecordingSink::new();
/// let foo = Dispatchable::builder(target, foo).sink(sink.clone()).build();
///
/// foo.call((42,))?;
/// assert_eq!(sink.backends(), vec!["fake1"]);
/// ```
#[derive(Clone, Default)]
pub struct RecordingSink {
    notifications: Arc<Mutex<Vec<DispatchNotification>>>,
}

impl RecordingSink {
    /// Create a new, empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clone of the recorded notifications.
    pub fn notifications(&self) -> Vec<DispatchNotification> {
        self.notifications.lock().unwrap().clone()
    }

    /// Names of the backends that took calls, in call order.
    pub fn backends(&self) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.backend().to_owned())
            .collect()
    }

    /// Get the number of recorded notifications.
    pub fn count(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }

    /// Clear all recorded notifications.
    pub fn clear(&self) {
        self.notifications.lock().unwrap().clear();
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: &DispatchNotification) {
        self.notifications.lock().unwrap().push(notification.clone());
    }
}
