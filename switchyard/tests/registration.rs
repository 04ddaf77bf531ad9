//! Link-time registration and `#[dispatchable]` end to end.
//!
//! Everything here goes through the process-wide registry, so this file is
//! its own test binary with its own set of registered backends.

use lazy_static::lazy_static;
use std::{
    any::Any,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};
use switchyard::{
    Backend, BackendInfo, BoxError, Implementation, NO_DISPATCHING_ENV, Registry, TargetId,
    register_backend,
};

lazy_static! {
    static ref SEEN_TARGETS: Mutex<Vec<String>> = Mutex::new(Vec::new());
}

static TRIPLER_INSTANCES: AtomicUsize = AtomicUsize::new(0);

/// Takes `foo`; only ever asked about it thanks to its backend information.
struct Tripler;

impl Tripler {
    fn new() -> Self {
        TRIPLER_INSTANCES.fetch_add(1, Ordering::SeqCst);
        Tripler
    }
}

impl Backend for Tripler {
    fn accepts(&self, target: &TargetId, _args: &dyn Any) -> Result<bool, BoxError> {
        if target.function() != "foo" {
            return Err(format!("Tripler only implements 'foo', asked about '{target}'").into());
        }
        Ok(true)
    }

    fn resolve(&self, _target: &TargetId) -> Result<Option<Implementation>, BoxError> {
        Ok(Some(Implementation::infallible(|(x,): (i64,)| x * 3)))
    }
}

/// Unfiltered; takes anything named `bar` or `median_like`.
struct Collector;

impl Backend for Collector {
    fn accepts(&self, target: &TargetId, _args: &dyn Any) -> Result<bool, BoxError> {
        SEEN_TARGETS.lock().unwrap().push(target.to_string());
        Ok(matches!(target.function(), "bar" | "median_like"))
    }

    fn resolve(&self, target: &TargetId) -> Result<Option<Implementation>, BoxError> {
        Ok(match target.function() {
            "bar" => Some(Implementation::infallible(|(x,): (i64,)| x * 10)),
            "median_like" => Some(Implementation::infallible(|(x,): (i64,)| -x)),
            _ => None,
        })
    }
}

register_backend!(
    "fake1",
    Tripler::new(),
    info = BackendInfo::parse(["registration.library:foo"])
);
register_backend!("fake2", Collector);

mod library {
    #[switchyard::dispatchable]
    pub fn foo(x: i64) -> i64 {
        x * 2
    }

    #[switchyard::dispatchable]
    pub fn bar(x: i64) -> i64 {
        x + 1
    }

    #[switchyard::dispatchable]
    pub fn untouched(text: String, repeat: usize) -> usize {
        text.len() * repeat
    }

    #[switchyard::dispatchable(module = "switchyard_image::filters::rank::generic")]
    pub fn median_like(x: i64) -> i64 {
        x
    }
}

fn dispatching_enabled() -> bool {
    std::env::var(NO_DISPATCHING_ENV).as_deref() != Ok("1")
}

#[test]
fn test_global_registry_discovers_backends() {
    let registry = Registry::global();
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["fake1", "fake2"]);
    assert!(registry.get("fake1").unwrap().has_info());
    assert!(!registry.get("fake2").unwrap().has_info());
}

#[test]
fn test_global_registry_is_discovered_once() {
    let handles: Vec<_> = (0..8).map(|_| thread::spawn(Registry::global)).collect();
    let registries: Vec<Arc<Registry>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let first = Registry::global();
    for registry in &registries {
        assert!(Arc::ptr_eq(&first, registry));
    }
}

#[test]
fn test_macro_dispatches_to_first_backend() {
    if !dispatching_enabled() {
        return;
    }
    assert_eq!(library::foo(14).unwrap(), 42);
    assert_eq!(library::foo(1).unwrap(), 3);
    assert_eq!(TRIPLER_INSTANCES.load(Ordering::SeqCst), 1, "instance is reused");
}

#[test]
fn test_macro_skips_filtered_backend() {
    if !dispatching_enabled() {
        return;
    }
    // fake1 would error if asked about `bar`; its information rules it out.
    assert_eq!(library::bar(1).unwrap(), 10);
}

#[test]
fn test_macro_falls_back_to_original() {
    if !dispatching_enabled() {
        return;
    }
    assert_eq!(library::untouched("abc".to_owned(), 2).unwrap(), 6);
    assert!(
        SEEN_TARGETS
            .lock()
            .unwrap()
            .contains(&"registration.library:untouched".to_owned())
    );
}

#[test]
fn test_macro_module_override() {
    if !dispatching_enabled() {
        return;
    }
    assert_eq!(library::median_like(5).unwrap(), -5);
    assert!(
        SEEN_TARGETS
            .lock()
            .unwrap()
            .contains(&"switchyard_image.filters.rank:median_like".to_owned())
    );
}
