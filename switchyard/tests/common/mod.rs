#![allow(dead_code)]

use lazy_static::lazy_static;
use std::{
    sync::{Arc, Mutex},
    thread::{self, ThreadId},
};
use switchyard::{
    Dispatchable, Registry, Settings, TargetId,
    testing::RecordingSink,
};

// ============================================================================
// Dispatchable fixtures
// ============================================================================

lazy_static! {
    /// Every call of an original (non-backend) function, by calling thread.
    ///
    /// Tests run on their own threads, so filtering by thread keeps
    /// concurrently running tests apart.
    pub static ref ORIGINAL_CALLS: Mutex<Vec<(ThreadId, &'static str)>> = Mutex::new(Vec::new());
}

pub fn foo((x,): (i64,)) -> i64 {
    record("foo");
    x * 2
}

pub fn bar((x,): (i64,)) -> i64 {
    record("bar");
    x + 1
}

fn record(name: &'static str) {
    ORIGINAL_CALLS
        .lock()
        .unwrap()
        .push((thread::current().id(), name));
}

/// Number of times the original `name` ran on the current thread.
pub fn original_calls(name: &str) -> usize {
    let me = thread::current().id();
    ORIGINAL_CALLS
        .lock()
        .unwrap()
        .iter()
        .filter(|(thread, called)| *thread == me && *called == name)
        .count()
}

pub fn foo_target() -> TargetId {
    TargetId::for_function("pkg::module::inner", "foo")
}

pub fn bar_target() -> TargetId {
    TargetId::for_function("pkg::module::inner", "bar")
}

/// `foo` wired to `registry`, with dispatching enabled and a recording sink.
pub fn dispatchable_foo(registry: Registry) -> (Dispatchable<(i64,), i64>, RecordingSink) {
    dispatchable_with(foo_target(), foo, registry)
}

pub fn dispatchable_with(
    target: TargetId,
    original: fn((i64,)) -> i64,
    registry: Registry,
) -> (Dispatchable<(i64,), i64>, RecordingSink) {
    let sink = RecordingSink::new();
    let wrapper = Dispatchable::builder(target, original)
        .registry(Arc::new(registry))
        .settings(Settings::enabled())
        .sink(sink.clone())
        .build();
    (wrapper, sink)
}
