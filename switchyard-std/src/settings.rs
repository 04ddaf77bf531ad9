//! Runtime settings for dispatching.

use switchyard_core::NO_DISPATCHING_ENV;

/// Whether calls may be dispatched to backends.
///
/// Read once, when a [`Dispatchable`] is constructed. Changing the
/// environment afterwards has no effect on wrappers that already exist.
///
/// [`Dispatchable`]: crate::Dispatchable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    disabled: bool,
}

impl Settings {
    /// Settings that allow dispatching.
    pub const fn enabled() -> Self {
        Self { disabled: false }
    }

    /// Settings that disable dispatching.
    pub const fn disabled() -> Self {
        Self { disabled: true }
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    ///
    /// Only the exact value `"1"` disables dispatching.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let disabled = lookup(NO_DISPATCHING_ENV).is_some_and(|value| value == "1");
        Self { disabled }
    }

    /// Whether dispatching is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}
