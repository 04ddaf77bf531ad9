//! Notification sinks for dispatched calls.

use switchyard_core::DispatchNotification;

/// Receives a [`DispatchNotification`] for every dispatched call.
///
/// Sinks must not fail; a notification is informational and never changes
/// the outcome of the call.
pub trait NotificationSink: Send + Sync + 'static {
    /// Called right before the backend's implementation runs.
    fn notify(&self, notification: &DispatchNotification);
}

/// The default sink: a warning on the log.
///
/// With the `tracing` feature the warning is a `tracing` event with target
/// `switchyard::dispatch`; without it, a line on standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, notification: &DispatchNotification) {
        #[cfg(feature = "tracing")]
        {
            tracing::warn!(
                target: "switchyard::dispatch",
                backend = %notification.backend(),
                function = %notification.target(),
                "{notification}"
            );
        }
        #[cfg(not(feature = "tracing"))]
        {
            eprintln!("warning: {notification}");
        }
    }
}

impl<F> NotificationSink for F
where
    F: Fn(&DispatchNotification) + Send + Sync + 'static,
{
    fn notify(&self, notification: &DispatchNotification) {
        (self)(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };
    use switchyard_core::TargetId;

    #[test]
    fn test_closure_sink() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        let sink = move |n: &DispatchNotification| {
            assert_eq!(n.backend(), "fake1");
            counter.fetch_add(1, Ordering::SeqCst);
        };

        let note = DispatchNotification::new("fake1", TargetId::for_function("pkg::mod", "foo"));
        sink.notify(&note);
        LogSink.notify(&note);

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
