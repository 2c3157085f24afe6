//! Host color scheme preference
//!
//! The host (a webview bridge, a desktop settings watcher, a test) reports
//! whether the user prefers a dark scheme through a [`ColorSchemeSource`].
//! [`SchemeSignal`] is the stock implementation: the host pushes values in
//! and subscribers are notified whenever the value changes.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};

use crate::config::ColorScheme;

/// Callback invoked with the new "prefers dark" value
pub type SchemeCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Handle for removing a subscription
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Where the host's dark/light preference comes from
pub trait ColorSchemeSource: Send + Sync {
    /// `None` when the host cannot tell
    fn prefers_dark(&self) -> Option<bool>;

    /// Register for changes. Sources that never change return `None`.
    fn subscribe(&self, callback: SchemeCallback) -> Option<SubscriptionId>;

    fn unsubscribe(&self, id: SubscriptionId);
}

/// Source for hosts without a preference signal
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSchemeSource;

impl ColorSchemeSource for NoSchemeSource {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }

    fn subscribe(&self, _callback: SchemeCallback) -> Option<SubscriptionId> {
        None
    }

    fn unsubscribe(&self, _id: SubscriptionId) {}
}

/// Host driven preference value with change notification
#[derive(Default)]
pub struct SchemeSignal {
    prefers_dark: RwLock<Option<bool>>,
    listeners: RwLock<Vec<(SubscriptionId, SchemeCallback)>>,
    next_id: AtomicU64,
}

impl SchemeSignal {
    pub fn new(prefers_dark: Option<bool>) -> Self {
        Self {
            prefers_dark: RwLock::new(prefers_dark),
            ..Self::default()
        }
    }

    /// Record a new preference. Subscribers run only when the value changed.
    ///
    /// Callbacks run on the calling thread after internal locks are released,
    /// so they may read the signal again.
    pub fn set_prefers_dark(&self, dark: bool) {
        {
            let mut current = self
                .prefers_dark
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if *current == Some(dark) {
                return;
            }
            *current = Some(dark);
        }

        let callbacks: Vec<SchemeCallback> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        tracing::debug!(
            "SchemeSignal::set_prefers_dark - dark={} notifying {} subscribers",
            dark,
            callbacks.len()
        );
        for callback in callbacks {
            callback(dark);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl ColorSchemeSource for SchemeSignal {
    fn prefers_dark(&self) -> Option<bool> {
        *self
            .prefers_dark
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn subscribe(&self, callback: SchemeCallback) -> Option<SubscriptionId> {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, callback));
        Some(id)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(existing, _)| *existing != id);
    }
}

impl fmt::Debug for SchemeSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeSignal")
            .field("prefers_dark", &self.prefers_dark())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Scheme the host currently prefers, light when unknown
pub fn detect_system_preference(source: &dyn ColorSchemeSource) -> ColorScheme {
    match source.prefers_dark() {
        Some(true) => ColorScheme::Dark,
        _ => ColorScheme::Light,
    }
}

/// Subscribe `callback` to preference changes until the returned watch is
/// cancelled or dropped
pub fn watch_system_preference<F>(source: Arc<dyn ColorSchemeSource>, callback: F) -> SchemeWatch
where
    F: Fn(bool) + Send + Sync + 'static,
{
    let id = source.subscribe(Arc::new(callback));
    SchemeWatch {
        source: Arc::downgrade(&source),
        id,
    }
}

/// Live preference subscription
#[must_use = "dropping a SchemeWatch stops the subscription"]
pub struct SchemeWatch {
    source: Weak<dyn ColorSchemeSource>,
    id: Option<SubscriptionId>,
}

impl SchemeWatch {
    /// Whether the source accepted the subscription
    pub fn is_active(&self) -> bool {
        self.id.is_some() && self.source.strong_count() > 0
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let (Some(id), Some(source)) = (self.id.take(), self.source.upgrade()) {
            source.unsubscribe(id);
        }
    }
}

impl Drop for SchemeWatch {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for SchemeWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeWatch")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn notifies_on_change_only() {
        let signal = Arc::new(SchemeSignal::new(Some(false)));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _watch = watch_system_preference(signal.clone(), move |dark| {
            sink.lock().unwrap().push(dark);
        });

        signal.set_prefers_dark(true);
        signal.set_prefers_dark(true);
        signal.set_prefers_dark(false);

        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn cancel_and_drop_unsubscribe() {
        let signal = Arc::new(SchemeSignal::new(None));
        let watch = watch_system_preference(signal.clone(), |_| {});
        assert!(watch.is_active());
        assert_eq!(signal.subscriber_count(), 1);
        watch.cancel();
        assert_eq!(signal.subscriber_count(), 0);

        {
            let _watch = watch_system_preference(signal.clone(), |_| {});
            assert_eq!(signal.subscriber_count(), 1);
        }
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn unsupported_source_is_inert() {
        let source: Arc<dyn ColorSchemeSource> = Arc::new(NoSchemeSource);
        let watch = watch_system_preference(source.clone(), |_| {});
        assert!(!watch.is_active());
        assert_eq!(detect_system_preference(source.as_ref()), ColorScheme::Light);
    }

    #[test]
    fn detection_reads_current_value() {
        let signal = SchemeSignal::new(Some(true));
        assert_eq!(detect_system_preference(&signal), ColorScheme::Dark);
    }
}
