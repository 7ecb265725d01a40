use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

/// Receives the URL of every navigation request the web view is about to
/// perform. Reporting is observational; implementations cannot veto the
/// navigation.
pub trait NavigationListener: Send + Sync {
    fn on_navigation_request(&self, url: &str);
}

/// Single-listener slot for navigation reports.
///
/// At most one listener is registered at a time; subscribing replaces the
/// current one. With no listener registered, notifications are dropped
/// silently.
#[derive(Default)]
pub struct NavigationObserver {
    listener: Mutex<Option<Arc<dyn NavigationListener>>>,
}

impl NavigationObserver {
    pub fn new() -> Self {
        Self {
            listener: Mutex::new(None),
        }
    }

    /// Registers `listener`, replacing any currently registered one.
    pub fn subscribe(&self, listener: Arc<dyn NavigationListener>) {
        *self.slot() = Some(listener);
    }

    /// Clears the slot. Notifications are dropped until the next subscribe.
    pub fn unsubscribe(&self) {
        *self.slot() = None;
    }

    pub fn has_listener(&self) -> bool {
        self.slot().is_some()
    }

    /// Delivers `url` verbatim to the registered listener, exactly once per
    /// call. Never panics; a listener that panics loses that notification
    /// only.
    pub fn notify(&self, url: &str) {
        // Clone out of the lock so listener work happens unlocked.
        let listener = self.slot().clone();
        if let Some(listener) = listener {
            if catch_unwind(AssertUnwindSafe(|| listener.on_navigation_request(url))).is_err() {
                debug!("navigation listener panicked; notification dropped");
            }
        }
    }

    // The slot must stay usable even after a panic elsewhere poisoned it.
    fn slot(&self) -> MutexGuard<'_, Option<Arc<dyn NavigationListener>>> {
        self.listener.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
