//! Settings handle with change subscription
//!
//! Abstracts the host environment's settings-change events: the current
//! snapshot is replaced wholesale, never mutated in place, and each
//! resolution call reads one consistent `Arc<Settings>`. Subscribers run
//! synchronously on the thread that performs the replacement.

use std::sync::{Arc, Mutex, RwLock};

use sentaku_engine::Settings;

type ChangeHandler = Box<dyn Fn(&Settings) + Send + Sync>;

/// Shared handle to the current settings snapshot
pub struct SettingsHandle {
    current: RwLock<Arc<Settings>>,
    handlers: Mutex<Vec<ChangeHandler>>,
}

impl std::fmt::Debug for SettingsHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsHandle")
            .field("current", &self.snapshot())
            .finish_non_exhaustive()
    }
}

impl SettingsHandle {
    /// Create a handle holding an initial snapshot
    pub fn new(settings: Settings) -> Self {
        Self {
            current: RwLock::new(Arc::new(settings)),
            handlers: Mutex::new(Vec::new()),
        }
    }

    /// The current snapshot
    pub fn snapshot(&self) -> Arc<Settings> {
        self.current.read().expect("settings lock poisoned").clone()
    }

    /// Replace the snapshot wholesale and notify subscribers
    pub fn replace(&self, settings: Settings) {
        let next = Arc::new(settings);
        *self.current.write().expect("settings lock poisoned") = next.clone();
        for handler in self.handlers.lock().expect("handler lock poisoned").iter() {
            handler(&next);
        }
    }

    /// Register a change handler
    pub fn on_change(&self, handler: impl Fn(&Settings) + Send + Sync + 'static) {
        self.handlers
            .lock()
            .expect("handler lock poisoned")
            .push(Box::new(handler));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_snapshot_is_stable_across_replace() {
        let handle = SettingsHandle::new(Settings::for_language("zh"));
        let before = handle.snapshot();

        handle.replace(Settings::for_language("ja"));

        // The old snapshot is untouched; the handle serves the new one
        assert_eq!(before.target_language, "zh");
        assert_eq!(handle.snapshot().target_language, "ja");
    }

    #[test]
    fn test_change_handlers_fire() {
        let handle = SettingsHandle::new(Settings::default());
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        handle.on_change(move |settings| {
            assert_eq!(settings.target_language, "ko");
            counter.fetch_add(1, Ordering::SeqCst);
        });

        handle.replace(Settings::for_language("ko"));
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
