//! Mock HID monitor for unit testing and headless runs.
//!
//! Allows tests to inject synthetic [`RawHidNotification`]s without a
//! running grabber service.

use std::sync::{
    mpsc::{self, Sender},
    Arc, Mutex,
};

use keyscope_core::RawHidNotification;

use super::{HidMonitor, MonitorError};

/// A mock implementation of [`HidMonitor`] that allows tests to inject
/// notifications.
pub struct MockHidMonitor {
    sender: Arc<Mutex<Option<Sender<RawHidNotification>>>>,
}

impl MockHidMonitor {
    /// Creates a new mock monitor.
    pub fn new() -> Self {
        Self {
            sender: Arc::new(Mutex::new(None)),
        }
    }

    /// Injects a synthetic notification, as if delivered by the grabber.
    ///
    /// Panics if `start()` has not been called or `stop()` already has.
    pub fn inject(&self, notification: RawHidNotification) {
        let guard = self.sender.lock().expect("lock poisoned");
        if let Some(ref sender) = *guard {
            sender
                .send(notification)
                .expect("receiver has been dropped; call start() first");
        } else {
            panic!("MockHidMonitor::inject called before start()");
        }
    }
}

impl Default for MockHidMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl HidMonitor for MockHidMonitor {
    fn start(&self) -> Result<mpsc::Receiver<RawHidNotification>, MonitorError> {
        let (tx, rx) = mpsc::channel();
        *self.sender.lock().expect("lock poisoned") = Some(tx);
        Ok(rx)
    }

    fn stop(&self) {
        // Drop the sender to close the channel
        *self.sender.lock().expect("lock poisoned") = None;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
