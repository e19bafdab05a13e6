//! Mock log source for unit testing.
//!
//! Allows tests to deliver complete log windows without touching the file
//! system.

use std::sync::{
    mpsc::{self, Sender},
    Arc, Mutex,
};

use keyscope_core::LogEntry;

use super::{LogSource, LogSourceError};

/// A mock implementation of [`LogSource`] that allows tests to push windows.
pub struct MockLogSource {
    sender: Arc<Mutex<Option<Sender<Vec<LogEntry>>>>>,
}

impl MockLogSource {
    /// Creates a new mock source.
    pub fn new() -> Self {
        Self {
            sender: Arc::new(Mutex::new(None)),
        }
    }

    /// Delivers a complete replacement window.
    ///
    /// Panics if `start()` has not been called or `stop()` already has.
    pub fn push_window(&self, window: Vec<LogEntry>) {
        let guard = self.sender.lock().expect("lock poisoned");
        if let Some(ref sender) = *guard {
            sender
                .send(window)
                .expect("receiver has been dropped; call start() first");
        } else {
            panic!("MockLogSource::push_window called before start()");
        }
    }
}

impl Default for MockLogSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSource for MockLogSource {
    fn start(&self) -> Result<mpsc::Receiver<Vec<LogEntry>>, LogSourceError> {
        let (tx, rx) = mpsc::channel();
        *self.sender.lock().expect("lock poisoned") = Some(tx);
        Ok(rx)
    }

    fn stop(&self) {
        *self.sender.lock().expect("lock poisoned") = None;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
