//! LogViewerService: the log monitor's displayed sequence.
//!
//! Owns the divider timeline and the most recent externally delivered log
//! window. The external source replaces the whole window on every refresh;
//! the service re-merges dividers into it and hands out immutable snapshots
//! for rendering.

use std::sync::Arc;

use keyscope_core::{LogEntry, LogTimeline};
use tracing::debug;

/// Wall-clock source for divider stamps.
///
/// Injected so tests control time; the production implementation reads the
/// system clock.
pub trait Clock: Send + Sync {
    /// Current time as a `yyyyMMddHHmmssSSS` integer.
    fn date_number(&self) -> u64;
}

/// The log monitor use case.
pub struct LogViewerService {
    timeline: LogTimeline,
    window: Vec<LogEntry>,
    displayed: Vec<LogEntry>,
    clock: Arc<dyn Clock>,
}

impl LogViewerService {
    /// Creates a service with an empty timeline and window.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            timeline: LogTimeline::new(),
            window: Vec::new(),
            displayed: Vec::new(),
            clock,
        }
    }

    /// Replaces the log window with a freshly delivered one.
    ///
    /// `lines` must be sorted ascending by date number, as the external
    /// source delivers them.
    pub fn on_log_lines_refreshed(&mut self, lines: Vec<LogEntry>) {
        debug!(lines = lines.len(), "log window refreshed");
        self.window = lines;
        self.refresh();
    }

    /// Inserts an operator divider stamped with the current time.
    pub fn add_divider(&mut self) {
        self.timeline.add_divider(self.clock.date_number());
        self.refresh();
    }

    /// Immutable snapshot of the displayed sequence for rendering.
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.displayed.clone()
    }

    fn refresh(&mut self) {
        self.displayed = self.timeline.merge(&self.window);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
