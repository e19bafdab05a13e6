//! EventViewerService: the event viewer's session state.
//!
//! Owns one classifier plus the known- and unknown-event histories, and is
//! the single entry point for raw HID notifications delivered by the
//! external monitor. Every viewer constructs its own service instance; two
//! viewers observing the same stream keep independent derived state, which
//! is cheap because classification is a pure function of notification plus
//! per-device modifier state.
//!
//! All methods run on the one serial execution context that owns the
//! service; nothing here performs I/O or blocks.

use std::sync::Arc;

use keyscope_core::{
    classify::{Classification, EventClassifier, RawHidNotification, SwitchResolver},
    domain::{BoundedHistory, DisplayEntry, DisplayMode, HistoryMode},
    export,
};
use tracing::debug;

/// Destination for clipboard export.
///
/// The production implementation wraps the system pasteboard; tests record
/// writes in memory.
pub trait Pasteboard: Send + Sync {
    /// Replaces the pasteboard contents.
    fn write(&self, contents: String);
}

/// The event viewer use case.
pub struct EventViewerService {
    classifier: EventClassifier,
    known: BoundedHistory,
    unknown: BoundedHistory,
    display_mode: DisplayMode,
    paused: bool,
    pasteboard: Arc<dyn Pasteboard>,
}

impl EventViewerService {
    /// Creates a service with its own classifier and histories.
    ///
    /// `capacity` and `mode` apply to both histories: the historical viewer
    /// uses a small capacity, the live queue a larger one with placeholder
    /// padding.
    pub fn new(
        resolver: Arc<dyn SwitchResolver>,
        pasteboard: Arc<dyn Pasteboard>,
        capacity: usize,
        mode: HistoryMode,
        display_mode: DisplayMode,
    ) -> Self {
        Self {
            classifier: EventClassifier::new(resolver),
            known: BoundedHistory::new(capacity, mode),
            unknown: BoundedHistory::new(capacity, mode),
            display_mode,
            paused: false,
            pasteboard,
        }
    }

    /// Handles one raw notification from the external monitor.
    ///
    /// Appends to exactly one history per non-skipped notification. While
    /// paused, classification still runs (modifier state must stay current)
    /// but nothing is appended.
    pub fn on_raw_notification(&mut self, notification: &RawHidNotification) {
        let outcome = self.classifier.classify(notification, self.display_mode);
        if self.paused {
            return;
        }
        match outcome {
            Classification::Skipped => {}
            Classification::Unknown(entry) => self.unknown.append(entry),
            Classification::Known(entry) => self.known.append(entry),
        }
    }

    /// Pauses or resumes appends.
    pub fn pause(&mut self, value: bool) {
        self.paused = value;
    }

    /// Returns `true` while appends are suspended.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Switches the numeric rendering mode for subsequently classified
    /// entries; existing entries keep the format they were rendered with.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    /// The active numeric rendering mode.
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Clears the known-event history.
    pub fn clear(&mut self) {
        self.known.clear();
    }

    /// Clears the unknown-event history.
    pub fn clear_unknown_events(&mut self) {
        self.unknown.clear();
    }

    /// Immutable snapshot of the known-event history for rendering.
    pub fn snapshot(&self) -> Vec<DisplayEntry> {
        self.known.snapshot()
    }

    /// Immutable snapshot of the unknown-event history for rendering.
    pub fn unknown_snapshot(&self) -> Vec<DisplayEntry> {
        self.unknown.snapshot()
    }

    /// Serializes the known-event history to the pasteboard.
    ///
    /// An empty serialization leaves the pasteboard untouched rather than
    /// clearing it.
    pub fn copy_to_pasteboard(&self) {
        self.export(self.known.snapshot());
    }

    /// Serializes the unknown-event history to the pasteboard.
    pub fn copy_unknown_events_to_pasteboard(&self) {
        self.export(self.unknown.snapshot());
    }

    fn export(&self, entries: Vec<DisplayEntry>) {
        let serialized = export::serialize(&entries);
        if serialized.is_empty() {
            return;
        }
        debug!(bytes = serialized.len(), "copying history to pasteboard");
        self.pasteboard.write(serialized);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
