//! UI bridge: exposes viewer operations to the presentation layer.
//!
//! The presentation layer (a native window, a TUI, a web view) is the only
//! consumer of this module; it must NOT be imported by the application
//! layer. All state lives in [`AppState`], and every operation returns
//! immutable DTO snapshots, so the renderer diffs plain values and never
//! observes a mutation in progress.
//!
//! All fields are async Tokio mutexes because bridge calls arrive on the
//! host's async runtime while the notification pumps mutate the same
//! services from their own tasks.

use std::sync::Arc;

use keyscope_core::{
    domain::HistoryMode, BuiltinResolver, LogEntry, LogSeverity, RawHidNotification,
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::application::{
    event_viewer::{EventViewerService, Pasteboard},
    log_viewer::{Clock, LogViewerService},
};
use crate::infrastructure::{
    clock::SystemClock, pasteboard::InMemoryPasteboard, storage::config::AppConfig,
};

// ── Shared application state ──────────────────────────────────────────────────

/// Application state shared between bridge calls.
pub struct AppState {
    /// The historical event viewer.
    pub event_viewer: Mutex<EventViewerService>,
    /// The log monitor.
    pub log_viewer: Mutex<LogViewerService>,
    /// The loaded application configuration.
    pub config: Mutex<AppConfig>,
}

impl AppState {
    /// Initialises state from `config` with the built-in resolver, the
    /// in-memory pasteboard, and the system clock.
    pub fn new(config: AppConfig) -> Arc<Self> {
        Self::with_collaborators(
            config,
            Arc::new(InMemoryPasteboard::new()),
            Arc::new(SystemClock),
        )
    }

    /// Initialises state with explicit collaborators; used by hosts that
    /// provide a real pasteboard and by tests.
    pub fn with_collaborators(
        config: AppConfig,
        pasteboard: Arc<dyn Pasteboard>,
        clock: Arc<dyn Clock>,
    ) -> Arc<Self> {
        let event_viewer = EventViewerService::new(
            Arc::new(BuiltinResolver),
            pasteboard,
            config.viewer.history_capacity,
            HistoryMode::Historical,
            config.viewer.display_mode(),
        );
        let log_viewer = LogViewerService::new(clock);

        Arc::new(Self {
            event_viewer: Mutex::new(event_viewer),
            log_viewer: Mutex::new(log_viewer),
            config: Mutex::new(config),
        })
    }
}

// ── Data Transfer Objects (Presentation layer) ────────────────────────────────

/// DTO for one event viewer row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayEntryDto {
    pub id: String,
    pub event_type: String,
    pub usage_page: String,
    pub usage: String,
    pub name: String,
    pub misc: String,
}

/// DTO for one log monitor row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogLineDto {
    pub date_number: u64,
    pub text: String,
    pub severity: String,
    pub is_divider: bool,
}

impl From<keyscope_core::DisplayEntry> for DisplayEntryDto {
    fn from(entry: keyscope_core::DisplayEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            event_type: entry.event_type,
            usage_page: entry.usage_page_text,
            usage: entry.usage_text,
            name: entry.name,
            misc: entry.misc,
        }
    }
}

impl From<LogEntry> for LogLineDto {
    fn from(entry: LogEntry) -> Self {
        let severity = LogSeverity::of_line(&entry.text).label().to_string();
        Self {
            is_divider: entry.is_divider(),
            date_number: entry.date_number,
            text: entry.text,
            severity,
        }
    }
}

// ── Bridge operations ─────────────────────────────────────────────────────────

/// Routes one raw notification into the event viewer.
pub async fn handle_notification(state: &AppState, notification: RawHidNotification) {
    state
        .event_viewer
        .lock()
        .await
        .on_raw_notification(&notification);
}

/// Delivers a refreshed log window to the log monitor.
pub async fn handle_log_window(state: &AppState, window: Vec<LogEntry>) {
    state.log_viewer.lock().await.on_log_lines_refreshed(window);
}

/// Snapshot of the known-event history.
pub async fn event_snapshot(state: &AppState) -> Vec<DisplayEntryDto> {
    state
        .event_viewer
        .lock()
        .await
        .snapshot()
        .into_iter()
        .map(Into::into)
        .collect()
}

/// Snapshot of the unknown-event history.
pub async fn unknown_event_snapshot(state: &AppState) -> Vec<DisplayEntryDto> {
    state
        .event_viewer
        .lock()
        .await
        .unknown_snapshot()
        .into_iter()
        .map(Into::into)
        .collect()
}

/// Snapshot of the displayed log sequence.
pub async fn log_snapshot(state: &AppState) -> Vec<LogLineDto> {
    state
        .log_viewer
        .lock()
        .await
        .snapshot()
        .into_iter()
        .map(Into::into)
        .collect()
}

/// Clears the known-event history.
pub async fn clear_events(state: &AppState) {
    state.event_viewer.lock().await.clear();
}

/// Clears the unknown-event history.
pub async fn clear_unknown_events(state: &AppState) {
    state.event_viewer.lock().await.clear_unknown_events();
}

/// Pauses or resumes the event viewer.
pub async fn set_paused(state: &AppState, paused: bool) {
    state.event_viewer.lock().await.pause(paused);
}

/// Copies the known-event history to the pasteboard.
pub async fn copy_events(state: &AppState) {
    state.event_viewer.lock().await.copy_to_pasteboard();
}

/// Inserts an operator divider into the log monitor.
pub async fn add_divider(state: &AppState) {
    state.log_viewer.lock().await.add_divider();
}

// ── Tests ─────────────────────────────────────────────────────────────────────
