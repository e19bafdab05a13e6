//! # keyscope-core
//!
//! Shared library for KeyScope containing the event classification pipeline,
//! the bounded display histories, the log/divider timeline, and the built-in
//! HID usage-name tables.
//!
//! This crate is used by the viewer application and by any host that embeds
//! the engine. It has zero dependencies on OS APIs, UI frameworks, or
//! network sockets.
//!
//! # Architecture overview
//!
//! KeyScope is the observability side of a keyboard/mouse remapping system:
//! it turns the raw HID notification stream reported by the native grabber
//! service into a human-readable, capacity-bounded event log, and merges
//! operator-inserted dividers into the daemon's text log. This crate defines:
//!
//! - **`domain`** – Pure value types and containers: [`domain::DisplayEntry`],
//!   the FIFO-evicting [`domain::BoundedHistory`], and the per-device
//!   [`domain::ModifierFlagTracker`].
//!
//! - **`classify`** – The classification pipeline that maps one raw HID
//!   notification to at most one display entry, routed to either the known-
//!   or the unknown-event history by the owning viewer.
//!
//! - **`keymap`** – Usage-name tables that resolve `(usage_page, usage)`
//!   pairs to canonical momentary-switch and modifier-flag names, and the
//!   built-in [`classify::SwitchResolver`] implementation backed by them.
//!
//! - **`logview`** – Time-ordered log entries, display severity tagging, and
//!   the divider-merging [`logview::timeline::LogTimeline`].
//!
//! - **`export`** – Fixed-width text serialization for clipboard export.

pub mod classify;
pub mod domain;
pub mod export;
pub mod keymap;
pub mod logview;

// Re-export the most-used types at the crate root so callers can write
// `keyscope_core::DisplayEntry` instead of `keyscope_core::domain::entry::DisplayEntry`.
pub use classify::{
    Classification, EventClassifier, NotificationKind, RawHidNotification, SwitchResolver,
};
pub use domain::{
    BoundedHistory, DeviceId, DisplayEntry, DisplayMode, HistoryMode, ModifierFlagTracker,
};
pub use keymap::BuiltinResolver;
pub use logview::{timeline::LogTimeline, LogEntry, LogSeverity};
