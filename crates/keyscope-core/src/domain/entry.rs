//! Display entry value type and numeric display modes.
//!
//! A [`DisplayEntry`] is the immutable, render-ready form of one classified
//! HID notification. Entries are produced exclusively by the classifier and
//! never mutated after construction; the presentation layer diffs snapshots
//! of them by `id`.

use uuid::Uuid;

/// Numeric rendering mode for usage page / usage values.
///
/// A pure formatting switch evaluated at classification time; it is not
/// stored alongside the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Plain decimal, e.g. `7`.
    #[default]
    Decimal,
    /// Zero-padded hex, e.g. `0x07`.
    Hex,
}

impl DisplayMode {
    /// Renders a usage page or usage value in this mode.
    pub fn format_usage(self, value: i32) -> String {
        match self {
            DisplayMode::Decimal => format!("{value}"),
            DisplayMode::Hex => format!("0x{value:02x}"),
        }
    }
}

/// One row of the event viewer display.
///
/// Placeholder entries (used by the live-queue history to keep its length
/// constant) have an empty `event_type` and are skipped by the exporter.
#[derive(Debug, Clone)]
pub struct DisplayEntry {
    /// Unique identity for UI diffing.
    pub id: Uuid,
    /// `"down"` / `"up"` for recognized events, the raw value's string form
    /// for unknown events, empty for placeholders.
    pub event_type: String,
    /// Rendered usage page, per the active [`DisplayMode`].
    pub usage_page_text: String,
    /// Rendered usage, per the active [`DisplayMode`].
    pub usage_text: String,
    /// Resolved human label; empty for unknown events.
    pub name: String,
    /// Derived annotation, e.g. the active modifier list.
    pub misc: String,
}

impl DisplayEntry {
    /// Creates an entry with a fresh identity.
    pub fn new(
        event_type: impl Into<String>,
        usage_page_text: impl Into<String>,
        usage_text: impl Into<String>,
        name: impl Into<String>,
        misc: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type: event_type.into(),
            usage_page_text: usage_page_text.into(),
            usage_text: usage_text.into(),
            name: name.into(),
            misc: misc.into(),
        }
    }

    /// Creates an empty placeholder entry for the live-queue history.
    pub fn placeholder() -> Self {
        Self::new("", "", "", "", "")
    }

    /// Returns `true` if this is a placeholder (empty `event_type`).
    pub fn is_placeholder(&self) -> bool {
        self.event_type.is_empty()
    }
}

// Entries are value-equal when they are the same entry, not when their text
// happens to match; the id is the diffing key.
impl PartialEq for DisplayEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DisplayEntry {}

// ── Tests ─────────────────────────────────────────────────────────────────────
