//! Event classification: raw HID notifications to display entries.
//!
//! The classifier is the heart of the event viewer. It receives one raw
//! notification at a time, consults the [`SwitchResolver`] (the remapper's
//! knowledge of which usages are real keys) and the per-device
//! [`ModifierFlagTracker`], and produces at most one [`DisplayEntry`].
//!
//! The pipeline, in order:
//!
//! 1. drop pairs on the static skip table ([`skip::should_skip`]);
//! 2. route unrecognized usages to the unknown-event history as a minimal
//!    entry carrying only the raw value;
//! 3. resolve the canonical name;
//! 4. update modifier-flag state (before the misc annotation is computed);
//! 5. derive the direction (`down` on nonzero, `up` on zero);
//! 6. annotate with the device's currently held modifiers.
//!
//! Classification is a pure function of the notification plus per-device
//! modifier state, so duplicating a classifier per viewer is cheap and keeps
//! viewers independent.
//!
//! # Dependency seams
//!
//! The resolver is injected at construction ([`std::sync::Arc`]`<dyn
//! SwitchResolver>`), so the classifier is fully unit-testable and a host
//! embedding the real native service can substitute its own resolver for the
//! built-in table-backed one.

pub mod skip;

use std::sync::Arc;

use tracing::trace;

use crate::domain::{DeviceId, DisplayEntry, DisplayMode, ModifierFlagTracker};

/// How the external monitor reported the notification's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// A key-style edge: the value is 1 on press and 0 on release.
    KeyEdge,
    /// A value-style report: the value is a signed magnitude, with discrete
    /// transitions reported separately by the monitor's side channel.
    Value,
}

/// One raw HID notification, already decoded by the external monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHidNotification {
    pub device_id: DeviceId,
    pub usage_page: i32,
    pub usage: i32,
    pub value: i64,
    pub kind: NotificationKind,
}

/// The remapper's knowledge of HID usages, consumed by the classifier.
///
/// Lookups are total: an unknown pair yields `false` / an empty name, never
/// an error.
#[cfg_attr(test, mockall::automock)]
pub trait SwitchResolver: Send + Sync {
    /// Is this pair a binary key/button the remapper understands?
    fn is_momentary_switch_target(&self, usage_page: i32, usage: i32) -> bool;

    /// Is this pair a modifier flag participating in per-device held state?
    fn is_modifier_flag(&self, usage_page: i32, usage: i32) -> bool;

    /// Canonical label for a momentary switch, empty if unnamed.
    fn momentary_switch_name(&self, usage_page: i32, usage: i32) -> String;

    /// Modifier-flag name for tracker bookkeeping, empty if unnamed.
    fn modifier_flag_name(&self, usage_page: i32, usage: i32) -> String;
}

/// Outcome of classifying one notification.
///
/// Exactly one variant per notification; the owning viewer appends `Known`
/// entries to its known-event history and `Unknown` entries to its
/// unknown-event history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// On the static skip table; nothing is appended anywhere.
    Skipped,
    /// Not a momentary-switch target; minimal entry for the unknown history.
    Unknown(DisplayEntry),
    /// Recognized event for the known history.
    Known(DisplayEntry),
}

/// Stateful classifier for one notification stream.
pub struct EventClassifier {
    resolver: Arc<dyn SwitchResolver>,
    flags: ModifierFlagTracker,
}

impl EventClassifier {
    /// Creates a classifier with its own empty modifier state.
    pub fn new(resolver: Arc<dyn SwitchResolver>) -> Self {
        Self {
            resolver,
            flags: ModifierFlagTracker::new(),
        }
    }

    /// Classifies one notification, rendering numeric fields per `mode`.
    pub fn classify(
        &mut self,
        notification: &RawHidNotification,
        mode: DisplayMode,
    ) -> Classification {
        let RawHidNotification {
            device_id,
            usage_page,
            usage,
            value,
            ..
        } = *notification;

        if skip::should_skip(usage_page, usage) {
            trace!(%device_id, usage_page, usage, "skipping filtered usage");
            return Classification::Skipped;
        }

        if !self.resolver.is_momentary_switch_target(usage_page, usage) {
            return Classification::Unknown(DisplayEntry::new(
                value.to_string(),
                "",
                "",
                "",
                "",
            ));
        }

        let name = self.resolver.momentary_switch_name(usage_page, usage);

        // Modifier bookkeeping happens before the misc annotation so a
        // modifier press is reported with itself held.
        if self.resolver.is_modifier_flag(usage_page, usage) {
            let flag_name = self.resolver.modifier_flag_name(usage_page, usage);
            self.flags.set_flag(device_id, &flag_name, value != 0);
        }

        let event_type = if value != 0 { "down" } else { "up" };

        let active = self.flags.active_flags(device_id);
        let misc = if active.is_empty() {
            String::new()
        } else {
            format!("flags {}", active.join(", "))
        };

        Classification::Known(DisplayEntry::new(
            event_type,
            mode.format_usage(usage_page),
            mode.format_usage(usage),
            name,
            misc,
        ))
    }

    /// Read-only view of the per-device modifier state.
    pub fn modifier_flags(&self) -> &ModifierFlagTracker {
        &self.flags
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
