//! Per-device modifier-flag state.
//!
//! Each device accumulates a set of currently-held modifier names
//! (`left_shift`, `caps_lock`, ...). An absent device is indistinguishable
//! from a device with an empty set. Devices are created lazily on their
//! first modifier notification and never removed; device count is bounded
//! by physical reality.

use std::collections::{BTreeMap, BTreeSet};

use super::DeviceId;

/// Tracks the active modifier-flag names per device.
///
/// Pure in-memory set algebra; `set_flag` is idempotent and has no error
/// conditions.
#[derive(Debug, Default)]
pub struct ModifierFlagTracker {
    // BTreeSet keeps each device's names lexicographically sorted, which the
    // misc annotation requires for diff-stable output.
    flags: BTreeMap<DeviceId, BTreeSet<String>>,
}

impl ModifierFlagTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `name` active or inactive for `device_id`.
    ///
    /// Activating an already-active flag and deactivating an absent one are
    /// both no-ops.
    pub fn set_flag(&mut self, device_id: DeviceId, name: &str, active: bool) {
        if active {
            self.flags
                .entry(device_id)
                .or_default()
                .insert(name.to_string());
        } else if let Some(set) = self.flags.get_mut(&device_id) {
            set.remove(name);
        }
    }

    /// Returns the currently active flag names for `device_id` in
    /// lexicographic order; empty for unknown devices.
    pub fn active_flags(&self, device_id: DeviceId) -> Vec<&str> {
        self.flags
            .get(&device_id)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns `true` if `name` is currently active for `device_id`.
    pub fn is_active(&self, device_id: DeviceId, name: &str) -> bool {
        self.flags
            .get(&device_id)
            .is_some_and(|set| set.contains(name))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
