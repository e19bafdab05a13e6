//! Pure domain types for the event viewer engine.

pub mod entry;
pub mod history;
pub mod modifier_flags;

pub use entry::{DisplayEntry, DisplayMode};
pub use history::{BoundedHistory, HistoryMode};
pub use modifier_flags::ModifierFlagTracker;

/// Opaque 64-bit device handle reported by the external HID monitor.
///
/// Stable for the lifetime of the physical connection; a reconnected device
/// receives a fresh handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(pub u64);

impl std::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
