//! Infrastructure layer: boundaries to the outside world.
//!
//! Each module wraps one external concern behind a trait the application
//! layer consumes: the HID notification monitor, the log-line source, the
//! wall clock, the pasteboard, and configuration storage. The `ui_bridge`
//! module is the only one the presentation layer talks to.

pub mod clock;
pub mod hid_monitor;
pub mod log_source;
pub mod pasteboard;
pub mod storage;
pub mod ui_bridge;
