//! HID notification monitor boundary.
//!
//! The native grabber service owns device enumeration and HID observation;
//! this process only ever sees already-decoded notification values. The
//! [`HidMonitor`] trait models that delivery: starting a monitor yields a
//! channel receiver, and the consuming task is the single serial execution
//! context that mutates viewer state.
//!
//! There is no in-process production implementation by design; the real
//! monitor lives across the IPC boundary. [`mock::MockHidMonitor`] lets
//! tests and the headless binary inject synthetic notification streams.

use std::sync::mpsc;

use keyscope_core::RawHidNotification;

pub mod mock;

/// Error type for monitor lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    /// The monitor has already been started and not yet stopped.
    #[error("monitor has already been started")]
    AlreadyStarted,
    /// The monitor has already been stopped.
    #[error("monitor has already been stopped")]
    AlreadyStopped,
}

/// Trait abstracting HID notification delivery.
pub trait HidMonitor: Send {
    /// Starts the monitor and returns a receiver for decoded notifications.
    fn start(&self) -> Result<mpsc::Receiver<RawHidNotification>, MonitorError>;

    /// Stops the monitor; the receiver's channel disconnects.
    fn stop(&self);
}
