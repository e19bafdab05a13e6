//! Log-line source boundary.
//!
//! The log monitor displays the daemon's text log. The source contract is
//! deliberately coarse: every delivery is a *complete replacement* window of
//! lines sorted ascending by date number. The source may truncate or rotate
//! at will; the timeline copes (see `keyscope-core::logview::timeline`).
//!
//! [`file::FileLogSource`] is the production implementation, re-reading a
//! log file on a fixed interval. [`mock::MockLogSource`] injects windows
//! directly.

use std::path::PathBuf;
use std::sync::mpsc;

use keyscope_core::LogEntry;

pub mod file;
pub mod mock;

/// Error type for log source operations.
#[derive(Debug, thiserror::Error)]
pub enum LogSourceError {
    /// The log file could not be read.
    #[error("failed to read log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The source has already been stopped.
    #[error("log source has already been stopped")]
    AlreadyStopped,
}

/// Trait abstracting log window delivery.
pub trait LogSource: Send {
    /// Starts the source and returns a receiver for complete windows.
    fn start(&self) -> Result<mpsc::Receiver<Vec<LogEntry>>, LogSourceError>;

    /// Stops the source; the receiver's channel disconnects.
    fn stop(&self);
}
