//! File-backed log source.
//!
//! Re-reads the daemon's log file on a fixed interval and delivers the last
//! `max_lines` parsed lines as a complete window. Rotation and truncation
//! need no special handling: the next read simply yields a smaller or
//! shifted window, which is exactly the contract the timeline expects.
//!
//! Lines start with the daemon's timestamp, `[yyyy-mm-dd hh:mm:ss.SSS]`;
//! the bracketed prefix becomes the line's date number. Continuation lines
//! without a timestamp inherit the previous line's stamp so ordering is
//! preserved.

use std::path::{Path, PathBuf};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc, Arc,
};
use std::time::Duration;

use chrono::NaiveDateTime;
use keyscope_core::LogEntry;
use tracing::{debug, warn};

use super::{LogSource, LogSourceError};

/// Bracketed timestamp prefix length: `[yyyy-mm-dd hh:mm:ss.SSS]`.
const TIMESTAMP_PREFIX_LEN: usize = 25;

/// Periodically re-reads a log file and delivers complete windows.
pub struct FileLogSource {
    path: PathBuf,
    poll_interval: Duration,
    max_lines: usize,
    running: Arc<AtomicBool>,
}

impl FileLogSource {
    /// Creates a source reading `path` every `poll_interval`, keeping the
    /// last `max_lines` lines of each read.
    pub fn new(path: impl Into<PathBuf>, poll_interval: Duration, max_lines: usize) -> Self {
        Self {
            path: path.into(),
            poll_interval,
            max_lines,
            running: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl LogSource for FileLogSource {
    fn start(&self) -> Result<mpsc::Receiver<Vec<LogEntry>>, LogSourceError> {
        let (tx, rx) = mpsc::channel();
        self.running.store(true, Ordering::Relaxed);

        let path = self.path.clone();
        let poll_interval = self.poll_interval;
        let max_lines = self.max_lines;
        let running = Arc::clone(&self.running);

        // Reader thread: blocking file I/O stays off the serial viewer
        // context; only parsed windows cross the channel.
        std::thread::spawn(move || {
            while running.load(Ordering::Relaxed) {
                match std::fs::read_to_string(&path) {
                    Ok(content) => {
                        let window = parse_log_window(&content, max_lines);
                        if tx.send(window).is_err() {
                            // Receiver is gone; nothing left to deliver to.
                            break;
                        }
                    }
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                        // The daemon has not written its log yet.
                        debug!(path = %path.display(), "log file not present yet");
                    }
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "failed to read log file");
                    }
                }
                std::thread::sleep(poll_interval);
            }
        });

        Ok(rx)
    }

    fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

/// Parses file content into the last `max_lines` log entries, ascending by
/// date number.
pub fn parse_log_window(content: &str, max_lines: usize) -> Vec<LogEntry> {
    let mut entries: Vec<LogEntry> = Vec::new();
    let mut last_date_number = 0u64;

    for line in content.lines() {
        if line.is_empty() {
            continue;
        }
        if let Some(date_number) = parse_date_number(line) {
            last_date_number = date_number;
        }
        entries.push(LogEntry::new(last_date_number, line));
    }

    if entries.len() > max_lines {
        entries.drain(..entries.len() - max_lines);
    }
    entries
}

/// Extracts the `yyyyMMddHHmmssSSS` date number from a line's bracketed
/// timestamp prefix, `None` for continuation lines.
fn parse_date_number(line: &str) -> Option<u64> {
    if !line.starts_with('[') {
        return None;
    }
    let stamp = line.get(1..TIMESTAMP_PREFIX_LEN - 1)?;
    let parsed = NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S%.3f").ok()?;
    parsed
        .format("%Y%m%d%H%M%S%3f")
        .to_string()
        .parse::<u64>()
        .ok()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    const SAMPLE: &str = "\
[2026-08-07 10:15:30.123] [info] grabber started
[2026-08-07 10:15:31.500] [warn] device busy
stack line without timestamp
[2026-08-07 10:15:32.000] [error] device open failed
";

    // ── Parsing ───────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_extracts_date_numbers_from_prefix() {
        let window = parse_log_window(SAMPLE, 100);

        assert_eq!(window.len(), 4);
        assert_eq!(window[0].date_number, 20260807101530123);
        assert_eq!(window[1].date_number, 20260807101531500);
        assert_eq!(window[3].date_number, 20260807101532000);
    }

    #[test]
    fn test_continuation_line_inherits_previous_stamp() {
        let window = parse_log_window(SAMPLE, 100);
        assert_eq!(window[2].text, "stack line without timestamp");
        assert_eq!(window[2].date_number, window[1].date_number);
    }

    #[test]
    fn test_window_is_ascending_by_date_number() {
        let window = parse_log_window(SAMPLE, 100);
        for pair in window.windows(2) {
            assert!(pair[0].date_number <= pair[1].date_number);
        }
    }

    #[test]
    fn test_window_keeps_only_the_last_max_lines() {
        let window = parse_log_window(SAMPLE, 2);

        assert_eq!(window.len(), 2);
        assert_eq!(window[0].text, "stack line without timestamp");
        assert!(window[1].text.contains("[error]"));
    }

    #[test]
    fn test_empty_content_yields_empty_window() {
        assert!(parse_log_window("", 100).is_empty());
    }

    #[test]
    fn test_malformed_timestamp_is_treated_as_continuation() {
        let content = "[not a timestamp but long enough] text\n";
        let window = parse_log_window(content, 100);
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].date_number, 0);
    }

    // ── File polling ──────────────────────────────────────────────────────────

    #[test]
    fn test_source_delivers_window_from_file() {
        // Arrange – write a sample log under a unique temp path
        let dir = std::env::temp_dir().join(format!("keyscope_test_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("daemon.log");
        std::fs::write(&path, SAMPLE).unwrap();

        let source = FileLogSource::new(&path, Duration::from_millis(10), 100);

        // Act
        let rx = source.start().expect("start should succeed");
        let window = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("should deliver a window");
        source.stop();

        // Assert
        assert_eq!(window.len(), 4);
        assert_eq!(window[0].date_number, 20260807101530123);

        // Cleanup
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_source_tolerates_missing_file() {
        let dir = std::env::temp_dir().join(format!("keyscope_test_{}", Uuid::new_v4()));
        let path = dir.join("never-written.log");

        let source = FileLogSource::new(&path, Duration::from_millis(10), 100);
        let rx = source.start().expect("start should succeed");

        // No deliveries, but no panic either.
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
        source.stop();
    }
}
