//! Ordered merge of operator dividers into the external log window.
//!
//! The external log source periodically delivers a *complete replacement*
//! window of lines, sorted ascending by date number. The source may truncate
//! or rotate, silently dropping its oldest lines. The timeline owns the
//! operator-inserted dividers and, on every refresh, produces the displayed
//! sequence by merging the two ascending streams.
//!
//! Dividers older than the window's oldest surviving line are pruned
//! permanently: they refer to a region of the log the source no longer
//! shows, and keeping them would pile dividers up at the top of the view.
//!
//! On equal date numbers log lines win; the merge is stable, so log lines
//! are never reordered relative to each other.

use tracing::debug;

use super::LogEntry;

/// Divider state retained across log-window refreshes.
#[derive(Debug, Default)]
pub struct LogTimeline {
    // Ascending by date_number; add_divider stamps are monotonic.
    dividers: Vec<LogEntry>,
}

impl LogTimeline {
    /// Creates a timeline with no dividers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an operator divider stamped with `date_number`.
    ///
    /// Stamps come from a monotonic wall clock, so appending keeps the list
    /// sorted.
    pub fn add_divider(&mut self, date_number: u64) {
        debug_assert!(
            self.dividers
                .last()
                .map_or(true, |last| last.date_number <= date_number),
            "divider stamps must be non-decreasing"
        );
        self.dividers.push(LogEntry::divider(date_number));
    }

    /// Current dividers, oldest first.
    pub fn dividers(&self) -> &[LogEntry] {
        &self.dividers
    }

    /// Merges the refreshed window with the retained dividers and returns
    /// the new displayed sequence.
    ///
    /// `log_lines` must be sorted ascending by date number. Dividers are
    /// retained across calls; the only mutation here is pruning those that
    /// fell off the front of the window.
    pub fn merge(&mut self, log_lines: &[LogEntry]) -> Vec<LogEntry> {
        if let Some(oldest) = log_lines.first() {
            let before = self.dividers.len();
            self.dividers
                .retain(|d| d.date_number >= oldest.date_number);
            let pruned = before - self.dividers.len();
            if pruned > 0 {
                debug!(pruned, "dropped dividers older than the log window");
            }
        }

        let mut merged = Vec::with_capacity(log_lines.len() + self.dividers.len());
        let mut dividers = self.dividers.iter().peekable();

        for line in log_lines {
            while let Some(divider) = dividers.peek() {
                // Strictly less: log lines take priority on ties.
                if divider.date_number < line.date_number {
                    merged.push((*divider).clone());
                    dividers.next();
                } else {
                    break;
                }
            }
            merged.push(line.clone());
        }
        merged.extend(dividers.cloned());

        merged
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn line(date_number: u64) -> LogEntry {
        LogEntry::new(date_number, format!("line {date_number}"))
    }

    fn date_numbers(entries: &[LogEntry]) -> Vec<u64> {
        entries.iter().map(|e| e.date_number).collect()
    }

    #[test]
    fn test_merge_without_dividers_returns_window_unchanged() {
        let mut timeline = LogTimeline::new();
        let window = [line(10), line(20), line(30)];
        let merged = timeline.merge(&window);
        assert_eq!(date_numbers(&merged), [10, 20, 30]);
    }

    #[test]
    fn test_merge_interleaves_dividers_by_date_number() {
        // Arrange – the reference sequence from the engine contract
        let mut timeline = LogTimeline::new();
        timeline.add_divider(5);
        timeline.add_divider(15);
        timeline.add_divider(25);

        // Act
        let merged = timeline.merge(&[line(10), line(20), line(30)]);

        // Assert
        assert_eq!(date_numbers(&merged), [5, 10, 15, 20, 25, 30]);
    }

    #[test]
    fn test_rotated_window_prunes_stale_dividers() {
        // Arrange – same state as above, then line 10 rotates out
        let mut timeline = LogTimeline::new();
        timeline.add_divider(5);
        timeline.add_divider(15);
        timeline.add_divider(25);
        timeline.merge(&[line(10), line(20), line(30)]);

        // Act – dividers 5 and 15 both predate the new oldest line (20)
        let merged = timeline.merge(&[line(20), line(30)]);

        // Assert – pruned permanently, 25 survives
        assert_eq!(date_numbers(&merged), [20, 25, 30]);
        assert_eq!(date_numbers(timeline.dividers()), [25]);
    }

    #[test]
    fn test_dividers_are_retained_across_merges() {
        let mut timeline = LogTimeline::new();
        timeline.add_divider(15);

        let first = timeline.merge(&[line(10), line(20)]);
        let second = timeline.merge(&[line(10), line(20)]);

        assert_eq!(date_numbers(&first), [10, 15, 20]);
        assert_eq!(date_numbers(&second), [10, 15, 20]);
    }

    #[test]
    fn test_log_line_wins_tie_with_divider() {
        let mut timeline = LogTimeline::new();
        timeline.add_divider(20);

        let merged = timeline.merge(&[line(20), line(30)]);

        // The divider shares date number 20 with a line; the line comes first.
        assert_eq!(date_numbers(&merged), [20, 20, 30]);
        assert!(!merged[0].is_divider());
        assert!(merged[1].is_divider());
    }

    #[test]
    fn test_trailing_dividers_are_emitted_after_last_line() {
        let mut timeline = LogTimeline::new();
        timeline.add_divider(40);
        timeline.add_divider(50);

        let merged = timeline.merge(&[line(10), line(20)]);

        assert_eq!(date_numbers(&merged), [10, 20, 40, 50]);
    }

    #[test]
    fn test_empty_window_shows_dividers_and_prunes_nothing() {
        let mut timeline = LogTimeline::new();
        timeline.add_divider(5);
        timeline.add_divider(15);

        let merged = timeline.merge(&[]);

        assert_eq!(date_numbers(&merged), [5, 15]);
        assert_eq!(timeline.dividers().len(), 2, "no window, no pruning");
    }

    #[test]
    fn test_duplicate_line_date_numbers_keep_input_order() {
        let mut timeline = LogTimeline::new();
        let a = LogEntry::new(20, "first");
        let b = LogEntry::new(20, "second");

        let merged = timeline.merge(&[a.clone(), b.clone()]);

        assert_eq!(merged, vec![a, b]);
    }

    #[test]
    fn test_all_dividers_pruned_when_window_moves_past_them() {
        let mut timeline = LogTimeline::new();
        timeline.add_divider(1);
        timeline.add_divider(2);

        let merged = timeline.merge(&[line(100)]);

        assert_eq!(date_numbers(&merged), [100]);
        assert!(timeline.dividers().is_empty());
    }
}
