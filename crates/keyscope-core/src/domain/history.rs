//! Fixed-capacity, FIFO-evicting display history.
//!
//! Two operating modes cover the two viewer variants:
//!
//! - **Historical**: starts empty and grows up to `capacity`; appending
//!   beyond that evicts the single oldest entry. Clearing empties the
//!   buffer so the viewer can show its "no entries" state.
//!
//! - **Live queue**: the buffer always holds exactly `capacity` entries.
//!   Clearing resets it to `capacity` placeholders and every append evicts
//!   the oldest element (placeholder or real). The constant length keeps an
//!   external differencing renderer from ever observing a size change.
//!
//! These are pure container operations; there are no error states.

use std::collections::VecDeque;

use super::entry::DisplayEntry;

/// Operating mode of a [`BoundedHistory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// Starts empty, length grows up to capacity.
    Historical,
    /// Length is pinned at capacity via placeholder padding.
    LiveQueue,
}

/// A capacity-bounded, insertion-ordered display list.
#[derive(Debug)]
pub struct BoundedHistory {
    capacity: usize,
    mode: HistoryMode,
    entries: VecDeque<DisplayEntry>,
}

impl BoundedHistory {
    /// Creates a history with the given positive capacity.
    ///
    /// A live-queue history starts pre-filled with placeholders.
    pub fn new(capacity: usize, mode: HistoryMode) -> Self {
        debug_assert!(capacity > 0, "history capacity must be positive");
        let mut history = Self {
            capacity,
            mode,
            entries: VecDeque::with_capacity(capacity + 1),
        };
        history.clear();
        history
    }

    /// Convenience constructor for [`HistoryMode::Historical`].
    pub fn historical(capacity: usize) -> Self {
        Self::new(capacity, HistoryMode::Historical)
    }

    /// Convenience constructor for [`HistoryMode::LiveQueue`].
    pub fn live_queue(capacity: usize) -> Self {
        Self::new(capacity, HistoryMode::LiveQueue)
    }

    /// Appends an entry, evicting the oldest element when the buffer would
    /// exceed its capacity.
    pub fn append(&mut self, entry: DisplayEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Resets the buffer to its initial state: empty in historical mode,
    /// all placeholders in live-queue mode.
    pub fn clear(&mut self) {
        self.entries.clear();
        if self.mode == HistoryMode::LiveQueue {
            self.entries
                .extend((0..self.capacity).map(|_| DisplayEntry::placeholder()));
        }
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the operating mode.
    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// Current number of entries (placeholders included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no entries are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the entries in insertion order, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &DisplayEntry> {
        self.entries.iter()
    }

    /// Returns an owned, immutable copy of the current contents for
    /// rendering or export.
    pub fn snapshot(&self) -> Vec<DisplayEntry> {
        self.entries.iter().cloned().collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
