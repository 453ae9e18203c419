//! Execution timeline (solution) model.
//!
//! A timeline is the ordered list of CPU slices produced by a process
//! scheduler. Non-preemptive schedulers emit exactly one entry per process.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One contiguous run of a process on the CPU, over `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Scheduled process ID.
    pub process_id: u32,
    /// Start tick.
    pub start: i64,
    /// End tick.
    pub end: i64,
}

impl TimelineEntry {
    /// Creates a new entry.
    pub fn new(process_id: u32, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Length of the slice (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl fmt::Display for TimelineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{} ({}-{})", self.process_id, self.start, self.end)
    }
}

/// A complete execution timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Entries in execution order.
    pub entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: TimelineEntry) {
        self.entries.push(entry);
    }

    /// Latest end tick across all entries.
    pub fn makespan(&self) -> i64 {
        self.entries.iter().map(|e| e.end).max().unwrap_or(0)
    }

    /// Ticks in `[0, makespan)` during which the CPU ran nothing.
    pub fn idle_time(&self) -> i64 {
        let busy: i64 = self.entries.iter().map(TimelineEntry::duration).sum();
        self.makespan() - busy
    }

    /// Finds the first entry for a process.
    pub fn entry_for(&self, process_id: u32) -> Option<&TimelineEntry> {
        self.entries.iter().find(|e| e.process_id == process_id)
    }

    /// Process IDs in execution order.
    pub fn order(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.process_id).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i != 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
