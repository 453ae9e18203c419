//! Process model.
//!
//! A process is a unit of CPU work waiting to be scheduled: it becomes
//! ready at its arrival time and needs the CPU for its burst duration.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled on a single CPU.
///
/// # Time Representation
/// All times are abstract ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier (displayed as `P<id>`).
    pub id: u32,
    /// Tick at which the process becomes ready.
    pub arrival: i64,
    /// CPU time required to complete.
    pub burst: i64,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(id: u32, arrival: i64, burst: i64) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Display label, e.g. `P3`.
    pub fn label(&self) -> String {
        format!("P{}", self.id)
    }
}

/// The fixed four-process workload used by the `process` command.
///
/// A fresh vector is built on every call so no simulation can observe
/// another's changes.
pub fn sample_processes() -> Vec<Process> {
    vec![
        Process::new(1, 0, 8).with_priority(3),
        Process::new(2, 1, 4).with_priority(1),
        Process::new(3, 2, 9).with_priority(4),
        Process::new(4, 3, 5).with_priority(2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(7, 3, 10).with_priority(2);
        assert_eq!(p.id, 7);
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 10);
        assert_eq!(p.priority, 2);
        assert_eq!(p.label(), "P7");
    }

    #[test]
    fn test_sample_processes() {
        let procs = sample_processes();
        assert_eq!(procs.len(), 4);
        assert_eq!(procs[0], Process::new(1, 0, 8).with_priority(3));
        assert_eq!(procs[3], Process::new(4, 3, 5).with_priority(2));
        // Arrivals are already in ascending order
        assert!(procs.windows(2).all(|w| w[0].arrival <= w[1].arrival));
    }
}
