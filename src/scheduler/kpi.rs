//! Timeline quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Idle time | Ticks in [0, makespan) with nothing running |
//! | Avg waiting time | Mean(start - arrival) |
//! | Avg turnaround time | Mean(completion - arrival) |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use crate::models::{Process, Timeline};

/// Timeline performance indicators. All times are in ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Total CPU idle time before the makespan.
    pub idle_time: i64,
    /// Mean time spent ready but not running.
    pub avg_waiting_time: f64,
    /// Mean time from arrival to completion.
    pub avg_turnaround_time: f64,
}

impl TimelineKpi {
    /// Computes KPIs from a timeline and the processes it scheduled.
    ///
    /// Processes without a timeline entry are ignored.
    pub fn calculate(timeline: &Timeline, processes: &[Process]) -> Self {
        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut counted: usize = 0;

        for process in processes {
            if let Some(entry) = timeline.entry_for(process.id) {
                counted += 1;
                total_waiting += entry.start - process.arrival;
                total_turnaround += entry.end - process.arrival;
            }
        }

        let mean = |total: i64| {
            if counted == 0 {
                0.0
            } else {
                total as f64 / counted as f64
            }
        };

        Self {
            makespan: timeline.makespan(),
            idle_time: timeline.idle_time(),
            avg_waiting_time: mean(total_waiting),
            avg_turnaround_time: mean(total_turnaround),
        }
    }
}
