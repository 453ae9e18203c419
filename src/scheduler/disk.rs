//! Disk-arm (seek) scheduling.
//!
//! # Algorithms
//!
//! - **FCFS**: serve requests in arrival order.
//! - **SSTF**: always serve the pending request closest to the head.
//! - **SCAN / C-SCAN / LOOK / C-LOOK**: catalogued, not simulated.
//!
//! Total seek distance is the sum of absolute cylinder differences between
//! consecutive head positions, starting from the head-start position.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{DiskRequest, DiskWorkload};
use crate::simulation::{Algorithm, Simulation};

/// Disk scheduling algorithms known to the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiskAlgorithm {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Seek Time First.
    Sstf,
    /// Elevator sweep to the disk edge.
    Scan,
    /// Circular SCAN.
    CScan,
    /// Sweep that turns at the last request.
    Look,
    /// Circular LOOK.
    CLook,
}

impl Algorithm for DiskAlgorithm {
    const ALL: &'static [Self] = &[
        Self::Fcfs,
        Self::Sstf,
        Self::Scan,
        Self::CScan,
        Self::Look,
        Self::CLook,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sstf => "sstf",
            Self::Scan => "scan",
            Self::CScan => "cscan",
            Self::Look => "look",
            Self::CLook => "clook",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come, First-Served",
            Self::Sstf => "Shortest Seek Time First",
            Self::Scan => "SCAN (Elevator)",
            Self::CScan => "C-SCAN (Circular SCAN)",
            Self::Look => "LOOK",
            Self::CLook => "C-LOOK",
        }
    }
}

/// Head movement produced by a disk scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekPlan {
    /// Positions visited, starting with the head-start position.
    pub sequence: Vec<DiskRequest>,
    /// Sum of |pos[i] - pos[i-1]| over the sequence.
    pub total_seek: u64,
}

impl SeekPlan {
    /// Builds a plan by moving the head from `head_start` through `order`.
    pub fn from_order(
        head_start: DiskRequest,
        order: impl IntoIterator<Item = DiskRequest>,
    ) -> Self {
        let mut sequence = vec![head_start];
        let mut total_seek = 0u64;
        let mut current = head_start;

        for cylinder in order {
            total_seek += u64::from(current.abs_diff(cylinder));
            current = cylinder;
            sequence.push(cylinder);
        }

        Self {
            sequence,
            total_seek,
        }
    }

    /// Requests served, excluding the head-start position.
    pub fn served(&self) -> &[DiskRequest] {
        &self.sequence[1..]
    }
}

impl fmt::Display for SeekPlan {
    /// Formats the sequence as `53 → 98 → 183`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cylinder) in self.sequence.iter().enumerate() {
            if i != 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{cylinder}")?;
        }
        Ok(())
    }
}

/// First-Come, First-Served: requests in queue order.
pub fn fcfs(workload: &DiskWorkload) -> SeekPlan {
    SeekPlan::from_order(workload.head_start, workload.requests.iter().copied())
}

/// Shortest Seek Time First.
///
/// # Algorithm
/// Repeatedly pick the pending request nearest the current head position.
/// Ties go to the request that appears first in the pending list.
///
/// # Complexity
/// O(n²) for n requests.
pub fn sstf(workload: &DiskWorkload) -> SeekPlan {
    let mut remaining = workload.requests.clone();
    let mut order = Vec::with_capacity(remaining.len());
    let mut current = workload.head_start;

    while let Some(idx) = remaining
        .iter()
        .enumerate()
        .min_by_key(|&(i, &cylinder)| (current.abs_diff(cylinder), i))
        .map(|(i, _)| i)
    {
        current = remaining.remove(idx);
        order.push(current);
    }

    SeekPlan::from_order(workload.head_start, order)
}

/// Result type of a disk simulation.
pub type DiskSimulation = Simulation<DiskAlgorithm, SeekPlan>;

/// Disk scheduling simulator over a single request queue.
///
/// # Example
///
/// ```
/// use argos_shell::models::DiskWorkload;
/// use argos_shell::scheduler::DiskScheduler;
///
/// let scheduler = DiskScheduler::new(DiskWorkload::sample());
/// let run = scheduler.run("fcfs");
/// assert_eq!(run.output().unwrap().total_seek, 640);
/// ```
#[derive(Debug, Clone)]
pub struct DiskScheduler {
    workload: DiskWorkload,
}

impl DiskScheduler {
    /// Creates a simulator for the given queue.
    pub fn new(workload: DiskWorkload) -> Self {
        Self { workload }
    }

    /// The queue being simulated.
    pub fn workload(&self) -> &DiskWorkload {
        &self.workload
    }

    /// Runs an algorithm.
    pub fn simulate(&self, algorithm: DiskAlgorithm) -> DiskSimulation {
        let output = match algorithm {
            DiskAlgorithm::Fcfs => fcfs(&self.workload),
            DiskAlgorithm::Sstf => sstf(&self.workload),
            DiskAlgorithm::Scan
            | DiskAlgorithm::CScan
            | DiskAlgorithm::Look
            | DiskAlgorithm::CLook => {
                log::debug!("disk algorithm {} has no simulation", algorithm.code());
                return Simulation::NotImplemented(algorithm);
            }
        };

        log::debug!(
            "disk {}: {} requests, total seek {}",
            algorithm.code(),
            self.workload.len(),
            output.total_seek
        );
        Simulation::Completed { algorithm, output }
    }

    /// Runs an algorithm by identifier; empty or unknown identifiers yield
    /// the catalog.
    pub fn run(&self, identifier: &str) -> DiskSimulation {
        match DiskAlgorithm::parse(identifier) {
            Some(algorithm) => self.simulate(algorithm),
            None => Simulation::unknown(),
        }
    }
}

impl Default for DiskScheduler {
    fn default() -> Self {
        Self::new(DiskWorkload::sample())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_sample() {
        let plan = fcfs(&DiskWorkload::sample());
        assert_eq!(plan.sequence, vec![53, 98, 183, 37, 122, 14, 124, 65, 67]);
        assert_eq!(plan.total_seek, 640);
    }

    #[test]
    fn test_sstf_sample() {
        let plan = sstf(&DiskWorkload::sample());
        assert_eq!(plan.sequence, vec![53, 65, 67, 37, 14, 98, 122, 124, 183]);
        assert_eq!(plan.total_seek, 236);
        assert!(plan.total_seek <= fcfs(&DiskWorkload::sample()).total_seek);
    }

    #[test]
    fn test_sstf_picks_closest_at_every_step() {
        let workload = DiskWorkload::sample();
        let plan = sstf(&workload);
        let mut pending = workload.requests.clone();

        for pair in plan.sequence.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let best = pending.iter().map(|&c| from.abs_diff(c)).min().unwrap();
            assert_eq!(from.abs_diff(to), best);
            let pos = pending.iter().position(|&c| c == to).unwrap();
            pending.remove(pos);
        }
        assert!(pending.is_empty());
    }

    #[test]
    fn test_sstf_tie_goes_to_first_in_list() {
        // 40 and 60 are both 10 away from 50; 60 is listed first
        let workload = DiskWorkload::new(50).with_requests([60, 40]);
        let plan = sstf(&workload);
        assert_eq!(plan.sequence, vec![50, 60, 40]);
        assert_eq!(plan.total_seek, 30);
    }

    #[test]
    fn test_empty_queue() {
        let workload = DiskWorkload::new(53);
        for plan in [fcfs(&workload), sstf(&workload)] {
            assert_eq!(plan.sequence, vec![53]);
            assert_eq!(plan.total_seek, 0);
            assert!(plan.served().is_empty());
        }
    }

    #[test]
    fn test_does_not_mutate_workload() {
        let scheduler = DiskScheduler::default();
        let before = scheduler.workload().clone();
        let _ = scheduler.simulate(DiskAlgorithm::Sstf);
        assert_eq!(scheduler.workload(), &before);
    }

    #[test]
    fn test_display_sequence() {
        let plan = SeekPlan::from_order(53, [98, 183]);
        assert_eq!(plan.to_string(), "53 → 98 → 183");
        assert_eq!(plan.total_seek, 130);
    }

    #[test]
    fn test_unimplemented_algorithms() {
        let scheduler = DiskScheduler::default();
        for code in ["scan", "cscan", "look", "clook"] {
            let run = scheduler.run(code);
            assert!(
                matches!(run, Simulation::NotImplemented(_)),
                "{code} should be flagged as not implemented"
            );
        }
    }

    #[test]
    fn test_unknown_identifier_returns_catalog() {
        let scheduler = DiskScheduler::default();
        for ident in ["foo", ""] {
            match scheduler.run(ident) {
                Simulation::Unknown { catalog } => {
                    let codes: Vec<_> = catalog.iter().map(|c| c.code).collect();
                    assert_eq!(codes, vec!["fcfs", "sstf", "scan", "cscan", "look", "clook"]);
                }
                other => panic!("expected catalog, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_run_is_deterministic() {
        let scheduler = DiskScheduler::default();
        assert_eq!(scheduler.run("sstf"), scheduler.run("SSTF"));
    }
}
