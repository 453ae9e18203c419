//! Scheduling simulators and timeline KPIs.
//!
//! # Disk
//!
//! `DiskScheduler` replays a request queue under FCFS or SSTF and reports
//! the head path and total seek distance.
//!
//! # Process
//!
//! `ProcessScheduler` runs a non-preemptive single-CPU schedule in the order
//! chosen by a dispatching rule engine (FCFS = earliest arrival, SJF =
//! shortest burst) and produces a `Timeline`.
//!
//! # KPI
//!
//! `TimelineKpi` computes makespan, idle time, and average waiting and
//! turnaround times.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5, 11
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4, 5.4

pub mod disk;
mod kpi;
pub mod process;

pub use disk::{DiskAlgorithm, DiskScheduler, DiskSimulation, SeekPlan};
pub use kpi::TimelineKpi;
pub use process::{ProcessAlgorithm, ProcessScheduler, ProcessSimulation};
