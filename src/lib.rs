//! ArgOS Shell: an interactive teaching shell for operating-system
//! scheduling algorithms.
//!
//! Simulates disk-arm scheduling (seek sequence and total head movement)
//! and non-preemptive CPU scheduling (execution timeline and waiting and
//! turnaround times) over fixed sample workloads, alongside a few text
//! utilities.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `DiskWorkload`, `Timeline`
//! - **`validation`**: Process set integrity checks (duplicate IDs, bursts, arrivals)
//! - **`simulation`**: `Algorithm` catalogs and the `Simulation` result
//! - **`dispatching`**: Ordering rules (SJF) and the `RuleEngine`
//! - **`scheduler`**: Disk and process simulators, timeline KPIs
//! - **`shell`**: Tokenizer, command registry, commands, read-eval loop
//! - **`config`**: `ShellConfig` defaults and environment overrides
//! - **`error`**: `ArgosError` and the crate `Result`
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts"
//! - Tanenbaum & Bos (2014), "Modern Operating Systems"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod shell;
pub mod simulation;
pub mod validation;

pub use error::{ArgosError, Result};
