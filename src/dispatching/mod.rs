//! Dispatching rules and rule engine for process ordering.
//!
//! Non-preemptive CPU schedulers differ only in the order they pick
//! processes. FCFS keeps the order processes were submitted in; other
//! policies are expressed as dispatching rules (SJF) composed by a
//! [`RuleEngine`].
//!
//! # Usage
//!
//! ```
//! use argos_shell::dispatching::{rules, RuleEngine};
//! use argos_shell::models::sample_processes;
//!
//! let engine = RuleEngine::new().with_rule(rules::Sjf);
//!
//! let procs = sample_processes();
//! let order = engine.sort_indices(&procs);
//! assert_eq!(procs[order[0]].id, 2); // shortest burst
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
