//! Non-preemptive CPU process scheduling.
//!
//! # Algorithm
//!
//! 1. Order processes by the configured rule engine (input order if none).
//! 2. Walk the order with a single clock starting at t=0.
//! 3. If the next process has not arrived yet, the CPU idles until it does.
//! 4. Run the process to completion and advance the clock by its burst.
//!
//! FCFS keeps the order the processes were given in; SJF orders by burst
//! length over the whole set.
//! SJF therefore does not restrict its choice to processes that have
//! already arrived: a short job that arrives late can still be picked
//! first, and the CPU idles until it shows up. Textbook SJF would only
//! consider the ready queue.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use crate::dispatching::{rules, RuleEngine};
use crate::error::Result;
use crate::models::{Process, Timeline, TimelineEntry};
use crate::simulation::{Algorithm, Simulation};
use crate::validation::validate_processes;

/// Process scheduling algorithms known to the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessAlgorithm {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Priority scheduling.
    Priority,
    /// Round Robin.
    RoundRobin,
    /// Shortest Remaining Job First (preemptive SJF).
    Srjf,
}

impl Algorithm for ProcessAlgorithm {
    const ALL: &'static [Self] = &[
        Self::Fcfs,
        Self::Sjf,
        Self::Priority,
        Self::RoundRobin,
        Self::Srjf,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Priority => "priority",
            Self::RoundRobin => "rr",
            Self::Srjf => "srjf",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come, First-Served",
            Self::Sjf => "Shortest Job First",
            Self::Priority => "Priority Scheduling",
            Self::RoundRobin => "Round Robin",
            Self::Srjf => "Shortest Remaining Job First",
        }
    }
}

impl ProcessAlgorithm {
    /// Rule engine that realises this algorithm, or `None` when the
    /// algorithm has no simulation.
    pub fn rule_engine(self) -> Option<RuleEngine> {
        match self {
            Self::Fcfs => Some(RuleEngine::new()),
            Self::Sjf => Some(RuleEngine::new().with_rule(rules::Sjf)),
            Self::Priority | Self::RoundRobin | Self::Srjf => None,
        }
    }
}

/// Result type of a process simulation.
pub type ProcessSimulation = Simulation<ProcessAlgorithm, Timeline>;

/// Non-preemptive single-CPU scheduler.
///
/// # Example
///
/// ```
/// use argos_shell::models::sample_processes;
/// use argos_shell::scheduler::ProcessScheduler;
///
/// let timeline = ProcessScheduler::new().schedule(&sample_processes());
/// assert_eq!(timeline.to_string(), "P1 (0-8) → P2 (8-12) → P3 (12-21) → P4 (21-26)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProcessScheduler {
    rule_engine: Option<RuleEngine>,
}

impl ProcessScheduler {
    /// Creates a scheduler that runs processes in input order.
    pub fn new() -> Self {
        Self { rule_engine: None }
    }

    /// Sets a rule engine for process ordering.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = Some(engine);
        self
    }

    /// Builds the execution timeline. `processes` is only read.
    ///
    /// Times saturate at `i64::MAX`; run [`validate_processes`] first to
    /// reject sets whose schedule would not fit.
    pub fn schedule(&self, processes: &[Process]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut clock: i64 = 0;

        for idx in self.sort_processes(processes) {
            let process = &processes[idx];
            if process.arrival > clock {
                // CPU idles until the process arrives
                clock = process.arrival;
            }
            let end = clock.saturating_add(process.burst);
            timeline.push(TimelineEntry::new(process.id, clock, end));
            clock = end;
        }

        timeline
    }

    /// Returns process indices in dispatch order.
    fn sort_processes(&self, processes: &[Process]) -> Vec<usize> {
        match self.rule_engine {
            Some(ref engine) => engine.sort_indices(processes),
            None => (0..processes.len()).collect(),
        }
    }
}

/// Validates `processes` and runs an algorithm over them.
pub fn simulate(
    algorithm: ProcessAlgorithm,
    processes: &[Process],
) -> Result<ProcessSimulation> {
    validate_processes(processes)?;

    let Some(engine) = algorithm.rule_engine() else {
        log::debug!("process algorithm {} has no simulation", algorithm.code());
        return Ok(Simulation::NotImplemented(algorithm));
    };

    let output = ProcessScheduler::new()
        .with_rule_engine(engine.clone())
        .schedule(processes);
    log::debug!(
        "process {} (rules {:?}): {} processes, makespan {}",
        algorithm.code(),
        engine.rule_names(),
        processes.len(),
        output.makespan()
    );
    Ok(Simulation::Completed { algorithm, output })
}

/// Runs an algorithm by identifier; empty or unknown identifiers yield the
/// catalog without touching `processes`.
pub fn run(identifier: &str, processes: &[Process]) -> Result<ProcessSimulation> {
    match ProcessAlgorithm::parse(identifier) {
        Some(algorithm) => simulate(algorithm, processes),
        None => Ok(Simulation::unknown()),
    }
}
