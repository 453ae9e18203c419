//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for higher priority processes.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// Shortest Job First.
///
/// Prioritizes processes with shorter CPU bursts. Minimizes average waiting
/// time when every process is already in the ready queue.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl DispatchingRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sjf_scores_burst() {
        let long = Process::new(1, 0, 10);
        let short = Process::new(2, 4, 1);
        assert!(Sjf.evaluate(&short) < Sjf.evaluate(&long));
    }

    #[test]
    fn test_names() {
        assert_eq!(Sjf.name(), "SJF");
        assert_eq!(Sjf.description(), "Shortest Job First");
    }
}
