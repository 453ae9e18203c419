//! Rule engine for multi-criteria dispatching.
//!
//! Applies dispatching rules in sequence, falling through to the next rule
//! only on ties. Processes that tie on every rule keep their input order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::Process;

/// A composable rule engine for process prioritization.
///
/// Rules are evaluated in the order they were added; a later rule only
/// decides between processes every earlier rule scored equally. An engine
/// with no rules leaves the input order untouched.
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// Adds the primary (or next) rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts processes by priority (highest priority first).
    ///
    /// Returns indices into the given slice; the slice itself is never
    /// reordered. The sort is stable.
    pub fn sort_indices(&self, processes: &[Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }

    fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a);
            let score_b = rule.evaluate(b);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }
        Ordering::Equal
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    #[test]
    fn test_sjf_ordering() {
        let procs = vec![
            Process::new(1, 0, 9),
            Process::new(2, 0, 2),
            Process::new(3, 0, 5),
        ];
        let engine = RuleEngine::new().with_rule(rules::Sjf);

        let indices = engine.sort_indices(&procs);
        assert_eq!(indices, vec![1, 2, 0]);
    }

    #[test]
    fn test_stable_on_ties() {
        // Equal bursts keep their input order
        let procs = vec![
            Process::new(3, 0, 4),
            Process::new(1, 0, 4),
            Process::new(2, 0, 1),
        ];
        let engine = RuleEngine::new().with_rule(rules::Sjf);

        let indices = engine.sort_indices(&procs);
        assert_eq!(indices, vec![2, 0, 1]);
    }

    #[test]
    fn test_no_rules_keeps_input_order() {
        let procs = vec![Process::new(3, 9, 1), Process::new(1, 0, 7)];
        let engine = RuleEngine::new();
        assert_eq!(engine.sort_indices(&procs), vec![0, 1]);
        assert!(engine.rule_names().is_empty());
    }

    #[test]
    fn test_empty_processes() {
        let engine = RuleEngine::new().with_rule(rules::Sjf);
        assert!(engine.sort_indices(&[]).is_empty());
        assert_eq!(engine.rule_names(), vec!["SJF"]);
    }

    #[test]
    fn test_debug_lists_rules() {
        let engine = RuleEngine::default().with_rule(rules::Sjf);
        assert_eq!(format!("{engine:?}"), r#"RuleEngine { rules: ["SJF"] }"#);
    }
}
