//! Input validation for process workloads.
//!
//! Checks structural integrity of a process set before it is scheduled.
//! Detects:
//! - Duplicate process IDs
//! - Non-positive burst durations
//! - Negative arrival times
//! - Schedules that would end past the last representable tick
//!
//! Disk workloads need no checks: every `u32` cylinder is a valid request and
//! an empty queue is a legal (zero-seek) input.

use crate::models::Process;
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// Latest arrival plus total burst does not fit in an `i64`.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every burst is strictly positive
/// 3. No arrival before t=0
/// 4. Latest arrival plus total burst fits in an `i64`, which bounds the
///    end of any non-preemptive schedule of the set
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.label()),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst {}", p.label(), p.burst),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} arrives at negative time {}", p.label(), p.arrival),
            ));
        }
    }

    let latest_arrival = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    let horizon = processes
        .iter()
        .filter(|p| p.burst > 0)
        .try_fold(latest_arrival.max(0), |end, p| end.checked_add(p.burst));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Process set runs past the maximum representable time",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
