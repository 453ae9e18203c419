//! Error types for the ArgOS shell.

use std::io;

use crate::shell::MathError;
use crate::validation::ValidationError;

/// Errors produced by commands and the simulators.
///
/// None of these end the shell; the read-eval loop prints them and moves on.
#[derive(Debug, thiserror::Error)]
pub enum ArgosError {
    /// A required argument was missing. Holds the usage line.
    #[error("Usage: {0}")]
    Usage(String),

    #[error("Command not found: {0}. Type 'help' for available commands.")]
    CommandNotFound(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("Math evaluation error: {0}")]
    Math(#[from] MathError),

    /// The argument bot has no reply template for a style.
    #[error("no responses available for style: {0}")]
    NoResponses(String),

    #[error("invalid workload: {}", join_messages(.0))]
    InvalidWorkload(Vec<ValidationError>),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<Vec<ValidationError>> for ArgosError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidWorkload(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ArgosError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::validation::validate_processes;

    #[test]
    fn usage_display() {
        let e = ArgosError::Usage("arg <topic>".into());
        assert_eq!(format!("{e}"), "Usage: arg <topic>");
    }

    #[test]
    fn command_not_found_display() {
        let e = ArgosError::CommandNotFound("frobnicate".into());
        assert_eq!(
            format!("{e}"),
            "Command not found: frobnicate. Type 'help' for available commands."
        );
    }

    #[test]
    fn math_error_display() {
        let e: ArgosError = MathError::DivisionByZero.into();
        assert_eq!(format!("{e}"), "Math evaluation error: Division by zero");
    }

    #[test]
    fn invalid_workload_display() {
        let errors =
            validate_processes(&[Process::new(1, 0, 2), Process::new(1, 0, 0)]).unwrap_err();
        let e: ArgosError = errors.into();
        let msg = format!("{e}");
        assert!(msg.starts_with("invalid workload: Duplicate process ID: P1"));
        assert!(msg.contains("; "));
    }

    #[test]
    fn io_error_from() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let e: ArgosError = io_err.into();
        assert!(format!("{e}").contains("closed"));
    }
}
