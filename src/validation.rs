//! Input validation for simulation runs.
//!
//! Checks the integrity of a process set before any policy runs.
//! Detects:
//! - Empty input
//! - Negative arrival times
//! - Non-positive burst times
//! - Duplicate process IDs
//! - Missing priorities (Priority policy only)
//! - Non-positive quanta (Round-Robin only)
//!
//! Any violation rejects the whole run; no partial simulation happens.

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Zero processes supplied.
    EmptyInput,
    /// A process arrives before t = 0.
    InvalidArrival,
    /// A process requires zero or negative CPU time.
    InvalidBurst,
    /// Two processes share the same ID.
    DuplicateId,
    /// Priority scheduling selected but a process has no priority.
    MissingPriority,
    /// Round-Robin selected with a quantum ≤ 0.
    InvalidQuantum,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates the process set shared by all policies.
///
/// Checks:
/// 1. At least one process
/// 2. Every `arrival >= 0`
/// 3. Every `burst > 0`
/// 4. No duplicate process IDs
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No processes supplied",
        ));
        return Err(errors);
    }

    let mut seen = HashSet::new();
    for p in processes {
        if !seen.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrival,
                format!("Process '{}' has negative arrival time {}", p.id, p.arrival),
            ));
        }
        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!("Process '{}' has non-positive burst time {}", p.id, p.burst),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates input for Priority scheduling.
///
/// Runs the common checks, then requires every process to carry a
/// priority value.
pub fn validate_priority_input(processes: &[Process]) -> ValidationResult {
    let mut errors = match validate_processes(processes) {
        Ok(()) => Vec::new(),
        Err(errors) => {
            if errors[0].kind == ValidationErrorKind::EmptyInput {
                return Err(errors);
            }
            errors
        }
    };

    for p in processes {
        if !p.has_priority() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process '{}' has no priority value", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates input for Round-Robin scheduling.
///
/// Runs the common checks, then requires `quantum > 0`. An invalid
/// quantum is rejected, never silently replaced with a default.
pub fn validate_round_robin_input(processes: &[Process], quantum: i64) -> ValidationResult {
    let mut errors = match validate_processes(processes) {
        Ok(()) => Vec::new(),
        Err(errors) => {
            if errors[0].kind == ValidationErrorKind::EmptyInput {
                return Err(errors);
            }
            errors
        }
    };

    if quantum <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Time quantum must be positive, got {quantum}"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5).with_priority(2),
            Process::new("P2", 1, 3).with_priority(1),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
        assert!(validate_priority_input(&sample_processes()).is_ok());
        assert!(validate_round_robin_input(&sample_processes(), 2).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInput);
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::new("P1", -1, 5)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidArrival));
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![Process::new("P1", 0, 0), Process::new("P2", 0, -3)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidBurst)
                .count(),
            2
        );
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P1", 1, 3)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_missing_priority() {
        let processes = vec![
            Process::new("P1", 0, 5).with_priority(1),
            Process::new("P2", 1, 3), // No priority
        ];
        let errors = validate_priority_input(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingPriority
                && e.message.contains("P2")));
    }

    #[test]
    fn test_priority_not_required_by_common_checks() {
        let processes = vec![Process::new("P1", 0, 5)];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_invalid_quantum() {
        let errors = validate_round_robin_input(&sample_processes(), 0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidQuantum));

        let errors = validate_round_robin_input(&sample_processes(), -2).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidQuantum));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let processes = vec![
            Process::new("P1", -1, 0), // Bad arrival and bad burst
            Process::new("P1", 0, 5),  // Duplicate ID
        ];
        let errors = validate_round_robin_input(&processes, 0).unwrap_err();
        assert!(errors.len() >= 4);
    }

    #[test]
    fn test_error_display() {
        let e = ValidationError::new(ValidationErrorKind::InvalidQuantum, "bad quantum");
        assert!(e.to_string().contains("InvalidQuantum"));
        assert!(e.to_string().contains("bad quantum"));
    }
}
