//! Precondition checks for policy runs.
//!
//! Detects invalid input before a simulation starts:
//! - Empty process sets
//! - Zero burst times
//! - Duplicate pids
//! - Unset priorities ahead of a priority-based run
//! - A zero round-robin quantum
//!
//! Policy entry points run the checks they need themselves: a rejected run
//! returns the collected errors and computes nothing. Callers may also call
//! these functions directly to validate ahead of time.
//!
//! Degenerate-but-valid inputs — a single process, identical arrival
//! times, a priority of 0 (the most urgent legal value) — are not errors;
//! the policies' tie-break rules define their schedules.

use std::collections::HashSet;

use crate::models::{Process, Tick};

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
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessSet,
    /// A process requires zero CPU ticks.
    ZeroBurst,
    /// Two processes share the same pid.
    DuplicatePid,
    /// A priority-based run was requested before every priority was set.
    MissingPriority,
    /// Round-robin was given a quantum of zero ticks.
    InvalidQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the structural integrity of a process set.
///
/// Checks:
/// 1. The set is non-empty
/// 2. Every burst time is positive
/// 3. No two processes share a pid
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "No processes available; add processes before running a policy",
        )]);
    }

    let mut errors = Vec::new();
    let mut pids = HashSet::new();

    for p in processes {
        if p.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process {} has a burst time of 0; must be positive", p.pid),
            ));
        }
        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", p.pid),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates that every process has an assigned priority.
///
/// Required before the priority policies run; the shortest-job-first and
/// round-robin policies ignore priorities entirely.
pub fn validate_priorities(processes: &[Process]) -> ValidationResult {
    let errors: Vec<ValidationError> = processes
        .iter()
        .filter(|p| p.priority.is_none())
        .map(|p| {
            ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process {} has no priority; set priorities first", p.pid),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a round-robin quantum.
pub fn validate_quantum(quantum: Tick) -> ValidationResult {
    if quantum == 0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            "Time quantum must be positive",
        )]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_processes() {
        let processes = vec![Process::new(0, 0, 5), Process::new(1, 2, 3)];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_empty_process_set() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyProcessSet);
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![Process::new(0, 0, 0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroBurst));
    }

    #[test]
    fn test_duplicate_pid() {
        let processes = vec![Process::new(3, 0, 1), Process::new(3, 1, 2)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicatePid));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let processes = vec![Process::new(0, 0, 0), Process::new(0, 1, 2)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_missing_priority() {
        let processes = vec![
            Process::new(0, 0, 5).with_priority(1),
            Process::new(1, 0, 3),
        ];
        let errors = validate_priorities(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingPriority);
        assert!(errors[0].message.contains("Process 1"));
    }

    #[test]
    fn test_priority_zero_is_legal() {
        // 0 is the most urgent value, not "unset".
        let processes = vec![Process::new(0, 0, 5).with_priority(0)];
        assert!(validate_priorities(&processes).is_ok());
    }

    #[test]
    fn test_quantum() {
        assert!(validate_quantum(1).is_ok());
        let errors = validate_quantum(0).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);
    }
}
