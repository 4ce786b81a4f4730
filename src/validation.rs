//! Input validation for process descriptors.
//!
//! Checks descriptors before they enter a strict-mode registry, and offers
//! an opt-in audit of a whole workload. Detects:
//! - Non-positive burst times
//! - Negative arrival times
//! - Empty ids
//! - Completion times beyond the `Time` range
//! - Duplicate ids (workload audit only; the registry itself accepts them)

use std::collections::HashSet;

use crate::models::ProcessDescriptor;

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
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Arrival time is negative.
    NegativeArrival,
    /// Identifier is empty.
    EmptyId,
    /// `arrival_time + burst_time` does not fit in `Time`.
    TimeOverflow,
    /// Two descriptors share the same id.
    DuplicateId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a single descriptor.
///
/// Checks:
/// 1. `burst_time > 0`
/// 2. `arrival_time >= 0`
/// 3. `id` is not empty
/// 4. `arrival_time + burst_time` is representable
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_process(process: &ProcessDescriptor) -> ValidationResult {
    let mut errors = Vec::new();
    check_process(process, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a whole workload, including id uniqueness.
///
/// Registries never reject duplicate ids; callers that need deterministic
/// single-process queries run this audit themselves.
pub fn validate_workload(processes: &[ProcessDescriptor]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for process in processes {
        check_process(process, &mut errors);

        if !seen.insert(process.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", process.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Joins error messages into a single line.
pub fn describe(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

fn check_process(process: &ProcessDescriptor, errors: &mut Vec<ValidationError>) {
    if process.burst_time <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveBurst,
            format!(
                "Process '{}' has non-positive burst time {}",
                process.id, process.burst_time
            ),
        ));
    }

    if process.arrival_time < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeArrival,
            format!(
                "Process '{}' has negative arrival time {}",
                process.id, process.arrival_time
            ),
        ));
    }

    if process.arrival_time.checked_add(process.burst_time).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!(
                "Process '{}' completion time overflows (arrival {} + burst {})",
                process.id, process.arrival_time, process.burst_time
            ),
        ));
    }

    if process.id.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyId,
            "Process has an empty ID",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_process() {
        assert!(validate_process(&ProcessDescriptor::of("P1", 0, 5, 1)).is_ok());
    }

    #[test]
    fn test_zero_burst() {
        let errors = validate_process(&ProcessDescriptor::of("P1", 0, 0, 1)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst);
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_process(&ProcessDescriptor::of("P1", -2, 3, 1)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_completion_overflow() {
        let late = ProcessDescriptor::of("late", i64::MAX - 1, 5, 0);
        let errors = validate_process(&late).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        // Exactly reaching the bound is fine.
        assert!(validate_process(&ProcessDescriptor::of("edge", i64::MAX - 5, 5, 0)).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let errors = validate_process(&ProcessDescriptor::of("", -1, -4, 0)).unwrap_err();
        assert_eq!(errors.len(), 3);
        let message = describe(&errors);
        assert!(message.contains("burst"));
        assert!(message.contains("arrival"));
        assert!(message.contains("empty ID"));
    }

    #[test]
    fn test_workload_duplicate_id() {
        let processes = vec![
            ProcessDescriptor::of("P1", 0, 5, 1),
            ProcessDescriptor::of("P2", 1, 5, 1),
            ProcessDescriptor::of("P1", 2, 5, 1),
        ];
        let errors = validate_workload(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_workload_valid() {
        let processes = vec![
            ProcessDescriptor::of("P1", 0, 5, 1),
            ProcessDescriptor::of("P2", 0, 5, 1),
        ];
        assert!(validate_workload(&processes).is_ok());
        assert!(validate_workload(&[]).is_ok());
    }
}
