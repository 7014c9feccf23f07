//! Input validation for invigilation runs.
//!
//! Checks structural integrity of halls, staff, and sessions before hall
//! selection starts. Detects:
//! - Duplicate hall names
//! - Duplicate staff names
//! - Duplicate (date, slot) sessions
//! - Blank hall or staff names
//!
//! Halls and staff are named in the timetable, so two records sharing a
//! name would make the chart ambiguous even though the allocator keeps them
//! apart internally.

use crate::models::{Hall, SessionCatalog, Staff};
use std::collections::HashSet;

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
    /// Two halls or two staff share a name.
    DuplicateName,
    /// The same date and slot appear twice in the catalog.
    DuplicateSession,
    /// A hall or staff record has a blank name.
    EmptyName,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input records for an invigilation run.
///
/// Checks:
/// 1. No blank hall names
/// 2. No duplicate hall names
/// 3. No blank staff names
/// 4. No duplicate staff names
/// 5. No duplicate (date, slot) sessions
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(halls: &[Hall], staff: &[Staff], catalog: &SessionCatalog) -> ValidationResult {
    let mut errors = Vec::new();

    let mut hall_names = HashSet::new();
    for (i, h) in halls.iter().enumerate() {
        if h.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Hall at position {i} has a blank name"),
            ));
        } else if !hall_names.insert(h.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate hall name: {}", h.name),
            ));
        }
    }

    let mut staff_names = HashSet::new();
    for (i, s) in staff.iter().enumerate() {
        if s.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Staff member at position {i} has a blank name"),
            ));
        } else if !staff_names.insert(s.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate staff name: {}", s.name),
            ));
        }
    }

    let mut keys = HashSet::new();
    for session in catalog.iter() {
        if !keys.insert(session.key) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSession,
                format!("Duplicate session: {}", session.key),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
