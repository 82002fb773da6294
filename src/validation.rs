//! Input validation for strip-packing problems.
//!
//! Checks every task record before any packer runs. Detects:
//! - Non-positive strip width, or one beyond `MAX_STRIP_WIDTH`
//! - Empty task sets
//! - Non-positive task widths or heights
//! - Tasks wider than the strip
//! - Heights outside the bounded sort domain `[1, MAX_HEIGHT]`
//!
//! All problems are collected, not just the first one.

use serde::{Deserialize, Serialize};

use crate::models::{Task, MAX_HEIGHT, MAX_STRIP_WIDTH};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// The strip width is zero or negative.
    InvalidStripWidth,
    /// The strip width is larger than `MAX_STRIP_WIDTH`.
    StripWidthTooLarge,
    /// No tasks were supplied.
    EmptyTaskSet,
    /// A task requires zero or negative width.
    NonPositiveWidth,
    /// A task has zero or negative height.
    NonPositiveHeight,
    /// A task is wider than the strip.
    WidthExceedsStrip,
    /// A task is taller than `MAX_HEIGHT`.
    HeightOutOfRange,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a task list against a strip width.
///
/// Checks:
/// 1. `0 < strip_width <= MAX_STRIP_WIDTH`
/// 2. At least one task
/// 3. Every task has `width > 0` and `height > 0`
/// 4. Every task has `width <= strip_width`
/// 5. Every task has `height <= MAX_HEIGHT`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task], strip_width: i64) -> ValidationResult {
    let mut errors = Vec::new();

    if strip_width <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidStripWidth,
            format!("Strip width must be positive, got {strip_width}"),
        ));
    } else if strip_width > MAX_STRIP_WIDTH {
        errors.push(ValidationError::new(
            ValidationErrorKind::StripWidthTooLarge,
            format!("Strip width {strip_width} exceeds {MAX_STRIP_WIDTH}"),
        ));
    }

    if tasks.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTaskSet,
            "No tasks to schedule",
        ));
    }

    for (idx, task) in tasks.iter().enumerate() {
        if task.width <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveWidth,
                format!("Task {idx} has non-positive width {}", task.width),
            ));
        } else if strip_width > 0 && task.width > strip_width {
            errors.push(ValidationError::new(
                ValidationErrorKind::WidthExceedsStrip,
                format!(
                    "Task {idx} width {} exceeds strip width {strip_width}",
                    task.width
                ),
            ));
        }

        if task.height <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveHeight,
                format!("Task {idx} has non-positive height {}", task.height),
            ));
        } else if task.height > MAX_HEIGHT {
            errors.push(ValidationError::new(
                ValidationErrorKind::HeightOutOfRange,
                format!(
                    "Task {idx} height {} exceeds maximum {MAX_HEIGHT}",
                    task.height
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
