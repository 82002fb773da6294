//! Error types for u-shelf.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type alias for u-shelf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while ingesting or packing a task set.
#[derive(Debug, Error)]
pub enum Error {
    /// The task set failed ingestion checks.
    #[error("Invalid task set: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// FFDH needed more shelves than the configured limit allows.
    #[error("Shelf limit exceeded: more than {limit} shelves required")]
    ShelfLimitExceeded {
        /// Configured maximum number of shelves.
        limit: usize,
    },

    /// A malformed line in a task file or workload log.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// An option that does not apply to the chosen setup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unrecognized algorithm name.
    #[error("Unknown algorithm '{0}' (expected NFDH or FFDH)")]
    UnknownAlgorithm(String),

    /// Report serialization failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O failure while reading or writing task data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_validation_message_joins_all_errors() {
        let err = Error::from(vec![
            ValidationError::new(ValidationErrorKind::NonPositiveWidth, "task 0: width 0"),
            ValidationError::new(
                ValidationErrorKind::WidthExceedsStrip,
                "task 3: width 9 > 8",
            ),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid task set: task 0: width 0; task 3: width 9 > 8"
        );
    }

    #[test]
    fn test_shelf_limit_message() {
        let err = Error::ShelfLimitExceeded { limit: 4 };
        assert!(err.to_string().contains("more than 4 shelves"));
    }
}
