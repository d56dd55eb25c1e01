//! Shared error types.
//!
//! Defined in `quizmith-core` so the store and CLI crates can classify
//! failures without string matching.

use thiserror::Error;

/// Errors raised by the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a storage entry failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored entry held malformed JSON. Unrecoverable without manual
    /// intervention; surfaced to the caller instead of being swallowed.
    #[error("malformed stored data in '{entry}': {source}")]
    Parse {
        entry: String,
        #[source]
        source: serde_json::Error,
    },

    /// The requested quiz does not exist.
    #[error("quiz not found: {0}")]
    QuizNotFound(String),

    /// The requested result does not exist.
    #[error("result not found: {0}")]
    ResultNotFound(String),
}

impl StoreError {
    /// Returns `true` if this error means stored data is unreadable, as
    /// opposed to a missing record.
    pub fn is_data_corruption(&self) -> bool {
        matches!(self, StoreError::Parse { .. })
    }
}

/// Errors raised while validating an import bundle.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The document is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but its top level is not an object.
    #[error("import document must be a JSON object")]
    NotAnObject,

    /// A quiz record failed structural validation.
    #[error("invalid quiz at index {index}: {reason}")]
    InvalidQuiz { index: usize, reason: String },

    /// A result record failed structural validation.
    #[error("invalid result at index {index}: {reason}")]
    InvalidResult { index: usize, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_classify_as_corruption() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StoreError::Parse {
            entry: "quizzes".into(),
            source,
        };
        assert!(err.is_data_corruption());
        assert!(!StoreError::QuizNotFound("x".into()).is_data_corruption());
    }

    #[test]
    fn error_messages_name_the_record() {
        let err = ExchangeError::InvalidQuiz {
            index: 2,
            reason: "missing 'questions' array".into(),
        };
        assert!(err.to_string().contains("index 2"));
        assert!(err.to_string().contains("questions"));
    }
}
