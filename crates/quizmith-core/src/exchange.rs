//! Import/export bundle handling.
//!
//! The exchange format is a JSON document with optional top-level
//! `quizzes` and `results` arrays. Import is all-or-nothing: structural
//! validation rejects at the first invalid record, so a partial import
//! can never occur.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ExchangeError;
use crate::model::{Quiz, QuizResult};

/// A validated import bundle ready to be applied to a store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportBundle {
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
    #[serde(default)]
    pub results: Vec<QuizResult>,
}

/// Counts and a human-readable validity message for an import document.
#[derive(Debug, Clone)]
pub struct ImportSummary {
    pub quiz_count: usize,
    pub result_count: usize,
    pub message: String,
}

/// Which collections to include in an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSelection {
    pub quizzes: bool,
    pub results: bool,
}

impl ExportSelection {
    pub const ALL: ExportSelection = ExportSelection {
        quizzes: true,
        results: true,
    };
}

/// Validate an import document and deserialize it into typed collections.
///
/// Structural checks run first over the untyped JSON so the error can
/// name the first offending record; full deserialization follows only
/// once the shape is known good.
pub fn validate_import(text: &str) -> Result<(ImportBundle, ImportSummary), ExchangeError> {
    let value: Value = serde_json::from_str(text)?;
    let Some(object) = value.as_object() else {
        return Err(ExchangeError::NotAnObject);
    };

    if let Some(quizzes) = object.get("quizzes") {
        let Some(entries) = quizzes.as_array() else {
            return Err(ExchangeError::InvalidQuiz {
                index: 0,
                reason: "'quizzes' is not an array".into(),
            });
        };
        for (index, entry) in entries.iter().enumerate() {
            check_quiz_shape(entry)
                .map_err(|reason| ExchangeError::InvalidQuiz { index, reason })?;
        }
    }

    if let Some(results) = object.get("results") {
        let Some(entries) = results.as_array() else {
            return Err(ExchangeError::InvalidResult {
                index: 0,
                reason: "'results' is not an array".into(),
            });
        };
        for (index, entry) in entries.iter().enumerate() {
            check_result_shape(entry)
                .map_err(|reason| ExchangeError::InvalidResult { index, reason })?;
        }
    }

    let bundle: ImportBundle = serde_json::from_value(value)?;
    let summary = ImportSummary {
        quiz_count: bundle.quizzes.len(),
        result_count: bundle.results.len(),
        message: format!(
            "valid import file: {} quiz(zes), {} result(s)",
            bundle.quizzes.len(),
            bundle.results.len()
        ),
    };
    Ok((bundle, summary))
}

fn check_quiz_shape(entry: &Value) -> Result<(), String> {
    let Some(object) = entry.as_object() else {
        return Err("not an object".into());
    };
    for field in ["id", "title"] {
        if !object.get(field).is_some_and(Value::is_string) {
            return Err(format!("missing '{field}'"));
        }
    }
    if !object.get("questions").is_some_and(Value::is_array) {
        return Err("missing 'questions' array".into());
    }
    Ok(())
}

fn check_result_shape(entry: &Value) -> Result<(), String> {
    let Some(object) = entry.as_object() else {
        return Err("not an object".into());
    };
    for field in ["id", "quiz_id"] {
        if !object.get(field).is_some_and(Value::is_string) {
            return Err(format!("missing '{field}'"));
        }
    }
    if !object.get("participant").is_some_and(Value::is_object) {
        return Err("missing 'participant'".into());
    }
    if !object.get("answers").is_some_and(Value::is_array) {
        return Err("missing 'answers' array".into());
    }
    Ok(())
}

/// Serialize the selected subsets to a pretty-printed JSON document.
///
/// Exporting then importing reproduces identical collections: ids,
/// points, and dates are preserved.
pub fn export_bundle(
    quizzes: &[Quiz],
    results: &[QuizResult],
    selection: ExportSelection,
) -> Result<String, serde_json::Error> {
    let bundle = ImportBundle {
        quizzes: if selection.quizzes {
            quizzes.to_vec()
        } else {
            Vec::new()
        },
        results: if selection.results {
            results.to_vec()
        } else {
            Vec::new()
        },
    };
    serde_json::to_string_pretty(&bundle)
}
