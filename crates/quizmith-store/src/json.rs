//! JSON file backend.
//!
//! The original's two local-storage entries become two JSON documents in
//! a data directory: `quizzes.json` and `results.json`. Dates travel as
//! ISO-8601 strings via chrono's serde support.

use std::path::{Path, PathBuf};

use quizmith_core::error::StoreError;
use quizmith_core::model::{Quiz, QuizResult};

use crate::{StorageBackend, StoredData};

const QUIZZES_ENTRY: &str = "quizzes.json";
const RESULTS_ENTRY: &str = "results.json";

/// Backend persisting to JSON files in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a backend over `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_entry<T: serde::de::DeserializeOwned>(
        &self,
        entry: &str,
    ) -> Result<Vec<T>, StoreError> {
        let path = self.dir.join(entry);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            entry: entry.to_string(),
            source,
        })
    }

    fn write_entry<T: serde::Serialize>(&self, entry: &str, items: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(items).map_err(|source| StoreError::Parse {
            entry: entry.to_string(),
            source,
        })?;
        // Write-then-rename so a crash mid-write cannot corrupt the entry.
        let tmp = self.dir.join(format!("{entry}.tmp"));
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, self.dir.join(entry))?;
        Ok(())
    }
}

impl StorageBackend for JsonFileStore {
    fn load(&self) -> Result<StoredData, StoreError> {
        Ok(StoredData {
            quizzes: self.read_entry(QUIZZES_ENTRY)?,
            results: self.read_entry(RESULTS_ENTRY)?,
        })
    }

    fn save_quizzes(&self, quizzes: &[Quiz]) -> Result<(), StoreError> {
        self.write_entry(QUIZZES_ENTRY, quizzes)
    }

    fn save_results(&self, results: &[QuizResult]) -> Result<(), StoreError> {
        self.write_entry(RESULTS_ENTRY, results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use quizmith_core::model::Participant;

    #[test]
    fn missing_entries_load_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileStore::open(dir.path()).unwrap();
        let data = backend.load().unwrap();
        assert!(data.quizzes.is_empty());
        assert!(data.results.is_empty());
    }

    #[test]
    fn roundtrip_preserves_dates() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileStore::open(dir.path()).unwrap();

        let mut quiz = Quiz::new("Dated");
        quiz.created_at = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
        backend.save_quizzes(std::slice::from_ref(&quiz)).unwrap();

        let result = QuizResult {
            id: "r1".into(),
            quiz_id: quiz.id.clone(),
            quiz_title: quiz.title.clone(),
            participant: Participant {
                name: "Ada".into(),
                date: Utc.with_ymd_and_hms(2024, 3, 16, 10, 0, 0).unwrap(),
                instructor: "Babbage".into(),
                signature: None,
            },
            answers: vec![],
            total_points: 0,
            max_points: 0,
            started_at: Utc.with_ymd_and_hms(2024, 3, 16, 10, 0, 0).unwrap(),
            finished_at: Utc.with_ymd_and_hms(2024, 3, 16, 10, 12, 0).unwrap(),
        };
        backend.save_results(std::slice::from_ref(&result)).unwrap();

        let data = backend.load().unwrap();
        assert_eq!(data.quizzes, vec![quiz]);
        assert_eq!(data.results, vec![result]);

        // Dates are stored as ISO-8601 strings.
        let raw = std::fs::read_to_string(dir.path().join("quizzes.json")).unwrap();
        assert!(raw.contains("2024-03-15T09:30:00Z"));
    }

    #[test]
    fn malformed_entry_surfaces_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("quizzes.json"), "{ not json").unwrap();
        let backend = JsonFileStore::open(dir.path()).unwrap();

        let err = backend.load().unwrap_err();
        match err {
            StoreError::Parse { entry, .. } => assert_eq!(entry, "quizzes.json"),
            other => panic!("expected Parse error, got {other:?}"),
        }
        assert!(backend.load().unwrap_err().is_data_corruption());
    }
}
