//! In-memory backend for tests.

use std::sync::Mutex;

use quizmith_core::error::StoreError;
use quizmith_core::model::{Quiz, QuizResult};

use crate::{StorageBackend, StoredData};

/// Backend holding both collections in memory. Nothing survives drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<StoredData>,
}

impl MemoryStore {
    fn lock(&self) -> std::sync::MutexGuard<'_, StoredData> {
        self.data.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl StorageBackend for MemoryStore {
    fn load(&self) -> Result<StoredData, StoreError> {
        Ok(self.lock().clone())
    }

    fn save_quizzes(&self, quizzes: &[Quiz]) -> Result<(), StoreError> {
        self.lock().quizzes = quizzes.to_vec();
        Ok(())
    }

    fn save_results(&self, results: &[QuizResult]) -> Result<(), StoreError> {
        self.lock().results = results.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_collections_load_back() {
        let backend = MemoryStore::default();
        backend.save_quizzes(&[Quiz::new("One")]).unwrap();
        let data = backend.load().unwrap();
        assert_eq!(data.quizzes.len(), 1);
        assert!(data.results.is_empty());
    }
}
