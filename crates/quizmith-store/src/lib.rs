//! quizmith-store — Persistence layer.
//!
//! A [`StorageBackend`] reads and writes the two stored collections;
//! [`AppStore`] owns the in-memory state, routes every mutation through
//! itself, and enforces the cascade invariant centrally.

pub mod json;
pub mod memory;
pub mod seed;

use quizmith_core::error::StoreError;
use quizmith_core::exchange::ImportBundle;
use quizmith_core::model::{Quiz, QuizResult};

/// The two stored collections, as loaded from a backend.
#[derive(Debug, Clone, Default)]
pub struct StoredData {
    pub quizzes: Vec<Quiz>,
    pub results: Vec<QuizResult>,
}

/// A synchronous key-value style backend holding two entries: the quiz
/// collection and the result collection, each a JSON array.
pub trait StorageBackend {
    /// Load both collections. Missing entries load as empty; malformed
    /// entries fail with [`StoreError::Parse`].
    fn load(&self) -> Result<StoredData, StoreError>;

    /// Persist the quiz collection.
    fn save_quizzes(&self, quizzes: &[Quiz]) -> Result<(), StoreError>;

    /// Persist the result collection.
    fn save_results(&self, results: &[QuizResult]) -> Result<(), StoreError>;
}

/// The application store: owns the collections and the backend.
///
/// All mutation goes through this type, so the cascade invariant (deleting
/// a quiz removes its results) holds on every code path.
pub struct AppStore {
    backend: Box<dyn StorageBackend>,
    quizzes: Vec<Quiz>,
    results: Vec<QuizResult>,
}

impl AppStore {
    /// Open a store over a backend, seeding a demonstration quiz when the
    /// backend holds nothing at all.
    pub fn open(backend: Box<dyn StorageBackend>) -> Result<Self, StoreError> {
        let data = backend.load()?;
        let mut store = Self {
            backend,
            quizzes: data.quizzes,
            results: data.results,
        };

        if store.quizzes.is_empty() && store.results.is_empty() {
            tracing::info!("empty store, seeding demonstration quiz");
            store.quizzes.push(seed::demo_quiz());
            store.backend.save_quizzes(&store.quizzes)?;
        }

        Ok(store)
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn results(&self) -> &[QuizResult] {
        &self.results
    }

    /// Find a quiz by id, or by unambiguous id prefix.
    pub fn quiz(&self, id: &str) -> Result<&Quiz, StoreError> {
        if let Some(quiz) = self.quizzes.iter().find(|q| q.id == id) {
            return Ok(quiz);
        }
        let mut matches = self.quizzes.iter().filter(|q| q.id.starts_with(id));
        match (matches.next(), matches.next()) {
            (Some(quiz), None) => Ok(quiz),
            _ => Err(StoreError::QuizNotFound(id.to_string())),
        }
    }

    /// Results recorded against one quiz.
    pub fn results_for_quiz(&self, quiz_id: &str) -> Vec<&QuizResult> {
        self.results
            .iter()
            .filter(|r| r.quiz_id == quiz_id)
            .collect()
    }

    /// Add a quiz and persist the collection.
    pub fn add_quiz(&mut self, quiz: Quiz) -> Result<(), StoreError> {
        self.quizzes.push(quiz);
        self.backend.save_quizzes(&self.quizzes)
    }

    /// Replace a quiz in place, matched by id.
    pub fn update_quiz(&mut self, quiz: Quiz) -> Result<(), StoreError> {
        let Some(slot) = self.quizzes.iter_mut().find(|q| q.id == quiz.id) else {
            return Err(StoreError::QuizNotFound(quiz.id));
        };
        *slot = quiz;
        self.backend.save_quizzes(&self.quizzes)
    }

    /// Delete a quiz and cascade to every result that references it.
    ///
    /// Returns the number of results removed by the cascade.
    pub fn delete_quiz(&mut self, id: &str) -> Result<usize, StoreError> {
        let quiz_id = self.quiz(id)?.id.clone();
        self.quizzes.retain(|q| q.id != quiz_id);

        let before = self.results.len();
        self.results.retain(|r| r.quiz_id != quiz_id);
        let cascaded = before - self.results.len();

        self.backend.save_quizzes(&self.quizzes)?;
        if cascaded > 0 {
            self.backend.save_results(&self.results)?;
        }
        Ok(cascaded)
    }

    /// Record a scored result.
    ///
    /// Results with a `quiz_id` matching no stored quiz are accepted (the
    /// reference is soft) but logged.
    pub fn add_result(&mut self, result: QuizResult) -> Result<(), StoreError> {
        if !self.quizzes.iter().any(|q| q.id == result.quiz_id) {
            tracing::warn!(quiz_id = %result.quiz_id, "result references an unknown quiz");
        }
        self.results.push(result);
        self.backend.save_results(&self.results)
    }

    /// Delete a single result by id.
    pub fn delete_result(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.results.len();
        self.results.retain(|r| r.id != id);
        if self.results.len() == before {
            return Err(StoreError::ResultNotFound(id.to_string()));
        }
        self.backend.save_results(&self.results)
    }

    /// Replace both collections with an imported bundle.
    ///
    /// Only called after the bundle validated in full, so the previous
    /// state is never partially overwritten.
    pub fn replace_all(&mut self, bundle: ImportBundle) -> Result<(), StoreError> {
        for result in &bundle.results {
            if !bundle.quizzes.iter().any(|q| q.id == result.quiz_id) {
                tracing::warn!(
                    result_id = %result.id,
                    quiz_id = %result.quiz_id,
                    "imported result references a quiz not in the bundle"
                );
            }
        }
        self.quizzes = bundle.quizzes;
        self.results = bundle.results;
        self.backend.save_quizzes(&self.quizzes)?;
        self.backend.save_results(&self.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use chrono::Utc;
    use quizmith_core::model::Participant;

    fn result_for(quiz: &Quiz) -> QuizResult {
        QuizResult {
            id: uuid::Uuid::new_v4().to_string(),
            quiz_id: quiz.id.clone(),
            quiz_title: quiz.title.clone(),
            participant: Participant {
                name: "Ada".into(),
                date: Utc::now(),
                instructor: String::new(),
                signature: None,
            },
            answers: vec![],
            total_points: 0,
            max_points: 1,
            started_at: Utc::now(),
            finished_at: Utc::now(),
        }
    }

    #[test]
    fn open_seeds_empty_backend() {
        let store = AppStore::open(Box::new(MemoryStore::default())).unwrap();
        assert_eq!(store.quizzes().len(), 1);
        assert!(!store.quizzes()[0].questions.is_empty());
    }

    #[test]
    fn open_does_not_seed_populated_backend() {
        let backend = MemoryStore::default();
        backend
            .save_quizzes(&[Quiz::new("Existing"), Quiz::new("Another")])
            .unwrap();
        let store = AppStore::open(Box::new(backend)).unwrap();
        assert_eq!(store.quizzes().len(), 2);
        assert_eq!(store.quizzes()[0].title, "Existing");
    }

    #[test]
    fn delete_quiz_cascades_to_results() {
        let mut store = AppStore::open(Box::new(MemoryStore::default())).unwrap();
        let keep = Quiz::new("Keep");
        let drop = Quiz::new("Drop");
        let keep_id = keep.id.clone();
        let drop_id = drop.id.clone();
        store.add_quiz(keep.clone()).unwrap();
        store.add_quiz(drop.clone()).unwrap();
        store.add_result(result_for(&keep)).unwrap();
        store.add_result(result_for(&drop)).unwrap();
        store.add_result(result_for(&drop)).unwrap();

        let cascaded = store.delete_quiz(&drop_id).unwrap();
        assert_eq!(cascaded, 2);
        assert!(store.quiz(&drop_id).is_err());
        assert_eq!(store.results().len(), 1);
        assert_eq!(store.results()[0].quiz_id, keep_id);
    }

    #[test]
    fn quiz_lookup_by_prefix() {
        let mut store = AppStore::open(Box::new(MemoryStore::default())).unwrap();
        let quiz = Quiz::new("Prefixed");
        let id = quiz.id.clone();
        store.add_quiz(quiz).unwrap();

        assert_eq!(store.quiz(&id[..8]).unwrap().id, id);
        assert!(store.quiz("zzzz").is_err());
    }

    #[test]
    fn update_missing_quiz_fails() {
        let mut store = AppStore::open(Box::new(MemoryStore::default())).unwrap();
        let err = store.update_quiz(Quiz::new("Ghost")).unwrap_err();
        assert!(matches!(err, StoreError::QuizNotFound(_)));
    }

    #[test]
    fn delete_missing_result_fails() {
        let mut store = AppStore::open(Box::new(MemoryStore::default())).unwrap();
        assert!(matches!(
            store.delete_result("nope"),
            Err(StoreError::ResultNotFound(_))
        ));
    }

    #[test]
    fn replace_all_swaps_both_collections() {
        let mut store = AppStore::open(Box::new(MemoryStore::default())).unwrap();
        let quiz = Quiz::new("Imported");
        let result = result_for(&quiz);
        store
            .replace_all(ImportBundle {
                quizzes: vec![quiz.clone()],
                results: vec![result],
            })
            .unwrap();
        assert_eq!(store.quizzes().len(), 1);
        assert_eq!(store.quizzes()[0].title, "Imported");
        assert_eq!(store.results().len(), 1);
        assert_eq!(store.results_for_quiz(&quiz.id).len(), 1);
    }
}
