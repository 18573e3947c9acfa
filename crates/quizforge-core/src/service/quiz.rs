//! Persistence adapter.
//!
//! Translates document-level operations into calls against the storage
//! port and maps `RepositoryError` into the service-level `QuizError`.
//! A failed save never touches the in-memory document; the failure is
//! only reported outward.

use quizforge_types::error::QuizError;
use quizforge_types::quiz::{Quiz, QuizId};

use crate::storage::QuizStore;

/// Quiz persistence service, generic over the storage port so the
/// concrete store (SQLite here, localStorage in the original) can be
/// swapped without touching the editor core.
pub struct QuizService<S: QuizStore> {
    store: S,
}

impl<S: QuizStore> QuizService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Rehydrate a quiz by id.
    pub async fn load(&self, id: &QuizId) -> Result<Quiz, QuizError> {
        let quiz = self.store.get_by_id(id).await.map_err(|e| {
            tracing::warn!(quiz_id = %id, error = %e, "failed to load quiz");
            QuizError::from(e)
        })?;
        quiz.ok_or(QuizError::NotFound)
    }

    /// Persist the whole document (insert if absent, replace if present).
    pub async fn save(&self, quiz: &Quiz) -> Result<(), QuizError> {
        self.store.upsert(quiz).await.map_err(|e| {
            tracing::warn!(quiz_id = %quiz.id, error = %e, "failed to save quiz");
            QuizError::from(e)
        })
    }

    /// Delete a quiz by id.
    pub async fn delete(&self, id: &QuizId) -> Result<(), QuizError> {
        self.store.remove(id).await.map_err(|e| {
            tracing::warn!(quiz_id = %id, error = %e, "failed to delete quiz");
            QuizError::from(e)
        })
    }

    /// All quizzes, most recently updated first (list-page order).
    pub async fn list(&self) -> Result<Vec<Quiz>, QuizError> {
        let mut quizzes = self.store.get_all().await?;
        quizzes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(quizzes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{new_quiz, rename};
    use crate::service::testing::MemoryQuizStore;

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let service = QuizService::new(MemoryQuizStore::new());
        let quiz = rename(&new_quiz(), "Roundtrip");

        service.save(&quiz).await.unwrap();
        let loaded = service.load(&quiz.id).await.unwrap();

        assert_eq!(loaded, quiz);
    }

    #[tokio::test]
    async fn test_load_missing_quiz_is_not_found() {
        let service = QuizService::new(MemoryQuizStore::new());
        let err = service.load(&QuizId::new()).await.unwrap_err();
        assert!(matches!(err, QuizError::NotFound));
    }

    #[tokio::test]
    async fn test_save_replaces_existing_quiz() {
        let service = QuizService::new(MemoryQuizStore::new());
        let quiz = new_quiz();
        service.save(&quiz).await.unwrap();

        let renamed = rename(&quiz, "Second title");
        service.save(&renamed).await.unwrap();

        let loaded = service.load(&quiz.id).await.unwrap();
        assert_eq!(loaded.title, "Second title");
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_quiz() {
        let service = QuizService::new(MemoryQuizStore::new());
        let quiz = new_quiz();
        service.save(&quiz).await.unwrap();

        service.delete(&quiz.id).await.unwrap();
        assert!(matches!(
            service.load(&quiz.id).await,
            Err(QuizError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_list_orders_by_most_recently_updated() {
        let service = QuizService::new(MemoryQuizStore::new());

        let older = rename(&new_quiz(), "older");
        service.save(&older).await.unwrap();
        let newer = rename(&new_quiz(), "newer");
        service.save(&newer).await.unwrap();

        let titles: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|q| q.title)
            .collect();
        assert_eq!(titles, vec!["newer", "older"]);
    }

    #[tokio::test]
    async fn test_load_over_broken_storage_is_storage_error_not_not_found() {
        let store = MemoryQuizStore::new();
        let quiz = new_quiz();
        store.upsert(&quiz).await.unwrap();
        store.fail_reads(true);

        let service = QuizService::new(store);
        let err = service.load(&quiz.id).await.unwrap_err();
        assert!(matches!(err, QuizError::Storage(_)));
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces_as_quiz_error() {
        let store = MemoryQuizStore::new();
        store.fail_writes(true);

        let service = QuizService::new(store);
        let err = service.save(&new_quiz()).await.unwrap_err();
        assert!(matches!(err, QuizError::Storage(_)));
    }
}
