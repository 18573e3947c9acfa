//! Storage port.
//!
//! Defines the interface the persistence layer implements. The core crate
//! never depends on any specific storage technology; the SQLite-backed
//! implementation lives in quizforge-infra, and tests substitute an
//! in-memory one.

use quizforge_types::error::RepositoryError;
use quizforge_types::quiz::{Quiz, QuizId};

/// Trait for quiz collection storage.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
///
/// The first-ever `get_all` on a store with no prior data seeds a small
/// set of example quizzes, exactly once, guarded by a persisted
/// initialization flag -- the list is never totally blank on first run.
pub trait QuizStore: Send + Sync {
    /// All quizzes in the store.
    fn get_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Quiz>, RepositoryError>> + Send;

    /// Look up one quiz by id. Returns None if it does not exist.
    fn get_by_id(
        &self,
        id: &QuizId,
    ) -> impl std::future::Future<Output = Result<Option<Quiz>, RepositoryError>> + Send;

    /// Insert or replace a quiz by id.
    fn upsert(
        &self,
        quiz: &Quiz,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Remove a quiz by id. No-op if it does not exist.
    fn remove(
        &self,
        id: &QuizId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
