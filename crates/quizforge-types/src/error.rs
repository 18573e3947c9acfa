use thiserror::Error;

/// Errors from storage-port operations (used by trait definitions in
/// quizforge-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}

/// Errors surfaced by the quiz service layer.
///
/// Storage failures are non-fatal to the in-memory document: the editor
/// keeps its state so the user can retry a save without losing edits.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("quiz not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("cannot publish an empty draft")]
    EmptyDraft,
}

impl From<RepositoryError> for QuizError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => QuizError::NotFound,
            other => QuizError::Storage(other.to_string()),
        }
    }
}
