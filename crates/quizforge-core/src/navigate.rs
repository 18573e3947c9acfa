//! Navigation port.
//!
//! Route transitions are an external collaborator; the engine only names
//! the destinations it can ask for.

use quizforge_types::quiz::QuizId;

/// Route transitions the editor workflow can request.
pub trait Navigator: Send + Sync {
    /// The quiz list (also the fallback when a load fails).
    fn go_to_list(&self);

    /// The editor, for an existing quiz or a fresh draft.
    fn go_to_editor(&self, id: Option<&QuizId>);

    /// The read-only player for a quiz.
    fn go_to_player(&self, id: &QuizId);
}
