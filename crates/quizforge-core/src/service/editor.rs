//! Editor session and the save/publish workflow.
//!
//! One `EditorSession` owns one quiz document, plus the selection state,
//! for the lifetime of an editing session. Mutations delegate to the pure
//! document transforms; save and publish go through the persistence
//! adapter and report outcomes through the notification port.

use std::time::Duration;

use quizforge_types::block::{BlockId, BlockType, QuizBlock};
use quizforge_types::error::QuizError;
use quizforge_types::quiz::{Quiz, QuizId};

use crate::document;
use crate::drag::DropAction;
use crate::navigate::Navigator;
use crate::notify::{Notifier, Severity};
use crate::selection::Selection;
use crate::service::quiz::QuizService;
use crate::storage::QuizStore;

/// Cosmetic pause between initiating a save and confirming it, so the
/// "Saving..." state is visible. Not a correctness mechanism and never
/// cancelled.
const SAVE_DELAY: Duration = Duration::from_millis(300);

/// An open editing session over one quiz document.
pub struct EditorSession<S: QuizStore, N: Notifier, V: Navigator> {
    service: QuizService<S>,
    notifier: N,
    navigator: V,
    quiz: Quiz,
    selection: Selection,
}

impl<S: QuizStore, N: Notifier, V: Navigator> EditorSession<S, N, V> {
    /// Open a session: load the quiz when an id is supplied, otherwise
    /// start a fresh draft.
    ///
    /// A failed load falls back to the list before the error is
    /// returned: a missing id says "Quiz not found", while a storage
    /// failure says "Error loading data" so the user knows the quiz may
    /// still exist.
    pub async fn open(
        store: S,
        notifier: N,
        navigator: V,
        id: Option<&QuizId>,
    ) -> Result<Self, QuizError> {
        let service = QuizService::new(store);

        let quiz = match id {
            Some(id) => match service.load(id).await {
                Ok(quiz) => quiz,
                Err(err) => {
                    let message = match &err {
                        QuizError::NotFound => "Quiz not found",
                        _ => "Error loading data",
                    };
                    notifier.notify(message, Severity::Error);
                    navigator.go_to_list();
                    return Err(err);
                }
            },
            None => document::new_quiz(),
        };

        Ok(Self {
            service,
            notifier,
            navigator,
            quiz,
            selection: Selection::new(),
        })
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    // -- editing surface ---------------------------------------------------

    pub fn rename(&mut self, title: impl Into<String>) {
        self.quiz = document::rename(&self.quiz, title);
    }

    /// Insert a new block and put it straight into edit mode.
    pub fn add_block(&mut self, block_type: BlockType, index: Option<usize>) -> BlockId {
        let (quiz, block_id) = document::add_block(&self.quiz, block_type, index);
        self.quiz = quiz;
        self.selection.select(block_id.clone());
        block_id
    }

    pub fn update_block(&mut self, block: &QuizBlock) {
        self.quiz = document::update_block(&self.quiz, block);
    }

    /// Delete a block; a deleted block can never stay selected.
    pub fn delete_block(&mut self, block_id: &BlockId) {
        self.quiz = document::delete_block(&self.quiz, block_id);
        self.selection.clear_if(block_id);
    }

    pub fn move_block(&mut self, from: usize, to: usize) {
        self.quiz = document::move_block(&self.quiz, from, to);
    }

    pub fn select(&mut self, block_id: BlockId) {
        self.selection.select(block_id);
    }

    pub fn deselect(&mut self) {
        self.selection.deselect();
    }

    /// Apply a resolved drop from the drag engine. Palette inserts select
    /// the new block, same as a direct insert.
    pub fn apply_drop(&mut self, action: DropAction) {
        let (quiz, inserted) = crate::drag::apply(action, &self.quiz);
        self.quiz = quiz;
        if let Some(block_id) = inserted {
            self.selection.select(block_id);
        }
    }

    // -- workflow ----------------------------------------------------------

    /// Persist the document. Always permitted, empty or not.
    ///
    /// On success: cosmetic delay, success notification, back to the
    /// list. On storage failure the in-memory document is preserved so
    /// the user can retry without losing edits.
    pub async fn save(&mut self) -> Result<(), QuizError> {
        if let Err(err) = self.service.save(&self.quiz).await {
            self.notifier.notify("Error saving data", Severity::Error);
            return Err(err);
        }

        tokio::time::sleep(SAVE_DELAY).await;
        self.notifier.notify("Changes are saved!", Severity::Success);
        self.navigator.go_to_list();
        Ok(())
    }

    /// Publish the document: the one-way Draft -> Published transition.
    ///
    /// Publishing an already-published quiz is a no-op (the original
    /// disables the button; this is the same guard one level down).
    /// An empty draft is refused with a warning and no state change.
    pub async fn publish(&mut self) -> Result<(), QuizError> {
        if self.quiz.published {
            return Ok(());
        }

        if self.quiz.blocks.is_empty() {
            self.notifier
                .notify("Add any blocks to publish", Severity::Warning);
            return Err(QuizError::EmptyDraft);
        }

        let published = Quiz {
            published: true,
            updated_at: chrono::Utc::now(),
            ..self.quiz.clone()
        };

        if let Err(err) = self.service.save(&published).await {
            self.notifier.notify("Error saving data", Severity::Error);
            return Err(err);
        }

        self.quiz = published;
        self.notifier.notify("Quiz is published!", Severity::Success);
        self.navigator.go_to_list();
        Ok(())
    }
}
