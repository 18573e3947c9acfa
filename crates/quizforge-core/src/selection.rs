//! Selection / edit-mode state.
//!
//! At most one block across the whole document is in edit mode at any
//! time: a single slot, not a stack. Selecting a block implicitly returns
//! the previously selected one to viewing. Selection is session state and
//! is never persisted.

use quizforge_types::block::BlockId;

/// Tracks which block, if any, is currently in edit mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    editing: Option<BlockId>,
}

impl Selection {
    /// New selection with nothing in edit mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put the given block into edit mode, replacing any previous
    /// selection.
    pub fn select(&mut self, block_id: BlockId) {
        self.editing = Some(block_id);
    }

    /// Return the editing block (if any) to viewing. No-op when nothing
    /// is selected.
    pub fn deselect(&mut self) {
        self.editing = None;
    }

    /// Clear the selection if it points at the given block. Used when the
    /// selected block is deleted, so no dangling id survives.
    pub fn clear_if(&mut self, block_id: &BlockId) {
        if self.editing.as_ref() == Some(block_id) {
            self.editing = None;
        }
    }

    /// Whether the given block is in edit mode.
    pub fn is_selected(&self, block_id: &BlockId) -> bool {
        self.editing.as_ref() == Some(block_id)
    }

    /// The id currently in edit mode, if any.
    pub fn editing(&self) -> Option<&BlockId> {
        self.editing.as_ref()
    }
}
