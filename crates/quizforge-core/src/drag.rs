//! Drag-reorder engine.
//!
//! Computes the insertion/target index during a drag gesture from pointer
//! position relative to rendered block boundaries, and turns the drop into
//! a document operation. The engine holds no persisted state; the whole
//! gesture lives in one `DragGesture` value.

use quizforge_types::block::BlockType;
use quizforge_types::drag::DragSource;
use quizforge_types::quiz::Quiz;

use crate::document::{add_block, move_block};

/// Vertical extent of one rendered block, in document order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockExtent {
    pub top: f64,
    pub height: f64,
}

impl BlockExtent {
    /// Vertical midpoint of the block.
    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Compute the target index for a pointer at `pointer_y`.
///
/// Picks the smallest index whose midpoint lies below the pointer; when
/// the pointer is below every midpoint the target is the sequence length
/// (append). This gives stable "closest gap" semantics independent of
/// block heights.
pub fn target_index(pointer_y: f64, extents: &[BlockExtent]) -> usize {
    extents
        .iter()
        .position(|extent| pointer_y < extent.midpoint())
        .unwrap_or(extents.len())
}

/// The document operation a drop resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAction {
    /// Insert a fresh block of the given type at `index`.
    Insert { block_type: BlockType, index: usize },
    /// Move the block at `from` to `to` (post-removal index).
    Move { from: usize, to: usize },
}

/// One active drag gesture, from start to drop or cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragGesture {
    source: DragSource,
    target: Option<usize>,
}

impl DragGesture {
    /// Start a gesture from the palette or from an existing canvas block.
    pub fn start(source: DragSource) -> Self {
        Self {
            source,
            target: None,
        }
    }

    /// Sample the pointer against the rendered block extents and remember
    /// the hovered target index.
    pub fn hover(&mut self, pointer_y: f64, extents: &[BlockExtent]) -> usize {
        let index = target_index(pointer_y, extents);
        self.target = Some(index);
        index
    }

    /// The currently hovered target index, if the pointer has entered the
    /// canvas.
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// Consume the gesture and resolve the drop.
    ///
    /// Palette sources always insert at the target. Canvas sources move,
    /// with the landing index compensated for the source element's removal
    /// shifting later indexes down by one; dropping a block onto its own
    /// position resolves to nothing. A drop outside any valid target (no
    /// hover recorded) also resolves to nothing. Either way the transient
    /// state is gone once this returns.
    pub fn resolve(self) -> Option<DropAction> {
        let target = self.target?;
        match self.source {
            DragSource::Palette { block_type } => Some(DropAction::Insert {
                block_type,
                index: target,
            }),
            DragSource::Canvas { index: from, .. } => {
                if from == target || from + 1 == target {
                    return None;
                }
                let to = if from < target { target - 1 } else { target };
                Some(DropAction::Move { from, to })
            }
        }
    }

    /// Discard the gesture (drag cancelled or ended outside the canvas).
    pub fn cancel(self) {}
}

/// Apply a resolved drop to the document. Returns the new quiz and, for
/// inserts, the id of the freshly created block.
pub fn apply(action: DropAction, quiz: &Quiz) -> (Quiz, Option<quizforge_types::block::BlockId>) {
    match action {
        DropAction::Insert { block_type, index } => {
            let (quiz, id) = add_block(quiz, block_type, Some(index));
            (quiz, Some(id))
        }
        DropAction::Move { from, to } => (move_block(quiz, from, to), None),
    }
}
