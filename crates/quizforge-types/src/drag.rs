//! Drag-gesture values.
//!
//! A drag is modeled as explicit data carried from gesture start to
//! gesture end, scoped to the single active interaction. There is no
//! shared mutable drag singleton anywhere in the engine.

use crate::block::{BlockId, BlockType};

/// Where a drag gesture originated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSource {
    /// A palette entry: carries only a block type. Dropping always
    /// performs an insert.
    Palette { block_type: BlockType },
    /// An existing canvas block: carries its id and current index.
    /// Dropping performs a move.
    Canvas { block_id: BlockId, index: usize },
}

impl DragSource {
    /// The block type being dragged (for palette sources).
    pub fn block_type(&self) -> Option<BlockType> {
        match self {
            DragSource::Palette { block_type } => Some(*block_type),
            DragSource::Canvas { .. } => None,
        }
    }
}
