//! Component registry.
//!
//! Maps a block type to its renderer pair (read view + edit view). Both
//! the editor canvas and the published-quiz player resolve renderers here;
//! the player only ever calls the view form. Resolution is deliberately
//! tolerant: a type with no registered renderer renders nothing, since
//! this is a presentation boundary, not a data-integrity one.

use std::collections::HashMap;

use quizforge_types::block::{BlockType, QuizBlock};

use crate::render::{ButtonRenderer, FooterRenderer, HeadingRenderer, QuestionRenderer};

/// Renderer pair for one block type.
///
/// `view` is the read-only form shown on the canvas and in the player;
/// `edit` is the property-editing form shown while the block is selected.
/// Renderers are stateless templates over the block value.
pub trait BlockRenderer: Send + Sync {
    fn view(&self, block: &QuizBlock) -> String;
    fn edit(&self, block: &QuizBlock) -> String;
}

/// Registry of pluggable renderers keyed by block type.
#[derive(Default)]
pub struct BlockRegistry {
    renderers: HashMap<BlockType, Box<dyn BlockRenderer>>,
}

impl BlockRegistry {
    /// Empty registry; everything renders as nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the four built-in text renderers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(BlockType::Heading, Box::new(HeadingRenderer));
        registry.register(BlockType::Question, Box::new(QuestionRenderer));
        registry.register(BlockType::Button, Box::new(ButtonRenderer));
        registry.register(BlockType::Footer, Box::new(FooterRenderer));
        registry
    }

    /// Register (or replace) the renderer for a block type.
    pub fn register(&mut self, block_type: BlockType, renderer: Box<dyn BlockRenderer>) {
        self.renderers.insert(block_type, renderer);
    }

    /// Resolve the renderer for a block type. `None` means "render
    /// nothing".
    pub fn resolve(&self, block_type: BlockType) -> Option<&dyn BlockRenderer> {
        self.renderers.get(&block_type).map(|r| r.as_ref())
    }

    /// Render one block on the canvas: the edit form when it is selected,
    /// the view form otherwise. Unregistered types yield an empty string.
    pub fn render_block(&self, block: &QuizBlock, is_selected: bool) -> String {
        match self.resolve(block.block_type()) {
            Some(renderer) if is_selected => renderer.edit(block),
            Some(renderer) => renderer.view(block),
            None => String::new(),
        }
    }
}
