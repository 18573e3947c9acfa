//! Block factory.
//!
//! The single producer of well-formed default blocks. Every block enters
//! the document through here, so the properties record always matches the
//! type tag by construction.

use quizforge_types::block::{
    BlockBody, BlockType, ButtonProperties, ButtonType, FooterProperties, HeadingProperties,
    QuestionProperties, QuestionType, QuizBlock,
};

/// Create a new block with a fresh id and type-appropriate defaults.
///
/// Headings and footers start with empty text (the renderers supply a
/// fallback label). Questions start as single-choice with one empty
/// option. Buttons start as a "Next" button.
pub fn default_block(block_type: BlockType) -> QuizBlock {
    let body = match block_type {
        BlockType::Heading => BlockBody::Heading(HeadingProperties::default()),
        BlockType::Question => BlockBody::Question(QuestionProperties {
            text: String::new(),
            question_type: QuestionType::Single,
            options: vec![String::new()],
        }),
        BlockType::Button => BlockBody::Button(ButtonProperties {
            button_text: "Next".to_string(),
            button_type: ButtonType::Next,
        }),
        BlockType::Footer => BlockBody::Footer(FooterProperties::default()),
    };

    QuizBlock::new(body)
}
