//! Pure document transforms.
//!
//! Every operation takes a quiz by reference and returns a new value;
//! nothing here mutates in place. This keeps the editor's state container
//! a simple reducer and makes each operation trivially unit-testable.
//! All mutating transforms refresh `updated_at`.

use chrono::Utc;
use quizforge_types::block::{BlockBody, BlockId, BlockType, QuestionType, QuizBlock};
use quizforge_types::quiz::{Quiz, QuizId};

use crate::factory::default_block;

/// Create a fresh draft: placeholder title, no blocks, unpublished.
pub fn new_quiz() -> Quiz {
    let now = Utc::now();
    Quiz {
        id: QuizId::new(),
        title: "New quiz".to_string(),
        blocks: Vec::new(),
        published: false,
        created_at: now,
        updated_at: now,
    }
}

/// Replace the title.
pub fn rename(quiz: &Quiz, title: impl Into<String>) -> Quiz {
    Quiz {
        title: title.into(),
        updated_at: Utc::now(),
        ..quiz.clone()
    }
}

/// Insert a freshly factory-created block at `index` (default: end of the
/// sequence). The index is clamped into `[0, len]`. Returns the new quiz
/// and the inserted block's id so the caller can select it.
pub fn add_block(quiz: &Quiz, block_type: BlockType, index: Option<usize>) -> (Quiz, BlockId) {
    let block = default_block(block_type);
    let block_id = block.id.clone();

    let mut blocks = quiz.blocks.clone();
    let insert_at = index.unwrap_or(blocks.len()).min(blocks.len());
    blocks.insert(insert_at, block);

    let quiz = Quiz {
        blocks,
        updated_at: Utc::now(),
        ..quiz.clone()
    };
    (quiz, block_id)
}

/// Replace the block whose id matches `block.id`.
///
/// When no block matches, the sequence is unchanged but `updated_at` is
/// still refreshed -- a quirk of the original behavior, kept deliberately.
pub fn update_block(quiz: &Quiz, block: &QuizBlock) -> Quiz {
    let blocks = quiz
        .blocks
        .iter()
        .map(|b| {
            if b.id == block.id {
                block.clone()
            } else {
                b.clone()
            }
        })
        .collect();

    Quiz {
        blocks,
        updated_at: Utc::now(),
        ..quiz.clone()
    }
}

/// Remove the block with the given id. The document store has no
/// selection awareness; the caller clears the selection if the deleted
/// block was in edit mode.
pub fn delete_block(quiz: &Quiz, block_id: &BlockId) -> Quiz {
    let blocks = quiz
        .blocks
        .iter()
        .filter(|b| &b.id != block_id)
        .cloned()
        .collect();

    Quiz {
        blocks,
        updated_at: Utc::now(),
        ..quiz.clone()
    }
}

/// Remove the element at `from` and reinsert it at `to` in the
/// post-removal sequence (splice semantics). `from == to` and
/// out-of-range `from` return an untouched clone, with no timestamp
/// refresh.
pub fn move_block(quiz: &Quiz, from: usize, to: usize) -> Quiz {
    if from == to || from >= quiz.blocks.len() {
        return quiz.clone();
    }

    let mut blocks = quiz.blocks.clone();
    let moved = blocks.remove(from);
    let landing = to.min(blocks.len());
    blocks.insert(landing, moved);

    Quiz {
        blocks,
        updated_at: Utc::now(),
        ..quiz.clone()
    }
}

// ---------------------------------------------------------------------------
// Question-block property transforms
// ---------------------------------------------------------------------------

/// Change a question's answer mode.
///
/// Switching to `Text` clears the options. Switching away from `Text`
/// keeps whatever options exist -- it never silently invents any.
pub fn set_question_type(block: &QuizBlock, question_type: QuestionType) -> QuizBlock {
    map_question(block, |props| {
        props.question_type = question_type;
        if question_type == QuestionType::Text {
            props.options.clear();
        }
    })
}

/// Replace the option at `index`. Out-of-range indexes are ignored.
pub fn set_option(block: &QuizBlock, index: usize, value: impl Into<String>) -> QuizBlock {
    let value = value.into();
    map_question(block, |props| {
        if let Some(option) = props.options.get_mut(index) {
            *option = value;
        }
    })
}

/// Append an empty answer option.
pub fn add_option(block: &QuizBlock) -> QuizBlock {
    map_question(block, |props| props.options.push(String::new()))
}

/// Remove the option at `index`. Out-of-range indexes are ignored.
pub fn remove_option(block: &QuizBlock, index: usize) -> QuizBlock {
    map_question(block, |props| {
        if index < props.options.len() {
            props.options.remove(index);
        }
    })
}

/// Apply an edit to a question body; non-question blocks pass through
/// unchanged.
fn map_question(
    block: &QuizBlock,
    edit: impl FnOnce(&mut quizforge_types::block::QuestionProperties),
) -> QuizBlock {
    let mut block = block.clone();
    if let BlockBody::Question(props) = &mut block.body {
        edit(props);
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizforge_types::block::{HeadingProperties, QuestionProperties};

    fn quiz_with_blocks(n: usize) -> Quiz {
        let mut quiz = new_quiz();
        for i in 0..n {
            quiz.blocks.push(QuizBlock::new(BlockBody::Heading(
                HeadingProperties {
                    text: format!("block {i}"),
                },
            )));
        }
        quiz
    }

    fn texts(quiz: &Quiz) -> Vec<String> {
        quiz.blocks
            .iter()
            .map(|b| match &b.body {
                BlockBody::Heading(p) => p.text.clone(),
                other => panic!("fixture holds headings only, got {other:?}"),
            })
            .collect()
    }

    fn question(options: &[&str], question_type: QuestionType) -> QuizBlock {
        QuizBlock::new(BlockBody::Question(QuestionProperties {
            text: "Any question?".to_string(),
            question_type,
            options: options.iter().map(|s| s.to_string()).collect(),
        }))
    }

    #[test]
    fn test_new_quiz_is_empty_draft() {
        let quiz = new_quiz();
        assert_eq!(quiz.title, "New quiz");
        assert!(quiz.blocks.is_empty());
        assert!(!quiz.published);
        assert_eq!(quiz.created_at, quiz.updated_at);
    }

    #[test]
    fn test_rename_keeps_everything_else() {
        let quiz = quiz_with_blocks(2);
        let renamed = rename(&quiz, "Capitals of Europe");

        assert_eq!(renamed.title, "Capitals of Europe");
        assert_eq!(renamed.id, quiz.id);
        assert_eq!(renamed.blocks, quiz.blocks);
        assert!(renamed.updated_at >= quiz.updated_at);
    }

    #[test]
    fn test_add_block_appends_by_default() {
        let quiz = quiz_with_blocks(2);
        let (next, id) = add_block(&quiz, BlockType::Button, None);

        assert_eq!(next.blocks.len(), 3);
        assert_eq!(next.blocks[2].id, id);
        assert_eq!(next.blocks[2].block_type(), BlockType::Button);
    }

    #[test]
    fn test_add_block_inserts_at_index() {
        // [A,B,C] + heading at 1 -> [A,H,B,C]
        let quiz = quiz_with_blocks(3);
        let (next, id) = add_block(&quiz, BlockType::Heading, Some(1));

        assert_eq!(next.blocks.len(), 4);
        assert_eq!(next.blocks[1].id, id);
        assert_eq!(texts(&next)[0], "block 0");
        assert_eq!(texts(&next)[2], "block 1");
        assert_eq!(texts(&next)[3], "block 2");
    }

    #[test]
    fn test_add_block_clamps_out_of_range_index() {
        let quiz = quiz_with_blocks(2);
        let (next, id) = add_block(&quiz, BlockType::Footer, Some(99));
        assert_eq!(next.blocks[2].id, id);
    }

    #[test]
    fn test_update_block_replaces_matching_id() {
        let quiz = quiz_with_blocks(2);
        let mut edited = quiz.blocks[1].clone();
        if let BlockBody::Heading(props) = &mut edited.body {
            props.text = "edited".to_string();
        }

        let next = update_block(&quiz, &edited);
        assert_eq!(texts(&next), vec!["block 0", "edited"]);
    }

    #[test]
    fn test_update_block_with_unknown_id_only_touches_timestamp() {
        let quiz = quiz_with_blocks(2);
        let stranger = QuizBlock::new(BlockBody::Heading(HeadingProperties {
            text: "nobody".to_string(),
        }));

        let next = update_block(&quiz, &stranger);
        assert_eq!(next.blocks, quiz.blocks);
        assert!(next.updated_at >= quiz.updated_at);
    }

    #[test]
    fn test_delete_block_removes_matching_id() {
        let quiz = quiz_with_blocks(3);
        let id = quiz.blocks[1].id.clone();

        let next = delete_block(&quiz, &id);
        assert_eq!(texts(&next), vec!["block 0", "block 2"]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop_on_sequence() {
        let quiz = quiz_with_blocks(2);
        let next = delete_block(&quiz, &BlockId::new());
        assert_eq!(next.blocks, quiz.blocks);
    }

    #[test]
    fn test_move_block_forward() {
        // [A,B,C,D] move(0,2) -> [B,C,A,D]
        let quiz = quiz_with_blocks(4);
        let next = move_block(&quiz, 0, 2);
        assert_eq!(texts(&next), vec!["block 1", "block 2", "block 0", "block 3"]);
    }

    #[test]
    fn test_move_block_backward() {
        // [A,B,C,D] move(3,0) -> [D,A,B,C]
        let quiz = quiz_with_blocks(4);
        let next = move_block(&quiz, 3, 0);
        assert_eq!(texts(&next), vec!["block 3", "block 0", "block 1", "block 2"]);
    }

    #[test]
    fn test_move_block_same_index_skips_timestamp_refresh() {
        let quiz = quiz_with_blocks(3);
        let next = move_block(&quiz, 1, 1);
        assert_eq!(next, quiz);
    }

    #[test]
    fn test_move_block_out_of_range_from_is_noop() {
        let quiz = quiz_with_blocks(2);
        let next = move_block(&quiz, 7, 0);
        assert_eq!(next.blocks, quiz.blocks);
    }

    #[test]
    fn test_switching_to_text_clears_options() {
        let block = question(&["a", "b"], QuestionType::Single);
        let next = set_question_type(&block, QuestionType::Text);

        match next.body {
            BlockBody::Question(props) => {
                assert_eq!(props.question_type, QuestionType::Text);
                assert!(props.options.is_empty());
            }
            other => panic!("expected question body, got {other:?}"),
        }
    }

    #[test]
    fn test_switching_back_from_text_does_not_repopulate() {
        let block = question(&["a", "b"], QuestionType::Single);
        let text_mode = set_question_type(&block, QuestionType::Text);
        let multi = set_question_type(&text_mode, QuestionType::Multi);

        match multi.body {
            BlockBody::Question(props) => {
                assert_eq!(props.question_type, QuestionType::Multi);
                assert!(props.options.is_empty(), "options must not be re-invented");
            }
            other => panic!("expected question body, got {other:?}"),
        }
    }

    #[test]
    fn test_option_editing() {
        let block = question(&[""], QuestionType::Single);
        let block = add_option(&block);
        let block = set_option(&block, 0, "yes");
        let block = set_option(&block, 1, "no");
        let block = set_option(&block, 9, "ignored");

        match &block.body {
            BlockBody::Question(props) => assert_eq!(props.options, vec!["yes", "no"]),
            other => panic!("expected question body, got {other:?}"),
        }

        let block = remove_option(&block, 0);
        match &block.body {
            BlockBody::Question(props) => assert_eq!(props.options, vec!["no"]),
            other => panic!("expected question body, got {other:?}"),
        }
    }

    #[test]
    fn test_question_transforms_pass_through_other_blocks() {
        let heading = QuizBlock::new(BlockBody::Heading(HeadingProperties {
            text: "h".to_string(),
        }));
        let next = set_question_type(&heading, QuestionType::Text);
        assert_eq!(next, heading);
    }
}
