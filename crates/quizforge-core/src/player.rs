//! Read-only player view.
//!
//! Renders a quiz through the registry's view forms only: edit
//! affordances are never reachable from here, whatever the selection
//! state of some editor elsewhere.

use quizforge_types::quiz::Quiz;

use crate::registry::BlockRegistry;

/// Render the player view of a quiz.
///
/// Title, each block in document order through its view renderer, then a
/// publication footer. An empty quiz shows the original's empty-state
/// line instead of blocks.
pub fn render_player(quiz: &Quiz, registry: &BlockRegistry) -> String {
    let mut out = String::new();
    out.push_str(&quiz.title);
    out.push_str("\n====\n");

    if quiz.blocks.is_empty() {
        out.push_str("No blocks added...\n");
    } else {
        for block in &quiz.blocks {
            let rendered = registry.render_block(block, false);
            if rendered.is_empty() {
                continue;
            }
            out.push_str(&rendered);
            out.push('\n');
        }
    }

    if quiz.published {
        out.push_str(&format!(
            "Published: {}\n",
            quiz.updated_at.format("%Y-%m-%d")
        ));
    } else {
        out.push_str("Not published yet!\n");
    }

    out
}
