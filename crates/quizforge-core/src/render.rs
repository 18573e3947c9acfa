//! Built-in text renderers for the four block types.
//!
//! These are simple stateless templates; the interesting logic lives in
//! the document transforms and the drag engine. Empty text falls back to a
//! placeholder label so a half-built quiz still reads sensibly.

use std::fmt::Write as _;

use quizforge_types::block::{BlockBody, QuestionType, QuizBlock};

use crate::registry::BlockRenderer;

fn or_fallback<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.is_empty() { fallback } else { text }
}

/// Heading: the text as a title line, "Header" when empty.
pub struct HeadingRenderer;

impl BlockRenderer for HeadingRenderer {
    fn view(&self, block: &QuizBlock) -> String {
        match &block.body {
            BlockBody::Heading(props) => format!("# {}", or_fallback(&props.text, "Header")),
            _ => String::new(),
        }
    }

    fn edit(&self, block: &QuizBlock) -> String {
        match &block.body {
            BlockBody::Heading(props) => format!("Header text: [{}]", props.text),
            _ => String::new(),
        }
    }
}

/// Question: prompt plus answer affordances -- `( )` radios for single
/// choice, `[ ]` checkboxes for multi, a free-text placeholder for text
/// answers.
pub struct QuestionRenderer;

impl BlockRenderer for QuestionRenderer {
    fn view(&self, block: &QuizBlock) -> String {
        let BlockBody::Question(props) = &block.body else {
            return String::new();
        };

        let mut out = String::new();
        let _ = writeln!(out, "{}", or_fallback(&props.text, "Question"));

        match props.question_type {
            QuestionType::Text => {
                let _ = write!(out, "  [Write your answer...]");
            }
            QuestionType::Single | QuestionType::Multi => {
                let marker = if props.question_type == QuestionType::Single {
                    "( )"
                } else {
                    "[ ]"
                };
                for (i, option) in props.options.iter().enumerate() {
                    let label = if option.is_empty() {
                        format!("Answer {}", i + 1)
                    } else {
                        option.clone()
                    };
                    let _ = writeln!(out, "  {marker} {label}");
                }
                // Drop the trailing newline so blocks join cleanly.
                out.truncate(out.trim_end().len());
            }
        }
        out
    }

    fn edit(&self, block: &QuizBlock) -> String {
        let BlockBody::Question(props) = &block.body else {
            return String::new();
        };

        let mut out = String::new();
        let _ = writeln!(out, "Question text: [{}]", props.text);
        let _ = writeln!(out, "Question type: {}", props.question_type);
        if props.question_type != QuestionType::Text {
            for (i, option) in props.options.iter().enumerate() {
                let _ = writeln!(out, "  Answer {}: [{}]", i + 1, option);
            }
            let _ = write!(out, "  + Add a variant");
        }
        out.trim_end().to_string()
    }
}

/// Button: its label in brackets.
pub struct ButtonRenderer;

impl BlockRenderer for ButtonRenderer {
    fn view(&self, block: &QuizBlock) -> String {
        match &block.body {
            BlockBody::Button(props) => format!("[ {} ]", props.button_text),
            _ => String::new(),
        }
    }

    fn edit(&self, block: &QuizBlock) -> String {
        match &block.body {
            BlockBody::Button(props) => format!(
                "Button text: [{}]\nButton type: {}",
                props.button_text, props.button_type
            ),
            _ => String::new(),
        }
    }
}

/// Footer: muted trailing text, "Footer text" when empty.
pub struct FooterRenderer;

impl BlockRenderer for FooterRenderer {
    fn view(&self, block: &QuizBlock) -> String {
        match &block.body {
            BlockBody::Footer(props) => or_fallback(&props.text, "Footer text").to_string(),
            _ => String::new(),
        }
    }

    fn edit(&self, block: &QuizBlock) -> String {
        match &block.body {
            BlockBody::Footer(props) => format!("Footer text: [{}]", props.text),
            _ => String::new(),
        }
    }
}
