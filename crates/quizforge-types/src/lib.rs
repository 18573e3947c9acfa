//! Shared domain types for quizforge.
//!
//! This crate contains the core domain types used across the quizforge
//! engine: Quiz, QuizBlock, the drag-gesture values, and their associated
//! error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod block;
pub mod drag;
pub mod error;
pub mod quiz;
