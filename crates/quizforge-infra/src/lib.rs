//! Infrastructure layer for quizforge.
//!
//! Contains implementations of the ports defined in `quizforge-core`:
//! the SQLite-backed quiz store and the tracing-backed notifier.

pub mod notify;
pub mod sqlite;
