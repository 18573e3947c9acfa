//! SQLite persistence.

pub mod pool;
pub mod quiz;

pub use pool::{DatabasePool, default_database_url};
pub use quiz::SqliteQuizStore;
