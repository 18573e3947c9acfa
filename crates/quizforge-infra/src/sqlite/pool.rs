//! SQLite connection handling for the key/value quiz store.
//!
//! The whole database is one `kv_store` table holding a couple of JSON
//! payloads, so traffic is light: whole-collection reads when the list
//! page or editor opens, and full-collection rewrites on save. SQLite
//! still allows only one writer at a time, so reads and writes get
//! separate pools, with WAL letting readers proceed alongside the
//! writer.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

/// Every read fetches at most one row, so a small read pool is plenty.
const READER_CONNECTIONS: u32 = 4;

/// How long a connection waits on a locked database before erroring.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Split read/write pool for the quiz database.
///
/// - `reader`: small read-only pool for collection lookups.
/// - `writer`: single connection, serializing collection rewrites.
#[derive(Clone)]
pub struct DatabasePool {
    pub reader: SqlitePool,
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Open the database, creating the file if missing, and run
    /// migrations on the writer before the read-only pool attaches.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let write_opts = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT)
            .create_if_missing(true);
        let read_opts = write_opts.clone().read_only(true);

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(write_opts)
            .await?;

        sqlx::migrate!("../../migrations").run(&writer).await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(READER_CONNECTIONS)
            .connect_with(read_opts)
            .await?;

        Ok(Self { reader, writer })
    }
}

/// Returns the default database URL based on `QUIZFORGE_DATA_DIR` env var,
/// falling back to `~/.quizforge/quizforge.db`.
pub fn default_database_url() -> String {
    let data_dir = std::env::var("QUIZFORGE_DATA_DIR").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        format!("{home}/.quizforge")
    });
    format!("sqlite://{data_dir}/quizforge.db")
}
