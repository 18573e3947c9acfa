//! SQLite quiz store implementation.
//!
//! Implements `QuizStore` from `quizforge-core` over the flat `kv_store`
//! table, keeping the original's localStorage transport: the whole quiz
//! collection lives under one key as a JSON array, and a second key holds
//! the one-time seed guard. Values are stored as JSON text and
//! deserialized on read.

use chrono::Utc;
use quizforge_core::storage::QuizStore;
use quizforge_types::block::{
    BlockBody, ButtonProperties, ButtonType, FooterProperties, HeadingProperties,
    QuestionProperties, QuestionType, QuizBlock,
};
use quizforge_types::error::RepositoryError;
use quizforge_types::quiz::{Quiz, QuizId};
use sqlx::Row;

use super::pool::DatabasePool;

/// Key holding the full quiz collection serialized as a JSON array.
const QUIZZES_KEY: &str = "quizbuilder.quizzes";
/// Key holding the "has been seeded" flag.
const INITIALIZED_KEY: &str = "quizbuilder.initialized";

/// SQLite-backed implementation of `QuizStore`.
pub struct SqliteQuizStore {
    pool: DatabasePool,
}

impl SqliteQuizStore {
    /// Create a new quiz store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    async fn get_value(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let value: String = row
                    .try_get("value")
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set_value(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"INSERT INTO kv_store (key, value, created_at, updated_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT (key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    /// Read the stored collection, seeding the examples exactly once.
    ///
    /// No collection key and no initialized flag means a first-ever run:
    /// the examples are written together with the flag. No collection key
    /// but a set flag means the user really has zero quizzes.
    async fn read_collection(&self) -> Result<Vec<Quiz>, RepositoryError> {
        if let Some(data) = self.get_value(QUIZZES_KEY).await? {
            return serde_json::from_str(&data)
                .map_err(|e| RepositoryError::Query(format!("invalid quiz payload: {e}")));
        }

        if self.get_value(INITIALIZED_KEY).await?.is_some() {
            return Ok(Vec::new());
        }

        tracing::debug!("empty uninitialized store, seeding example quizzes");
        let seeds = example_quizzes();
        self.write_collection(&seeds).await?;
        self.set_value(INITIALIZED_KEY, "true").await?;
        Ok(seeds)
    }

    async fn write_collection(&self, quizzes: &[Quiz]) -> Result<(), RepositoryError> {
        let payload = serde_json::to_string(quizzes)
            .map_err(|e| RepositoryError::Query(format!("failed to serialize quizzes: {e}")))?;
        self.set_value(QUIZZES_KEY, &payload).await
    }
}

impl QuizStore for SqliteQuizStore {
    async fn get_all(&self) -> Result<Vec<Quiz>, RepositoryError> {
        self.read_collection().await
    }

    async fn get_by_id(&self, id: &QuizId) -> Result<Option<Quiz>, RepositoryError> {
        let quizzes = self.read_collection().await?;
        Ok(quizzes.into_iter().find(|q| &q.id == id))
    }

    async fn upsert(&self, quiz: &Quiz) -> Result<(), RepositoryError> {
        let mut quizzes = self.read_collection().await?;
        match quizzes.iter_mut().find(|q| q.id == quiz.id) {
            Some(existing) => *existing = quiz.clone(),
            None => quizzes.push(quiz.clone()),
        }
        self.write_collection(&quizzes).await
    }

    async fn remove(&self, id: &QuizId) -> Result<(), RepositoryError> {
        let mut quizzes = self.read_collection().await?;
        quizzes.retain(|q| &q.id != id);
        self.write_collection(&quizzes).await
    }
}

/// The two example quizzes seeded on first run, so the empty-state
/// experience is never a totally blank list.
fn example_quizzes() -> Vec<Quiz> {
    let now = Utc::now();
    let options = |n: usize| (1..=n).map(|i| format!("option {i}")).collect();

    vec![
        Quiz {
            id: QuizId::new(),
            title: "Quiz example 1".to_string(),
            blocks: vec![
                QuizBlock::new(BlockBody::Heading(HeadingProperties {
                    text: "Hello!".to_string(),
                })),
                QuizBlock::new(BlockBody::Question(QuestionProperties {
                    text: "Any question?".to_string(),
                    question_type: QuestionType::Single,
                    options: options(4),
                })),
                QuizBlock::new(BlockBody::Button(ButtonProperties {
                    button_text: "Next".to_string(),
                    button_type: ButtonType::Next,
                })),
            ],
            published: true,
            created_at: now,
            updated_at: now,
        },
        Quiz {
            id: QuizId::new(),
            title: "Quiz example 2".to_string(),
            blocks: vec![
                QuizBlock::new(BlockBody::Heading(HeadingProperties {
                    text: "Hello Quiz!".to_string(),
                })),
                QuizBlock::new(BlockBody::Question(QuestionProperties {
                    text: "Any question?".to_string(),
                    question_type: QuestionType::Multi,
                    options: options(4),
                })),
                QuizBlock::new(BlockBody::Button(ButtonProperties {
                    button_text: "Next".to_string(),
                    button_type: ButtonType::Next,
                })),
                QuizBlock::new(BlockBody::Footer(FooterProperties {
                    text: "lorem lorem lorem lorem lorem lorem lorem lorem lorem lorem"
                        .to_string(),
                })),
            ],
            published: true,
            created_at: now,
            updated_at: now,
        },
    ]
}
