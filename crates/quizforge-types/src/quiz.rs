use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::block::QuizBlock;

/// Unique identifier for a quiz, wrapping a UUID v7 (time-sortable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuizId(pub Uuid);

impl QuizId {
    /// Create a new QuizId using UUID v7 (time-sortable, guaranteed ordering).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create a QuizId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for QuizId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuizId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuizId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A complete quiz document.
///
/// Block order is presentation order. `published` only ever transitions
/// false -> true (enforced by the editor workflow, never auto-reverted).
/// `created_at` is set once; `updated_at` is refreshed by every persisted
/// mutation.
///
/// Serialized with camelCase field names and no version field, matching
/// the stored payload format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: QuizId,
    pub title: String,
    pub blocks: Vec<QuizBlock>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quiz {
    /// Find a block by id.
    pub fn block(&self, id: &crate::block::BlockId) -> Option<&QuizBlock> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    /// Position of a block in the sequence, if present.
    pub fn index_of(&self, id: &crate::block::BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }
}
