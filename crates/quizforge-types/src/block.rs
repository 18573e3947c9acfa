use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Unique identifier for a block, wrapping a UUID v7 (time-sortable).
///
/// Stable for the block's lifetime, independent of its position in the
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub Uuid);

impl BlockId {
    /// Create a new BlockId using UUID v7.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create a BlockId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BlockId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// The closed set of block kinds.
///
/// Used by the palette, the factory, and the component registry. Adding a
/// fifth kind forces every `match` over this enum to be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Heading,
    Question,
    Button,
    Footer,
}

impl BlockType {
    /// All block types, in palette order.
    pub const ALL: [BlockType; 4] = [
        BlockType::Heading,
        BlockType::Question,
        BlockType::Button,
        BlockType::Footer,
    ];

    /// Human-readable label for the properties panel and palette.
    pub fn label(&self) -> &'static str {
        match self {
            BlockType::Heading => "Header",
            BlockType::Question => "Question",
            BlockType::Button => "Button",
            BlockType::Footer => "Footer",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockType::Heading => write!(f, "heading"),
            BlockType::Question => write!(f, "question"),
            BlockType::Button => write!(f, "button"),
            BlockType::Footer => write!(f, "footer"),
        }
    }
}

impl FromStr for BlockType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "heading" => Ok(BlockType::Heading),
            "question" => Ok(BlockType::Question),
            "button" => Ok(BlockType::Button),
            "footer" => Ok(BlockType::Footer),
            other => Err(format!("invalid block type: '{other}'")),
        }
    }
}

/// How a question collects its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Single,
    Multi,
    Text,
}

impl Default for QuestionType {
    fn default() -> Self {
        QuestionType::Single
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::Single => write!(f, "single"),
            QuestionType::Multi => write!(f, "multi"),
            QuestionType::Text => write!(f, "text"),
        }
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(QuestionType::Single),
            "multi" => Ok(QuestionType::Multi),
            "text" => Ok(QuestionType::Text),
            other => Err(format!("invalid question type: '{other}'")),
        }
    }
}

/// What a button does when the player reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    Next,
    Submit,
}

impl Default for ButtonType {
    fn default() -> Self {
        ButtonType::Next
    }
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonType::Next => write!(f, "next"),
            ButtonType::Submit => write!(f, "submit"),
        }
    }
}

/// Properties of a heading block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingProperties {
    pub text: String,
}

/// Properties of a question block.
///
/// `options` is meaningless when `question_type` is `Text`; the document
/// transforms keep it empty in that mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionProperties {
    pub text: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
}

/// Properties of a button block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonProperties {
    pub button_text: String,
    pub button_type: ButtonType,
}

/// Properties of a footer block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterProperties {
    pub text: String,
}

/// The tagged variant half of a block: its type tag plus the properties
/// record dictated by that tag.
///
/// Serializes as `"type": "<tag>", "properties": {...}` so stored payloads
/// keep the original wire shape. The pairing of tag and properties is
/// structural -- a question body cannot carry button properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "properties", rename_all = "lowercase")]
pub enum BlockBody {
    Heading(HeadingProperties),
    Question(QuestionProperties),
    Button(ButtonProperties),
    Footer(FooterProperties),
}

impl BlockBody {
    /// The type tag of this body.
    pub fn block_type(&self) -> BlockType {
        match self {
            BlockBody::Heading(_) => BlockType::Heading,
            BlockBody::Question(_) => BlockType::Question,
            BlockBody::Button(_) => BlockType::Button,
            BlockBody::Footer(_) => BlockType::Footer,
        }
    }
}

/// One addressable unit of quiz content.
///
/// The id is stable for the block's lifetime; the type tag is immutable
/// once created (switching types means delete + re-create).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizBlock {
    pub id: BlockId,
    #[serde(flatten)]
    pub body: BlockBody,
}

impl QuizBlock {
    /// Construct a block with a fresh id around the given body.
    pub fn new(body: BlockBody) -> Self {
        Self {
            id: BlockId::new(),
            body,
        }
    }

    /// The type tag of this block.
    pub fn block_type(&self) -> BlockType {
        self.body.block_type()
    }
}
