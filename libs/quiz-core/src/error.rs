//! Error types for quiz-core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::OptionKey;

/// Hard failures raised while parsing a single markdown block.
///
/// Always block-local: the batch parsers convert these into [`ParseError`]
/// records and continue with the next block.
#[derive(Debug, Error)]
pub enum BlockError {
    #[error("Invalid question format in first line: \"{line}\"")]
    InvalidQuestionHeader { line: String },

    #[error("Invalid difficulty level: {value}. Must be E, M, or H")]
    InvalidDifficulty { value: String },

    #[error("Invalid question type: {value}. Must be SA or MS")]
    InvalidQuestionType { value: String },

    #[error("Invalid chooseN value: {value}. Must be between 2 and 4 for multi-select questions")]
    InvalidChooseCount { value: u32 },

    #[error("Empty option text for option {key}")]
    EmptyOption { key: OptionKey },

    #[error("Missing required option {key}")]
    MissingOption { key: OptionKey },

    #[error("Answer line not found")]
    AnswerLineNotFound,

    #[error("No valid answer letters found in: \"{raw}\"")]
    NoAnswerLetters { raw: String },

    #[error("Single answer question cannot have multiple answers: {letters}")]
    MultipleAnswersForSingle { letters: String },

    #[error("Multi-select question must have multiple answers, got: {letter}")]
    SingleAnswerForMulti { letter: OptionKey },

    #[error("Answer count ({count}) doesn't match chooseN ({expected})")]
    AnswerCountMismatch { count: usize, expected: u32 },

    #[error("Explanation not found")]
    ExplanationNotFound,

    #[error("Explanation too short (minimum 10 characters)")]
    ExplanationTooShort,

    #[error("Invalid flashcard header format: \"{line}\"")]
    InvalidFlashcardHeader { line: String },

    #[error("Empty question text")]
    EmptyFlashcardQuestion,

    #[error("Empty answer text on line {line}")]
    EmptyFlashcardAnswer { line: usize },

    #[error("No answers found")]
    NoAnswersFound,

    #[error("Answer too short: \"{answer}\" (minimum 3 characters)")]
    AnswerTooShort { answer: String },
}

/// Which kind of content record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Question,
    Flashcard,
}

/// One recoverable parse or validation failure, reported as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    /// Zero-based block position within the document, -1 for
    /// document-level findings.
    pub index: i32,
    pub message: String,
    /// Truncated snippet of the offending source block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<String>,
}

impl ParseError {
    pub fn question(index: i32, message: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::Question,
            index,
            message: message.into(),
            block: None,
        }
    }

    pub fn flashcard(index: i32, message: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::Flashcard,
            index,
            message: message.into(),
            block: None,
        }
    }

    /// A finding about the document as a whole rather than one block.
    pub fn document(kind: ContentKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            index: -1,
            message: message.into(),
            block: None,
        }
    }

    /// Attach a diagnostic snippet, truncated to the first 100 characters.
    pub fn with_block(mut self, block: &str) -> Self {
        let snippet: String = block.chars().take(100).collect();
        self.block = Some(format!("{}...", snippet));
        self
    }
}
