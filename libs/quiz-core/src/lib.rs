//! Core library for AWS certification study content.
//!
//! Provides:
//! - Markdown parsers for question banks and flashcard decks
//! - Post-parse content validation (hard errors vs. quality warnings)
//! - Quiz scoring with exact-match grading and per-question timing
//! - Shared types (Question, Flashcard, result summaries, etc.)

pub mod error;
pub mod parser;
pub mod scoring;
pub mod types;
pub mod validation;

pub use error::{BlockError, ContentKind, ParseError};
pub use parser::{
    parse_flashcards, parse_questions, validate_flashcard_ids, validate_question_numbering,
    ParseResult,
};
pub use scoring::score_quiz;
pub use types::{
    Difficulty, Flashcard, Module, OptionKey, Options, QType, Question, QuizResultDetail,
    QuizResultSummary,
};
pub use validation::{validate_flashcard_content, validate_quiz_content, ValidationResult};
