//! Markdown parsers for question banks and flashcard decks.
//!
//! Documents are split into blocks at recognized header lines, and each
//! block is parsed independently. A malformed block is recorded as a
//! [`ParseError`] and never aborts the rest of the document.

mod flashcard;
mod question;

use serde::{Deserialize, Serialize};

use crate::error::{ContentKind, ParseError};
use crate::types::{Flashcard, Question};

/// Parsed records plus every recoverable failure encountered on the way.
///
/// Zero records is not an error at this level; the caller decides whether
/// an empty result is a failure (e.g. a not-found response).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResult<T> {
    pub data: Vec<T>,
    pub errors: Vec<ParseError>,
}

/// Parse a full question-bank document.
///
/// Records are returned in document order. On top of per-block failures,
/// a non-fatal ordering warning is recorded when a block's declared index
/// is not exactly one greater than the previous successfully parsed
/// question's.
pub fn parse_questions(markdown: &str) -> ParseResult<Question> {
    let mut questions: Vec<Question> = Vec::new();
    let mut errors = Vec::new();

    let normalized = normalize_line_endings(markdown);
    let blocks: Vec<String> = split_blocks(&normalized, is_question_delimiter)
        .into_iter()
        .filter(|block| starts_with_question_number(block))
        .collect();

    for (i, block) in blocks.iter().enumerate() {
        match question::parse_question_block(block) {
            Ok(question) => {
                if let Some(prev) = questions.last() {
                    if question.index != prev.index + 1 {
                        errors.push(
                            ParseError::question(
                                i as i32,
                                format!(
                                    "Question numbering out of order. Expected {}, got {}",
                                    questions.len() + 1,
                                    question.index
                                ),
                            )
                            .with_block(block),
                        );
                    }
                }
                questions.push(question);
            }
            Err(err) => {
                errors.push(ParseError::question(i as i32, err.to_string()).with_block(block));
            }
        }
    }

    ParseResult {
        data: questions,
        errors,
    }
}

/// Parse a full flashcard-deck document.
pub fn parse_flashcards(markdown: &str) -> ParseResult<Flashcard> {
    let mut flashcards = Vec::new();
    let mut errors = Vec::new();

    let normalized = normalize_line_endings(markdown);
    let blocks: Vec<String> = split_blocks(&normalized, is_flashcard_delimiter)
        .into_iter()
        .filter(|block| block.starts_with("###"))
        .collect();

    for (i, block) in blocks.iter().enumerate() {
        match flashcard::parse_flashcard_block(block, i) {
            Ok(card) => flashcards.push(card),
            Err(err) => {
                errors.push(ParseError::flashcard(i as i32, err.to_string()).with_block(block));
            }
        }
    }

    ParseResult {
        data: flashcards,
        errors,
    }
}

/// Advisory numbering check over an already-parsed question list.
///
/// Reports duplicate declared indices (document-level) and strict
/// position mismatches (`index != position + 1`). Independent from the
/// inline ordering warning of [`parse_questions`]; the two can disagree
/// on documents with an error in the middle, and neither is
/// authoritative. Intended to be surfaced as warnings.
pub fn validate_question_numbering(questions: &[Question]) -> Vec<ParseError> {
    let mut errors = Vec::new();

    let indices: Vec<u32> = questions.iter().map(|q| q.index).collect();
    let duplicates: Vec<String> = indices
        .iter()
        .enumerate()
        .filter(|(i, index)| indices[..*i].contains(index))
        .map(|(_, index)| index.to_string())
        .collect();
    if !duplicates.is_empty() {
        errors.push(ParseError::document(
            ContentKind::Question,
            format!("Duplicate question indices found: {}", duplicates.join(", ")),
        ));
    }

    for (i, question) in questions.iter().enumerate() {
        if question.index != i as u32 + 1 {
            errors.push(ParseError::question(
                i as i32,
                format!("Question numbering gap: expected {}, got {}", i + 1, question.index),
            ));
        }
    }

    errors
}

/// Advisory duplicate-id check over an already-parsed flashcard list.
pub fn validate_flashcard_ids(flashcards: &[Flashcard]) -> Vec<ParseError> {
    let mut errors = Vec::new();

    let ids: Vec<&str> = flashcards.iter().map(|f| f.id.as_str()).collect();
    let duplicates: Vec<&str> = ids
        .iter()
        .enumerate()
        .filter(|(i, id)| ids[..*i].contains(id))
        .map(|(_, id)| *id)
        .collect();
    if !duplicates.is_empty() {
        errors.push(ParseError::document(
            ContentKind::Flashcard,
            format!("Duplicate flashcard IDs found: {}", duplicates.join(", ")),
        ));
    }

    errors
}

fn normalize_line_endings(markdown: &str) -> String {
    markdown.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split `text` into trimmed, non-empty chunks, starting a new chunk at
/// every line for which `is_delimiter` holds (lookahead split: the
/// delimiter line opens the following chunk). Material before the first
/// delimiter becomes its own chunk for the caller to filter.
fn split_blocks(text: &str, is_delimiter: fn(&str) -> bool) -> Vec<String> {
    let mut chunks: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if is_delimiter(line) {
            chunks.push(current);
            current = Vec::new();
        }
        current.push(line);
    }
    chunks.push(current);

    chunks
        .into_iter()
        .map(|lines| lines.join("\n").trim().to_string())
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

/// A question block opens at `<digits>.` followed by whitespace (or end
/// of line, where the newline served as the whitespace).
fn is_question_delimiter(line: &str) -> bool {
    match number_dot_rest(line) {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}

/// The keep-filter is looser than the delimiter: any leading chunk that
/// starts with `<digits>.` is treated as a question block.
fn starts_with_question_number(block: &str) -> bool {
    number_dot_rest(block).is_some()
}

fn number_dot_rest(s: &str) -> Option<&str> {
    let digits_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if digits_end == 0 {
        return None;
    }
    s[digits_end..].strip_prefix('.')
}

fn is_flashcard_delimiter(line: &str) -> bool {
    match line.strip_prefix("###") {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}
