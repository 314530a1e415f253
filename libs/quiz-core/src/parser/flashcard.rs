//! Parser for a single flashcard-deck entry.
//!
//! # Format
//! ```markdown
//! ### Q1: Define EC2
//! A: Elastic Compute Cloud virtual servers
//! A: Resizable on-demand compute capacity
//! ```
//!
//! The numeric header label only delimits blocks upstream; the card id is
//! synthesized from parse order instead.

use crate::error::BlockError;
use crate::types::Flashcard;

/// Parse one flashcard block. `position` is the zero-based block position
/// within the document and drives the synthesized id.
pub(crate) fn parse_flashcard_block(
    block: &str,
    position: usize,
) -> Result<Flashcard, BlockError> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let first = lines.first().copied().unwrap_or_default();
    let question = parse_header(first)?;

    let mut answers = Vec::new();
    for (i, line) in lines.iter().enumerate().skip(1) {
        if let Some(rest) = line.strip_prefix("A:") {
            let text = rest.trim();
            if text.is_empty() {
                return Err(BlockError::EmptyFlashcardAnswer { line: i + 1 });
            }
            answers.push(text.to_string());
        }
    }

    if answers.is_empty() {
        return Err(BlockError::NoAnswersFound);
    }
    for answer in &answers {
        if answer.chars().count() < 3 {
            return Err(BlockError::AnswerTooShort {
                answer: answer.clone(),
            });
        }
    }

    Ok(Flashcard {
        id: format!("flashcard-{}", position + 1),
        question,
        answers,
    })
}

/// Parse the header line: `### Q<digits>: <text>`.
fn parse_header(line: &str) -> Result<String, BlockError> {
    let invalid = || BlockError::InvalidFlashcardHeader {
        line: line.to_string(),
    };

    let rest = line.strip_prefix("###").ok_or_else(invalid)?;
    let rest = rest.trim_start().strip_prefix('Q').ok_or_else(invalid)?;
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return Err(invalid());
    }
    let rest = rest[digits_end..].strip_prefix(':').ok_or_else(invalid)?;

    let question = rest.trim();
    if question.is_empty() {
        return Err(BlockError::EmptyFlashcardQuestion);
    }
    Ok(question.to_string())
}
