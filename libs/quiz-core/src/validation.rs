//! Post-parse semantic validation.
//!
//! Runs after the syntactic parsers and splits findings into hard errors
//! (content unusable) and warnings (quality heuristics). Nothing here is
//! ever thrown; everything comes back as data.

use serde::{Deserialize, Serialize};

use crate::error::{ContentKind, ParseError};
use crate::types::{Difficulty, Flashcard, QType, Question};

/// Outcome of a validation pass. `is_valid` tracks hard errors only;
/// warnings never affect validity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ParseError>,
    pub warnings: Vec<ParseError>,
}

impl ValidationResult {
    fn new(errors: Vec<ParseError>, warnings: Vec<ParseError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Validate a parsed question list.
pub fn validate_quiz_content(questions: &[Question]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if questions.is_empty() {
        errors.push(ParseError::document(
            ContentKind::Question,
            "No questions found in the quiz",
        ));
        return ValidationResult::new(errors, warnings);
    }

    // Distribution re-checks guard callers that build Question values
    // without going through the parser.
    let difficulty_total = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        .iter()
        .map(|d| questions.iter().filter(|q| q.difficulty == *d).count())
        .sum::<usize>();
    if difficulty_total == 0 {
        warnings.push(ParseError::document(
            ContentKind::Question,
            "No difficulty levels found",
        ));
    }

    let qtype_total = [QType::SingleAnswer, QType::MultiSelect]
        .iter()
        .map(|t| questions.iter().filter(|q| q.qtype == *t).count())
        .sum::<usize>();
    if qtype_total == 0 {
        errors.push(ParseError::document(
            ContentKind::Question,
            "No valid question types found",
        ));
    }

    for (i, question) in questions.iter().enumerate() {
        if question.explanation.chars().count() < 20 {
            warnings.push(ParseError::question(
                i as i32,
                format!("Question {}: Explanation might be too brief", question.index),
            ));
        }

        let lowered = question.explanation.to_lowercase();
        if !lowered.contains("correct") && !lowered.contains("wrong") {
            warnings.push(ParseError::question(
                i as i32,
                format!(
                    "Question {}: Explanation doesn't clearly indicate why answers are correct/incorrect",
                    question.index
                ),
            ));
        }

        if question.qtype == QType::MultiSelect {
            if let Some(choose_n) = question.choose_n {
                if question.answer.len() != choose_n as usize {
                    errors.push(ParseError::question(
                        i as i32,
                        format!(
                            "Question {}: Answer count ({}) doesn't match chooseN ({})",
                            question.index,
                            question.answer.len(),
                            choose_n
                        ),
                    ));
                }
            }
        }
    }

    ValidationResult::new(errors, warnings)
}

/// Validate a parsed flashcard list.
pub fn validate_flashcard_content(flashcards: &[Flashcard]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if flashcards.is_empty() {
        errors.push(ParseError::document(
            ContentKind::Flashcard,
            "No flashcards found",
        ));
        return ValidationResult::new(errors, warnings);
    }

    for (i, flashcard) in flashcards.iter().enumerate() {
        if flashcard.question.chars().count() < 10 {
            warnings.push(ParseError::flashcard(
                i as i32,
                format!("Flashcard {}: Question might be too brief", i + 1),
            ));
        }

        for (answer_index, answer) in flashcard.answers.iter().enumerate() {
            if answer.chars().count() < 5 {
                warnings.push(ParseError::flashcard(
                    i as i32,
                    format!(
                        "Flashcard {}, Answer {}: Answer might be too brief",
                        i + 1,
                        answer_index + 1
                    ),
                ));
            }
        }

        // A card with several answers should say so in its prompt.
        if flashcard.answers.len() > 1
            && !flashcard.question.to_lowercase().contains("choose")
            && !flashcard.question.contains('2')
            && !flashcard.question.contains('3')
        {
            warnings.push(ParseError::flashcard(
                i as i32,
                format!(
                    "Flashcard {}: Multiple answers found but question doesn't indicate multi-answer format",
                    i + 1
                ),
            ));
        }
    }

    ValidationResult::new(errors, warnings)
}
