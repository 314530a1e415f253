//! Shared types for quiz and flashcard content.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Question difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "E")]
    Easy,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "H")]
    Hard,
}

impl Difficulty {
    /// Get the one-letter code used in the markdown grammar.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "E",
            Self::Medium => "M",
            Self::Hard => "H",
        }
    }

    /// Parse from the one-letter code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "E" => Some(Self::Easy),
            "M" => Some(Self::Medium),
            "H" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Question answering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QType {
    #[serde(rename = "SA")]
    SingleAnswer,
    #[serde(rename = "MS")]
    MultiSelect,
}

impl QType {
    /// Get the two-letter code used in the markdown grammar.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleAnswer => "SA",
            Self::MultiSelect => "MS",
        }
    }

    /// Parse from the two-letter code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SA" => Some(Self::SingleAnswer),
            "MS" => Some(Self::MultiSelect),
            _ => None,
        }
    }
}

/// One of the four answer option identifiers.
///
/// `Ord` follows the alphabetical order used for canonical answer sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionKey {
    A,
    B,
    C,
    D,
}

impl OptionKey {
    /// All keys in canonical order.
    pub const ALL: [OptionKey; 4] = [Self::A, Self::B, Self::C, Self::D];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Parse from an uppercase option letter.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four answer options of a question.
///
/// A fixed record rather than a map: every question carries exactly the
/// keys A through D, so missing or extra keys are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
}

impl Options {
    pub fn get(&self, key: OptionKey) -> &str {
        match key {
            OptionKey::A => &self.a,
            OptionKey::B => &self.b,
            OptionKey::C => &self.c,
            OptionKey::D => &self.d,
        }
    }
}

/// One quiz question parsed from a question bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Ordinal declared in the question's own markdown numbering.
    pub index: u32,
    pub difficulty: Difficulty,
    pub qtype: QType,
    pub text: String,
    pub options: Options,
    /// Canonical answer set: deduplicated, sorted option keys.
    pub answer: Vec<OptionKey>,
    pub explanation: String,
    /// Selection-count hint from a `(Choose N)` marker in the prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choose_n: Option<u32>,
}

/// One flashcard parsed from a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Stable identifier, `flashcard-<n>` in parse order.
    pub id: String,
    pub question: String,
    pub answers: Vec<String>,
}

/// A study module as reported by the discovery collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub name: String,
    pub has_questions: bool,
    pub has_flashcards: bool,
}

/// Per-question grading outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultDetail {
    pub index: u32,
    pub correct: bool,
    pub selected: Vec<OptionKey>,
    pub correct_answer: Vec<OptionKey>,
    pub explanation: String,
}

/// Aggregate quiz result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultSummary {
    pub score: u32,
    pub total: u32,
    pub correct_count: u32,
    pub wrong_count: u32,
    pub unanswered_count: u32,
    /// Rounded to the nearest whole percent; 0 when the quiz is empty.
    pub percentage: u32,
    pub time_total_sec: i64,
    /// Aligned with question position, not question index.
    pub time_per_question_sec: Vec<i64>,
    pub details: Vec<QuizResultDetail>,
}
