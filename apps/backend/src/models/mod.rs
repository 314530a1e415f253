//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from quiz-core
pub use quiz_core::error::ParseError;
pub use quiz_core::types::{Flashcard, Module, Question};

/// Response body for `GET /api/quiz/{module_id}`.
///
/// Parse errors ride along for diagnostics; a partially broken document
/// still serves its valid questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub questions: Vec<Question>,
    pub errors: Vec<ParseError>,
}

/// Response body for `GET /api/flashcards/{module_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardsResponse {
    pub flashcards: Vec<Flashcard>,
    pub errors: Vec<ParseError>,
}

/// Response body for `GET /api/modules`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleListResponse {
    pub modules: Vec<Module>,
}

/// Query parameters selecting a content source variant.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentQuery {
    #[serde(rename = "courseId")]
    pub course_id: Option<String>,
}
