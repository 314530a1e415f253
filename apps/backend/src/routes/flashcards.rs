//! Flashcard endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{ContentQuery, FlashcardsResponse};
use crate::AppState;
use quiz_core::parser::parse_flashcards;

/// GET /api/flashcards/{module_id}
pub async fn get_flashcards(
    State(state): State<AppState>,
    Path(module_id): Path<String>,
    Query(query): Query<ContentQuery>,
) -> Result<Json<FlashcardsResponse>> {
    let markdown = state
        .content
        .fetch_flashcards(&module_id, query.course_id.as_deref())
        .await?;

    let result = parse_flashcards(&markdown);
    if !result.errors.is_empty() {
        tracing::warn!(
            "Flashcard deck for module {} parsed with {} error(s)",
            module_id,
            result.errors.len()
        );
    }

    if result.data.is_empty() {
        return Err(ApiError::NotFound(
            "No valid flashcards found in this module".to_string(),
        ));
    }

    Ok(Json(FlashcardsResponse {
        flashcards: result.data,
        errors: result.errors,
    }))
}
