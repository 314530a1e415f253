//! Quiz endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{ContentQuery, QuizResponse};
use crate::AppState;
use quiz_core::parser::parse_questions;

/// GET /api/quiz/{module_id}
pub async fn get_quiz(
    State(state): State<AppState>,
    Path(module_id): Path<String>,
    Query(query): Query<ContentQuery>,
) -> Result<Json<QuizResponse>> {
    let markdown = state
        .content
        .fetch_question_bank(&module_id, query.course_id.as_deref())
        .await?;

    let result = parse_questions(&markdown);
    if !result.errors.is_empty() {
        tracing::warn!(
            "Question bank for module {} parsed with {} error(s)",
            module_id,
            result.errors.len()
        );
    }

    if result.data.is_empty() {
        return Err(ApiError::NotFound(
            "No valid questions found in this module".to_string(),
        ));
    }

    // The parser always derives an index from the block header, but a
    // zero slips through if a caller constructed questions by hand.
    let questions = result
        .data
        .into_iter()
        .enumerate()
        .map(|(position, mut question)| {
            if question.index == 0 {
                question.index = position as u32 + 1;
            }
            question
        })
        .collect();

    Ok(Json(QuizResponse {
        questions,
        errors: result.errors,
    }))
}
