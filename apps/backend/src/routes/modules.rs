//! Module discovery endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::{Module, ModuleListResponse};
use crate::AppState;

/// GET /api/modules
pub async fn list(State(state): State<AppState>) -> Result<Json<ModuleListResponse>> {
    let module_ids = state.content.discover_modules().await;

    let mut modules = Vec::with_capacity(module_ids.len());
    for id in module_ids {
        let has_flashcards = state.content.has_flashcards(&id).await;
        modules.push(Module {
            name: format!("Module {}", id.to_uppercase()),
            // Discovery already confirmed the question bank exists.
            has_questions: true,
            has_flashcards,
            id,
        });
    }

    tracing::info!("Discovered {} module(s)", modules.len());

    Ok(Json(ModuleListResponse { modules }))
}
