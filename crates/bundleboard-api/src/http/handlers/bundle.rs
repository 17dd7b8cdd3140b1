//! Bundle read and prompt update handlers.

use axum::extract::State;
use axum::Json;

use bundleboard_types::bundle::{BundleView, UpdatePromptRequest};

use crate::http::error::AppError;
use crate::state::AppState;

/// GET /api/bundles - List all bundles in the client-facing schema.
pub async fn list_bundles(
    State(state): State<AppState>,
) -> Result<Json<Vec<BundleView>>, AppError> {
    let bundles = state.bundle_service.list_bundles().await?;
    Ok(Json(bundles))
}

/// POST /api/bundles/update_prompt - Overwrite one prompt's score and notes.
pub async fn update_prompt(
    State(state): State<AppState>,
    Json(body): Json<UpdatePromptRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    state
        .bundle_service
        .update_prompt(&body.prompt_id, body.score, &body.notes)
        .await?;

    Ok(Json(serde_json::json!({
        "message": "Prompt updated successfully"
    })))
}
