use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EnhanceRequest {
    pub description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResponse {
    pub enhanced_description: String,
}

/// POST /ai/enhance-event
///
/// Returns `{ "enhancedDescription": ... }` without the data envelope.
pub async fn enhance_event(
    State(state): State<AppState>,
    Json(input): Json<EnhanceRequest>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(chars = input.description.len(), "Enhancing event description");

    let enhanced_description = state.enhancer.enhance(&input.description).await?;

    Ok(Json(EnhanceResponse {
        enhanced_description,
    }))
}
