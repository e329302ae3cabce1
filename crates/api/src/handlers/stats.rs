use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use sponsorlink_core::stats::{compute_stats, EventStats};
use sponsorlink_db::repositories::EventRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: EventStats,
    pub funded_percent: u64,
}

/// GET /api/v1/stats
///
/// Recomputed from the stored events on every call.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let events = EventRepo::list(state.store()).await?;
    let stats = compute_stats(&events);

    Ok(Json(DataResponse {
        data: StatsResponse {
            stats,
            funded_percent: stats.funded_percent(),
        },
    }))
}
