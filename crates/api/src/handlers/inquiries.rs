//! JSON handlers for sponsor inquiries.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use sponsorlink_core::validation::{validate_inquiry_form, InquiryForm};
use sponsorlink_db::repositories::InquiryRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateInquiryRequest {
    pub sponsor_name: String,
    pub sponsor_email: String,
    pub message: String,
}

/// POST /api/v1/events/{id}/inquiries
///
/// Inquiries for unknown events are still recorded, under
/// "Unknown Event" / "Unknown Club".
pub async fn create_inquiry(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(input): Json<CreateInquiryRequest>,
) -> AppResult<impl IntoResponse> {
    let form = InquiryForm {
        name: input.sponsor_name,
        email: input.sponsor_email,
        message: input.message,
    };
    let new_inquiry = validate_inquiry_form(&event_id, &form)?;
    let inquiry = InquiryRepo::record(state.store(), &new_inquiry).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: inquiry })))
}

/// GET /api/v1/inquiries
pub async fn list_inquiries(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let inquiries = InquiryRepo::list(state.store()).await?;
    Ok(Json(DataResponse { data: inquiries }))
}
