//! JSON handlers for events.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use sponsorlink_core::error::CoreError;
use sponsorlink_core::event::EventStatus;
use sponsorlink_core::search::{matches_term, normalize_term};
use sponsorlink_core::types::Money;
use sponsorlink_core::validation::{validate_amount, validate_event_form, EventForm};
use sponsorlink_db::repositories::EventRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EventListParams {
    pub status: Option<String>,
    pub search: Option<String>,
}

/// Body of `POST /events`. Raised amount and status are not accepted.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub name: String,
    pub description: String,
    pub date: String,
    pub club_name: String,
    pub expected_audience: u64,
    pub sponsorship_goal: Money,
    pub benefits: String,
}

impl From<CreateEventRequest> for EventForm {
    fn from(req: CreateEventRequest) -> Self {
        EventForm {
            name: req.name,
            club_name: req.club_name,
            date: req.date,
            expected_audience: req.expected_audience.to_string(),
            sponsorship_goal: req.sponsorship_goal.to_string(),
            benefits: req.benefits,
            description: req.description,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SponsorshipRequest {
    pub amount: i64,
}

/// GET /api/v1/events
///
/// All events in store order, optionally filtered by `status` and by a
/// case-insensitive `search` over name and club name.
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<EventListParams>,
) -> AppResult<impl IntoResponse> {
    let status = params
        .status
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(EventStatus::from_name)
        .transpose()?;
    let term = normalize_term(params.search.as_deref().unwrap_or_default());

    let events: Vec<_> = EventRepo::list(state.store())
        .await?
        .into_iter()
        .filter(|e| status.map_or(true, |s| e.status == s))
        .filter(|e| matches_term(e, &term))
        .collect();

    Ok(Json(DataResponse { data: events }))
}

/// POST /api/v1/events
pub async fn create_event(
    State(state): State<AppState>,
    Json(input): Json<CreateEventRequest>,
) -> AppResult<impl IntoResponse> {
    let new_event = validate_event_form(&EventForm::from(input))?;
    let event = EventRepo::create(state.store(), &new_event).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

/// GET /api/v1/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::find_by_id(state.store(), &id)
        .await?
        .ok_or_else(|| AppError::not_found("Event", &id))?;

    Ok(Json(DataResponse { data: event }))
}

/// POST /api/v1/events/{id}/approve
pub async fn approve_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    set_status(&state, &id, EventStatus::Approved).await
}

/// POST /api/v1/events/{id}/reject
pub async fn reject_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    set_status(&state, &id, EventStatus::Rejected).await
}

async fn set_status(
    state: &AppState,
    id: &str,
    status: EventStatus,
) -> AppResult<Json<DataResponse<sponsorlink_core::event::Event>>> {
    let event = EventRepo::set_status(state.store(), id, status)
        .await?
        .ok_or_else(|| AppError::not_found("Event", id))?;
    if event.status != status {
        return Err(CoreError::Conflict(format!("Event {id} is already {}", event.status)).into());
    }

    Ok(Json(DataResponse { data: event }))
}

/// POST /api/v1/events/{id}/sponsorships
///
/// Add `amount` (a positive whole number) to the raised total.
pub async fn sponsor_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<SponsorshipRequest>,
) -> AppResult<impl IntoResponse> {
    let amount = validate_amount(input.amount)?;
    let event = EventRepo::add_sponsorship(state.store(), &id, amount)
        .await?
        .ok_or_else(|| AppError::not_found("Event", &id))?;

    Ok(Json(DataResponse { data: event }))
}
