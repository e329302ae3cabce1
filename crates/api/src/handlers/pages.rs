//! HTML page and form handlers.
//!
//! UI state travels in query parameters (`form`, `search`, `sponsor`,
//! `inquire`) and hidden form fields. A form post that changed the store
//! answers `303 See Other` to the dashboard, carrying the notification in the
//! query (`notice`, `notice_title`, `notice_message`). A rejected post
//! changes nothing and re-renders in place with the user's draft.

use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::Deserialize;
use sponsorlink_core::notification::{Notification, NotificationKind};
use sponsorlink_core::ui_state::UiState;
use sponsorlink_core::validation::{EventForm, InquiryForm};
use sponsorlink_db::repositories::EventRepo;
use sponsorlink_views::html::encode_component;
use sponsorlink_views::Region;

use crate::actions::{self, Outcome};
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters shared by the dashboard pages.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageQuery {
    /// `open` expands the create-event form.
    pub form: Option<String>,
    pub search: Option<String>,
    /// Event id whose sponsor modal is open.
    pub sponsor: Option<String>,
    /// Event id whose inquiry form is expanded.
    pub inquire: Option<String>,
    /// Kind of the notification carried over from a form post.
    pub notice: Option<String>,
    pub notice_title: Option<String>,
    pub notice_message: Option<String>,
}

impl PageQuery {
    /// Notification carried over from a form post, if any.
    pub fn notification(&self) -> Option<Notification> {
        let kind = NotificationKind::from_name(self.notice.as_deref()?)?;
        Some(Notification {
            title: self.notice_title.clone().unwrap_or_default(),
            message: self.notice_message.clone().unwrap_or_default(),
            kind,
        })
    }

    pub fn into_ui_state(self) -> UiState {
        let mut ui = UiState::default().with_search(self.search.unwrap_or_default());
        if self.form.as_deref() == Some("open") {
            ui = ui.toggle_create_form();
        }
        if let Some(id) = self.sponsor.filter(|id| !id.is_empty()) {
            ui = ui.open_sponsor_modal(id);
        }
        if let Some(id) = self.inquire.filter(|id| !id.is_empty()) {
            ui = ui.toggle_inquiry_form(id);
        }
        ui
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SponsorshipForm {
    pub search: String,
    pub amount: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InquiryPost {
    pub search: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

/// GET /
pub async fn home() -> Html<String> {
    Html(sponsorlink_views::home_page())
}

/// GET /club
pub async fn club(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Html<String>> {
    let notification = query.notification();
    render(&state, Dashboard::Club, &query.into_ui_state(), notification.as_ref()).await
}

/// GET /sponsor
pub async fn sponsor(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Html<String>> {
    let notification = query.notification();
    render(&state, Dashboard::Sponsor, &query.into_ui_state(), notification.as_ref()).await
}

/// GET /admin
pub async fn admin(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Html<String>> {
    let notification = query.notification();
    render(&state, Dashboard::Admin, &query.into_ui_state(), notification.as_ref()).await
}

/// GET /sponsor/regions?search=
///
/// Sponsor list regions for the given term, used by search-as-you-type.
pub async fn sponsor_regions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<DataResponse<Vec<Region>>>> {
    let ui = query.into_ui_state();
    let events = EventRepo::list(state.store()).await?;
    tracing::debug!(search = %ui.search_term, "Sponsor search");

    Ok(Json(DataResponse {
        data: sponsorlink_views::render_sponsor_events(&events, &ui),
    }))
}

/// POST /club/events
pub async fn create_event(
    State(state): State<AppState>,
    Form(form): Form<EventForm>,
) -> AppResult<Response> {
    let outcome = actions::submit_event(state.store(), UiState::default(), form).await?;
    render_outcome(&state, Dashboard::Club, outcome).await
}

/// POST /admin/events/{id}/approve
pub async fn approve_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let outcome = actions::approve_event(state.store(), UiState::default(), &id).await?;
    tracing::info!(event_id = %id, "Approve submitted");
    render_outcome(&state, Dashboard::Admin, outcome).await
}

/// POST /admin/events/{id}/reject
pub async fn reject_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let outcome = actions::reject_event(state.store(), UiState::default(), &id).await?;
    tracing::info!(event_id = %id, "Reject submitted");
    render_outcome(&state, Dashboard::Admin, outcome).await
}

/// POST /sponsor/events/{id}/sponsorships
pub async fn sponsor_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<SponsorshipForm>,
) -> AppResult<Response> {
    let ui = UiState::default()
        .with_search(form.search)
        .open_sponsor_modal(id.as_str());
    let outcome = actions::confirm_sponsorship(state.store(), ui, &id, &form.amount).await?;
    render_outcome(&state, Dashboard::Sponsor, outcome).await
}

/// POST /sponsor/events/{id}/inquiries
pub async fn submit_inquiry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(post): Form<InquiryPost>,
) -> AppResult<Response> {
    let ui = UiState::default().with_search(post.search);
    let form = InquiryForm {
        name: post.name,
        email: post.email,
        message: post.message,
    };
    let outcome = actions::submit_inquiry(state.store(), ui, &id, form).await?;
    render_outcome(&state, Dashboard::Sponsor, outcome).await
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum Dashboard {
    Club,
    Sponsor,
    Admin,
}

impl Dashboard {
    fn path(self) -> &'static str {
        match self {
            Dashboard::Club => "/club",
            Dashboard::Sponsor => "/sponsor",
            Dashboard::Admin => "/admin",
        }
    }
}

/// Render a dashboard from a fresh read of the store.
async fn render(
    state: &AppState,
    dashboard: Dashboard,
    ui: &UiState,
    notification: Option<&Notification>,
) -> AppResult<Html<String>> {
    let events = EventRepo::list(state.store()).await?;
    let html = match dashboard {
        Dashboard::Club => sponsorlink_views::club_page(&events, ui, notification),
        Dashboard::Sponsor => sponsorlink_views::sponsor_page(&events, ui, notification),
        Dashboard::Admin => sponsorlink_views::admin_page(&events, ui, notification),
    };
    Ok(Html(html))
}

/// Redirect to the dashboard after a write, otherwise render in place.
async fn render_outcome(
    state: &AppState,
    dashboard: Dashboard,
    outcome: Outcome,
) -> AppResult<Response> {
    if outcome.changed {
        let to = location(dashboard, &outcome.ui, outcome.notification.as_ref());
        return Ok(Redirect::to(&to).into_response());
    }
    let page = render(state, dashboard, &outcome.ui, outcome.notification.as_ref()).await?;
    Ok(page.into_response())
}

/// Dashboard URL reproducing `ui` and carrying `notification`.
fn location(dashboard: Dashboard, ui: &UiState, notification: Option<&Notification>) -> String {
    let mut params: Vec<(&str, &str)> = vec![("search", ui.search_term.as_str())];
    if ui.is_create_form_open() {
        params.push(("form", "open"));
    }
    if let Some(modal) = &ui.sponsor_modal {
        params.push(("sponsor", modal.event_id.as_str()));
    }
    if let Some(open) = &ui.inquiry_form {
        params.push(("inquire", open.event_id.as_str()));
    }
    if let Some(n) = notification {
        params.push(("notice", n.kind.as_str()));
        params.push(("notice_title", n.title.as_str()));
        params.push(("notice_message", n.message.as_str()));
    }

    let query: Vec<String> = params
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{k}={}", encode_component(v)))
        .collect();
    if query.is_empty() {
        dashboard.path().to_string()
    } else {
        format!("{}?{}", dashboard.path(), query.join("&"))
    }
}
