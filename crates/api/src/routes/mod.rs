pub mod health;
pub mod pages;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{events, inquiries, stats};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// GET  /events                         list (?status=, ?search=)
/// POST /events                         create
/// GET  /events/{id}                    get
/// POST /events/{id}/approve            approve
/// POST /events/{id}/reject             reject
/// POST /events/{id}/sponsorships       add sponsorship
/// POST /events/{id}/inquiries          record inquiry
/// GET  /inquiries                      list inquiries
/// GET  /stats                          aggregate figures
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(events::list_events).post(events::create_event))
        .route("/events/{id}", get(events::get_event))
        .route("/events/{id}/approve", post(events::approve_event))
        .route("/events/{id}/reject", post(events::reject_event))
        .route("/events/{id}/sponsorships", post(events::sponsor_event))
        .route("/events/{id}/inquiries", post(inquiries::create_inquiry))
        .route("/inquiries", get(inquiries::list_inquiries))
        .route("/stats", get(stats::get_stats))
}
