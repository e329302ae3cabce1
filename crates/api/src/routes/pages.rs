//! HTML dashboard routes, mounted at the root.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{enhance, pages};
use crate::state::AppState;

/// ```text
/// GET  /                                       landing page
/// GET  /club                                   club dashboard
/// POST /club/events                            submit event
/// GET  /sponsor                                sponsor dashboard
/// GET  /sponsor/regions                        sponsor list regions (JSON)
/// POST /sponsor/events/{id}/sponsorships       confirm sponsorship
/// POST /sponsor/events/{id}/inquiries          send inquiry
/// GET  /admin                                  admin panel
/// POST /admin/events/{id}/approve              approve
/// POST /admin/events/{id}/reject               reject
/// POST /ai/enhance-event                       description enhancement
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/club", get(pages::club))
        .route("/club/events", post(pages::create_event))
        .route("/sponsor", get(pages::sponsor))
        .route("/sponsor/regions", get(pages::sponsor_regions))
        .route(
            "/sponsor/events/{id}/sponsorships",
            post(pages::sponsor_event),
        )
        .route("/sponsor/events/{id}/inquiries", post(pages::submit_inquiry))
        .route("/admin", get(pages::admin))
        .route("/admin/events/{id}/approve", post(pages::approve_event))
        .route("/admin/events/{id}/reject", post(pages::reject_event))
        .route("/ai/enhance-event", post(enhance::enhance_event))
}
