//! Admin panel: pending events awaiting review and approved events.

use sponsorlink_core::event::Event;
use sponsorlink_core::ui_state::UiState;

use crate::card::{render_grid, CardVariant};
use crate::empty::empty_state;
use crate::html::Region;
use crate::{icons, ids};

/// Regions `pending-events`, `approved-events`, `pending-count` and
/// `approved-count`, in that order.
pub fn render_admin_events(events: &[Event], ui: &UiState) -> Vec<Region> {
    let pending: Vec<&Event> = events.iter().filter(|e| e.is_pending()).collect();
    let approved: Vec<&Event> = events.iter().filter(|e| e.is_approved()).collect();

    let pending_html = if pending.is_empty() {
        empty_state(
            icons::CHECK_CIRCLE,
            "success",
            "All caught up!",
            "No events pending approval at the moment.",
            "",
        )
    } else {
        render_grid(pending.iter().copied(), CardVariant::Admin, ui)
    };

    let approved_html = if approved.is_empty() {
        empty_state(
            icons::CALENDAR,
            "",
            "No approved events",
            "Approve some pending events to see them here.",
            "",
        )
    } else {
        render_grid(approved.iter().copied(), CardVariant::Plain, ui)
    };

    vec![
        Region::new(ids::PENDING_EVENTS, pending_html),
        Region::new(ids::APPROVED_EVENTS, approved_html),
        Region::new(
            ids::PENDING_COUNT,
            format!("{} events waiting for review", pending.len()),
        ),
        Region::new(
            ids::APPROVED_COUNT,
            format!("{} events currently active", approved.len()),
        ),
    ]
}
