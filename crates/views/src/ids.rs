//! Stable element ids targeted by the renderers.

pub const EVENTS_CONTAINER: &str = "events-container";
pub const EVENTS_COUNT: &str = "events-count";
pub const SPONSOR_STATS: &str = "sponsor-stats";
pub const ADMIN_STATS: &str = "admin-stats";
pub const PENDING_EVENTS: &str = "pending-events";
pub const APPROVED_EVENTS: &str = "approved-events";
pub const PENDING_COUNT: &str = "pending-count";
pub const APPROVED_COUNT: &str = "approved-count";
pub const CREATE_FORM: &str = "create-form";
pub const TOGGLE_FORM_BTN: &str = "toggle-form-btn";
pub const SEARCH_INPUT: &str = "search-input";
pub const SPONSOR_MODAL: &str = "sponsor-modal";
pub const MODAL_EVENT_NAME: &str = "modal-event-name";
pub const MODAL_CLUB_NAME: &str = "modal-club-name";
pub const MODAL_GOAL: &str = "modal-goal";
pub const MODAL_RAISED: &str = "modal-raised";
pub const SPONSOR_AMOUNT: &str = "sponsor-amount";
pub const TOAST_CONTAINER: &str = "toast-container";

/// Id of the inline inquiry form under an event card.
pub fn inquiry_form(event_id: &str) -> String {
    format!("interested-form-{event_id}")
}
