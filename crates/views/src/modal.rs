//! Sponsor modal for the event selected in the UI state.

use sponsorlink_core::event::Event;
use sponsorlink_core::format::format_currency;
use sponsorlink_core::ui_state::UiState;

use crate::html::{encode_component, escape, href};
use crate::{icons, ids};

/// Modal markup, or an empty string when no event is selected or the
/// selected id no longer exists.
pub fn render_sponsor_modal(events: &[Event], ui: &UiState) -> String {
    let Some(modal) = ui.sponsor_modal.as_ref() else {
        return String::new();
    };
    let Some(event) = events.iter().find(|e| e.id == modal.event_id) else {
        return String::new();
    };

    let close_href = href("/sponsor", &[("search", ui.search_term.as_str())]);

    format!(
        r#"<div class="modal-overlay open" id="{modal_id}">
<div class="modal" role="dialog" aria-modal="true" aria-labelledby="{title_id}">
<div class="modal-header"><h3 class="modal-title" id="{title_id}">Sponsor {name}</h3><a class="modal-close" href="{close_href}" aria-label="Close">{close_icon}</a></div>
<p class="modal-subtitle" id="{club_id}">Support {club} by contributing to their event.</p>
<div class="modal-amounts">
<div><p class="modal-amount-label">Goal</p><p class="modal-amount-value" id="{goal_id}">{goal}</p></div>
<div><p class="modal-amount-label">Raised</p><p class="modal-amount-value success" id="{raised_id}">{raised}</p></div>
</div>
<form method="post" action="/sponsor/events/{path_id}/sponsorships">
<input type="hidden" name="search" value="{search}">
<div class="form-group"><label class="form-label" for="{amount_id}">Sponsorship Amount ($)</label><input type="number" class="form-input" id="{amount_id}" name="amount" value="{amount}" placeholder="Enter amount" autofocus></div>
<div class="modal-actions"><a class="btn btn-secondary" href="{close_href}">Cancel</a><button type="submit" class="btn btn-accent">Confirm Sponsorship</button></div>
</form>
</div>
</div>
"#,
        modal_id = ids::SPONSOR_MODAL,
        title_id = ids::MODAL_EVENT_NAME,
        club_id = ids::MODAL_CLUB_NAME,
        goal_id = ids::MODAL_GOAL,
        raised_id = ids::MODAL_RAISED,
        amount_id = ids::SPONSOR_AMOUNT,
        name = escape(&event.name),
        club = escape(&event.club_name),
        goal = format_currency(event.sponsorship_goal),
        raised = format_currency(event.sponsorship_raised),
        close_icon = icons::CLOSE,
        path_id = encode_component(&event.id),
        search = escape(&ui.search_term),
        amount = escape(&modal.amount),
    )
}
