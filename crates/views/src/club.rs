//! Club dashboard: every event, newest last, plus the create-event form.

use sponsorlink_core::event::Event;
use sponsorlink_core::ui_state::UiState;
use sponsorlink_core::validation::EventForm;

use crate::card::{render_grid, CardVariant};
use crate::empty::empty_state;
use crate::html::{escape, Region};
use crate::{icons, ids};

/// Link that expands the create form.
pub const OPEN_FORM_HREF: &str = "/club?form=open";

/// All events as cards without actions.
pub fn render_club_events(events: &[Event], ui: &UiState) -> Region {
    let html = if events.is_empty() {
        let action = format!(
            r#"<a class="btn btn-hero" href="{OPEN_FORM_HREF}">{} Create Event</a>"#,
            icons::PLUS
        );
        empty_state(
            icons::CALENDAR_PLUS,
            "",
            "No events yet",
            "Create your first event to start attracting sponsors.",
            &action,
        )
    } else {
        render_grid(events, CardVariant::Plain, ui)
    };

    Region::new(ids::EVENTS_CONTAINER, html)
}

/// "New Event" / "Cancel" link toggling the create form.
pub fn render_toggle_button(ui: &UiState) -> String {
    if ui.is_create_form_open() {
        format!(
            r#"<a class="btn btn-secondary" id="{}" href="/club">Cancel</a>"#,
            ids::TOGGLE_FORM_BTN
        )
    } else {
        format!(
            r#"<a class="btn btn-hero" id="{}" href="{OPEN_FORM_HREF}">{} New Event</a>"#,
            ids::TOGGLE_FORM_BTN,
            icons::PLUS
        )
    }
}

/// The create-event form, refilled from the draft; empty when collapsed.
pub fn render_create_form(ui: &UiState) -> String {
    let Some(draft) = ui.create_form.as_ref() else {
        return String::new();
    };
    create_form_markup(draft)
}

fn create_form_markup(draft: &EventForm) -> String {
    format!(
        r#"<div class="card create-form open" id="{form_id}">
<form class="card-body" method="post" action="/club/events">
<h3 class="form-title">Create New Event</h3>
<div class="form-grid">
<div class="form-group"><label class="form-label" for="event-name">Event Name</label><input type="text" class="form-input" id="event-name" name="name" value="{name}" placeholder="e.g., TechFest 2024"></div>
<div class="form-group"><label class="form-label" for="club-name">Club Name</label><input type="text" class="form-input" id="club-name" name="clubName" value="{club}" placeholder="e.g., Computer Science Club"></div>
<div class="form-group"><label class="form-label" for="event-date">Event Date</label><input type="date" class="form-input" id="event-date" name="date" value="{date}"></div>
<div class="form-group"><label class="form-label" for="expected-audience">Expected Audience</label><input type="number" class="form-input" id="expected-audience" name="expectedAudience" value="{audience}" placeholder="e.g., 500"></div>
<div class="form-group"><label class="form-label" for="sponsorship-goal">Sponsorship Goal ($)</label><input type="number" class="form-input" id="sponsorship-goal" name="sponsorshipGoal" value="{goal}" placeholder="e.g., 5000"></div>
<div class="form-group"><label class="form-label" for="benefits">Sponsorship Benefits</label><input type="text" class="form-input" id="benefits" name="benefits" value="{benefits}" placeholder="e.g., Logo on banners, social media shoutouts"></div>
</div>
<div class="form-group"><label class="form-label" for="description">Description</label><textarea class="form-textarea" id="description" name="description" rows="4" placeholder="Describe your event...">{description}</textarea></div>
<button type="submit" class="btn btn-hero">Submit for Approval</button>
</form>
</div>
"#,
        form_id = ids::CREATE_FORM,
        name = escape(&draft.name),
        club = escape(&draft.club_name),
        date = escape(&draft.date),
        audience = escape(&draft.expected_audience),
        goal = escape(&draft.sponsorship_goal),
        benefits = escape(&draft.benefits),
        description = escape(&draft.description),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sponsorlink_core::seed::seed_events;

    #[test]
    fn lists_every_event_regardless_of_status() {
        let region = render_club_events(&seed_events(), &UiState::default());

        assert_eq!(region.target, "events-container");
        assert_eq!(region.html.matches(r#"class="card event-card""#).count(), 4);
        assert!(region.html.contains("Pending"));
        assert!(!region.html.contains("Sponsor Now"));
    }

    #[test]
    fn empty_list_invites_first_event() {
        let html = render_club_events(&[], &UiState::default()).html;

        assert!(html.contains("No events yet"));
        assert!(html.contains(r#"href="/club?form=open""#));
    }

    #[test]
    fn collapsed_form_renders_nothing() {
        let ui = UiState::default();
        assert!(render_create_form(&ui).is_empty());
        assert!(render_toggle_button(&ui).contains("New Event"));
    }

    #[test]
    fn open_form_keeps_draft_values() {
        let draft = EventForm {
            name: "Hack Night".into(),
            sponsorship_goal: "1500".into(),
            ..EventForm::default()
        };
        let ui = UiState::default().with_create_draft(draft);

        let html = render_create_form(&ui);
        assert!(html.contains(r#"value="Hack Night""#));
        assert!(html.contains(r#"value="1500""#));
        assert!(render_toggle_button(&ui).contains("Cancel"));
    }
}
