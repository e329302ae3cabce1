//! Sponsor dashboard: searchable approved events.

use sponsorlink_core::event::Event;
use sponsorlink_core::search::sponsor_visible;
use sponsorlink_core::ui_state::UiState;

use crate::card::{render_grid, CardVariant};
use crate::empty::empty_state;
use crate::html::{escape, Region};
use crate::{icons, ids};

/// Approved events matching the current search term, plus the count label.
///
/// Returns the `events-container` region followed by `events-count`.
pub fn render_sponsor_events(events: &[Event], ui: &UiState) -> Vec<Region> {
    let visible = sponsor_visible(events, &ui.search_term);

    let html = if visible.is_empty() {
        empty_state(
            icons::SEARCH,
            "",
            "No events found",
            "Try adjusting your search or check back later for new events.",
            "",
        )
    } else {
        render_grid(visible.iter().copied(), CardVariant::Sponsor, ui)
    };

    vec![
        Region::new(ids::EVENTS_CONTAINER, html),
        Region::new(ids::EVENTS_COUNT, format!("{} events available", visible.len())),
    ]
}

/// Search box; submits as a plain GET so it works without scripts.
pub fn render_search_form(ui: &UiState) -> String {
    format!(
        r#"<form class="search-box" method="get" action="/sponsor" role="search"><span class="search-icon">{icon}</span><input type="search" class="form-input search-input" id="{id}" name="search" value="{value}" placeholder="Search events or clubs..." autocomplete="off"></form>"#,
        icon = icons::SEARCH,
        id = ids::SEARCH_INPUT,
        value = escape(&ui.search_term),
    )
}
