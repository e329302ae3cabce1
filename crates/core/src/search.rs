//! Sponsor-side event search.
//!
//! Matching is a case-insensitive substring test against the event name or
//! the club name. An empty term matches everything.

use crate::event::Event;

/// Lowercase a raw search box value. Whitespace is kept and must match.
pub fn normalize_term(raw: &str) -> String {
    raw.to_lowercase()
}

/// Whether `event` matches an already-normalized term.
pub fn matches_term(event: &Event, term: &str) -> bool {
    term.is_empty()
        || event.name.to_lowercase().contains(term)
        || event.club_name.to_lowercase().contains(term)
}

/// Approved events matching `raw_term`, in store order.
pub fn sponsor_visible<'a>(events: &'a [Event], raw_term: &str) -> Vec<&'a Event> {
    let term = normalize_term(raw_term);
    events
        .iter()
        .filter(|e| e.is_approved())
        .filter(|e| matches_term(e, &term))
        .collect()
}
