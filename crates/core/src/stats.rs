//! Summary figures derived from the event list.
//!
//! Nothing is cached: callers pass the list they just read and get fresh
//! numbers back.

use serde::Serialize;

use crate::event::{Event, EventStatus};
use crate::types::Money;

/// Aggregate counts and sums over all events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStats {
    pub total_events: usize,
    pub pending_events: usize,
    pub approved_events: usize,
    pub total_funds_requested: Money,
    pub total_funds_raised: Money,
}

impl EventStats {
    /// Share of requested funds already raised, as a rounded percentage.
    pub fn funded_percent(&self) -> u64 {
        funded_percent(self.total_funds_raised, self.total_funds_requested)
    }
}

/// Compute [`EventStats`] for `events`.
pub fn compute_stats(events: &[Event]) -> EventStats {
    let count = |status: EventStatus| events.iter().filter(|e| e.status == status).count();

    EventStats {
        total_events: events.len(),
        pending_events: count(EventStatus::Pending),
        approved_events: count(EventStatus::Approved),
        total_funds_requested: events
            .iter()
            .fold(0, |sum: Money, e| sum.saturating_add(e.sponsorship_goal)),
        total_funds_raised: events
            .iter()
            .fold(0, |sum: Money, e| sum.saturating_add(e.sponsorship_raised)),
    }
}

/// `raised / requested` as a whole percentage; `0` when nothing was requested.
pub fn funded_percent(raised: Money, requested: Money) -> u64 {
    if requested == 0 {
        return 0;
    }
    (raised as f64 / requested as f64 * 100.0).round() as u64
}

/// Progress bar fill for a single event, capped at 100.
pub fn progress_percent(event: &Event) -> f64 {
    if event.sponsorship_goal == 0 {
        return 0.0;
    }
    (event.sponsorship_raised as f64 / event.sponsorship_goal as f64 * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_events;

    #[test]
    fn seed_stats_match_known_totals() {
        let stats = compute_stats(&seed_events());

        assert_eq!(stats.total_events, 4);
        assert_eq!(stats.pending_events, 2);
        assert_eq!(stats.approved_events, 2);
        assert_eq!(stats.total_funds_requested, 38_000);
        assert_eq!(stats.total_funds_raised, 9_700);
    }

    #[test]
    fn empty_list_yields_zeroes() {
        assert_eq!(compute_stats(&[]), EventStats::default());
    }

    #[test]
    fn total_raised_tracks_current_list() {
        let mut events = seed_events();
        let before = compute_stats(&events).total_funds_raised;
        events[0].add_raised(500);

        assert_eq!(compute_stats(&events).total_funds_raised, before + 500);
    }

    #[test]
    fn funded_percent_guards_zero_requested() {
        assert_eq!(funded_percent(100, 0), 0);
        assert_eq!(funded_percent(9_700, 38_000), 26);
        assert_eq!(funded_percent(1, 2), 50);
    }

    #[test]
    fn progress_is_capped_and_guarded() {
        let mut event = seed_events().remove(0);
        assert_eq!(progress_percent(&event), 64.0);

        event.sponsorship_raised = 9_000;
        assert_eq!(progress_percent(&event), 100.0);

        event.sponsorship_goal = 0;
        assert_eq!(progress_percent(&event), 0.0);
    }
}
