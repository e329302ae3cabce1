//! Stats card view models for the sponsor and admin dashboards.

use sponsorlink_core::format::format_currency;
use sponsorlink_core::stats::EventStats;

use crate::html::{escape, Region};
use crate::{icons, ids};

/// One labeled figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsCard {
    pub title: &'static str,
    pub value: String,
    pub icon: &'static str,
    pub variant: &'static str,
    pub trend: Option<String>,
}

impl StatsCard {
    fn new(title: &'static str, value: impl ToString, icon: &'static str, variant: &'static str) -> Self {
        Self {
            title,
            value: value.to_string(),
            icon,
            variant,
            trend: None,
        }
    }

    fn with_trend(mut self, trend: String) -> Self {
        self.trend = Some(trend);
        self
    }

    pub fn render(&self) -> String {
        let trend = self
            .trend
            .as_deref()
            .map(|t| format!(r#"<p class="stats-trend">{}</p>"#, escape(t)))
            .unwrap_or_default();

        format!(
            r#"<div class="stats-card {variant}"><div class="stats-card-content"><div><p class="stats-title">{title}</p><p class="stats-value">{value}</p>{trend}</div><div class="stats-icon {variant}">{icon}</div></div></div>
"#,
            variant = self.variant,
            title = self.title,
            value = escape(&self.value),
            icon = self.icon,
        )
    }
}

/// Cards shown above the sponsor event list.
pub fn sponsor_cards(stats: &EventStats) -> Vec<StatsCard> {
    vec![
        StatsCard::new("Available Events", stats.approved_events, icons::BUILDING, "primary"),
        StatsCard::new(
            "Total Funds Requested",
            format_currency(stats.total_funds_requested),
            icons::DOLLAR_SIGN,
            "accent",
        ),
        StatsCard::new(
            "Funds Raised So Far",
            format_currency(stats.total_funds_raised),
            icons::DOLLAR_SIGN,
            "success",
        )
        .with_trend(format!("{}% of goal", stats.funded_percent())),
    ]
}

/// Cards shown at the top of the admin panel.
pub fn admin_cards(stats: &EventStats) -> Vec<StatsCard> {
    vec![
        StatsCard::new("Total Events", stats.total_events, icons::CALENDAR, "default"),
        StatsCard::new("Pending Approval", stats.pending_events, icons::CLOCK, "accent"),
        StatsCard::new("Approved Events", stats.approved_events, icons::CHECK_CIRCLE, "success"),
        StatsCard::new(
            "Total Funds Requested",
            format_currency(stats.total_funds_requested),
            icons::DOLLAR_SIGN,
            "primary",
        ),
    ]
}

fn render_cards(cards: &[StatsCard]) -> String {
    cards.iter().map(StatsCard::render).collect()
}

pub fn render_sponsor_stats(stats: &EventStats) -> Region {
    Region::new(ids::SPONSOR_STATS, render_cards(&sponsor_cards(stats)))
}

pub fn render_admin_stats(stats: &EventStats) -> Region {
    Region::new(ids::ADMIN_STATS, render_cards(&admin_cards(stats)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sponsorlink_core::seed::seed_events;
    use sponsorlink_core::stats::compute_stats;

    #[test]
    fn sponsor_stats_include_funded_percent() {
        let stats = compute_stats(&seed_events());
        let cards = sponsor_cards(&stats);

        assert_eq!(cards[0].value, "2");
        assert_eq!(cards[1].value, "$38,000");
        assert_eq!(cards[2].value, "$9,700");
        assert_eq!(cards[2].trend.as_deref(), Some("26% of goal"));
    }

    #[test]
    fn sponsor_percent_is_zero_without_requests() {
        let cards = sponsor_cards(&EventStats::default());
        assert_eq!(cards[2].trend.as_deref(), Some("0% of goal"));
    }

    #[test]
    fn admin_stats_list_four_cards() {
        let stats = compute_stats(&seed_events());
        let titles: Vec<_> = admin_cards(&stats).iter().map(|c| c.title).collect();

        assert_eq!(
            titles,
            ["Total Events", "Pending Approval", "Approved Events", "Total Funds Requested"]
        );
    }

    #[test]
    fn region_targets_stats_container() {
        let region = render_admin_stats(&EventStats::default());
        assert_eq!(region.target, "admin-stats");
        assert!(region.html.contains(r#"<p class="stats-value">0</p>"#));
    }
}
