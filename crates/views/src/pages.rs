//! Full pages assembled from the view regions.

use sponsorlink_core::event::Event;
use sponsorlink_core::notification::Notification;
use sponsorlink_core::stats::compute_stats;
use sponsorlink_core::ui_state::UiState;

use crate::admin::render_admin_events;
use crate::club::{render_club_events, render_create_form, render_toggle_button};
use crate::layout::{render_page, Page, SEARCH_SCRIPT};
use crate::modal::render_sponsor_modal;
use crate::sponsor::{render_search_form, render_sponsor_events};
use crate::stats::{render_admin_stats, render_sponsor_stats};
use crate::icons;

/// Landing page linking the three dashboards.
pub fn home_page() -> String {
    let body = format!(
        r#"<section class="hero">
<h1 class="hero-title">Connect college events with sponsors</h1>
<p class="hero-subtitle">Clubs post events, admins review them, sponsors fund the ones they believe in.</p>
<div class="hero-actions">
<a class="card role-card" href="/club"><span class="role-icon">{calendar_plus}</span><h3>For Clubs</h3><p>Create events and track sponsorship progress.</p></a>
<a class="card role-card" href="/sponsor"><span class="role-icon">{handshake}</span><h3>For Sponsors</h3><p>Browse approved events and contribute.</p></a>
<a class="card role-card" href="/admin"><span class="role-icon">{check}</span><h3>Admin</h3><p>Approve or reject submitted events.</p></a>
</div>
</section>
"#,
        calendar_plus = icons::CALENDAR_PLUS,
        handshake = icons::HANDSHAKE,
        check = icons::CHECK_CIRCLE,
    );
    render_page(Page::Home, &body, None, "")
}

pub fn club_page(events: &[Event], ui: &UiState, notification: Option<&Notification>) -> String {
    let body = format!(
        r#"<div class="page-header"><div><h1 class="page-title">Club Dashboard</h1><p class="page-subtitle">Create events and track your sponsorships</p></div>{toggle}</div>
{form}<h2 class="section-title">Your Events</h2>
{events}
"#,
        toggle = render_toggle_button(ui),
        form = render_create_form(ui),
        events = render_club_events(events, ui).mount("div", ""),
    );
    render_page(Page::Club, &body, notification, "")
}

pub fn sponsor_page(events: &[Event], ui: &UiState, notification: Option<&Notification>) -> String {
    let stats = compute_stats(events);
    let regions: String = render_sponsor_events(events, ui)
        .into_iter()
        .map(|region| match region.target {
            crate::ids::EVENTS_COUNT => region.mount("p", "section-subtitle"),
            _ => region.mount("div", ""),
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        r#"<div class="page-header"><div><h1 class="page-title">Sponsor Dashboard</h1><p class="page-subtitle">Discover and support college events</p></div></div>
{stats}
{search}
{regions}
{modal}"#,
        stats = render_sponsor_stats(&stats).mount("div", "stats-grid"),
        search = render_search_form(ui),
        modal = render_sponsor_modal(events, ui),
    );
    render_page(Page::Sponsor, &body, notification, SEARCH_SCRIPT)
}

pub fn admin_page(events: &[Event], ui: &UiState, notification: Option<&Notification>) -> String {
    let stats = compute_stats(events);
    let mut regions = render_admin_events(events, ui).into_iter();
    let mut next = |tag: &str, class: &str| {
        regions
            .next()
            .map(|region| region.mount(tag, class))
            .unwrap_or_default()
    };
    let pending = next("div", "");
    let approved = next("div", "");
    let pending_count = next("p", "section-subtitle");
    let approved_count = next("p", "section-subtitle");

    let body = format!(
        r#"<div class="page-header"><div><h1 class="page-title">Admin Panel</h1><p class="page-subtitle">Review and manage event submissions</p></div></div>
{stats}
<section class="admin-section"><h2 class="section-title">Pending Approval</h2>{pending_count}
{pending}</section>
<section class="admin-section"><h2 class="section-title">Approved Events</h2>{approved_count}
{approved}</section>
"#,
        stats = render_admin_stats(&stats).mount("div", "stats-grid"),
    );
    render_page(Page::Admin, &body, notification, "")
}
