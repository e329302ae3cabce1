//! Event card view model and markup.

use sponsorlink_core::event::Event;
use sponsorlink_core::format::{format_currency, format_date};
use sponsorlink_core::stats::progress_percent;
use sponsorlink_core::ui_state::UiState;
use sponsorlink_core::validation::InquiryForm;

use crate::html::{encode_component, escape, href};
use crate::{icons, ids};

/// Which action set a card carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVariant {
    /// Read-only (club dashboard, approved list in admin).
    Plain,
    /// "Sponsor Now" + "Interested" on approved events.
    Sponsor,
    /// Approve / Reject on pending events.
    Admin,
}

/// Everything a card displays, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct EventCard {
    pub id: String,
    pub status_class: &'static str,
    pub status_label: &'static str,
    pub created: String,
    pub name: String,
    pub club_name: String,
    pub description: String,
    pub date: String,
    pub audience: u64,
    pub raised: String,
    pub goal: String,
    pub progress: f64,
    /// Whole percent shown under the bar, rounding halves up.
    pub funded: u64,
    pub benefits: String,
    pub actions: CardActions,
}

/// Action block at the bottom of a card.
#[derive(Debug, Clone, PartialEq)]
pub enum CardActions {
    None,
    Sponsor {
        search_term: String,
        inquiry: Option<InquiryForm>,
    },
    Review,
}

impl EventCard {
    /// Build the card for `event`.
    ///
    /// Sponsor actions only appear on approved events and review actions only
    /// on pending ones, whatever variant is requested.
    pub fn new(event: &Event, variant: CardVariant, ui: &UiState) -> Self {
        let actions = match variant {
            CardVariant::Sponsor if event.is_approved() => CardActions::Sponsor {
                search_term: ui.search_term.clone(),
                inquiry: ui.inquiry_draft_for(&event.id).cloned(),
            },
            CardVariant::Admin if event.is_pending() => CardActions::Review,
            _ => CardActions::None,
        };
        let progress = progress_percent(event);

        Self {
            id: event.id.clone(),
            status_class: event.status.as_str(),
            status_label: event.status.label(),
            created: event.created_at.to_string(),
            name: event.name.clone(),
            club_name: event.club_name.clone(),
            description: event.description.clone(),
            date: format_date(event.date),
            audience: event.expected_audience,
            raised: format_currency(event.sponsorship_raised),
            goal: format_currency(event.sponsorship_goal),
            progress,
            funded: progress.round() as u64,
            benefits: event.benefits.clone(),
            actions,
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            r#"<div class="card event-card">
<div class="card-header-accent"></div>
<div class="card-body">
<div class="event-card-header"><span class="event-status {status_class}">{status_label}</span><span class="event-date-created">Created {created}</span></div>
<h3 class="event-title">{name}</h3>
<div class="event-club">{building}<span>{club}</span></div>
<p class="event-description">{description}</p>
<div class="event-meta">
<div class="event-meta-item"><span class="primary">{calendar}</span><span>{date}</span></div>
<div class="event-meta-item"><span class="accent">{users}</span><span>{audience} expected</span></div>
</div>
<div class="progress-section">
<div class="progress-header"><div class="progress-label">{target}<span>Sponsorship Goal</span></div><span class="progress-amount">{raised} / {goal}</span></div>
<div class="progress-bar"><div class="progress-fill" style="width: {progress}%"></div></div>
<p class="progress-percent">{funded}% funded</p>
</div>
<div class="event-benefits"><p class="event-benefits-label">Sponsorship Benefits:</p><p class="event-benefits-text">{benefits}</p></div>
"#,
            status_class = self.status_class,
            status_label = self.status_label,
            created = self.created,
            name = escape(&self.name),
            building = icons::BUILDING,
            club = escape(&self.club_name),
            description = escape(&self.description),
            calendar = icons::CALENDAR,
            date = self.date,
            users = icons::USERS,
            audience = self.audience,
            target = icons::TARGET,
            raised = self.raised,
            goal = self.goal,
            progress = self.progress,
            funded = self.funded,
            benefits = escape(&self.benefits),
        );

        match &self.actions {
            CardActions::None => {}
            CardActions::Sponsor {
                search_term,
                inquiry,
            } => out.push_str(&self.render_sponsor_actions(search_term, inquiry.as_ref())),
            CardActions::Review => out.push_str(&self.render_review_actions()),
        }

        out.push_str("</div>\n</div>\n");
        out
    }

    fn render_sponsor_actions(&self, search_term: &str, inquiry: Option<&InquiryForm>) -> String {
        let id = escape(&self.id);
        let sponsor_href = href("/sponsor", &[("search", search_term), ("sponsor", self.id.as_str())]);
        let inquire_href = if inquiry.is_some() {
            href("/sponsor", &[("search", search_term)])
        } else {
            href("/sponsor", &[("search", search_term), ("inquire", self.id.as_str())])
        };
        let open_class = if inquiry.is_some() { " open" } else { "" };
        let empty = InquiryForm::default();
        let draft = inquiry.unwrap_or(&empty);

        format!(
            r#"<a class="btn btn-accent btn-block" href="{sponsor_href}">Sponsor Now</a>
<a class="btn btn-secondary btn-block interested-btn" href="{inquire_href}">{handshake} Interested</a>
<div class="interested-form-dropdown{open_class}" id="{form_id}">
<form class="interested-form-content" method="post" action="/sponsor/events/{path_id}/inquiries">
<h4 class="interested-form-title">Contact Club</h4>
<p class="interested-form-subtitle">Send a message before sponsoring</p>
<input type="hidden" name="search" value="{search}">
<div class="form-group"><label class="form-label" for="interested-name-{id}">Your Name</label><input type="text" class="form-input" id="interested-name-{id}" name="name" value="{name}" placeholder="Enter your name"></div>
<div class="form-group"><label class="form-label" for="interested-email-{id}">Email</label><input type="email" class="form-input" id="interested-email-{id}" name="email" value="{email}" placeholder="Enter your email"></div>
<div class="form-group"><label class="form-label" for="interested-message-{id}">Message</label><textarea class="form-textarea" id="interested-message-{id}" name="message" rows="3" placeholder="Tell the club about your interest...">{message}</textarea></div>
<button type="submit" class="btn btn-hero btn-block">Connect</button>
</form>
</div>
"#,
            handshake = icons::HANDSHAKE,
            form_id = escape(&ids::inquiry_form(&self.id)),
            path_id = encode_component(&self.id),
            search = escape(search_term),
            name = escape(&draft.name),
            email = escape(&draft.email),
            message = escape(&draft.message),
        )
    }

    fn render_review_actions(&self) -> String {
        let path_id = encode_component(&self.id);
        format!(
            r#"<div class="event-actions">
<form method="post" action="/admin/events/{path_id}/approve" style="flex: 1;"><button type="submit" class="btn btn-success btn-block">Approve</button></form>
<form method="post" action="/admin/events/{path_id}/reject" style="flex: 1;"><button type="submit" class="btn btn-destructive btn-block">Reject</button></form>
</div>
"#
        )
    }
}

/// Render `events` as a card grid.
pub fn render_grid<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    variant: CardVariant,
    ui: &UiState,
) -> String {
    let mut out = String::from("<div class=\"events-grid\">\n");
    for event in events {
        out.push_str(&EventCard::new(event, variant, ui).render());
    }
    out.push_str("</div>\n");
    out
}
