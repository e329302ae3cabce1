//! Interaction handlers behind the HTML forms.
//!
//! Each action validates its input, mutates the store, and returns the next
//! [`UiState`] together with the notification to show. Nothing here renders;
//! the page handlers re-read the store and render from the outcome.

use sponsorlink_core::event::EventStatus;
use sponsorlink_core::format::format_currency;
use sponsorlink_core::notification::Notification;
use sponsorlink_core::ui_state::UiState;
use sponsorlink_core::validation::{
    parse_sponsorship_amount, validate_event_form, validate_inquiry_form, EventForm, InquiryForm,
};
use sponsorlink_db::repositories::{EventRepo, InquiryRepo};
use sponsorlink_db::{DbError, KeyValueStore};

/// Result of one interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub ui: UiState,
    pub notification: Option<Notification>,
    /// Whether the action went through; the page redirects afterwards.
    pub changed: bool,
}

impl Outcome {
    fn notify(ui: UiState, notification: Notification) -> Self {
        Self {
            ui,
            notification: Some(notification),
            changed: false,
        }
    }

    fn done(ui: UiState, notification: Notification) -> Self {
        Self {
            changed: true,
            ..Self::notify(ui, notification)
        }
    }

    fn silent(ui: UiState) -> Self {
        Self {
            ui,
            notification: None,
            changed: false,
        }
    }
}

/// Create an event from the club form.
pub async fn submit_event(
    store: &dyn KeyValueStore,
    ui: UiState,
    form: EventForm,
) -> Result<Outcome, DbError> {
    let input = match validate_event_form(&form) {
        Ok(input) => input,
        Err(err) => {
            tracing::info!(error = %err, "Event submission rejected");
            return Ok(Outcome::notify(ui.with_create_draft(form), err.into()));
        }
    };

    EventRepo::create(store, &input).await?;
    Ok(Outcome::done(
        ui.close_create_form(),
        Notification::success("Event Created!", "Your event has been submitted for approval."),
    ))
}

/// Approve a pending event. Unknown ids are a silent no-op in the store but
/// still acknowledged.
pub async fn approve_event(
    store: &dyn KeyValueStore,
    ui: UiState,
    id: &str,
) -> Result<Outcome, DbError> {
    review_event(
        store,
        ui,
        id,
        EventStatus::Approved,
        Notification::success("Event Approved", "The event is now visible to sponsors."),
    )
    .await
}

pub async fn reject_event(
    store: &dyn KeyValueStore,
    ui: UiState,
    id: &str,
) -> Result<Outcome, DbError> {
    review_event(
        store,
        ui,
        id,
        EventStatus::Rejected,
        Notification::error("Event Rejected", "The event has been rejected."),
    )
    .await
}

/// Apply a review decision. An event already decided the other way keeps its
/// status and the reviewer is told so.
async fn review_event(
    store: &dyn KeyValueStore,
    ui: UiState,
    id: &str,
    status: EventStatus,
    done: Notification,
) -> Result<Outcome, DbError> {
    match EventRepo::set_status(store, id, status).await? {
        Some(event) if event.status != status => Ok(Outcome::notify(
            ui,
            Notification::error(
                "Already Reviewed",
                format!("{} was already {}.", event.name, event.status),
            ),
        )),
        Some(_) => Ok(Outcome::done(ui, done)),
        None => Ok(Outcome::notify(ui, done)),
    }
}

/// Add a sponsorship from the modal.
///
/// A bad amount keeps the modal open with what was typed. An unknown event
/// changes nothing and says nothing.
pub async fn confirm_sponsorship(
    store: &dyn KeyValueStore,
    ui: UiState,
    id: &str,
    raw_amount: &str,
) -> Result<Outcome, DbError> {
    let amount = match parse_sponsorship_amount(raw_amount) {
        Ok(amount) => amount,
        Err(err) => {
            return Ok(Outcome::notify(
                ui.with_sponsor_amount(id, raw_amount),
                err.into(),
            ))
        }
    };

    let Some(event) = EventRepo::add_sponsorship(store, id, amount).await? else {
        return Ok(Outcome::silent(ui));
    };

    Ok(Outcome::done(
        ui.close_sponsor_modal(),
        Notification::success(
            "Sponsorship Confirmed!",
            format!(
                "You've contributed {} to {}.",
                format_currency(amount),
                event.name
            ),
        ),
    ))
}

/// Record an inquiry from the inline form under an event card.
pub async fn submit_inquiry(
    store: &dyn KeyValueStore,
    ui: UiState,
    id: &str,
    form: InquiryForm,
) -> Result<Outcome, DbError> {
    let input = match validate_inquiry_form(&id.to_string(), &form) {
        Ok(input) => input,
        Err(err) => return Ok(Outcome::notify(ui.with_inquiry_draft(id, form), err.into())),
    };

    let event = EventRepo::find_by_id(store, id).await?;
    InquiryRepo::record(store, &input).await?;
    let target = event.as_ref().map_or("this event", |e| e.name.as_str());

    Ok(Outcome::done(
        ui.close_inquiry_form(),
        Notification::success(
            "Message Sent!",
            format!("Your interest in {target} has been sent to the club."),
        ),
    ))
}
