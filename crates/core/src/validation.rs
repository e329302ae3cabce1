//! Presence and format checks applied to user input before any mutation.
//!
//! Each failure maps to one [`ValidationError`] variant carrying the title and
//! message shown to the user.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::event::NewEvent;
use crate::inquiry::NewInquiry;
use crate::types::{Date, EventId, Money};

/// Two-part `local@domain.tld` shape; no whitespace and a single `@`.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// User-facing validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingEventFields,

    #[error("Please enter a valid event date.")]
    InvalidDate,

    #[error("Please enter a valid sponsorship amount.")]
    InvalidAmount,

    #[error("Please enter your name.")]
    MissingName,

    #[error("Please enter your email.")]
    MissingEmail,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter a message.")]
    MissingMessage,
}

impl ValidationError {
    /// Notification title for this failure.
    pub fn title(self) -> &'static str {
        match self {
            Self::MissingEventFields => "Missing fields",
            Self::InvalidDate => "Invalid date",
            Self::InvalidAmount => "Invalid amount",
            Self::MissingName => "Missing Name",
            Self::MissingEmail => "Missing Email",
            Self::InvalidEmail => "Invalid Email",
            Self::MissingMessage => "Missing Message",
        }
    }

    /// Notification body for this failure.
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingEventFields => "Please fill in all required fields.",
            Self::InvalidDate => "Please enter a valid event date.",
            Self::InvalidAmount => "Please enter a valid sponsorship amount.",
            Self::MissingName => "Please enter your name.",
            Self::MissingEmail => "Please enter your email.",
            Self::InvalidEmail => "Please enter a valid email address.",
            Self::MissingMessage => "Please enter a message.",
        }
    }
}

// ---------------------------------------------------------------------------
// Raw form values
// ---------------------------------------------------------------------------

/// Raw values of the create-event form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventForm {
    pub name: String,
    pub club_name: String,
    pub date: String,
    pub expected_audience: String,
    pub sponsorship_goal: String,
    pub benefits: String,
    pub description: String,
}

/// Raw values of an inline inquiry form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Number parsing
// ---------------------------------------------------------------------------

/// Parse the leading integer of `raw`, ignoring leading whitespace and any
/// trailing garbage (`"12.5"` → 12, `"40 dollars"` → 40, `"-5"` → -5).
///
/// Returns `None` when no digits follow the optional sign.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    // Saturate absurdly long inputs instead of rejecting them.
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse an optional non-negative count; anything unparsable or negative is 0.
pub fn parse_count_or_zero(raw: &str) -> u64 {
    parse_int_prefix(raw)
        .and_then(|n| u64::try_from(n).ok())
        .unwrap_or(0)
}

/// Parse a sponsorship amount, which must be a positive integer.
pub fn parse_sponsorship_amount(raw: &str) -> Result<Money, ValidationError> {
    match parse_int_prefix(raw) {
        Some(n) if n > 0 => Ok(n as Money),
        _ => Err(ValidationError::InvalidAmount),
    }
}

/// Validate an already-typed amount (JSON callers).
pub fn validate_amount(amount: i64) -> Result<Money, ValidationError> {
    if amount > 0 {
        Ok(amount as Money)
    } else {
        Err(ValidationError::InvalidAmount)
    }
}

// ---------------------------------------------------------------------------
// Text checks
// ---------------------------------------------------------------------------

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Parse an `<input type="date">` value.
pub fn parse_date(raw: &str) -> Result<Date, ValidationError> {
    Date::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)
}

/// Validate the create-event form and produce the store input.
///
/// Name, club name and date are required; audience and goal default to 0.
pub fn validate_event_form(form: &EventForm) -> Result<NewEvent, ValidationError> {
    let name = form.name.trim();
    let club_name = form.club_name.trim();
    let date = form.date.trim();

    if name.is_empty() || club_name.is_empty() || date.is_empty() {
        return Err(ValidationError::MissingEventFields);
    }

    Ok(NewEvent {
        name: name.to_string(),
        description: form.description.trim().to_string(),
        date: parse_date(date)?,
        club_name: club_name.to_string(),
        expected_audience: parse_count_or_zero(&form.expected_audience),
        sponsorship_goal: parse_count_or_zero(&form.sponsorship_goal),
        benefits: form.benefits.trim().to_string(),
    })
}

/// Validate an inquiry form for `event_id`.
///
/// Checks run in order: name, email presence, email shape, message.
pub fn validate_inquiry_form(
    event_id: &EventId,
    form: &InquiryForm,
) -> Result<NewInquiry, ValidationError> {
    let name = form.name.trim();
    let email = form.email.trim();
    let message = form.message.trim();

    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if message.is_empty() {
        return Err(ValidationError::MissingMessage);
    }

    Ok(NewInquiry {
        event_id: event_id.clone(),
        sponsor_name: name.to_string(),
        sponsor_email: email.to_string(),
        message: message.to_string(),
    })
}
