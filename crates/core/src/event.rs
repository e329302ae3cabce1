//! Sponsorship events and their review lifecycle.
//!
//! An event starts `pending` when a club submits it. An administrator moves
//! it to `approved` or `rejected` exactly once; sponsors can only pledge to
//! approved events.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{Date, EventId, Money};

/// Persisted name of the pending status.
pub const STATUS_PENDING: &str = "pending";

/// Persisted name of the approved status.
pub const STATUS_APPROVED: &str = "approved";

/// Persisted name of the rejected status.
pub const STATUS_REJECTED: &str = "rejected";

/// Review stage of an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Pending,
    Approved,
    Rejected,
}

impl EventStatus {
    /// Parse from the persisted lowercase name.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            STATUS_PENDING => Ok(Self::Pending),
            STATUS_APPROVED => Ok(Self::Approved),
            STATUS_REJECTED => Ok(Self::Rejected),
            other => Err(CoreError::Validation(format!(
                "Invalid status '{other}'. Must be one of: {STATUS_PENDING}, {STATUS_APPROVED}, {STATUS_REJECTED}"
            ))),
        }
    }

    /// Lowercase name as stored and used in CSS classes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => STATUS_PENDING,
            Self::Approved => STATUS_APPROVED,
            Self::Rejected => STATUS_REJECTED,
        }
    }

    /// Capitalized label shown on event cards.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    /// Whether a status update from `self` to `next` is permitted.
    ///
    /// Only `pending` may move, and only to a decision. Re-applying the
    /// current status is allowed and changes nothing.
    pub fn can_transition_to(self, next: EventStatus) -> bool {
        self == next || (self == Self::Pending && next != Self::Pending)
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A club-submitted sponsorship opportunity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub description: String,
    pub date: Date,
    pub club_name: String,
    pub expected_audience: u64,
    pub sponsorship_goal: Money,
    pub sponsorship_raised: Money,
    pub benefits: String,
    pub status: EventStatus,
    pub created_at: Date,
}

/// Input for creating an event.
///
/// Status and raised amount are deliberately absent: every new event starts
/// pending with nothing raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub date: Date,
    pub club_name: String,
    #[serde(default)]
    pub expected_audience: u64,
    #[serde(default)]
    pub sponsorship_goal: Money,
    #[serde(default)]
    pub benefits: String,
}

impl Event {
    /// Build the stored record for a submission.
    pub fn from_new(input: &NewEvent, id: EventId, created_at: Date) -> Self {
        Self {
            id,
            name: input.name.clone(),
            description: input.description.clone(),
            date: input.date,
            club_name: input.club_name.clone(),
            expected_audience: input.expected_audience,
            sponsorship_goal: input.sponsorship_goal,
            sponsorship_raised: 0,
            benefits: input.benefits.clone(),
            status: EventStatus::Pending,
            created_at,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == EventStatus::Approved
    }

    pub fn is_pending(&self) -> bool {
        self.status == EventStatus::Pending
    }

    /// Apply a pledge. Saturates instead of wrapping.
    pub fn add_raised(&mut self, amount: Money) {
        self.sponsorship_raised = self.sponsorship_raised.saturating_add(amount);
    }
}
