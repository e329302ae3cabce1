//! Sponsor inquiries: messages of interest sent to a club before pledging.

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::types::{EventId, Timestamp};

/// Event name recorded when the referenced event no longer exists.
pub const UNKNOWN_EVENT_NAME: &str = "Unknown Event";

/// Club name recorded when the referenced event no longer exists.
pub const UNKNOWN_CLUB_NAME: &str = "Unknown Club";

/// An append-only inquiry record.
///
/// `event_name` and `club_name` are copied from the event at submission time
/// and are not kept in sync afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: String,
    pub event_id: EventId,
    pub event_name: String,
    pub club_name: String,
    pub sponsor_name: String,
    pub sponsor_email: String,
    pub message: String,
    pub created_at: Timestamp,
}

/// Validated input for recording an inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInquiry {
    pub event_id: EventId,
    pub sponsor_name: String,
    pub sponsor_email: String,
    pub message: String,
}

impl Inquiry {
    /// Build the stored record, denormalizing from `event` when present.
    pub fn from_new(
        input: &NewInquiry,
        event: Option<&Event>,
        id: String,
        created_at: Timestamp,
    ) -> Self {
        let (event_name, club_name) = match event {
            Some(e) => (e.name.clone(), e.club_name.clone()),
            None => (UNKNOWN_EVENT_NAME.to_string(), UNKNOWN_CLUB_NAME.to_string()),
        };

        Self {
            id,
            event_id: input.event_id.clone(),
            event_name,
            club_name,
            sponsor_name: input.sponsor_name.clone(),
            sponsor_email: input.sponsor_email.clone(),
            message: input.message.clone(),
            created_at,
        }
    }
}
