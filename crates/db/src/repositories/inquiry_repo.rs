//! Repository for the append-only inquiry log.

use chrono::Utc;
use sponsorlink_core::inquiry::{Inquiry, NewInquiry};
use uuid::Uuid;

use crate::collection;
use crate::error::DbError;
use crate::repositories::EventRepo;
use crate::store::KeyValueStore;

/// Storage key of the inquiry collection.
pub const INQUIRIES_KEY: &str = "College.connect_inquiries";

pub struct InquiryRepo;

impl InquiryRepo {
    /// All inquiries in submission order; empty until the first is recorded.
    pub async fn list(store: &dyn KeyValueStore) -> Result<Vec<Inquiry>, DbError> {
        Ok(collection::load(store, INQUIRIES_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Append an inquiry, copying the event and club name from the current
    /// event list. The referenced event is never modified.
    pub async fn record(
        store: &dyn KeyValueStore,
        input: &NewInquiry,
    ) -> Result<Inquiry, DbError> {
        let event = EventRepo::find_by_id(store, &input.event_id).await?;
        if event.is_none() {
            tracing::warn!(event_id = %input.event_id, "Inquiry references unknown event");
        }

        let inquiry = Inquiry::from_new(
            input,
            event.as_ref(),
            Uuid::now_v7().to_string(),
            Utc::now(),
        );

        let mut inquiries = Self::list(store).await?;
        inquiries.push(inquiry.clone());
        collection::save(store, INQUIRIES_KEY, &inquiries).await?;

        tracing::info!(
            inquiry_id = %inquiry.id,
            event_id = %inquiry.event_id,
            "Inquiry recorded"
        );
        Ok(inquiry)
    }
}
