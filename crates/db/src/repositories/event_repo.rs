//! Repository for the stored event collection.

use chrono::Utc;
use sponsorlink_core::event::{Event, EventStatus, NewEvent};
use sponsorlink_core::seed::seed_events;
use sponsorlink_core::types::{EventId, Money};
use uuid::Uuid;

use crate::collection;
use crate::error::DbError;
use crate::store::KeyValueStore;

/// Storage key of the event collection.
pub const EVENTS_KEY: &str = "College.connect_events";

/// Read-modify-write operations over the whole event list.
pub struct EventRepo;

impl EventRepo {
    /// All events in insertion order.
    ///
    /// The first read of an empty store writes the seed events and returns
    /// them.
    pub async fn list(store: &dyn KeyValueStore) -> Result<Vec<Event>, DbError> {
        if let Some(events) = collection::load(store, EVENTS_KEY).await? {
            return Ok(events);
        }

        let events = seed_events();
        collection::save(store, EVENTS_KEY, &events).await?;
        tracing::info!(count = events.len(), "Seeded event store");
        Ok(events)
    }

    /// Find an event by id.
    pub async fn find_by_id(
        store: &dyn KeyValueStore,
        id: &str,
    ) -> Result<Option<Event>, DbError> {
        let events = Self::list(store).await?;
        Ok(events.into_iter().find(|e| e.id == id))
    }

    /// Append a new pending event with nothing raised, returning the stored record.
    pub async fn create(store: &dyn KeyValueStore, input: &NewEvent) -> Result<Event, DbError> {
        let mut events = Self::list(store).await?;

        let event = Event::from_new(input, new_event_id(), Utc::now().date_naive());
        events.push(event.clone());
        collection::save(store, EVENTS_KEY, &events).await?;

        tracing::info!(event_id = %event.id, name = %event.name, "Event created");
        Ok(event)
    }

    /// Move an event to `status`.
    ///
    /// Returns `None` without writing when `id` is unknown. Transitions out of
    /// `approved`/`rejected` are ignored and the event is returned unchanged.
    pub async fn set_status(
        store: &dyn KeyValueStore,
        id: &str,
        status: EventStatus,
    ) -> Result<Option<Event>, DbError> {
        let mut events = Self::list(store).await?;
        let Some(event) = events.iter_mut().find(|e| e.id == id) else {
            tracing::debug!(event_id = id, "Status update for unknown event ignored");
            return Ok(None);
        };

        if event.status == status {
            return Ok(Some(event.clone()));
        }
        if !event.status.can_transition_to(status) {
            tracing::warn!(
                event_id = id,
                from = %event.status,
                to = %status,
                "Disallowed status transition ignored"
            );
            return Ok(Some(event.clone()));
        }

        event.status = status;
        let updated = event.clone();
        collection::save(store, EVENTS_KEY, &events).await?;

        tracing::info!(event_id = id, status = %status, "Event status updated");
        Ok(Some(updated))
    }

    /// Add `amount` to an event's raised total.
    ///
    /// Returns `None` without writing when `id` is unknown. Callers reject
    /// zero and negative amounts before getting here.
    pub async fn add_sponsorship(
        store: &dyn KeyValueStore,
        id: &str,
        amount: Money,
    ) -> Result<Option<Event>, DbError> {
        let mut events = Self::list(store).await?;
        let Some(event) = events.iter_mut().find(|e| e.id == id) else {
            tracing::debug!(event_id = id, "Sponsorship for unknown event ignored");
            return Ok(None);
        };

        event.add_raised(amount);
        let updated = event.clone();
        collection::save(store, EVENTS_KEY, &events).await?;

        tracing::info!(
            event_id = id,
            amount,
            raised = updated.sponsorship_raised,
            "Sponsorship recorded"
        );
        Ok(Some(updated))
    }
}

/// Time-ordered identifier for a new event.
fn new_event_id() -> EventId {
    Uuid::now_v7().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn event_ids_sort_by_creation() {
        let first = new_event_id();
        let second = new_event_id();
        assert!(first < second);
    }

    #[tokio::test]
    async fn list_seeds_only_once() {
        let store = MemoryStore::new();
        let first = EventRepo::list(&store).await.unwrap();
        let raw = store.get(EVENTS_KEY).await.unwrap();

        let second = EventRepo::list(&store).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(store.get(EVENTS_KEY).await.unwrap(), raw);
    }
}
