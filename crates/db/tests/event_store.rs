//! Integration tests for the event repository over the in-memory backend.
//!
//! Covers seeding, creation defaults, status transitions and cumulative
//! sponsorship, including the silent no-op on unknown ids.

use chrono::NaiveDate;
use sponsorlink_core::event::{EventStatus, NewEvent};
use sponsorlink_core::stats::compute_stats;
use sponsorlink_db::repositories::{EventRepo, EVENTS_KEY};
use sponsorlink_db::{KeyValueStore, MemoryStore};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_event(name: &str) -> NewEvent {
    NewEvent {
        name: name.to_string(),
        description: "Demo".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 11, 2).unwrap(),
        club_name: "Chess Club".to_string(),
        expected_audience: 80,
        sponsorship_goal: 1_500,
        benefits: "Table banner".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

#[tokio::test]
async fn first_list_returns_the_four_seed_events() {
    let store = MemoryStore::new();

    let events = EventRepo::list(&store).await.unwrap();

    let names: Vec<_> = events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        ["TechFest 2024", "Cultural Night", "Startup Summit", "Sports Carnival"]
    );
    let goals: Vec<_> = events.iter().map(|e| e.sponsorship_goal).collect();
    assert_eq!(goals, [5_000, 8_000, 10_000, 15_000]);
    let raised: Vec<_> = events.iter().map(|e| e.sponsorship_raised).collect();
    assert_eq!(raised, [3_200, 4_500, 2_000, 0]);

    assert!(store.get(EVENTS_KEY).await.unwrap().is_some(), "seed must be persisted");
}

#[tokio::test]
async fn an_empty_stored_list_is_not_reseeded() {
    let store = MemoryStore::with_entry(EVENTS_KEY, "[]");
    assert!(EventRepo::list(&store).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_appends_pending_event_with_nothing_raised() {
    let store = MemoryStore::new();

    let created = EventRepo::create(&store, &new_event("Chess Open")).await.unwrap();

    assert_eq!(created.status, EventStatus::Pending);
    assert_eq!(created.sponsorship_raised, 0);
    let events = EventRepo::list(&store).await.unwrap();
    assert_eq!(events.len(), 5);
    assert_eq!(events.last().unwrap(), &created);
}

#[tokio::test]
async fn created_events_get_distinct_ids() {
    let store = MemoryStore::new();

    let a = EventRepo::create(&store, &new_event("A")).await.unwrap();
    let b = EventRepo::create(&store, &new_event("B")).await.unwrap();

    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn caller_supplied_status_and_raised_are_ignored() {
    let store = MemoryStore::new();
    let input: NewEvent = serde_json::from_value(serde_json::json!({
        "name": "Sneaky",
        "description": "",
        "date": "2024-12-01",
        "clubName": "Chess Club",
        "status": "approved",
        "sponsorshipRaised": 999
    }))
    .unwrap();

    let created = EventRepo::create(&store, &input).await.unwrap();

    assert_eq!(created.status, EventStatus::Pending);
    assert_eq!(created.sponsorship_raised, 0);
    assert_eq!(created.sponsorship_goal, 0);
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[tokio::test]
async fn set_status_is_idempotent() {
    let once = MemoryStore::new();
    let twice = MemoryStore::new();

    EventRepo::set_status(&once, "3", EventStatus::Approved).await.unwrap();
    EventRepo::set_status(&twice, "3", EventStatus::Approved).await.unwrap();
    EventRepo::set_status(&twice, "3", EventStatus::Approved).await.unwrap();

    assert_eq!(
        EventRepo::list(&once).await.unwrap(),
        EventRepo::list(&twice).await.unwrap()
    );
}

#[tokio::test]
async fn rejected_events_cannot_be_approved() {
    let store = MemoryStore::new();
    EventRepo::set_status(&store, "4", EventStatus::Rejected).await.unwrap();

    let event = EventRepo::set_status(&store, "4", EventStatus::Approved)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(event.status, EventStatus::Rejected);
}

#[tokio::test]
async fn set_status_on_unknown_id_changes_nothing() {
    let store = MemoryStore::new();
    EventRepo::list(&store).await.unwrap();
    let before = store.get(EVENTS_KEY).await.unwrap();

    let result = EventRepo::set_status(&store, "missing", EventStatus::Approved).await.unwrap();

    assert!(result.is_none());
    assert_eq!(store.get(EVENTS_KEY).await.unwrap(), before);
}

// ---------------------------------------------------------------------------
// Sponsorship
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sponsorships_accumulate() {
    let store = MemoryStore::new();
    let amounts = [100, 250, 5, 1_000];

    for amount in amounts {
        EventRepo::add_sponsorship(&store, "4", amount).await.unwrap();
    }

    let event = EventRepo::find_by_id(&store, "4").await.unwrap().unwrap();
    assert_eq!(event.sponsorship_raised, amounts.iter().sum::<u64>());
}

#[tokio::test]
async fn pledge_of_500_on_techfest_raises_total_by_500() {
    let store = MemoryStore::new();
    let before = compute_stats(&EventRepo::list(&store).await.unwrap());

    let event = EventRepo::add_sponsorship(&store, "1", 500).await.unwrap().unwrap();

    assert_eq!(event.sponsorship_goal, 5_000);
    assert_eq!(event.sponsorship_raised, 3_700);
    let after = compute_stats(&EventRepo::list(&store).await.unwrap());
    assert_eq!(after.total_funds_raised, before.total_funds_raised + 500);
}

#[tokio::test]
async fn sponsorship_on_unknown_id_leaves_store_byte_for_byte() {
    let store = MemoryStore::new();
    EventRepo::list(&store).await.unwrap();
    let before = store.get(EVENTS_KEY).await.unwrap();

    let result = EventRepo::add_sponsorship(&store, "nope", 500).await.unwrap();

    assert!(result.is_none());
    assert_eq!(store.get(EVENTS_KEY).await.unwrap(), before);
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reload_without_mutation_yields_identical_collection() {
    let store = MemoryStore::new();
    EventRepo::create(&store, &new_event("Round Trip")).await.unwrap();
    EventRepo::add_sponsorship(&store, "2", 75).await.unwrap();

    let first = EventRepo::list(&store).await.unwrap();
    let second = EventRepo::list(&store).await.unwrap();

    assert_eq!(first, second);
}
