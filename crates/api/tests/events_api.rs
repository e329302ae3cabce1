//! Integration tests for the `/api/v1` JSON API.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;

#[tokio::test]
async fn lists_seed_events() {
    let (app, _) = common::build_test_app();
    let json = body_json(get(app, "/api/v1/events").await).await;

    let names: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        ["TechFest 2024", "Cultural Night", "Startup Summit", "Sports Carnival"]
    );
}

#[tokio::test]
async fn filters_by_status_and_search() {
    let (app, _) = common::build_test_app();
    let json = body_json(get(app.clone(), "/api/v1/events?status=pending").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let json = body_json(get(app, "/api/v1/events?search=ATHLETICS").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Sports Carnival");
}

#[tokio::test]
async fn unknown_status_filter_is_rejected() {
    let (app, _) = common::build_test_app();
    let response = get(app, "/api/v1/events?status=archived").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_forces_pending_and_zero_raised() {
    let (app, _) = common::build_test_app();
    let response = post_json(
        app.clone(),
        "/api/v1/events",
        json!({
            "name": "Hack Night",
            "clubName": "Coding Club",
            "date": "2024-05-01",
            "expectedAudience": 120,
            "sponsorshipGoal": 1500,
            "status": "approved",
            "sponsorshipRaised": 9999
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await["data"].clone();
    assert_eq!(created["status"], "pending");
    assert_eq!(created["sponsorshipRaised"], 0);
    assert_eq!(created["sponsorshipGoal"], 1500);

    let id = created["id"].as_str().unwrap();
    let fetched = body_json(get(app, &format!("/api/v1/events/{id}")).await).await;
    assert_eq!(fetched["data"], created);
}

#[tokio::test]
async fn create_without_club_name_is_a_validation_error() {
    let (app, _) = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/events",
        json!({ "name": "Hack Night", "date": "2024-05-01" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Please fill in all required fields.");
}

#[tokio::test]
async fn reject_after_approve_conflicts_and_keeps_status() {
    let (app, _) = common::build_test_app();
    let approved = body_json(post_json(app.clone(), "/api/v1/events/3/approve", json!({})).await).await;
    assert_eq!(approved["data"]["status"], "approved");

    let response = post_json(app.clone(), "/api/v1/events/3/reject", json!({})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "Event 3 is already approved");

    let event = body_json(get(app, "/api/v1/events/3").await).await;
    assert_eq!(event["data"]["status"], "approved");
}

#[tokio::test]
async fn re_approving_is_idempotent() {
    let (app, _) = common::build_test_app();
    let response = post_json(app, "/api/v1/events/1/approve", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "approved");
}

#[tokio::test]
async fn sponsorship_updates_event_and_stats() {
    let (app, _) = common::build_test_app();

    let response = post_json(
        app.clone(),
        "/api/v1/events/1/sponsorships",
        json!({ "amount": 500 }),
    )
    .await;
    assert_eq!(body_json(response).await["data"]["sponsorshipRaised"], 3700);

    let stats = body_json(get(app, "/api/v1/stats").await).await["data"].clone();
    assert_eq!(stats["totalFundsRaised"], 10200);
    assert_eq!(stats["totalFundsRequested"], 38000);
    assert_eq!(stats["fundedPercent"], 27);
}

#[tokio::test]
async fn non_positive_sponsorship_is_rejected() {
    let (app, _) = common::build_test_app();
    let response = post_json(app.clone(), "/api/v1/events/1/sponsorships", json!({ "amount": -5 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let event = body_json(get(app, "/api/v1/events/1").await).await;
    assert_eq!(event["data"]["sponsorshipRaised"], 3200);
}

#[tokio::test]
async fn unknown_event_is_404_and_store_unchanged() {
    let (app, store) = common::build_test_app();
    // Seed the store first.
    get(app.clone(), "/api/v1/events").await;
    let before = sponsorlink_db::KeyValueStore::get(store.as_ref(), "College.connect_events")
        .await
        .unwrap();

    let response = post_json(
        app.clone(),
        "/api/v1/events/missing/sponsorships",
        json!({ "amount": 100 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    let response = post_json(app, "/api/v1/events/missing/approve", json!({})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let after = sponsorlink_db::KeyValueStore::get(store.as_ref(), "College.connect_events")
        .await
        .unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn inquiries_are_recorded_with_event_names() {
    let (app, _) = common::build_test_app();
    let response = post_json(
        app.clone(),
        "/api/v1/events/1/inquiries",
        json!({ "sponsorName": "Ann", "sponsorEmail": "ann@corp.com", "message": "Hi" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(get(app, "/api/v1/inquiries").await).await;
    let inquiries = json["data"].as_array().unwrap();
    assert_eq!(inquiries.len(), 1);
    assert_eq!(inquiries[0]["eventName"], "TechFest 2024");
    assert_eq!(inquiries[0]["clubName"], "Computer Science Society");
}

#[tokio::test]
async fn inquiry_with_bad_email_is_rejected() {
    let (app, _) = common::build_test_app();
    let response = post_json(
        app.clone(),
        "/api/v1/events/1/inquiries",
        json!({ "sponsorName": "Ann", "sponsorEmail": "foo@bar", "message": "Hi" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Please enter a valid email address.");

    let json = body_json(get(app, "/api/v1/inquiries").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}
