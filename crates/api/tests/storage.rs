//! The app over the file backend: state survives a restart.

mod common;

use std::sync::Arc;

use common::{body_json, get, post_json};
use serde_json::json;
use sponsorlink_db::FileStore;

#[tokio::test]
async fn file_store_persists_across_app_instances() {
    let dir = tempfile::tempdir().unwrap();

    let store = Arc::new(FileStore::open(dir.path()).await.unwrap());
    let app = common::build_test_app_with(store, common::test_config());
    post_json(app, "/api/v1/events/1/sponsorships", json!({ "amount": 500 })).await;

    let reopened = Arc::new(FileStore::open(dir.path()).await.unwrap());
    let app = common::build_test_app_with(reopened, common::test_config());
    let json = body_json(get(app, "/api/v1/events/1").await).await;

    assert_eq!(json["data"]["sponsorshipRaised"], 3700);
}

#[tokio::test]
async fn corrupt_block_is_a_500_not_an_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::open(dir.path()).await.unwrap());
    sponsorlink_db::KeyValueStore::set(store.as_ref(), "College.connect_events", "{oops")
        .await
        .unwrap();

    let app = common::build_test_app_with(store, common::test_config());
    let response = get(app, "/api/v1/events").await;

    assert_eq!(response.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
}
