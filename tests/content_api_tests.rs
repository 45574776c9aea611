mod test_utils;

use serde_json::{json, Value};
use std::time::Duration;
use test_utils::*;

#[actix_rt::test]
async fn never_written_page_returns_the_null_sentinel() {
    let app = TestApp::spawn().await;

    let body = app.get_json("/content/about").await;
    assert_eq!(body["id"], "about");
    assert!(body["content"].is_null());
    assert!(body["updatedAt"].is_null());
}

#[actix_rt::test]
async fn writing_twice_keeps_one_row_and_refreshes_the_timestamp() {
    let app = TestApp::spawn().await;

    let response = app
        .put_json("/content/about", &json!({ "content": { "title": "v1" } }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let first = app.get_json("/content/about").await;
    assert_eq!(first["content"], json!({ "title": "v1" }));
    let first_updated = first["updatedAt"].as_str().unwrap().to_string();

    tokio::time::sleep(Duration::from_millis(10)).await;

    app.put_json("/content/about", &json!({ "content": { "title": "v2" } }))
        .await;

    let second = app.get_json("/content/about").await;
    assert_eq!(second["content"], json!({ "title": "v2" }));
    assert_ne!(second["updatedAt"].as_str().unwrap(), first_updated);

    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM site_content WHERE id = 'about'")
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(count, 1);
}

#[actix_rt::test]
async fn wrapped_and_bare_payload_shapes_are_both_accepted() {
    let app = TestApp::spawn().await;

    app.put_json("/content/home", &json!({ "content": { "headline": "wrapped" } }))
        .await;
    let body = app.get_json("/content/home").await;
    assert_eq!(body["content"], json!({ "headline": "wrapped" }));

    app.put_json("/content/home", &json!({ "headline": "bare" }))
        .await;
    let body = app.get_json("/content/home").await;
    assert_eq!(body["content"], json!({ "headline": "bare" }));
}

#[actix_rt::test]
async fn content_pages_are_independent_rows() {
    let app = TestApp::spawn().await;

    app.put_json("/content/about", &json!({ "title": "About" }))
        .await;
    app.put_json("/content/contact", &json!({ "title": "Contact" }))
        .await;

    let about = app.get_json("/content/about").await;
    let contact = app.get_json("/content/contact").await;
    assert_eq!(about["content"]["title"], "About");
    assert_eq!(contact["content"]["title"], "Contact");

    let missing = app.get_json("/content/never-edited").await;
    assert!(missing["content"].is_null());
}
