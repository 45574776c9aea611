mod test_utils;

use serde_json::{json, Value};
use test_utils::*;

#[actix_rt::test]
async fn album_create_requires_a_name() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json("/albums", &json!({ "description": "nameless" }))
        .await;
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Name is required");

    let response = app.post_json("/albums", &json!({ "name": "" })).await;
    assert_eq!(response.status().as_u16(), 400);
}

#[actix_rt::test]
async fn album_defaults_and_visibility_flag_round_trip() {
    let app = TestApp::spawn().await;

    app.create_album(json!({ "name": "Hidden", "isPublic": false }))
        .await;

    let body = app.get_json("/albums").await;
    let album = &body["albums"][0];
    assert_eq!(album["name"], "Hidden");
    assert_eq!(album["isPublic"], false);
    assert_eq!(album["description"], "");
    assert_eq!(album["coverUrl"], "");
    assert_eq!(album["order"], 0);
    assert!(album["createdAt"].is_string());
}

#[actix_rt::test]
async fn albums_list_in_display_order() {
    let app = TestApp::spawn().await;

    app.create_album(json!({ "name": "Second", "order": 2 })).await;
    app.create_album(json!({ "name": "First", "order": 1 })).await;

    let body = app.get_json("/albums").await;
    let names: Vec<&str> = body["albums"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["First", "Second"]);
}

#[actix_rt::test]
async fn album_partial_update_and_empty_update_rejection() {
    let app = TestApp::spawn().await;

    let id = app.create_album(json!({ "name": "Trips" })).await;

    let response = app
        .put_json(&format!("/albums/{}", id), &json!({ "isPublic": false }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body = app.get_json("/albums").await;
    assert_eq!(body["albums"][0]["name"], "Trips");
    assert_eq!(body["albums"][0]["isPublic"], false);

    let response = app.put_json(&format!("/albums/{}", id), &json!({})).await;
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "No fields to update");
}

#[actix_rt::test]
async fn deleting_an_album_leaves_photo_references_untouched() {
    let app = TestApp::spawn().await;

    let album_id = app.create_album(json!({ "name": "Trips" })).await;
    app.create_photo(json!({ "url": "http://x/1.jpg", "albumId": album_id }))
        .await;

    let response = app.delete(&format!("/albums/{}", album_id)).await;
    assert_eq!(response.status().as_u16(), 200);

    // The orphaned reference stays behind: no cascade, no cleanup.
    let body = app.get_json(&format!("/photos?albumId={}", album_id)).await;
    let photos = body["photos"].as_array().unwrap();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0]["albumId"], album_id.as_str());

    let body = app.get_json("/albums").await;
    assert_eq!(body["albums"].as_array().unwrap().len(), 0);
}

#[actix_rt::test]
async fn album_then_photo_then_filtered_listing() {
    let app = TestApp::spawn().await;

    let album_id = app.create_album(json!({ "name": "Trips" })).await;
    app.create_photo(json!({ "url": "http://x/1.jpg", "albumId": album_id }))
        .await;

    let body = app.get_json(&format!("/photos?albumId={}", album_id)).await;
    let photos = body["photos"].as_array().unwrap();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0]["url"], "http://x/1.jpg");
    assert_eq!(photos[0]["albumId"], album_id.as_str());
    assert_eq!(photos[0]["tags"], json!([]));
    assert_eq!(photos[0]["mediaType"], "image");
}
