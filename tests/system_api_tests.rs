mod test_utils;

use serde_json::Value;
use test_utils::*;

#[actix_rt::test]
async fn health_reports_ok_with_a_timestamp() {
    let app = TestApp::spawn().await;

    let body = app.get_json("/health").await;
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
    assert_eq!(body["database"], "ok");
}

#[actix_rt::test]
async fn unmatched_routes_return_the_not_found_envelope() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/nope", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Not Found");
}

#[actix_rt::test]
async fn api_responses_carry_the_wildcard_cors_origin() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/photos", app.address))
        .header("Origin", "https://anywhere.example.com")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}
