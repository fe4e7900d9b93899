use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

use camshop_api::domain::repository::OtpStore;
use camshop_api::router::build_router;
use camshop_api::state::AppState;
use camshop_api::usecase::token::issue_session_token;

use crate::helpers::{ADMIN_EMAIL, TEST_JWT_SECRET, test_challenge, test_state};

fn server(state: AppState) -> TestServer {
    TestServer::new(build_router(state, "public")).unwrap()
}

#[tokio::test]
async fn healthz_returns_200() {
    let response = server(test_state()).get("/healthz").await;
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn send_otp_rejects_non_admin_with_401_and_message_body() {
    let response = server(test_state())
        .post("/api/send-otp")
        .json(&json!({ "email": "b@y.com" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["message"], "unauthorized");
}

#[tokio::test]
async fn verify_otp_returns_token_and_message_on_success() {
    let state = test_state();
    state.otp_store.put(test_challenge(ADMIN_EMAIL, "123456"));

    let response = server(state)
        .post("/api/verify-otp")
        .json(&json!({ "email": ADMIN_EMAIL, "otp": "123456" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "login successful");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn verify_otp_returns_400_with_generic_message_on_wrong_code() {
    let state = test_state();
    state.otp_store.put(test_challenge(ADMIN_EMAIL, "123456"));

    let response = server(state)
        .post("/api/verify-otp")
        .json(&json!({ "email": ADMIN_EMAIL, "otp": "000000" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "invalid or expired otp");
}

#[tokio::test]
async fn verify_otp_returns_400_when_no_challenge_outstanding() {
    let response = server(test_state())
        .post("/api/verify-otp")
        .json(&json!({ "email": ADMIN_EMAIL, "otp": "123456" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "invalid or expired otp");
}

#[tokio::test]
async fn logout_acknowledges_with_200() {
    let response = server(test_state()).post("/api/logout").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "logged out");
}

#[tokio::test]
async fn package_list_is_public_and_initially_empty() {
    let response = server(test_state()).get("/api/packages").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn package_mutations_require_a_session_token() {
    let response = server(test_state())
        .post("/api/packages")
        .json(&json!({
            "image_url": "https://img.example.com/x.jpg",
            "name": "bundle",
            "camera_count": "4",
            "waterproof_box_count": "4",
            "wire_length": "90m",
            "hard_drive": "1TB",
            "dvr_model": "DVR-4CH",
            "dc_pin_count": "4",
            "bnc_connector_count": "8",
            "price": "5500"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["message"], "invalid token");
}

#[tokio::test]
async fn package_crud_round_trip_with_session_token() {
    let state = test_state();
    let server = server(state);
    let (token, _) = issue_session_token(ADMIN_EMAIL, TEST_JWT_SECRET).unwrap();

    // Create
    let response = server
        .post("/api/packages")
        .authorization_bearer(&token)
        .json(&json!({
            "image_url": "https://img.example.com/x.jpg",
            "name": "bundle",
            "camera_count": "4",
            "waterproof_box_count": "4",
            "wire_length": "90m",
            "hard_drive": "1TB",
            "dvr_model": "DVR-4CH",
            "dc_pin_count": "4",
            "bnc_connector_count": "8",
            "price": "5500"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    let id = created["id"].as_str().unwrap().to_owned();

    // Read (public)
    let response = server.get(&format!("/api/packages/{id}")).await;
    response.assert_status(StatusCode::OK);
    let fetched: Value = response.json();
    assert_eq!(fetched["name"], "bundle");

    // Update
    let response = server
        .put(&format!("/api/packages/{id}"))
        .authorization_bearer(&token)
        .json(&json!({ "price": "6000" }))
        .await;
    response.assert_status(StatusCode::OK);
    let updated: Value = response.json();
    assert_eq!(updated["price"], "6000");
    assert_eq!(updated["name"], "bundle");

    // Delete
    let response = server
        .delete(&format!("/api/packages/{id}"))
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = server.get(&format!("/api/packages/{id}")).await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "package not found");
}

#[tokio::test]
async fn asset_routes_require_a_session_token() {
    let response = server(test_state()).get("/api/assets").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["message"], "invalid token");
}
