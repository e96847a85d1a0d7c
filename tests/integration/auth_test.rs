//! Integration tests for admin login, logout, registration, and the
//! session guard.

mod helpers;

use chrono::{Duration, Utc};
use http::StatusCode;
use serde_json::json;

use helpers::{Payload, ROOT_PASSWORD, ROOT_USER, TestApp, form};
use tmsiti_auth::TokenEncoder;
use tmsiti_core::config::AuthConfig;
use tmsiti_database::repositories::AdminRepository;

#[tokio::test]
async fn test_login_returns_bearer_token() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/admin-auth/login",
            form(&[("username", ROOT_USER), ("password", ROOT_PASSWORD)]),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["token_type"], "bearer");
    assert!(!response.body["access_token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let app = TestApp::new().await;

    for (username, password) in [(ROOT_USER, "wrong-password"), ("nobody", ROOT_PASSWORD)] {
        let response = app
            .request(
                "POST",
                "/admin-auth/login",
                form(&[("username", username), ("password", password)]),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error_code(), "INVALID_CREDENTIALS");
    }
}

#[tokio::test]
async fn test_login_missing_field_is_unprocessable() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/admin-auth/login",
            form(&[("username", ROOT_USER)]),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_me_returns_current_admin() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let response = app
        .request("GET", "/admin-auth/me", Payload::Empty, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["username"], ROOT_USER);
    assert!(response.body.get("hashed_password").is_none());
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = TestApp::new().await;

    let response = app.get("/admin-auth/me").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHENTICATED");

    let malformed = http::Request::builder()
        .method("GET")
        .uri("/admin-auth/me")
        .header(http::header::AUTHORIZATION, "Token abc")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.send(malformed).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_revokes_only_that_token() {
    let app = TestApp::new().await;
    let first = app.login_root().await;
    let second = app.login_root().await;
    assert_ne!(first, second);

    let response = app
        .request("POST", "/admin-auth/logout", Payload::Empty, Some(&first))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Successfully logged out");

    let response = app
        .request("GET", "/admin-auth/me", Payload::Empty, Some(&first))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Token already revoked");

    let response = app
        .request("POST", "/admin-auth/logout", Payload::Empty, Some(&first))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/admin-auth/me", Payload::Empty, Some(&second))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_register_creates_admin_that_can_log_in() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let response = app
        .request(
            "POST",
            "/admin-auth/register",
            Payload::Json(json!({"username": "editor", "password": "editor-pass"})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["username"], "editor");
    assert!(response.body["id"].as_i64().is_some());

    let editor_token = app.login("editor", "editor-pass").await;
    let response = app
        .request("GET", "/admin-auth/me", Payload::Empty, Some(&editor_token))
        .await;
    assert_eq!(response.body["username"], "editor");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let response = app
        .request(
            "POST",
            "/admin-auth/register",
            Payload::Json(json!({"username": ROOT_USER, "password": "another-pass"})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "DUPLICATE_USERNAME");
    let admins = AdminRepository::new(app.state.db.pool().clone());
    assert_eq!(admins.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_register_short_password() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let response = app
        .request(
            "POST",
            "/admin-auth/register",
            Payload::Json(json!({"username": "editor", "password": "short"})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_register_requires_session() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/admin-auth/register",
            Payload::Json(json!({"username": "editor", "password": "editor-pass"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::new().await;
    let encoder = TokenEncoder::new(&app.config.auth).unwrap();
    let issued = encoder
        .issue_at(ROOT_USER, Utc::now() - Duration::hours(3))
        .unwrap();

    let response = app
        .request(
            "GET",
            "/admin-auth/me",
            Payload::Empty,
            Some(&issued.access_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Token has expired");
}

#[tokio::test]
async fn test_foreign_signature_rejected() {
    let app = TestApp::new().await;
    let foreign = TokenEncoder::new(&AuthConfig {
        jwt_secret: "some-other-secret".into(),
        ..app.config.auth.clone()
    })
    .unwrap();
    let issued = foreign.issue(ROOT_USER).unwrap();

    let response = app
        .request(
            "GET",
            "/admin-auth/me",
            Payload::Empty,
            Some(&issued.access_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_missing_admin_is_not_found() {
    let app = TestApp::new().await;
    let issued = TokenEncoder::new(&app.config.auth)
        .unwrap()
        .issue("ghost")
        .unwrap();

    let response = app
        .request(
            "GET",
            "/admin-auth/me",
            Payload::Empty,
            Some(&issued.access_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_revocation_checked_before_decoding() {
    let app = TestApp::new().await;
    let exp = (Utc::now() + Duration::hours(1)).timestamp();
    app.state
        .ledger
        .revoke("not-a-jwt", exp, ROOT_USER)
        .await
        .unwrap();

    let response = app
        .request("GET", "/admin-auth/me", Payload::Empty, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Token already revoked");
}
