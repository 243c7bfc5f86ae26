//! Integration tests for bearer-token authentication.

mod helpers;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use campushub_api::extractors::auth::Claims;
use campushub_entity::user::UserRole;

#[tokio::test]
async fn test_missing_token_rejected() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/notifications", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_malformed_token_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/notifications", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_wrong_secret_rejected() {
    let app = helpers::TestApp::new();

    let claims = Claims {
        sub: Uuid::new_v4(),
        username: "intruder".to_string(),
        role: UserRole::Member,
        exp: (Utc::now() + Duration::hours(1)).timestamp(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap();

    let response = app
        .request("GET", "/api/notifications", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = helpers::TestApp::new();

    let claims = Claims {
        sub: Uuid::new_v4(),
        username: "latecomer".to_string(),
        role: UserRole::Member,
        exp: (Utc::now() - Duration::hours(1)).timestamp(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(helpers::JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let response = app
        .request("GET", "/api/notifications", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_valid_token_accepted() {
    let app = helpers::TestApp::new();
    let token = helpers::member_token(Uuid::new_v4());

    let response = app
        .request("GET", "/api/notifications", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
}

#[tokio::test]
async fn test_health_requires_no_auth() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
}
