//! E2E tests for the legacy token-check endpoint.
//!
//! `POST /api/isValidToken` discards the computed validity and answers
//! `true` whenever the check itself completes. The existing web client was
//! built against that shape, so these tests pin it, including for tokens
//! that are demonstrably invalid.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use auth_test_utils::{TestAuthServer, TestTokenBuilder, TEST_JWT_SECRET};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::MockServer;

/// Neither SUAP nor the directory is consulted by this endpoint; the mocks
/// exist only to satisfy server wiring.
async fn spawn_server() -> Result<TestAuthServer, anyhow::Error> {
    let upstream = MockServer::start().await;
    TestAuthServer::spawn(&upstream.uri(), &upstream.uri()).await
}

async fn check_token(
    server: &TestAuthServer,
    body: serde_json::Value,
) -> Result<(StatusCode, String), anyhow::Error> {
    let response = server
        .client()
        .post(format!("{}/api/isValidToken", server.url()))
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}

#[tokio::test]
async fn test_check_reports_true_for_valid_token() -> Result<(), anyhow::Error> {
    let server = spawn_server().await?;
    let token = TestTokenBuilder::new().sign(TEST_JWT_SECRET);

    let (status, body) = check_token(&server, json!({ "token": token })).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "true");

    Ok(())
}

#[tokio::test]
async fn test_check_reports_true_for_expired_token() -> Result<(), anyhow::Error> {
    let server = spawn_server().await?;
    let token = TestTokenBuilder::new().expired().sign(TEST_JWT_SECRET);

    let (status, body) = check_token(&server, json!({ "token": token })).await?;

    // The validity result is discarded server-side: expired still gets true.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "true");

    Ok(())
}

#[tokio::test]
async fn test_check_reports_true_for_garbage_token() -> Result<(), anyhow::Error> {
    let server = spawn_server().await?;

    let (status, body) = check_token(&server, json!({ "token": "not-a-jwt" })).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "true");

    Ok(())
}

#[tokio::test]
async fn test_check_reports_true_for_wrong_secret() -> Result<(), anyhow::Error> {
    let server = spawn_server().await?;
    let token = TestTokenBuilder::new().sign("some-other-secret");

    let (status, body) = check_token(&server, json!({ "token": token })).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "true");

    Ok(())
}

#[tokio::test]
async fn test_check_reports_true_for_missing_token_field() -> Result<(), anyhow::Error> {
    let server = spawn_server().await?;

    let (status, body) = check_token(&server, json!({})).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "true");

    Ok(())
}

#[tokio::test]
async fn test_check_ignores_nested_user_payload() -> Result<(), anyhow::Error> {
    let server = spawn_server().await?;
    let token = TestTokenBuilder::new().sign(TEST_JWT_SECRET);

    let (status, body) = check_token(
        &server,
        json!({
            "token": token,
            "user": {
                "id": 999,
                "username": "someone-else",
                "name": "Someone Else",
                "email": "else@campus.edu"
            }
        }),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "true");

    Ok(())
}
