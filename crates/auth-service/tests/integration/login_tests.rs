//! E2E tests for the login flow.
//!
//! SUAP and the user directory are wiremock doubles; the auth service runs
//! as a real server on a random port. Every pipeline failure must surface
//! as 400 with the bare message as the response body.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use auth_test_utils::{TestAuthServer, TokenAssertions};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_suap_token(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/api/v2/autenticacao/token/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": token })))
        .mount(server)
        .await;
}

async fn mount_directory_user(server: &MockServer, username: &str, id: i64) {
    Mock::given(method("GET"))
        .and(path(format!("/api/users/{username}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": id,
            "username": username,
            "name": "Alice Martins",
            "email": "alice@campus.edu",
        })))
        .mount(server)
        .await;
}

/// Happy path: SUAP accepts the credentials, the directory knows the user,
/// and the response carries a locally issued session token plus the DTO.
#[tokio::test]
async fn test_login_happy_path_returns_session_token_and_user() -> Result<(), anyhow::Error> {
    // Arrange
    let suap = MockServer::start().await;
    let directory = MockServer::start().await;
    mount_suap_token(&suap, "suap-proof-token").await;
    mount_directory_user(&directory, "alice", 7).await;

    let server = TestAuthServer::spawn(&suap.uri(), &directory.uri()).await?;

    // Act
    let response = server
        .client()
        .post(format!("{}/api/login", server.url()))
        .json(&json!({"username": "alice", "password": "hunter2"}))
        .send()
        .await?;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["user"]["id"].as_i64(), Some(7));
    assert_eq!(body["user"]["username"].as_str(), Some("alice"));
    assert_eq!(body["user"]["name"].as_str(), Some("Alice Martins"));
    assert_eq!(body["user"]["email"].as_str(), Some("alice@campus.edu"));

    let token = body["token"]
        .as_str()
        .expect("Response should include token")
        .to_string();

    token
        .assert_valid_jwt()
        .assert_for_user(7, "alice")
        .assert_expires_in(auth_test_utils::TEST_TTL_MINUTES * 60);

    // The session token is ours, not the SUAP proof token
    assert_ne!(token, "suap-proof-token");

    Ok(())
}

/// The credentials are forwarded to SUAP verbatim.
#[tokio::test]
async fn test_login_forwards_credentials_to_suap() -> Result<(), anyhow::Error> {
    let suap = MockServer::start().await;
    let directory = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/autenticacao/token/"))
        .and(body_json(
            json!({"username": "2021001", "password": "hunter2"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "ok"})))
        .expect(1)
        .mount(&suap)
        .await;
    mount_directory_user(&directory, "2021001", 31).await;

    let server = TestAuthServer::spawn(&suap.uri(), &directory.uri()).await?;

    let response = server
        .client()
        .post(format!("{}/api/login", server.url()))
        .json(&json!({"username": "2021001", "password": "hunter2"}))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

/// SUAP rejecting the credentials surfaces as 400 with the bare message.
#[tokio::test]
async fn test_login_rejected_credentials_is_400_with_message() -> Result<(), anyhow::Error> {
    let suap = MockServer::start().await;
    let directory = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/autenticacao/token/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&suap)
        .await;

    let server = TestAuthServer::spawn(&suap.uri(), &directory.uri()).await?;

    let response = server
        .client()
        .post(format!("{}/api/login", server.url()))
        .json(&json!({"username": "alice", "password": "wrong"}))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await?, "Invalid username or password");

    Ok(())
}

/// A user SUAP knows but the directory does not: still 400, message names
/// the registration.
#[tokio::test]
async fn test_login_unknown_user_is_400_with_message() -> Result<(), anyhow::Error> {
    let suap = MockServer::start().await;
    let directory = MockServer::start().await;
    mount_suap_token(&suap, "ok").await;

    Mock::given(method("GET"))
        .and(path("/api/users/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&directory)
        .await;

    let server = TestAuthServer::spawn(&suap.uri(), &directory.uri()).await?;

    let response = server
        .client()
        .post(format!("{}/api/login", server.url()))
        .json(&json!({"username": "ghost", "password": "hunter2"}))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await?, "No user registered as ghost");

    Ok(())
}

/// SUAP being down is not distinguished: 400 with the outage message.
#[tokio::test]
async fn test_login_provider_outage_is_400() -> Result<(), anyhow::Error> {
    let suap = MockServer::start().await;
    let directory = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/autenticacao/token/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&suap)
        .await;

    let server = TestAuthServer::spawn(&suap.uri(), &directory.uri()).await?;

    let response = server
        .client()
        .post(format!("{}/api/login", server.url()))
        .json(&json!({"username": "alice", "password": "hunter2"}))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await?, "Authentication service is unavailable");

    Ok(())
}

/// Directory outage collapses to the same 400 shape.
#[tokio::test]
async fn test_login_directory_outage_is_400() -> Result<(), anyhow::Error> {
    let suap = MockServer::start().await;
    let directory = MockServer::start().await;
    mount_suap_token(&suap, "ok").await;

    Mock::given(method("GET"))
        .and(path("/api/users/alice"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&directory)
        .await;

    let server = TestAuthServer::spawn(&suap.uri(), &directory.uri()).await?;

    let response = server
        .client()
        .post(format!("{}/api/login", server.url()))
        .json(&json!({"username": "alice", "password": "hunter2"}))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await?, "User directory is unavailable");

    Ok(())
}
