//! Test server harness for E2E testing
//!
//! Spawns a real auth service instance on a random port, wired to
//! caller-supplied SUAP and user-directory base URLs (typically wiremock
//! servers).

use auth_service::config::JwtConfig;
use auth_service::routes::{self, AppState};
use auth_service::services::{HttpUserDirectory, SuapClient, TokenService};
use secrecy::SecretString;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Shared signing secret used by harness-spawned servers.
pub const TEST_JWT_SECRET: &str = "test-signing-secret";

/// Token lifetime used by harness-spawned servers.
pub const TEST_TTL_MINUTES: i64 = 60;

/// Test harness for spawning the auth service in E2E tests
///
/// # Example
/// ```rust,ignore
/// let suap = MockServer::start().await;
/// let directory = MockServer::start().await;
/// let server = TestAuthServer::spawn(&suap.uri(), &directory.uri()).await?;
///
/// let response = server
///     .client()
///     .post(format!("{}/api/login", server.url()))
///     .json(&json!({"username": "alice", "password": "hunter2"}))
///     .send()
///     .await?;
/// ```
pub struct TestAuthServer {
    addr: SocketAddr,
    client: reqwest::Client,
    _handle: JoinHandle<()>,
}

impl TestAuthServer {
    /// Spawn a server with the default harness signing configuration.
    pub async fn spawn(suap_url: &str, directory_url: &str) -> Result<Self, anyhow::Error> {
        let jwt = JwtConfig {
            secret: SecretString::from(TEST_JWT_SECRET.to_string()),
            expiration_minutes: TEST_TTL_MINUTES,
        };
        Self::spawn_with_jwt(suap_url, directory_url, jwt).await
    }

    /// Spawn a server with explicit signing configuration.
    pub async fn spawn_with_jwt(
        suap_url: &str,
        directory_url: &str,
        jwt: JwtConfig,
    ) -> Result<Self, anyhow::Error> {
        let login_provider = SuapClient::new(suap_url.to_string())
            .map_err(|e| anyhow::anyhow!("Failed to build SUAP client: {}", e))?;
        let user_directory = HttpUserDirectory::new(directory_url.to_string())
            .map_err(|e| anyhow::anyhow!("Failed to build directory client: {}", e))?;

        let state = Arc::new(AppState {
            token_service: TokenService::new(jwt),
            login_provider: Arc::new(login_provider),
            user_directory: Arc::new(user_directory),
        });

        // Build routes using the service's real route builder
        let app = routes::build_routes(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            client: reqwest::Client::new(),
            _handle: handle,
        })
    }

    /// Base URL of the spawned server.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// HTTP client for talking to the spawned server.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}
