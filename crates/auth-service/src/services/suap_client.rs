//! SUAP login client.
//!
//! Credential checks are delegated to the campus SUAP instance. This service
//! never evaluates passwords itself; it only learns whether SUAP issued a
//! token for the supplied credentials.

use crate::errors::AuthError;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{instrument, warn};

/// Default timeout for SUAP requests in seconds.
const SUAP_REQUEST_TIMEOUT_SECS: u64 = 10;

/// External credential check: exchanges a username/password for a token.
#[async_trait]
pub trait LoginProvider: Send + Sync {
    /// Authenticate the credentials and return the provider's token.
    async fn login(&self, username: &str, password: &SecretString)
        -> Result<String, AuthError>;
}

#[derive(Debug, Serialize)]
struct SuapTokenRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct SuapTokenResponse {
    token: String,
}

/// HTTP client for the SUAP authentication API.
pub struct SuapClient {
    /// HTTP client with configured timeouts.
    client: Client,

    /// Base URL of the SUAP instance.
    base_url: String,
}

impl SuapClient {
    /// Create a new SUAP client.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Internal` if the HTTP client cannot be built.
    pub fn new(base_url: String) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(SUAP_REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| {
                tracing::error!(target: "auth.suap", error = %e, "Failed to build HTTP client");
                AuthError::Internal
            })?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl LoginProvider for SuapClient {
    #[instrument(skip_all, fields(username = %username))]
    async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<String, AuthError> {
        let url = format!("{}/api/v2/autenticacao/token/", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&SuapTokenRequest {
                username,
                password: password.expose_secret(),
            })
            .send()
            .await
            .map_err(|e| {
                warn!(target: "auth.suap", error = %e, "SUAP request failed");
                AuthError::ServiceUnavailable(
                    "Authentication service is unavailable".to_string(),
                )
            })?;

        let status = response.status();

        if status.is_success() {
            let body: SuapTokenResponse = response.json().await.map_err(|e| {
                tracing::error!(target: "auth.suap", error = %e, "Failed to parse SUAP response");
                AuthError::Internal
            })?;
            Ok(body.token)
        } else if status.is_server_error() {
            warn!(target: "auth.suap", status = %status, "SUAP returned server error");
            Err(AuthError::ServiceUnavailable(
                "Authentication service is unavailable".to_string(),
            ))
        } else {
            // 4xx: SUAP did not accept the credentials. The message is what
            // the login endpoint surfaces to the client.
            Err(AuthError::LoginRejected(
                "Invalid username or password".to_string(),
            ))
        }
    }
}
