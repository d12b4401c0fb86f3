//! User directory lookup.
//!
//! User records live in the campus records service; the auth service only
//! reads them to stamp identity claims and build the login response.

use crate::errors::AuthError;
use crate::models::User;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{instrument, warn};

const DIRECTORY_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Read-only user lookup keyed by registration number (the login username).
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_registration(&self, registration: &str) -> Result<User, AuthError>;
}

/// HTTP client for the campus user directory.
pub struct HttpUserDirectory {
    client: Client,
    base_url: String,
}

impl HttpUserDirectory {
    /// Create a new directory client.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Internal` if the HTTP client cannot be built.
    pub fn new(base_url: String) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DIRECTORY_REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| {
                tracing::error!(target: "auth.directory", error = %e, "Failed to build HTTP client");
                AuthError::Internal
            })?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    #[instrument(skip_all, fields(registration = %registration))]
    async fn find_by_registration(&self, registration: &str) -> Result<User, AuthError> {
        let url = format!("{}/api/users/{}", self.base_url, registration);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(target: "auth.directory", error = %e, "Directory request failed");
            AuthError::ServiceUnavailable("User directory is unavailable".to_string())
        })?;

        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| {
                tracing::error!(target: "auth.directory", error = %e, "Failed to parse directory response");
                AuthError::Internal
            })
        } else if status == StatusCode::NOT_FOUND {
            Err(AuthError::UserNotFound(format!(
                "No user registered as {}",
                registration
            )))
        } else {
            warn!(target: "auth.directory", status = %status, "Unexpected directory response");
            Err(AuthError::ServiceUnavailable(
                "User directory is unavailable".to_string(),
            ))
        }
    }
}
