//! Builder patterns for test data construction
//!
//! Provides a fluent API for creating signed session tokens with arbitrary
//! claims, secrets, and expiries (including already-expired tokens).

use chrono::{Duration, Local};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;

/// Builder for test session tokens
///
/// # Example
/// ```rust,ignore
/// let token = TestTokenBuilder::new()
///     .for_user(7, "alice")
///     .expires_in(3600)
///     .sign("test-signing-secret");
/// ```
pub struct TestTokenBuilder {
    user_id: i64,
    username: String,
    exp: i64,
    expiration_time: String,
}

impl TestTokenBuilder {
    /// Create a new token builder with defaults (user 7 "alice", one hour
    /// to expiry)
    pub fn new() -> Self {
        Self {
            user_id: 7,
            username: "alice".to_string(),
            exp: (Local::now() + Duration::seconds(3600)).timestamp(),
            expiration_time: "00:00".to_string(),
        }
    }

    /// Set the user identity (drives `sub`, `userId`, and `username`)
    pub fn for_user(mut self, user_id: i64, username: &str) -> Self {
        self.user_id = user_id;
        self.username = username.to_string();
        self
    }

    /// Set expiration in seconds from now (negative values produce an
    /// already-expired token)
    pub fn expires_in(mut self, seconds: i64) -> Self {
        self.exp = (Local::now() + Duration::seconds(seconds)).timestamp();
        self
    }

    /// Convenience for a token that expired an hour ago
    pub fn expired(self) -> Self {
        self.expires_in(-3600)
    }

    /// Set the human-readable "HH:mm" expiry claim
    pub fn with_expiration_time(mut self, hh_mm: &str) -> Self {
        self.expiration_time = hh_mm.to_string();
        self
    }

    /// Build the claims as a JSON value
    pub fn build_claims(&self) -> serde_json::Value {
        json!({
            "sub": self.user_id.to_string(),
            "exp": self.exp,
            "userId": self.user_id,
            "username": self.username,
            "expirationTime": self.expiration_time,
        })
    }

    /// Sign the claims into a compact HS256 token
    pub fn sign(self, secret: &str) -> String {
        let claims = self.build_claims();
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("Failed to sign test token")
    }
}

impl Default for TestTokenBuilder {
    fn default() -> Self {
        Self::new()
    }
}
