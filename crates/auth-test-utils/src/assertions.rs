//! Custom test assertions for expressive tests
//!
//! Provides trait-based assertions over compact session tokens. Payloads are
//! decoded without signature verification; signature checks belong to the
//! token service's own tests.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::Deserialize;

/// JWT header structure
#[derive(Debug, Deserialize)]
struct JwtHeader {
    pub alg: String,
    pub typ: String,
}

/// Session token claims structure
#[derive(Debug, Deserialize)]
struct SessionClaims {
    pub sub: String,
    pub exp: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub username: String,
    #[serde(rename = "expirationTime")]
    pub expiration_time: String,
}

fn decoded_claims(token: &str) -> SessionClaims {
    let parts: Vec<_> = token.split('.').collect();
    let payload = URL_SAFE_NO_PAD
        .decode(parts[1])
        .expect("Invalid JWT payload");
    serde_json::from_slice(&payload).expect("Failed to parse session claims")
}

/// Custom assertions for session tokens
///
/// # Example
/// ```rust,ignore
/// token
///     .assert_valid_jwt()
///     .assert_for_user(7, "alice")
///     .assert_expires_in(3600);
/// ```
pub trait TokenAssertions {
    /// Assert that the token is a structurally valid HS256 JWT
    fn assert_valid_jwt(&self) -> &Self;

    /// Assert that the token carries the given user id and username
    fn assert_for_user(&self, user_id: i64, username: &str) -> &Self;

    /// Assert that the token expires within the specified seconds
    fn assert_expires_in(&self, seconds: i64) -> &Self;

    /// Assert the human-readable "HH:mm" expiry claim
    fn assert_expiration_time(&self, hh_mm: &str) -> &Self;
}

impl TokenAssertions for String {
    fn assert_valid_jwt(&self) -> &Self {
        let parts: Vec<_> = self.split('.').collect();
        assert_eq!(
            parts.len(),
            3,
            "JWT must have 3 parts (header.payload.signature), got {}",
            parts.len()
        );

        let header_bytes = URL_SAFE_NO_PAD
            .decode(parts[0])
            .expect("Failed to base64 decode JWT header");
        let header: JwtHeader =
            serde_json::from_slice(&header_bytes).expect("Failed to parse JWT header JSON");

        assert_eq!(header.alg, "HS256", "Expected HS256 algorithm");
        assert_eq!(header.typ, "JWT", "Expected JWT type");

        // Payload must decode into the session claim set
        let _ = decoded_claims(self);

        self
    }

    fn assert_for_user(&self, user_id: i64, username: &str) -> &Self {
        let claims = decoded_claims(self);

        assert_eq!(
            claims.user_id, user_id,
            "Expected userId {}, got {}",
            user_id, claims.user_id
        );
        assert_eq!(
            claims.sub,
            user_id.to_string(),
            "Expected subject '{}', got '{}'",
            user_id,
            claims.sub
        );
        assert_eq!(
            claims.username, username,
            "Expected username '{}', got '{}'",
            username, claims.username
        );

        self
    }

    fn assert_expires_in(&self, seconds: i64) -> &Self {
        let claims = decoded_claims(self);

        let now = chrono::Local::now().timestamp();
        let expires_in = claims.exp - now;

        // Allow 5-second tolerance for test execution time
        assert!(
            (expires_in - seconds).abs() <= 5,
            "Expected token to expire in {} seconds, but expires in {} seconds",
            seconds,
            expires_in
        );

        self
    }

    fn assert_expiration_time(&self, hh_mm: &str) -> &Self {
        let claims = decoded_claims(self);

        assert_eq!(
            claims.expiration_time, hh_mm,
            "Expected expirationTime '{}', got '{}'",
            hh_mm, claims.expiration_time
        );

        self
    }
}
