//! Session token issuance and validation.
//!
//! Tokens are compact JWTs signed with HMAC-SHA256 using a shared secret.
//! The expiration is embedded twice: as the standard `exp` claim and as a
//! human-readable local time of day (`expirationTime`) displayed by the web
//! client.
//!
//! # Security
//!
//! - Only HS256 is accepted during verification
//! - `exp` is enforced with zero leeway; validity flips exactly at expiry
//! - Verification failures surface as generic messages; details are logged
//!   at debug level

use crate::config::JwtConfig;
use crate::errors::AuthError;
use crate::models::{Claims, User};
use axum::http::{header, HeaderMap};
use chrono::{DateTime, Duration, Local};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use secrecy::ExposeSecret;

/// Format of the human-readable expiration claim.
const EXPIRATION_TIME_FORMAT: &str = "%H:%M";

/// Issues and interprets signed session tokens.
///
/// Holds the signing configuration injected at construction; performs no
/// I/O and keeps no state beyond it.
pub struct TokenService {
    jwt: JwtConfig,
}

impl TokenService {
    pub fn new(jwt: JwtConfig) -> Self {
        Self { jwt }
    }

    /// Issue a signed session token for a user.
    ///
    /// The token expires `expiration_minutes` after issuance and carries the
    /// user's id (as `sub` and `userId`), username, and the local "HH:mm"
    /// expiry time.
    pub fn generate(&self, user: &User) -> Result<String, AuthError> {
        self.generate_at(user, Local::now())
    }

    /// Deterministic issuance against an explicit `now`.
    ///
    /// Prefer [`TokenService::generate`] in production code. This variant
    /// exists so expiry boundaries can be unit-tested without wall-clock
    /// dependence.
    pub(crate) fn generate_at(
        &self,
        user: &User,
        now: DateTime<Local>,
    ) -> Result<String, AuthError> {
        let expiration = now + Duration::minutes(self.jwt.expiration_minutes);

        let claims = Claims {
            sub: user.id.to_string(),
            exp: expiration.timestamp(),
            user_id: user.id,
            username: user.username.clone(),
            expiration_time: expiration.format(EXPIRATION_TIME_FORMAT).to_string(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt.secret.expose_secret().as_bytes()),
        )
        .map_err(|e| {
            tracing::error!(target: "auth.token", error = %e, "Token signing failed");
            AuthError::Internal
        })
    }

    /// Parse a token, verify its signature, and return the claims.
    ///
    /// An already-expired token fails here with [`AuthError::ExpiredToken`];
    /// the parser enforces `exp` itself, so expired tokens never yield
    /// claims. Any other structural or signature problem maps to
    /// [`AuthError::InvalidToken`].
    pub fn get_claims(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Validity is an exact comparison against the embedded expiration.
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt.secret.expose_secret().as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => {
                tracing::debug!(target: "auth.token", error = %e, "Token verification failed");
                AuthError::InvalidToken("Token is malformed or has an invalid signature".to_string())
            }
        })
    }

    /// Check whether a token is currently valid.
    ///
    /// Never fails: a missing token and every parse, signature, or expiry
    /// problem are logged and collapsed to `false`. Callers that need the
    /// claims (and a failure reason) use [`TokenService::get_claims`].
    pub fn is_valid(&self, token: Option<&str>) -> bool {
        match self.check_at(token, Local::now()) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(target: "auth.token", error = %e, "Token failed validation");
                false
            }
        }
    }

    /// Validation with the failure reason intact, against an explicit `now`.
    fn check_at(&self, token: Option<&str>, now: DateTime<Local>) -> Result<(), AuthError> {
        let Some(token) = token else {
            return Err(AuthError::InvalidToken("No token provided".to_string()));
        };

        let claims = self.get_claims(token)?;

        // get_claims already rejects expired tokens; this comparison is the
        // authoritative check against the clock at call time.
        if now.timestamp() > claims.exp {
            return Err(AuthError::ExpiredToken);
        }

        Ok(())
    }

    /// Username claim of a verified token. Verification failures propagate.
    pub fn get_username(&self, token: &str) -> Result<String, AuthError> {
        Ok(self.get_claims(token)?.username)
    }

    /// User id parsed from the subject of a verified token. Verification
    /// and parse failures propagate.
    pub fn get_user_id(&self, token: &str) -> Result<i64, AuthError> {
        let claims = self.get_claims(token)?;

        claims.sub.parse::<i64>().map_err(|_| {
            AuthError::InvalidToken(format!("Subject is not a numeric user id: {}", claims.sub))
        })
    }

    /// Bearer token from an `Authorization` header.
    ///
    /// Returns `None` when the header is absent, does not start with
    /// `"Bearer"`, or carries nothing after the scheme. The token is the
    /// segment between the first and second space; trailing content is
    /// ignored.
    pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
        let authorization = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

        if !authorization.starts_with("Bearer") {
            return None;
        }

        authorization.split(' ').nth(1)
    }
}
