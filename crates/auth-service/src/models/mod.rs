//! Data models for the auth service.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Campus user as served by the user directory.
///
/// Token issuance only reads `id` and `username`; the remaining profile
/// fields ride along into the login response DTO.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
}

/// Public-facing user representation returned by `/api/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Claims carried by a session token.
///
/// Wire names (`userId`, `expirationTime`) are fixed by the existing web
/// client and kept as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: string form of the user id.
    pub sub: String,

    /// Expiration timestamp (Unix epoch seconds).
    pub exp: i64,

    /// Numeric user id.
    #[serde(rename = "userId")]
    pub user_id: i64,

    /// Login username (registration number).
    pub username: String,

    /// Local time of day ("HH:mm") at which the token expires.
    #[serde(rename = "expirationTime")]
    pub expiration_time: String,
}

/// Body of `POST /api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: SecretString,
}

/// Body of a successful login: session token plus the user's public profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: UserDto,
}

/// Body of `POST /api/isValidToken`.
///
/// The nested user payload is accepted for compatibility but never read.
#[derive(Debug, Deserialize)]
pub struct TokenCheckRequest {
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default)]
    pub user: Option<UserDto>,
}
