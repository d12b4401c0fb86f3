//! Auth service configuration.
//!
//! Configuration is loaded from environment variables once at startup and
//! handed to components by value; nothing reads ambient process state after
//! that. The signing secret is a [`SecretString`] so Debug output stays safe.

use secrecy::SecretString;
use std::collections::HashMap;
use std::env;
use thiserror::Error;

/// Default session token lifetime in minutes.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;

/// Default HTTP bind address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Signing configuration for session tokens.
///
/// Injected into [`crate::services::TokenService`] at construction.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HMAC-SHA256 signing secret.
    pub secret: SecretString,

    /// Minutes from issuance to expiration.
    pub expiration_minutes: i64,
}

/// Auth service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP bind address (default: "0.0.0.0:8080").
    pub bind_address: String,

    /// Base URL of the SUAP instance that performs credential checks.
    pub suap_base_url: String,

    /// Base URL of the campus user directory.
    pub user_directory_url: String,

    /// Session token signing configuration.
    pub jwt: JwtConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid token expiration configuration: {0}")]
    InvalidExpiration(String),
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let suap_base_url = vars
            .get("SUAP_BASE_URL")
            .cloned()
            .unwrap_or_else(|| "http://localhost:8085".to_string());

        let user_directory_url = vars
            .get("USER_DIRECTORY_URL")
            .cloned()
            .unwrap_or_else(|| "http://localhost:8086".to_string());

        let secret = vars
            .get("JWT_SECRET")
            .ok_or_else(|| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?;

        let expiration_minutes = if let Some(value_str) = vars.get("JWT_EXPIRATION_MINUTES") {
            let value: i64 = value_str.parse().map_err(|e| {
                ConfigError::InvalidExpiration(format!(
                    "JWT_EXPIRATION_MINUTES must be a valid integer, got '{}': {}",
                    value_str, e
                ))
            })?;

            if value <= 0 {
                return Err(ConfigError::InvalidExpiration(format!(
                    "JWT_EXPIRATION_MINUTES must be positive, got {}",
                    value
                )));
            }

            value
        } else {
            DEFAULT_TOKEN_TTL_MINUTES
        };

        Ok(Config {
            bind_address,
            suap_base_url,
            user_directory_url,
            jwt: JwtConfig {
                secret: SecretString::from(secret.clone()),
                expiration_minutes,
            },
        })
    }
}
