//! Authentication middleware for protected routes.
//!
//! Extracts the Bearer token from the Authorization header, gates on the
//! boolean validity check, and stores the vetted token in request extensions
//! for handlers that read claims out of it.

use crate::errors::AuthError;
use crate::routes::AppState;
use crate::services::TokenService;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::instrument;

/// Bearer token that passed the validity check.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

/// Middleware gating protected routes on a valid session token.
///
/// # Response
///
/// - 401 Unauthorized when the header is missing/malformed or the token is
///   invalid or expired
/// - Continues to the handler with [`SessionToken`] in extensions otherwise
#[instrument(skip_all, name = "auth.middleware.require_auth")]
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, AuthError> {
    let Some(token) = TokenService::extract_bearer(req.headers()) else {
        tracing::debug!(target: "auth.middleware", "Missing or malformed Authorization header");
        return Err(AuthError::InvalidToken(
            "Missing or malformed Authorization header".to_string(),
        ));
    };

    if !state.token_service.is_valid(Some(token)) {
        return Err(AuthError::InvalidToken(
            "The session token is invalid or expired".to_string(),
        ));
    }

    let token = SessionToken(token.to_string());
    req.extensions_mut().insert(token);

    Ok(next.run(req).await)
}
