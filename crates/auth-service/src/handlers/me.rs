//! Current user handler.
//!
//! Answers with the identity claims of the presented session token.

use crate::errors::AuthError;
use crate::middleware::auth::SessionToken;
use crate::routes::AppState;
use axum::{extract::State, Extension, Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

/// Response for `GET /api/me`.
#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    /// Numeric user id from the token subject.
    #[serde(rename = "userId")]
    pub user_id: i64,

    /// Login username.
    pub username: String,
}

/// Handler for GET /api/me
///
/// The middleware has already vetted the token, so claim extraction here
/// propagates failures instead of recovering.
#[instrument(skip_all, name = "auth.handlers.me")]
pub async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> Result<Json<MeResponse>, AuthError> {
    let username = state.token_service.get_username(&token)?;
    let user_id = state.token_service.get_user_id(&token)?;

    Ok(Json(MeResponse { user_id, username }))
}
