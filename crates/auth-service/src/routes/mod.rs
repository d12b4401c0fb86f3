//! HTTP routes for the auth service.
//!
//! Defines the Axum router and application state.

use crate::handlers;
use crate::middleware;
use crate::services::{LoginProvider, TokenService, UserDirectory};
use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Application state shared across all handlers.
///
/// Collaborators are injected at construction; there is no ambient wiring.
pub struct AppState {
    /// Session token issuance and validation.
    pub token_service: TokenService,

    /// External credential check (SUAP).
    pub login_provider: Arc<dyn LoginProvider>,

    /// Campus user directory.
    pub user_directory: Arc<dyn UserDirectory>,
}

/// Build the application routes.
///
/// - `POST /api/login` - credential check and session token issuance
/// - `POST /api/isValidToken` - legacy token check
/// - `GET /api/me` - identity claims of the Bearer token (protected)
/// - `GET /health` - liveness probe
pub fn build_routes(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route("/api/me", get(handlers::me::get_me))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .route("/api/login", post(handlers::auth_handler::handle_login))
        .route(
            "/api/isValidToken",
            post(handlers::auth_handler::handle_is_valid_token),
        )
        .merge(protected)
        .route("/health", get(health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
}

async fn health_check() -> &'static str {
    "OK"
}
