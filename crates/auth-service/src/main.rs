use auth_service::config::Config;
use auth_service::routes::{self, AppState};
use auth_service::services::{HttpUserDirectory, SuapClient, TokenService};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting campus auth service");

    // Load configuration
    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!("Configuration loaded successfully");

    // Construct collaborators
    let login_provider = SuapClient::new(config.suap_base_url.clone())?;
    let user_directory = HttpUserDirectory::new(config.user_directory_url.clone())?;

    let state = Arc::new(AppState {
        token_service: TokenService::new(config.jwt.clone()),
        login_provider: Arc::new(login_provider),
        user_directory: Arc::new(user_directory),
    });

    // Build application routes
    let app = routes::build_routes(state);

    let addr: SocketAddr = config.bind_address.parse().map_err(|e| {
        error!("Invalid bind address: {}", e);
        e
    })?;

    info!("Auth service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
