use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nba_api_alternative::app::{create_router, AppState};
use nba_api_alternative::config::Config;
use nba_api_alternative::provider::http::HttpStatsProvider;
use nba_api_alternative::service::StatsService;

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting nba-api-alternative server...");

    dotenvy::dotenv().ok();

    let config = Config::from_env();

    let provider = Arc::new(HttpStatsProvider::new(config.upstream_base_url.clone()));
    let state = AppState {
        stats: Arc::new(StatsService::new(provider)),
    };

    let app = create_router(state);

    let addr = SocketAddr::from((config.host, config.port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);
    tracing::info!("  - GET /nba-api/teams");
    tracing::info!("  - GET /nba-api/players/search?name=PLAYER_NAME");
    tracing::info!("  - GET /nba-api/health");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
