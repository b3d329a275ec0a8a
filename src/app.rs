use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes;
use crate::service::StatsService;

#[derive(Clone)]
pub struct AppState {
    pub stats: Arc<StatsService>,
}

/// Build the service router with its CORS and tracing layers.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration: any origin may call the read endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/nba-api/teams", get(routes::teams::get_teams))
        .route(
            "/nba-api/players/search",
            get(routes::players::search_players),
        )
        .route("/nba-api/health", get(routes::health::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
