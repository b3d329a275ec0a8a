use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::app::AppState;
use crate::models::PlayerSearchResult;

/// Queries shorter than this never reach the search service.
const MIN_QUERY_CHARS: usize = 2;

// Query parameters for searching players
#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    name: String,
}

// GET /nba-api/players/search?name=LeBron - Search players by name
pub async fn search_players(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<PlayerSearchResult>> {
    if params.name.chars().count() < MIN_QUERY_CHARS {
        return Json(Vec::new());
    }

    match state.stats.search_players(&params.name).await {
        Ok(results) => Json(results),
        Err(e) => {
            tracing::error!("Failed to search players: {}", e);
            Json(Vec::new())
        }
    }
}
