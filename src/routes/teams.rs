use axum::{extract::State, response::Json};

use crate::app::AppState;
use crate::models::Team;

// GET /nba-api/teams - List all teams
//
// Upstream failures degrade to an empty array with a 200 status; clients
// cannot tell them apart from an empty dataset.
pub async fn get_teams(State(state): State<AppState>) -> Json<Vec<Team>> {
    match state.stats.list_teams().await {
        Ok(teams) => Json(teams),
        Err(e) => {
            tracing::error!("Failed to fetch teams: {}", e);
            Json(Vec::new())
        }
    }
}
