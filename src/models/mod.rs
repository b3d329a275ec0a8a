use serde::{Deserialize, Serialize};

/// Team entry as served by `/nba-api/teams`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub abbreviation: String,
    pub full_name: String,
}

impl Team {
    /// Sentinel team attached to every player search result. The upstream
    /// player dataset carries no current-team information, so the service
    /// serves this placeholder instead of a roster lookup.
    pub fn unknown() -> Self {
        Team {
            id: 0,
            abbreviation: "UNK".to_string(),
            full_name: "Unknown Team".to_string(),
        }
    }
}

/// Draft year served for every search result. The upstream dataset does
/// not expose the real one.
pub const PLACEHOLDER_DRAFT_YEAR: i64 = 2010;

/// Player entry as served by `/nba-api/players/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSearchResult {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub team: Team,
    pub draft_year: i64,
}
