use crate::cache::LookupCache;
use crate::error::ProviderError;
use crate::models::{PlayerSearchResult, Team, PLACEHOLDER_DRAFT_YEAR};
use crate::provider::{PlayerRecord, ProviderHandle};

/// Cache key for the team list.
const TEAMS_KEY: &str = "teams";

/// Hard cap on search results; the dataset scan stops once it is reached.
const MAX_SEARCH_RESULTS: usize = 10;

/// Query service over the external datasets: consults the lookup caches,
/// falls back to the provider on a miss, and stores whatever it fetched.
pub struct StatsService {
    provider: ProviderHandle,
    teams: LookupCache<Team>,
    players: LookupCache<PlayerSearchResult>,
}

impl StatsService {
    pub fn new(provider: ProviderHandle) -> Self {
        Self {
            provider,
            teams: LookupCache::new(),
            players: LookupCache::new(),
        }
    }

    /// Full team list, projected down to the served shape.
    ///
    /// Fetched from the provider once and reused for the lifetime of the
    /// process. A fetch failure is returned to the caller and leaves the
    /// cache empty, so the next call retries.
    pub async fn list_teams(&self) -> Result<Vec<Team>, ProviderError> {
        if let Some(teams) = self.teams.get(TEAMS_KEY) {
            return Ok(teams);
        }

        let records = self.provider.list_teams().await?;
        let teams: Vec<Team> = records
            .into_iter()
            .map(|record| Team {
                id: record.id,
                abbreviation: record.abbreviation,
                full_name: record.full_name,
            })
            .collect();

        tracing::debug!(count = teams.len(), "fetched team list from provider");
        self.teams.insert(TEAMS_KEY.to_string(), teams.clone());
        Ok(teams)
    }

    /// Substring search over the upstream player list. Callers are
    /// expected to have rejected queries shorter than two characters.
    ///
    /// Matches are collected in the dataset's own order and truncated at
    /// ten; no ranking happens. Every hit carries the placeholder team
    /// and draft year, since the player dataset has neither.
    pub async fn search_players(
        &self,
        query: &str,
    ) -> Result<Vec<PlayerSearchResult>, ProviderError> {
        let query = query.to_lowercase();
        let cache_key = format!("players_{}", query);

        if let Some(results) = self.players.get(&cache_key) {
            return Ok(results);
        }

        let records = self.provider.list_players().await?;
        let results: Vec<PlayerSearchResult> = records
            .into_iter()
            .filter(|record| matches_query(record, &query))
            .take(MAX_SEARCH_RESULTS)
            .map(|record| PlayerSearchResult {
                id: record.id,
                first_name: record.first_name,
                last_name: record.last_name,
                team: Team::unknown(),
                draft_year: PLACEHOLDER_DRAFT_YEAR,
            })
            .collect();

        tracing::debug!(%query, count = results.len(), "searched player list from provider");
        self.players.insert(cache_key, results.clone());
        Ok(results)
    }
}

/// A player matches when the lowercased query is a substring of the
/// "first last" full name, of the first name, or of the last name, all
/// compared lowercased.
fn matches_query(record: &PlayerRecord, query: &str) -> bool {
    let first = record.first_name.to_lowercase();
    let last = record.last_name.to_lowercase();
    let full_name = format!("{} {}", first, last);

    full_name.contains(query) || first.contains(query) || last.contains(query)
}
