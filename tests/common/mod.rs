use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use nba_api_alternative::app::{create_router, AppState};
use nba_api_alternative::error::ProviderError;
use nba_api_alternative::provider::{PlayerRecord, SportsDataProvider, TeamRecord};
use nba_api_alternative::service::StatsService;

pub fn team_record(id: i64, abbreviation: &str, full_name: &str) -> TeamRecord {
    TeamRecord {
        id,
        abbreviation: abbreviation.to_string(),
        full_name: full_name.to_string(),
        city: None,
        state: None,
        year_founded: None,
    }
}

pub fn player_record(id: i64, first_name: &str, last_name: &str) -> PlayerRecord {
    PlayerRecord {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        is_active: Some(true),
    }
}

pub fn fixture_teams() -> Vec<TeamRecord> {
    vec![
        team_record(2, "BOS", "Boston Celtics"),
        team_record(10, "GSW", "Golden State Warriors"),
        team_record(14, "LAL", "Los Angeles Lakers"),
    ]
}

pub fn fixture_players() -> Vec<PlayerRecord> {
    vec![
        player_record(1001, "LeBron", "James"),
        player_record(1002, "Anthony", "Davis"),
        player_record(1004, "Stephen", "Curry"),
        player_record(1010, "Kyrie", "Irving"),
        player_record(1013, "Giannis", "Antetokounmpo"),
    ]
}

/// Canned provider that counts dataset accesses and can be told to fail
/// its next N calls before serving data again.
pub struct MockProvider {
    teams: Vec<TeamRecord>,
    players: Vec<PlayerRecord>,
    team_calls: AtomicUsize,
    player_calls: AtomicUsize,
    failures_remaining: AtomicUsize,
}

impl MockProvider {
    pub fn new() -> Arc<Self> {
        Self::with_data(fixture_teams(), fixture_players())
    }

    pub fn with_data(teams: Vec<TeamRecord>, players: Vec<PlayerRecord>) -> Arc<Self> {
        Arc::new(Self {
            teams,
            players,
            team_calls: AtomicUsize::new(0),
            player_calls: AtomicUsize::new(0),
            failures_remaining: AtomicUsize::new(0),
        })
    }

    pub fn failing_first(failures: usize) -> Arc<Self> {
        let provider = Self::new();
        provider.failures_remaining.store(failures, Ordering::SeqCst);
        provider
    }

    pub fn team_calls(&self) -> usize {
        self.team_calls.load(Ordering::SeqCst)
    }

    pub fn player_calls(&self) -> usize {
        self.player_calls.load(Ordering::SeqCst)
    }

    fn take_failure(&self) -> bool {
        self.failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl SportsDataProvider for MockProvider {
    async fn list_teams(&self) -> Result<Vec<TeamRecord>, ProviderError> {
        self.team_calls.fetch_add(1, Ordering::SeqCst);
        if self.take_failure() {
            return Err(ProviderError::Status(
                reqwest::StatusCode::SERVICE_UNAVAILABLE,
            ));
        }
        Ok(self.teams.clone())
    }

    async fn list_players(&self) -> Result<Vec<PlayerRecord>, ProviderError> {
        self.player_calls.fetch_add(1, Ordering::SeqCst);
        if self.take_failure() {
            return Err(ProviderError::Status(
                reqwest::StatusCode::SERVICE_UNAVAILABLE,
            ));
        }
        Ok(self.players.clone())
    }
}

/// Router plus the mock provider behind it, for endpoint-level tests.
pub struct TestApp {
    router: Router,
    pub provider: Arc<MockProvider>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_provider(MockProvider::new())
    }

    pub fn with_provider(provider: Arc<MockProvider>) -> Self {
        let state = AppState {
            stats: Arc::new(StatsService::new(provider.clone())),
        };

        Self {
            router: create_router(state),
            provider,
        }
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .uri(uri)
            .header("origin", "http://grid.example")
            .body(Body::empty())
            .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn body_json<T: DeserializeOwned>(response: Response<Body>) -> T {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }
}
