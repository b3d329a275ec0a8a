use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ProviderError;

pub mod http;

/// Raw team record as shipped by the upstream dataset. Only id,
/// abbreviation and full name survive projection into the served `Team`
/// shape; the rest is tolerated and dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamRecord {
    pub id: i64,
    pub abbreviation: String,
    pub full_name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub year_founded: Option<i64>,
}

/// Raw player record from the upstream static player list.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// The external sports-statistics provider, reduced to the two dataset
/// listings this service consumes. There is no freshness contract:
/// callers cache whatever they get for the lifetime of the process.
#[async_trait]
pub trait SportsDataProvider: Send + Sync {
    async fn list_teams(&self) -> Result<Vec<TeamRecord>, ProviderError>;
    async fn list_players(&self) -> Result<Vec<PlayerRecord>, ProviderError>;
}

pub type ProviderHandle = Arc<dyn SportsDataProvider>;
