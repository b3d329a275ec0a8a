use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{PlayerRecord, SportsDataProvider, TeamRecord};
use crate::error::ProviderError;

/// reqwest-backed provider talking to the upstream dataset host.
///
/// No timeout and no retry at this layer: a hanging upstream call hangs
/// the request that triggered it.
pub struct HttpStatsProvider {
    client: Client,
    base_url: String,
}

impl HttpStatsProvider {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl SportsDataProvider for HttpStatsProvider {
    async fn list_teams(&self) -> Result<Vec<TeamRecord>, ProviderError> {
        self.get_json("/teams").await
    }

    async fn list_players(&self) -> Result<Vec<PlayerRecord>, ProviderError> {
        self.get_json("/players").await
    }
}
