use thiserror::Error;

/// Failure talking to the external sports-data provider.
///
/// Handlers never surface these to clients: fetch failures collapse to
/// an empty JSON array with a 200 status plus an error log line.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(reqwest::StatusCode),
}
