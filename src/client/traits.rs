use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Earthquake;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid feed url: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    Http(u16),
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Anything that can turn a feed URL into a list of earthquakes.
///
/// `fetch` is the lenient entry point used by the UI: failures are logged and
/// come back as an empty list.
#[async_trait]
pub trait QuakeSource: Send + Sync {
    async fn try_fetch(&self, url: &str) -> FetchResult<Vec<Earthquake>>;

    async fn fetch(&self, url: &str) -> Vec<Earthquake> {
        match self.try_fetch(url).await {
            Ok(quakes) => quakes,
            Err(e) => {
                tracing::error!(url, error = %e, "feed fetch failed");
                vec![]
            }
        }
    }
}
