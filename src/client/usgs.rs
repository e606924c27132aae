use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use super::parse::parse_feature_collection;
use super::{FetchError, FetchResult, QuakeSource};
use crate::domain::Earthquake;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client for the USGS GeoJSON event feed.
#[derive(Debug, Clone)]
pub struct UsgsClient {
    http: reqwest::Client,
}

impl UsgsClient {
    pub fn new(timeout: Duration) -> FetchResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .timeout(timeout.saturating_mul(2))
            .user_agent(concat!("quakes/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl QuakeSource for UsgsClient {
    async fn try_fetch(&self, url: &str) -> FetchResult<Vec<Earthquake>> {
        if url.trim().is_empty() {
            return Err(FetchError::InvalidUrl("empty url".to_string()));
        }
        let url = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

        tracing::info!(%url, "fetching earthquake feed");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status.as_u16()));
        }

        let body = response.text().await?;
        let quakes = parse_feature_collection(&body)?;
        tracing::info!(count = quakes.len(), "earthquake feed loaded");
        Ok(quakes)
    }
}
