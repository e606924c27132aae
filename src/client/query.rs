use reqwest::Url;

use super::{FetchError, FetchResult};

pub const DEFAULT_ENDPOINT: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";
pub const DEFAULT_MIN_MAGNITUDE: f64 = 6.0;
pub const DEFAULT_LIMIT: u32 = 20;

/// Parameters of a USGS event query.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedQuery {
    pub endpoint: String,
    pub min_magnitude: f64,
    pub limit: u32,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            min_magnitude: DEFAULT_MIN_MAGNITUDE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl FeedQuery {
    pub fn to_url(&self) -> FetchResult<Url> {
        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", self.endpoint, e)))?;
        url.query_pairs_mut()
            .clear()
            .append_pair("format", "geojson")
            .append_pair("eventtype", "earthquake")
            .append_pair("orderby", "time")
            .append_pair("minmag", &self.min_magnitude.to_string())
            .append_pair("limit", &self.limit.to_string());
        Ok(url)
    }

    /// Short label for the title bar, e.g. `M6+ · last 20`.
    pub fn describe(&self) -> String {
        format!("M{}+ · last {}", self.min_magnitude, self.limit)
    }
}
