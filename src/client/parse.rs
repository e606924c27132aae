use serde::{Deserialize, Deserializer};

use super::{FetchError, FetchResult};
use crate::domain::Earthquake;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Properties {
    mag: Option<f64>,
    #[serde(default, deserialize_with = "present")]
    place: Option<Option<String>>,
    time: Option<i64>,
    #[serde(default, deserialize_with = "present")]
    url: Option<Option<String>>,
}

/// Distinguishes an absent key (`None`) from an explicit `null` (`Some(None)`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Parses a GeoJSON `FeatureCollection` body. Only a broken top level is an
/// error; individual features that don't fit are dropped.
pub fn parse_feature_collection(body: &str) -> FetchResult<Vec<Earthquake>> {
    if body.trim().is_empty() {
        return Err(FetchError::Parse("feed payload is empty".to_string()));
    }
    let root: serde_json::Value = serde_json::from_str(body)?;
    if !root.is_object() {
        return Err(FetchError::Parse("feed payload is not an object".to_string()));
    }
    let collection: FeatureCollection = serde_json::from_value(root)?;

    let total = collection.features.len();
    let quakes: Vec<Earthquake> = collection
        .features
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match earthquake_from_feature(value) {
            Ok(quake) => Some(quake),
            Err(reason) => {
                tracing::debug!(index, %reason, "skipping feature");
                None
            }
        })
        .collect();

    if quakes.len() < total {
        tracing::debug!(kept = quakes.len(), total, "dropped malformed features");
    }
    Ok(quakes)
}

fn earthquake_from_feature(value: serde_json::Value) -> Result<Earthquake, String> {
    let feature: Feature = serde_json::from_value(value).map_err(|e| e.to_string())?;
    let props = feature.properties;

    let magnitude = props.mag.ok_or("missing mag")?;
    let time_ms = props.time.ok_or("missing time")?;
    if time_ms < 0 {
        return Err(format!("negative time {}", time_ms));
    }
    let location = props.place.ok_or("missing place")?.unwrap_or_default();
    let detail_url = props.url.ok_or("missing url")?.unwrap_or_default();

    Ok(Earthquake {
        magnitude,
        location,
        time_ms,
        detail_url,
    })
}
