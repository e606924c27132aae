use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

use crate::client::query::{DEFAULT_ENDPOINT, DEFAULT_LIMIT, DEFAULT_MIN_MAGNITUDE};
use crate::client::usgs::DEFAULT_TIMEOUT;
use crate::client::FeedQuery;

#[derive(Parser, Debug, Default)]
#[command(name = "quakes", about = "Terminal viewer for the USGS earthquake feed")]
pub struct Cli {
    /// USGS event query endpoint
    #[arg(long, env = "QUAKES_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Full feed URL; overrides the endpoint and query options
    #[arg(long, env = "QUAKES_FEED_URL")]
    pub feed_url: Option<String>,

    /// Minimum magnitude to request
    #[arg(long, env = "QUAKES_MIN_MAGNITUDE")]
    pub min_magnitude: Option<f64>,

    /// Maximum number of events to request
    #[arg(long, env = "QUAKES_LIMIT")]
    pub limit: Option<u32>,

    /// Connect and read timeout in seconds
    #[arg(long, env = "QUAKES_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Fetch without checking that the feed host resolves first
    #[arg(long)]
    pub skip_connectivity_check: bool,

    /// Print the list to stdout instead of starting the terminal UI
    #[arg(long)]
    pub plain: bool,

    /// Log file path
    #[arg(long, env = "QUAKES_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Config file path (defaults to <config dir>/quakes/config.toml)
    #[arg(long, env = "QUAKES_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid setting: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub endpoint: Option<String>,
    pub feed_url: Option<String>,
    pub min_magnitude: Option<f64>,
    pub limit: Option<u32>,
    pub timeout: Option<u64>,
    pub skip_connectivity_check: Option<bool>,
}

impl ConfigFile {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("quakes").join("config.toml"))
    }

    /// Loads the file at `path`. A missing file is an empty config.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Effective settings after merging CLI/env, the config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub query: FeedQuery,
    pub feed_url: String,
    pub timeout: Duration,
    pub check_connectivity: bool,
    pub plain: bool,
}

impl Settings {
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match cli.config.clone().or_else(ConfigFile::default_path) {
            Some(path) => ConfigFile::load_from(&path)?,
            None => ConfigFile::default(),
        };
        Self::resolve(cli, file)
    }

    pub fn resolve(cli: &Cli, file: ConfigFile) -> Result<Self, ConfigError> {
        let query = FeedQuery {
            endpoint: cli
                .endpoint
                .clone()
                .or(file.endpoint)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            min_magnitude: cli
                .min_magnitude
                .or(file.min_magnitude)
                .unwrap_or(DEFAULT_MIN_MAGNITUDE),
            limit: cli.limit.or(file.limit).unwrap_or(DEFAULT_LIMIT),
        };
        if !query.min_magnitude.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "min magnitude must be a number, got {}",
                query.min_magnitude
            )));
        }
        if query.limit == 0 {
            return Err(ConfigError::Invalid("limit must be at least 1".to_string()));
        }

        let feed_url = match cli.feed_url.clone().or(file.feed_url) {
            Some(url) if !url.trim().is_empty() => url,
            Some(_) => return Err(ConfigError::Invalid("feed url is empty".to_string())),
            None => query
                .to_url()
                .map_err(|e| ConfigError::Invalid(e.to_string()))?
                .to_string(),
        };

        let timeout = cli
            .timeout
            .or(file.timeout)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::Invalid("timeout must be at least 1s".to_string()));
        }

        let skip_check = cli.skip_connectivity_check || file.skip_connectivity_check.unwrap_or(false);

        Ok(Self {
            query,
            feed_url,
            timeout,
            check_connectivity: !skip_check,
            plain: cli.plain,
        })
    }

    pub fn feed_label(&self) -> String {
        if self.feed_url == self.query.to_url().map(|u| u.to_string()).unwrap_or_default() {
            self.query.describe()
        } else {
            self.feed_url.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_build_usgs_url() {
        let settings = Settings::resolve(&Cli::default(), ConfigFile::default()).expect("settings");
        assert_eq!(
            settings.feed_url,
            "https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson&eventtype=earthquake&orderby=time&minmag=6&limit=20"
        );
        assert_eq!(settings.timeout, Duration::from_secs(15));
        assert!(settings.check_connectivity);
        assert_eq!(settings.feed_label(), "M6+ · last 20");
    }

    #[test]
    fn cli_overrides_file_overrides_defaults() {
        let cli = Cli {
            min_magnitude: Some(4.5),
            ..Cli::default()
        };
        let file = ConfigFile {
            min_magnitude: Some(5.0),
            limit: Some(50),
            timeout: Some(3),
            skip_connectivity_check: Some(true),
            ..ConfigFile::default()
        };
        let settings = Settings::resolve(&cli, file).expect("settings");
        assert_eq!(settings.query.min_magnitude, 4.5);
        assert_eq!(settings.query.limit, 50);
        assert_eq!(settings.timeout, Duration::from_secs(3));
        assert!(!settings.check_connectivity);
        assert!(settings.feed_url.ends_with("minmag=4.5&limit=50"));
    }

    #[test]
    fn explicit_feed_url_wins() {
        let cli = Cli {
            feed_url: Some("http://127.0.0.1:9000/all_day.geojson".to_string()),
            ..Cli::default()
        };
        let settings = Settings::resolve(&cli, ConfigFile::default()).expect("settings");
        assert_eq!(settings.feed_url, "http://127.0.0.1:9000/all_day.geojson");
        assert_eq!(settings.feed_label(), "http://127.0.0.1:9000/all_day.geojson");
    }

    #[test]
    fn invalid_values_are_rejected() {
        let zero_limit = Cli {
            limit: Some(0),
            ..Cli::default()
        };
        assert!(Settings::resolve(&zero_limit, ConfigFile::default()).is_err());

        let empty_url = Cli {
            feed_url: Some("  ".to_string()),
            ..Cli::default()
        };
        assert!(Settings::resolve(&empty_url, ConfigFile::default()).is_err());

        let zero_timeout = Cli {
            timeout: Some(0),
            ..Cli::default()
        };
        assert!(Settings::resolve(&zero_timeout, ConfigFile::default()).is_err());
    }

    #[test]
    fn config_file_loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "min_magnitude = 7.0\nlimit = 5").expect("write");

        let config = ConfigFile::load_from(file.path()).expect("config");
        assert_eq!(config.min_magnitude, Some(7.0));
        assert_eq!(config.limit, Some(5));
    }

    #[test]
    fn missing_config_file_is_empty_and_bad_one_errors() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = ConfigFile::load_from(&dir.path().join("nope.toml")).expect("missing ok");
        assert_eq!(missing, ConfigFile::default());

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "limit = \"many\"").expect("write");
        assert!(matches!(
            ConfigFile::load_from(&bad),
            Err(ConfigError::Parse { .. })
        ));
    }
}
