use crate::results::DeviceType;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the search API key
pub const SERP_KEY_VAR: &str = "SERP_KEY";

/// Environment variable holding the search API query endpoint
pub const SERP_QUERY_URL_VAR: &str = "SERP_QUERY_URL";

/// Errors raised while loading configuration. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
    #[error("environment variable {0} is empty")]
    EmptyVar(&'static str),
    #[error("invalid search endpoint {url}: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Credentials and endpoint of the search results API
#[derive(Debug, Clone)]
pub struct SerpApiConfig {
    /// API key sent as the `api_key` query parameter
    pub api_key: String,

    /// Endpoint queried with `GET ?api_key=..&q=site:<url>&device=..`
    pub query_url: String,
}

impl SerpApiConfig {
    pub fn new(api_key: impl Into<String>, query_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            query_url: query_url.into(),
        }
    }

    /// Load credentials from `SERP_KEY` and `SERP_QUERY_URL`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = required(&lookup, SERP_KEY_VAR)?;
        let query_url = required(&lookup, SERP_QUERY_URL_VAR)?;

        url::Url::parse(&query_url).map_err(|source| ConfigError::InvalidEndpoint {
            url: query_url.clone(),
            source,
        })?;

        Ok(Self { api_key, query_url })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Err(ConfigError::MissingVar(name)),
        Some(value) if value.trim().is_empty() => Err(ConfigError::EmptyVar(name)),
        Some(value) => Ok(value),
    }
}

/// Options for one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Maximum number of URLs analyzed per run
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// User-Agent sent with page requests; some origins block non-browser clients
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Device the search results are requested for
    #[serde(default)]
    pub device: DeviceType,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            user_agent: default_user_agent(),
            device: DeviceType::default(),
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut contents = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut contents))
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Default value for limit
fn default_limit() -> usize {
    50
}

/// Default value for user_agent
fn default_user_agent() -> String {
    "Mozilla/5.0 (Linux; Android 12; SM-S906N Build/QP1A.190711.020; wv) AppleWebKit/537.36 \
     (KHTML, like Gecko) Version/4.0 Chrome/80.0.3987.119 Mobile Safari/537.36"
        .to_string()
}
