//! Configuration types.

use std::net::SocketAddr;
use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Default Hugging Face Inference API base.
pub const DEFAULT_HF_API_BASE: &str = "https://api-inference.huggingface.co/models";
/// Default generative model.
pub const DEFAULT_GENERATION_MODEL: &str = "google/flan-t5-small";
/// Default sentiment model.
pub const DEFAULT_SENTIMENT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// Load from `QUERY_ROUTER_HOST` / `QUERY_ROUTER_PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let host = std::env::var("QUERY_ROUTER_HOST").unwrap_or(defaults.host);
        let port = parse_env("QUERY_ROUTER_PORT")?.unwrap_or(defaults.port);
        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                key: "QUERY_ROUTER_HOST".to_string(),
                message: format!("{}: {}", self.host, e),
            })
    }
}

/// Model collaborator configuration.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Inference API base URL; model ids are appended as path segments.
    pub api_base: String,
    /// Bearer token, if the endpoint needs one.
    pub api_token: Option<SecretString>,
    pub generation_model: String,
    pub sentiment_model: String,
    /// Transport timeout for a single model call. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_HF_API_BASE.to_string(),
            api_token: None,
            generation_model: DEFAULT_GENERATION_MODEL.to_string(),
            sentiment_model: DEFAULT_SENTIMENT_MODEL.to_string(),
            timeout: None,
        }
    }
}

impl ModelConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let api_base = std::env::var("HF_API_BASE")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base);
        let api_token = std::env::var("HF_API_TOKEN")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(SecretString::from);
        let generation_model =
            std::env::var("QUERY_ROUTER_GENERATION_MODEL").unwrap_or(defaults.generation_model);
        let sentiment_model =
            std::env::var("QUERY_ROUTER_SENTIMENT_MODEL").unwrap_or(defaults.sentiment_model);
        let timeout = parse_env::<u64>("QUERY_ROUTER_MODEL_TIMEOUT_SECS")?.map(Duration::from_secs);

        Ok(Self {
            api_base,
            api_token,
            generation_model,
            sentiment_model,
            timeout,
        })
    }
}

/// Full service configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub models: ModelConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            models: ModelConfig::from_env()?,
        })
    }
}

/// Read and parse an optional env var. Unset is `Ok(None)`; unparseable is an error.
fn parse_env<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{:?}: {}", raw, e),
            }),
        Err(_) => Ok(None),
    }
}
