use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // YouTube Data API
    pub youtube_api_key: String,
    pub youtube_api_base_url: String,
    pub region_code: String,
    pub http_timeout: Duration,

    // Web Server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // YouTube Data API
            youtube_api_key: required_env("YOUTUBE_API_KEY")?,
            youtube_api_base_url: env_or_default(
                "YOUTUBE_API_BASE_URL",
                "https://www.googleapis.com/youtube/v3",
            ),
            region_code: env_or_default("YOUTUBE_REGION_CODE", "JP"),
            http_timeout: Duration::from_secs(parse_env_u64("HTTP_TIMEOUT_SECS", 15)?),

            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.youtube_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "YOUTUBE_API_KEY".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.http_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "HTTP_TIMEOUT_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !self.youtube_api_base_url.starts_with("http://")
            && !self.youtube_api_base_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                name: "YOUTUBE_API_BASE_URL".to_string(),
                message: format!("must be an http(s) URL, got '{}'", self.youtube_api_base_url),
            });
        }
        if self.region_code.len() != 2 {
            return Err(ConfigError::InvalidValue {
                name: "YOUTUBE_REGION_CODE".to_string(),
                message: format!("must be a two-letter country code, got '{}'", self.region_code),
            });
        }
        Ok(())
    }

    /// Configuration pointing at a local API endpoint, for tests.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            youtube_api_key: "test-key".to_string(),
            youtube_api_base_url: "http://127.0.0.1:9".to_string(),
            region_code: "JP".to_string(),
            http_timeout: Duration::from_secs(5),
            web_host: "127.0.0.1".to_string(),
            web_port: 0,
        }
    }
}

fn required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}
