//! Runtime configuration
//!
//! Every field has a default; an optional TOML file overrides any subset.
//!
//! ```toml
//! [http]
//! profile_timeout_secs = 10
//! website_timeout_secs = 8
//! proxy = "socks5h://127.0.0.1:9050"
//!
//! [response]
//! chunk_limit = 4000
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use scout_core::{ComposeLimits, BIO_LIMIT, CHUNK_LIMIT, MAX_SOCIAL_HANDLES};
use scout_net::{HttpConfig, WebsiteOptions, MAX_WEBSITE_CONTACTS};
use scout_sources::SourceEndpoints;

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Reply formatting limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResponseConfig {
    pub chunk_limit: usize,
    pub bio_limit: usize,
    pub max_social_handles: usize,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            chunk_limit: CHUNK_LIMIT,
            bio_limit: BIO_LIMIT,
            max_social_handles: MAX_SOCIAL_HANDLES,
        }
    }
}

/// Linked-website extraction settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebsiteConfig {
    pub max_per_category: usize,
}

impl Default for WebsiteConfig {
    fn default() -> Self {
        Self {
            max_per_category: MAX_WEBSITE_CONTACTS,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScoutConfig {
    pub http: HttpConfig,
    pub endpoints: SourceEndpoints,
    pub response: ResponseConfig,
    pub website: WebsiteConfig,
}

impl ScoutConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn compose_limits(&self) -> ComposeLimits {
        ComposeLimits {
            chunk_limit: self.response.chunk_limit,
            bio_limit: self.response.bio_limit,
            max_social_handles: self.response.max_social_handles,
        }
    }

    pub fn website_options(&self) -> WebsiteOptions {
        WebsiteOptions {
            timeout: self.http.website_timeout(),
            max_per_category: self.website.max_per_category,
        }
    }
}
