//! Ordered fallback over profile data sources

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use scout_core::{Identifier, ProfileRecord};

use crate::{ApiSource, MarkupSource, ProfileSource, SourceError};

/// Base URLs and headers for the built-in sources
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceEndpoints {
    /// Host serving the JSON profile API
    pub api_base: String,
    /// Host serving public profile pages
    pub web_base: String,
    /// Application id header the API expects
    pub api_app_id: String,
}

impl Default for SourceEndpoints {
    fn default() -> Self {
        Self {
            api_base: "https://i.instagram.com".to_string(),
            web_base: "https://www.instagram.com".to_string(),
            api_app_id: "936619743392459".to_string(),
        }
    }
}

/// Why no source produced a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Every source reported the account missing
    #[error("profile not found")]
    NotFound,

    /// At least one source failed for another reason
    #[error("profile unavailable")]
    Unavailable,
}

/// Tries each source in order until one returns a profile
pub struct ProfileFetcher {
    sources: Vec<Box<dyn ProfileSource>>,
}

impl ProfileFetcher {
    pub fn new(sources: Vec<Box<dyn ProfileSource>>) -> Self {
        Self { sources }
    }

    /// API source first, page scraping as fallback
    pub fn standard(client: Client, endpoints: &SourceEndpoints, timeout: Duration) -> Self {
        Self::new(vec![
            Box::new(ApiSource::new(client.clone(), endpoints, timeout)),
            Box::new(MarkupSource::new(client, endpoints, timeout)),
        ])
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub async fn fetch(&self, identifier: &Identifier) -> Result<ProfileRecord, FetchError> {
        let mut all_not_found = !self.sources.is_empty();

        for source in &self.sources {
            match source.fetch_profile(identifier).await {
                Ok(record) => {
                    info!("Resolved {} via {} source", identifier, source.name());
                    return Ok(record);
                }
                Err(SourceError::NotFound) => {
                    info!("{} source: {} not found", source.name(), identifier);
                }
                Err(e) => {
                    warn!("{} source failed for {}: {}", source.name(), identifier, e);
                    all_not_found = false;
                }
            }
        }

        if all_not_found {
            Err(FetchError::NotFound)
        } else {
            Err(FetchError::Unavailable)
        }
    }
}
