//! Common traits for profile data sources

use async_trait::async_trait;
use scout_core::{Identifier, ProfileRecord};
use scout_net::NetError;
use thiserror::Error;

/// Errors from a single data source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] NetError),

    #[error("Profile not found")]
    NotFound,

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No profile payload in response")]
    MissingPayload,
}

impl SourceError {
    /// Map a retrieval error, treating HTTP 404 as a missing account
    pub fn from_fetch(err: NetError) -> Self {
        match err {
            NetError::Status { status: 404, .. } => SourceError::NotFound,
            other => SourceError::Network(other),
        }
    }
}

/// Common interface for profile data sources
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Source name for logging
    fn name(&self) -> &str;

    /// Look up one profile and map it into a [`ProfileRecord`]
    async fn fetch_profile(&self, identifier: &Identifier) -> Result<ProfileRecord, SourceError>;
}
