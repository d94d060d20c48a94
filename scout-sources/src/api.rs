//! Structured profile API source
//!
//! Queries the public `web_profile_info` endpoint and maps its JSON
//! `data.user` object into a record.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use scout_core::{Identifier, ProfileRecord};
use scout_net::fetch_text_with_headers;

use crate::{payload::RawUser, ProfileSource, SourceEndpoints, SourceError};

#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    data: Option<ApiData>,
}

#[derive(Debug, Deserialize)]
struct ApiData {
    user: Option<RawUser>,
}

/// Primary data source backed by the JSON profile API
pub struct ApiSource {
    client: Client,
    base_url: String,
    app_id: String,
    timeout: Duration,
}

impl ApiSource {
    pub fn new(client: Client, endpoints: &SourceEndpoints, timeout: Duration) -> Self {
        Self {
            client,
            base_url: endpoints.api_base.trim_end_matches('/').to_string(),
            app_id: endpoints.api_app_id.clone(),
            timeout,
        }
    }

    fn profile_url(&self, identifier: &Identifier) -> String {
        format!(
            "{}/api/v1/users/web_profile_info/?username={}",
            self.base_url,
            urlencoding::encode(identifier.as_str())
        )
    }
}

/// Map an API response body into a record
pub fn parse_api_response(body: &str) -> Result<ProfileRecord, SourceError> {
    let envelope: ApiEnvelope = serde_json::from_str(body)?;
    let data = envelope.data.ok_or(SourceError::MissingPayload)?;
    let user = data.user.ok_or(SourceError::NotFound)?;
    Ok(user.into_record())
}

#[async_trait]
impl ProfileSource for ApiSource {
    fn name(&self) -> &str {
        "api"
    }

    async fn fetch_profile(&self, identifier: &Identifier) -> Result<ProfileRecord, SourceError> {
        let url = self.profile_url(identifier);
        let body = fetch_text_with_headers(
            &self.client,
            &url,
            self.timeout,
            &[("x-ig-app-id", self.app_id.as_str()), ("accept", "application/json")],
        )
        .await
        .map_err(SourceError::from_fetch)?;

        let record = parse_api_response(&body)?;
        debug!("API source resolved {}", identifier);
        Ok(record)
    }
}
