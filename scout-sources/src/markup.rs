//! Markup-scraping fallback source
//!
//! Fetches the public profile page and digs the profile out of the JSON
//! payload embedded in one of its scripts.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use serde_json::Value;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

use scout_core::{Identifier, ProfileRecord};
use scout_net::fetch_text;

use crate::{payload::RawUser, ProfileSource, SourceEndpoints, SourceError};

/// Assignment that introduces the embedded payload
pub const SHARED_DATA_MARKER: &str = "window._sharedData = ";

/// Location of the user object inside the payload
const USER_POINTER: &str = "/entry_data/ProfilePage/0/graphql/user";

static SCRIPT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("script").unwrap());

/// Fallback data source that scrapes the profile page
pub struct MarkupSource {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl MarkupSource {
    pub fn new(client: Client, endpoints: &SourceEndpoints, timeout: Duration) -> Self {
        Self {
            client,
            base_url: endpoints.web_base.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    fn profile_url(&self, identifier: &Identifier) -> String {
        format!("{}/{}/", self.base_url, identifier)
    }
}

/// Find the profile in a page's embedded payload.
///
/// Scripts without the marker, or whose payload lacks the user object, are
/// skipped. A payload that is not valid JSON is reported only when no
/// later script yields a profile.
pub fn parse_profile_page(html: &str) -> Result<ProfileRecord, SourceError> {
    let document = Html::parse_document(html);
    let mut last_error = SourceError::MissingPayload;

    for script in document.select(&SCRIPT_SELECTOR) {
        let text: String = script.text().collect();
        let Some((_, payload)) = text.split_once(SHARED_DATA_MARKER) else {
            continue;
        };

        // The payload is followed by `;` and possibly more statements
        let data = match serde_json::Deserializer::from_str(payload)
            .into_iter::<Value>()
            .next()
        {
            Some(Ok(data)) => data,
            Some(Err(e)) => {
                last_error = SourceError::Parse(e);
                continue;
            }
            None => continue,
        };

        let Some(user) = data.pointer(USER_POINTER) else {
            debug!("Embedded payload has no profile object");
            continue;
        };

        let raw: RawUser = serde_json::from_value(user.clone())?;
        return Ok(raw.into_record());
    }

    Err(last_error)
}

#[async_trait]
impl ProfileSource for MarkupSource {
    fn name(&self) -> &str {
        "markup"
    }

    async fn fetch_profile(&self, identifier: &Identifier) -> Result<ProfileRecord, SourceError> {
        let url = self.profile_url(identifier);
        let html = fetch_text(&self.client, &url, self.timeout)
            .await
            .map_err(SourceError::from_fetch)?;

        let record = parse_profile_page(&html)?;
        debug!("Markup source resolved {}", identifier);
        Ok(record)
    }
}
