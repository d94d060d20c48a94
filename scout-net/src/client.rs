//! HTTP client construction and page retrieval
//!
//! One client is built per process and handed to every component; each
//! request carries its own timeout.

use reqwest::{Client, Proxy};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Largest response body read before giving up
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Proxy schemes the client can route through
const PROXY_SCHEMES: &[&str] = &["http", "https", "socks5", "socks5h"];

/// Identifying header sent with every request
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/135.0.0.0 Safari/537.36";

/// HTTP configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header value
    pub user_agent: String,
    /// Timeout for profile source requests, in seconds
    pub profile_timeout_secs: u64,
    /// Timeout for linked website requests, in seconds
    pub website_timeout_secs: u64,
    /// Optional proxy URL (http, https, socks5 or socks5h)
    pub proxy: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            profile_timeout_secs: 10,
            website_timeout_secs: 8,
            proxy: None,
        }
    }
}

impl HttpConfig {
    pub fn profile_timeout(&self) -> Duration {
        Duration::from_secs(self.profile_timeout_secs)
    }

    pub fn website_timeout(&self) -> Duration {
        Duration::from_secs(self.website_timeout_secs)
    }
}

/// Errors from HTTP retrieval
#[derive(Debug, Error)]
pub enum NetError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Response from {url} exceeds {limit} bytes")]
    BodyTooLarge { url: String, limit: usize },
}

/// Create the shared HTTP client
pub fn create_client(config: &HttpConfig) -> Result<Client, NetError> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.profile_timeout().max(config.website_timeout()));

    if let Some(proxy) = &config.proxy {
        builder = builder.proxy(parse_proxy(proxy)?);
    }

    builder
        .build()
        .map_err(|e| NetError::ClientBuild(e.to_string()))
}

/// Only schemes reqwest actually routes through are accepted; anything
/// else would leave requests going out directly.
fn parse_proxy(proxy: &str) -> Result<Proxy, NetError> {
    let url = reqwest::Url::parse(proxy)
        .map_err(|e| NetError::ClientBuild(format!("invalid proxy {proxy}: {e}")))?;

    if !PROXY_SCHEMES.contains(&url.scheme()) {
        return Err(NetError::ClientBuild(format!(
            "unsupported proxy scheme {}",
            url.scheme()
        )));
    }

    Proxy::all(url).map_err(|e| NetError::ClientBuild(e.to_string()))
}

/// Prefix `https://` when the URL carries no http(s) scheme
pub fn with_scheme(url: &str) -> String {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// GET a page body; non-success statuses are errors
pub async fn fetch_text(client: &Client, url: &str, timeout: Duration) -> Result<String, NetError> {
    fetch_text_with_headers(client, url, timeout, &[]).await
}

/// [`fetch_text`] with extra request headers
pub async fn fetch_text_with_headers(
    client: &Client,
    url: &str,
    timeout: Duration,
    headers: &[(&str, &str)],
) -> Result<String, NetError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| NetError::InvalidUrl(format!("{url}: {e}")))?;

    debug!("Fetching: {}", parsed);

    let mut request = client.get(parsed).timeout(timeout);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }

    let mut response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(NetError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    if response
        .content_length()
        .is_some_and(|len| len > MAX_BODY_BYTES as u64)
    {
        return Err(NetError::BodyTooLarge {
            url: url.to_string(),
            limit: MAX_BODY_BYTES,
        });
    }

    // Content-Length may be absent or wrong, so count while reading
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(NetError::BodyTooLarge {
                url: url.to_string(),
                limit: MAX_BODY_BYTES,
            });
        }
        body.extend_from_slice(&chunk);
    }

    Ok(String::from_utf8_lossy(&body).into_owned())
}
