//! Request pipeline
//!
//! One call per incoming message:
//! - Normalize the identifier
//! - Fetch the profile (primary source, then fallback)
//! - Mine the bio and, when linked, the website
//! - Compose and chunk the reply
//!
//! Every outcome is one of the fixed reply texts or a composed profile.

use futures::FutureExt;
use reqwest::Client;
use std::panic::AssertUnwindSafe;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use scout_core::{compose, mine, normalize, replies, unescape, ContactBundle};
use scout_net::{create_client, fetch_website_contacts, NetError};
use scout_sources::{FetchError, ProfileFetcher};

use crate::ScoutConfig;

/// Explicit per-process handles shared by every request
#[derive(Debug, Clone)]
pub struct ScoutContext {
    pub client: Client,
    pub config: ScoutConfig,
}

impl ScoutContext {
    pub fn new(config: ScoutConfig) -> Result<Self, NetError> {
        let client = create_client(&config.http)?;
        Ok(Self { client, config })
    }
}

/// Outcome of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    InvalidInput,
    Unavailable(FetchError),
    Private,
    Profile(Vec<String>),
    Failed,
}

impl Reply {
    pub fn into_chunks(self) -> Vec<String> {
        match self {
            Reply::InvalidInput => vec![replies::INVALID_INPUT.to_string()],
            Reply::Unavailable(_) => vec![replies::FETCH_FAILED.to_string()],
            Reply::Private => vec![replies::PRIVATE_PROFILE.to_string()],
            Reply::Profile(chunks) => chunks,
            Reply::Failed => vec![replies::GENERIC_ERROR.to_string()],
        }
    }
}

/// The lookup pipeline
pub struct Scout {
    ctx: ScoutContext,
    fetcher: ProfileFetcher,
}

impl Scout {
    /// Pipeline with the standard API-then-markup sources
    pub fn new(ctx: ScoutContext) -> Self {
        let fetcher = ProfileFetcher::standard(
            ctx.client.clone(),
            &ctx.config.endpoints,
            ctx.config.http.profile_timeout(),
        );
        Self { ctx, fetcher }
    }

    pub fn with_fetcher(ctx: ScoutContext, fetcher: ProfileFetcher) -> Self {
        Self { ctx, fetcher }
    }

    /// Answer one message with the chunks to send back, in order
    pub async fn respond(&self, input: &str) -> Vec<String> {
        self.handle(input).await.into_chunks()
    }

    /// Run the pipeline, mapping any unexpected fault to [`Reply::Failed`]
    pub async fn handle(&self, input: &str) -> Reply {
        let span = info_span!("request", id = %Uuid::new_v4());

        async {
            match AssertUnwindSafe(self.run(input)).catch_unwind().await {
                Ok(reply) => reply,
                Err(panic) => {
                    let reason = panic
                        .downcast_ref::<&str>()
                        .map(|s| s.to_string())
                        .or_else(|| panic.downcast_ref::<String>().cloned())
                        .unwrap_or_else(|| "unknown panic".to_string());
                    error!("Error processing request: {}", reason);
                    Reply::Failed
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn run(&self, input: &str) -> Reply {
        let Some(identifier) = normalize(input) else {
            info!("Input is not a profile URL or handle");
            return Reply::InvalidInput;
        };

        info!("Looking up {}", identifier);

        let profile = match self.fetcher.fetch(&identifier).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!("Could not fetch {}: {}", identifier, e);
                return Reply::Unavailable(e);
            }
        };

        if profile.is_private {
            info!("{} is private, skipping contact mining", identifier);
            return Reply::Private;
        }

        let bio_contacts = mine(Some(unescape(&profile.biography).as_str()));

        let website_contacts = match profile.website() {
            Some(url) => {
                fetch_website_contacts(&self.ctx.client, url, &self.ctx.config.website_options()).await
            }
            None => ContactBundle::default(),
        };

        let chunks = compose(
            &profile,
            &bio_contacts,
            &website_contacts,
            &identifier,
            &self.ctx.config.compose_limits(),
        );

        info!(
            "Composed reply for {} in {} chunk(s)",
            identifier,
            chunks.len()
        );
        Reply::Profile(chunks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_replies() {
        assert_eq!(Reply::InvalidInput.into_chunks(), vec![replies::INVALID_INPUT]);
        assert_eq!(
            Reply::Unavailable(FetchError::NotFound).into_chunks(),
            Reply::Unavailable(FetchError::Unavailable).into_chunks()
        );
        assert_eq!(Reply::Private.into_chunks(), vec![replies::PRIVATE_PROFILE]);
        assert_eq!(Reply::Failed.into_chunks(), vec![replies::GENERIC_ERROR]);
    }

    #[tokio::test]
    async fn test_invalid_input_needs_no_network() {
        let ctx = ScoutContext::new(ScoutConfig::default()).unwrap();
        let scout = Scout::with_fetcher(ctx, ProfileFetcher::new(Vec::new()));
        assert_eq!(scout.handle("!!!").await, Reply::InvalidInput);
        assert_eq!(scout.respond("").await, vec![replies::INVALID_INPUT]);
    }
}
