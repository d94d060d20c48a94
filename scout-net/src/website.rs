//! Contact extraction from a profile's linked website
//!
//! Emails come from `mailto:` links and the visible page text; phone
//! numbers only from `tel:` links, since page boilerplate is full of digit
//! runs that look like phones.

use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, warn};

use scout_core::{extract_emails, push_unique, ContactBundle};

use crate::{fetch_text, with_scheme, NetError};

/// Entries kept per category
pub const MAX_WEBSITE_CONTACTS: usize = 3;

static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());

/// Settings for the website pass
#[derive(Debug, Clone, Copy)]
pub struct WebsiteOptions {
    pub timeout: Duration,
    pub max_per_category: usize,
}

impl Default for WebsiteOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(8),
            max_per_category: MAX_WEBSITE_CONTACTS,
        }
    }
}

/// Fetch the linked website and mine it for contacts.
///
/// Never fails: retrieval or parse errors are logged and yield an empty bundle.
pub async fn fetch_website_contacts(
    client: &Client,
    url: &str,
    options: &WebsiteOptions,
) -> ContactBundle {
    match try_fetch_website_contacts(client, url, options).await {
        Ok(bundle) => {
            debug!(
                "Website {} yielded {} emails, {} phones",
                url,
                bundle.emails.len(),
                bundle.phones.len()
            );
            bundle
        }
        Err(e) => {
            warn!("Website contact extraction failed for {}: {}", url, e);
            ContactBundle::default()
        }
    }
}

/// Fallible form of [`fetch_website_contacts`]
pub async fn try_fetch_website_contacts(
    client: &Client,
    url: &str,
    options: &WebsiteOptions,
) -> Result<ContactBundle, NetError> {
    let url = with_scheme(url);
    let html = fetch_text(client, &url, options.timeout).await?;
    Ok(extract_website_contacts(&html).capped(options.max_per_category))
}

/// Mine an HTML document: mailto targets, tel targets and visible-text emails.
///
/// Results are deduplicated in first-seen order but not capped.
pub fn extract_website_contacts(html: &str) -> ContactBundle {
    let document = Html::parse_document(html);

    let mut emails = Vec::new();
    let mut seen_emails = HashSet::new();
    let mut phones = Vec::new();
    let mut seen_phones = HashSet::new();

    for link in document.select(&LINK_SELECTOR) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let href = href.trim();

        if let Some(target) = strip_scheme(href, "mailto:") {
            let email = target.split('?').next().unwrap_or_default().trim();
            if email.contains('@') {
                push_unique(&mut emails, &mut seen_emails, email);
            }
        } else if let Some(target) = strip_scheme(href, "tel:") {
            let phone = target.trim();
            if !phone.is_empty() {
                push_unique(&mut phones, &mut seen_phones, phone);
            }
        }
    }

    for email in extract_emails(&visible_text(&document)) {
        push_unique(&mut emails, &mut seen_emails, &email);
    }

    ContactBundle {
        emails,
        phones,
        social_handles: Vec::new(),
    }
}

/// Case-insensitive scheme strip
fn strip_scheme<'a>(href: &'a str, scheme: &str) -> Option<&'a str> {
    let head = href.get(..scheme.len())?;
    head.eq_ignore_ascii_case(scheme).then(|| &href[scheme.len()..])
}

/// Text of the body, skipping script/style/noscript subtrees
fn visible_text(document: &Html) -> String {
    let mut parts = Vec::new();
    if let Some(body) = document.select(&BODY_SELECTOR).next() {
        push_visible_text(body, &mut parts);
    }
    parts.join(" ")
}

/// Depth-first walk that never enters a hidden element, so no ancestor
/// lookup is needed per text node.
fn push_visible_text<'a>(element: ElementRef<'a>, parts: &mut Vec<&'a str>) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            if !matches!(child_element.value().name(), "script" | "style" | "noscript") {
                push_visible_text(child_element, parts);
            }
        } else if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed);
            }
        }
    }
}
