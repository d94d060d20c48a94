//! Profile identifier normalization
//!
//! Turns free-form user input (profile URLs, `@handle`, bare handles) into a
//! canonical handle.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// A bare profile handle, constrained to `[A-Za-z0-9_.]+`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical profile URL for this handle
    pub fn profile_url(&self) -> String {
        format!("https://www.instagram.com/{}/", self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Tried in this order; the first match wins.
static URL_WITH_SLASH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"instagram\.com/([A-Za-z0-9_.]+)(?:/|$)").unwrap()
});

static URL_WITH_QUERY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"instagram\.com/([A-Za-z0-9_.]+)\?").unwrap()
});

static BARE_HANDLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_.]+)$").unwrap()
});

/// Extract a handle from raw user input.
///
/// Strips every `@`, then tries a profile URL ending in `/` or end of input,
/// a profile URL followed by a query string, and finally the whole input as
/// a bare handle. Returns `None` when nothing matches.
pub fn normalize(raw: &str) -> Option<Identifier> {
    let text = raw.trim().replace('@', "");

    [&*URL_WITH_SLASH_REGEX, &*URL_WITH_QUERY_REGEX, &*BARE_HANDLE_REGEX]
        .iter()
        .find_map(|re| re.captures(&text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .and_then(|handle| handle.split(['/', '?']).next())
        .filter(|handle| !handle.is_empty())
        .map(|handle| Identifier(handle.to_string()))
}
