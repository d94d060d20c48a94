//! Contact details mined from profile text
//!
//! Supports extraction of:
//! - Email addresses
//! - Phone numbers (dashed/dotted, parenthesized, bare 10-digit, international)
//! - Messenger and social handles (Telegram, Whatsapp, Signal, Snapchat, Twitter)

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Emails, phones and social handles found in one piece of text.
///
/// Each collection is duplicate-free (case-sensitive) and keeps first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactBundle {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    /// `"<Platform>: <value>"` labels; always empty for website bundles
    pub social_handles: Vec<String>,
}

impl ContactBundle {
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.phones.is_empty() && self.social_handles.is_empty()
    }

    /// Keep at most `max` entries per category
    pub fn capped(mut self, max: usize) -> Self {
        self.emails.truncate(max);
        self.phones.truncate(max);
        self.social_handles.truncate(max);
        self
    }
}

/// Append `value` unless an identical entry was already seen
pub fn push_unique(values: &mut Vec<String>, seen: &mut HashSet<String>, value: &str) {
    if seen.insert(value.to_string()) {
        values.push(value.to_string());
    }
}

/// Collapse duplicates, keeping the first occurrence
fn dedup<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    for value in values {
        push_unique(&mut out, &mut seen, value);
    }
    out
}

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").unwrap()
});

// Applied independently; matches are unioned.
static PHONE_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // 555-123-4567, 555.123.4567, 5551234567
        r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b",
        // (555) 123-4567
        r"\(\d{3}\)\s*\d{3}[-.]?\d{4}\b",
        r"\b\d{10}\b",
        // +44 20 7946 0958
        r"\+\d{1,3}[-.\s]?\(?\d{1,4}\)?[-.\s]?\d{1,4}[-.\s]?\d{1,9}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// Value syntaxes shared by the platform table
const AT_HANDLE: &str = r"@([A-Za-z0-9_]+)";
const NUMBER_RUN: &str = r"([0-9+()\- ]+)";

/// A platform and the trigger phrases that introduce a handle for it
struct SocialPlatform {
    label: &'static str,
    triggers: &'static [&'static str],
    value: &'static str,
}

static SOCIAL_PLATFORMS: &[SocialPlatform] = &[
    SocialPlatform { label: "Telegram", triggers: &["telegram", "tg"], value: AT_HANDLE },
    SocialPlatform { label: "Whatsapp", triggers: &["whatsapp", "wa"], value: NUMBER_RUN },
    SocialPlatform { label: "Signal", triggers: &["signal"], value: NUMBER_RUN },
    SocialPlatform { label: "Snapchat", triggers: &["snapchat", "snap"], value: AT_HANDLE },
    SocialPlatform { label: "Twitter", triggers: &["twitter", "twt"], value: AT_HANDLE },
];

impl SocialPlatform {
    /// One case-insensitive alternation with a capture group per trigger
    fn pattern(&self) -> String {
        let branches: Vec<String> = self
            .triggers
            .iter()
            .map(|trigger| format!("{}[: ]*{}", regex::escape(trigger), self.value))
            .collect();
        format!("(?i){}", branches.join("|"))
    }
}

static SOCIAL_REGEXES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    SOCIAL_PLATFORMS
        .iter()
        .map(|platform| (platform.label, Regex::new(&platform.pattern()).unwrap()))
        .collect()
});

/// All email-looking substrings, deduplicated
pub fn extract_emails(text: &str) -> Vec<String> {
    dedup(EMAIL_REGEX.find_iter(text).map(|m| m.as_str()))
}

/// Union of every phone pattern's matches, deduplicated
pub fn extract_phones(text: &str) -> Vec<String> {
    dedup(
        PHONE_REGEXES
            .iter()
            .flat_map(|re| re.find_iter(text).map(|m| m.as_str())),
    )
}

/// `"<Platform>: <value>"` labels for every trigger match.
///
/// Only the first non-empty capture of each match is kept.
pub fn extract_social_handles(text: &str) -> Vec<String> {
    let mut labels = Vec::new();
    for (label, re) in SOCIAL_REGEXES.iter() {
        for caps in re.captures_iter(text) {
            let value = caps
                .iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str().trim())
                .find(|v| !v.is_empty());
            if let Some(value) = value {
                labels.push(format!("{label}: {value}"));
            }
        }
    }
    dedup(labels.iter().map(String::as_str))
}

/// Mine a block of text for contact details.
///
/// Empty or absent text yields an empty bundle.
pub fn mine(text: Option<&str>) -> ContactBundle {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return ContactBundle::default(),
    };

    ContactBundle {
        emails: extract_emails(text),
        phones: extract_phones(text),
        social_handles: extract_social_handles(text),
    }
}
