//! Response composition
//!
//! Renders a profile and its mined contacts as plain text, then splits the
//! result into chunks the chat transport can deliver.

use std::fmt::Write;

use crate::{replies, ContactBundle, Identifier, ProfileRecord};

/// Maximum characters per outgoing message
pub const CHUNK_LIMIT: usize = 4000;

/// Maximum biography characters shown before the ellipsis
pub const BIO_LIMIT: usize = 500;

/// Maximum bio social handles listed
pub const MAX_SOCIAL_HANDLES: usize = 5;

/// Limits applied while composing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeLimits {
    pub chunk_limit: usize,
    pub bio_limit: usize,
    pub max_social_handles: usize,
}

impl Default for ComposeLimits {
    fn default() -> Self {
        Self {
            chunk_limit: CHUNK_LIMIT,
            bio_limit: BIO_LIMIT,
            max_social_handles: MAX_SOCIAL_HANDLES,
        }
    }
}

/// Compose the full reply and split it into chunks
pub fn compose(
    profile: &ProfileRecord,
    bio_contacts: &ContactBundle,
    website_contacts: &ContactBundle,
    identifier: &Identifier,
    limits: &ComposeLimits,
) -> Vec<String> {
    let body = compose_body(profile, bio_contacts, website_contacts, identifier, limits);
    chunk(&body, limits.chunk_limit)
}

/// Render the unsplit reply body
pub fn compose_body(
    profile: &ProfileRecord,
    bio_contacts: &ContactBundle,
    website_contacts: &ContactBundle,
    identifier: &Identifier,
    limits: &ComposeLimits,
) -> String {
    let mut out = String::from("📱 Instagram Profile Info\n\n");

    let username = if profile.username.is_empty() {
        identifier.as_str()
    } else {
        profile.username.as_str()
    };
    let _ = writeln!(out, "Username: @{username}");

    if !profile.full_name.is_empty() {
        let _ = writeln!(out, "👤 Name: {}", profile.full_name);
    }
    if let Some(n) = profile.followers {
        let _ = writeln!(out, "👥 Followers: {}", thousands(n));
    }
    if let Some(n) = profile.following {
        let _ = writeln!(out, "🔄 Following: {}", thousands(n));
    }
    if let Some(n) = profile.posts {
        let _ = writeln!(out, "📸 Posts: {}", thousands(n));
    }
    if !profile.biography.is_empty() {
        let _ = writeln!(out, "📝 Bio: {}", truncate(&profile.biography, limits.bio_limit));
    }
    if let Some(url) = profile.website() {
        let _ = writeln!(out, "🔗 Website: {url}");
    }
    if let Some(category) = profile.category.as_deref().filter(|c| !c.is_empty()) {
        let _ = writeln!(out, "💼 Category: {category}");
    }

    let mut status = vec![if profile.is_private { "🔒 Private" } else { "🔓 Public" }];
    if profile.is_verified {
        status.push("✅ Verified");
    }
    let _ = writeln!(out, "\nStatus: {}", status.join(" | "));

    let _ = write!(
        out,
        "\n{}",
        contact_section(bio_contacts, website_contacts, limits.max_social_handles)
    );
    let _ = write!(out, "\n🔗 Profile URL: {}", identifier.profile_url());

    out
}

/// Contact lines for bio and website, or the "nothing found" notice
pub fn contact_section(
    bio: &ContactBundle,
    website: &ContactBundle,
    max_social_handles: usize,
) -> String {
    let has_bio = !bio.is_empty();
    let has_website = !website.emails.is_empty() || !website.phones.is_empty();

    if !has_bio && !has_website {
        return replies::NO_CONTACTS.to_string();
    }

    let mut out = String::new();

    if has_bio {
        out.push_str("📞 Contact Information from Bio:\n");
        push_list(&mut out, "📧 Emails:", &bio.emails);
        push_list(&mut out, "📱 Phones:", &bio.phones);
        let handles: Vec<String> = bio
            .social_handles
            .iter()
            .take(max_social_handles)
            .cloned()
            .collect();
        push_list(&mut out, "💬 Social Handles:", &handles);
    }

    if has_website {
        if has_bio {
            out.push('\n');
        }
        out.push_str("🌐 Contact Information from Website:\n");
        push_list(&mut out, "📧 Website Emails:", &website.emails);
        push_list(&mut out, "📱 Website Phones:", &website.phones);
    }

    out
}

fn push_list(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(heading);
    out.push('\n');
    for item in items {
        let _ = writeln!(out, "   • {item}");
    }
}

/// Split into consecutive slices of `limit` characters.
///
/// Purely length-based: may cut mid-line or mid-word.
pub fn chunk(body: &str, limit: usize) -> Vec<String> {
    if limit == 0 || body.chars().count() <= limit {
        return vec![body.to_string()];
    }

    let chars: Vec<char> = body.chars().collect();
    chars
        .chunks(limit)
        .map(|slice| slice.iter().collect())
        .collect()
}

/// Format with `,` thousands separators
fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
