//! Normalized public profile record

use serde::{Deserialize, Serialize};

/// A profile as returned by any data source.
///
/// Free-text fields (`full_name`, `biography`, `category`) are already
/// sanitized; counts are `None` when the source did not report them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Handle as reported by the source (may be empty)
    pub username: String,
    /// Display name
    pub full_name: String,
    /// Biography text
    pub biography: String,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub posts: Option<u64>,
    pub is_private: bool,
    pub is_verified: bool,
    /// Profile image reference
    pub profile_pic_url: Option<String>,
    /// Link in bio
    pub external_url: Option<String>,
    /// Business category label
    pub category: Option<String>,
}

impl ProfileRecord {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            ..Self::default()
        }
    }

    /// External link, ignoring empty strings some sources report
    pub fn website(&self) -> Option<&str> {
        self.external_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_website_skips_blank() {
        let mut profile = ProfileRecord::new("abc");
        assert_eq!(profile.website(), None);

        profile.external_url = Some("  ".to_string());
        assert_eq!(profile.website(), None);

        profile.external_url = Some("example.com".to_string());
        assert_eq!(profile.website(), Some("example.com"));
    }
}
