//! Native user object shared by the profile API and the embedded page payload

use serde::Deserialize;

use scout_core::{sanitize, ProfileRecord};

#[derive(Debug, Default, Deserialize)]
pub struct EdgeCount {
    pub count: Option<u64>,
}

/// User object as the network serves it; every field optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawUser {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub biography: Option<String>,
    pub edge_followed_by: Option<EdgeCount>,
    pub edge_follow: Option<EdgeCount>,
    pub edge_owner_to_timeline_media: Option<EdgeCount>,
    pub is_private: Option<bool>,
    pub is_verified: Option<bool>,
    pub profile_pic_url: Option<String>,
    pub profile_pic_url_hd: Option<String>,
    pub external_url: Option<String>,
    pub category_name: Option<String>,
    pub business_category_name: Option<String>,
}

impl RawUser {
    /// Map into a record, sanitizing free-text fields once
    pub fn into_record(self) -> ProfileRecord {
        let category = self
            .category_name
            .or(self.business_category_name)
            .filter(|c| !c.is_empty())
            .map(|c| sanitize(&c));

        ProfileRecord {
            username: self.username.unwrap_or_default(),
            full_name: sanitize(self.full_name.as_deref().unwrap_or_default()),
            biography: sanitize(self.biography.as_deref().unwrap_or_default()),
            followers: self.edge_followed_by.and_then(|e| e.count),
            following: self.edge_follow.and_then(|e| e.count),
            posts: self.edge_owner_to_timeline_media.and_then(|e| e.count),
            is_private: self.is_private.unwrap_or(false),
            is_verified: self.is_verified.unwrap_or(false),
            profile_pic_url: self.profile_pic_url_hd.or(self.profile_pic_url),
            external_url: self.external_url,
            category,
        }
    }
}
