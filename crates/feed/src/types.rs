//! Normalized feed types returned to API callers

use serde::{Deserialize, Serialize};

/// Title used when an entry carries none
pub const UNTITLED: &str = "Untitled";

/// A single blog post summary.
///
/// The textual fields are always present (possibly empty or [`UNTITLED`]);
/// only `author` and `thumbnail` may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPost {
    pub title: String,
    pub link: String,
    /// Date string as published by the feed, not reparsed
    pub pub_date: String,
    pub content: String,
    pub content_snippet: String,
    pub guid: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Result of a successful fetch
#[derive(Debug, Clone)]
pub struct FeedOutcome {
    /// Candidate URL that produced the feed
    pub feed_url: String,
    pub posts: Vec<FeedPost>,
}

impl FeedOutcome {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
