//! Turns parsed entries into [`FeedPost`]s

use std::sync::LazyLock;

use html_escape::decode_html_entities;
use regex::Regex;

use crate::parse::{RawEntry, RawFeed};
use crate::types::{FeedPost, UNTITLED};

// First image only; Medium puts the hero image first in the body
#[allow(clippy::expect_used)]
static THUMBNAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<img[^>]+src=["']([^"']+)["']"#).expect("thumbnail pattern is valid")
});

#[allow(clippy::expect_used)]
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

#[allow(clippy::expect_used)]
static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Normalize every entry of a feed, keeping document order
pub fn normalize_feed(feed: RawFeed) -> Vec<FeedPost> {
    let feed_title = feed.title;
    feed.entries
        .into_iter()
        .map(|entry| normalize_entry(entry, feed_title.as_deref()))
        .collect()
}

/// Apply field defaults to one entry. `feed_title` stands in for a missing author.
pub fn normalize_entry(entry: RawEntry, feed_title: Option<&str>) -> FeedPost {
    let link = entry.link.unwrap_or_default();
    let content_snippet = entry
        .description
        .as_deref()
        .map(plain_text)
        .unwrap_or_default();
    let content = entry
        .content_html
        .or(entry.description)
        .unwrap_or_default();
    let thumbnail = extract_thumbnail(&content);

    FeedPost {
        title: entry.title.unwrap_or_else(|| UNTITLED.to_string()),
        guid: entry.guid.unwrap_or_else(|| link.clone()),
        link,
        pub_date: entry.pub_date.unwrap_or_default(),
        content,
        content_snippet,
        categories: entry.categories,
        author: entry.author.or_else(|| feed_title.map(ToString::to_string)),
        thumbnail,
    }
}

/// `src` of the first `<img>` tag in `html`, if any
pub fn extract_thumbnail(html: &str) -> Option<String> {
    THUMBNAIL_PATTERN
        .captures(html)
        .and_then(|captures| captures.get(1))
        .map(|src| src.as_str().to_string())
}

/// Strip markup, decode entities, collapse whitespace
///
/// Tags go first so an escaped `&lt;b&gt;` survives as literal text.
pub fn plain_text(html: &str) -> String {
    let stripped = TAG_PATTERN.replace_all(html, " ");
    let decoded = decode_html_entities(&stripped);
    WHITESPACE_PATTERN
        .replace_all(decoded.trim(), " ")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_feed;

    #[test]
    fn test_thumbnail_is_first_image() {
        let html = r#"<p>x</p><img src="http://x/y.png"><img src="http://x/z.png">"#;
        assert_eq!(extract_thumbnail(html).as_deref(), Some("http://x/y.png"));
    }

    #[test]
    fn test_thumbnail_match_is_case_insensitive() {
        let html = r#"<IMG class="hero" SRC="http://x/upper.png" />"#;
        assert_eq!(extract_thumbnail(html).as_deref(), Some("http://x/upper.png"));
    }

    #[test]
    fn test_no_image_means_no_thumbnail() {
        assert_eq!(extract_thumbnail("<p>No pictures here</p>"), None);
        assert_eq!(extract_thumbnail(""), None);
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            plain_text("<p>A short <b>teaser</b> &amp; more.</p>\n<p>Next</p>"),
            "A short teaser & more. Next"
        );
    }

    #[test]
    fn test_plain_text_decodes_named_and_numeric_entities() {
        assert_eq!(
            plain_text("<p>It&#8217;s fast &mdash; really &hellip; caf&eacute;</p>"),
            "It\u{2019}s fast \u{2014} really \u{2026} caf\u{e9}"
        );
        assert_eq!(plain_text("&lt;b&gt;kept&lt;/b&gt;&nbsp;&amp;&#x41;"), "<b>kept</b> &A");
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let post = normalize_entry(RawEntry::default(), None);

        assert_eq!(post.title, UNTITLED);
        assert_eq!(post.link, "");
        assert_eq!(post.pub_date, "");
        assert_eq!(post.content, "");
        assert_eq!(post.content_snippet, "");
        assert_eq!(post.guid, "");
        assert!(post.categories.is_empty());
        assert_eq!(post.author, None);
        assert_eq!(post.thumbnail, None);
    }

    #[test]
    fn test_guid_falls_back_to_link() {
        let entry = RawEntry {
            link: Some("https://example.com/post".to_string()),
            ..RawEntry::default()
        };
        let post = normalize_entry(entry, Some("Feed title"));

        assert_eq!(post.guid, "https://example.com/post");
        assert_eq!(post.author.as_deref(), Some("Feed title"));
    }

    #[test]
    fn test_normalizes_medium_fixture() {
        let feed = parse_feed(include_bytes!("../fixtures/medium.rss.xml")).unwrap();
        let posts = normalize_feed(feed);

        assert_eq!(posts.len(), 2);
        for post in &posts {
            assert!(!post.title.is_empty());
            assert!(!post.link.is_empty());
            assert!(!post.guid.is_empty());
        }

        let first = &posts[0];
        assert_eq!(
            first.thumbnail.as_deref(),
            Some("https://cdn-images-1.medium.com/max/1024/hero.png")
        );
        assert_eq!(first.author.as_deref(), Some("Grant Hopkins"));
        assert_eq!(first.content_snippet, "");

        let second = &posts[1];
        assert_eq!(second.title, UNTITLED);
        assert_eq!(second.guid, second.link);
        assert_eq!(second.content_snippet, "A short teaser & more.");
        assert_eq!(second.content, "<p>A short <b>teaser</b> &amp; more.</p>");
        assert_eq!(second.thumbnail, None);
        assert_eq!(
            second.author.as_deref(),
            Some("Stories by Grant Hopkins on Medium")
        );
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let post = normalize_entry(RawEntry::default(), None);
        let json = serde_json::to_value(&post).unwrap();

        assert!(json.get("pubDate").is_some());
        assert!(json.get("contentSnippet").is_some());
        assert_eq!(json["categories"], serde_json::json!([]));
        assert!(json.get("thumbnail").is_none());
        assert!(json.get("author").is_none());
    }
}
