//! RSS / Atom parsing into a format-neutral shape

use atom_syndication::Feed as AtomFeed;
use rss::Channel;

use crate::error::FetchError;

/// Entry fields as found in the document, before defaults are applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub pub_date: Option<String>,
    /// Full HTML body (`content:encoded` or Atom `content`)
    pub content_html: Option<String>,
    /// RSS `description` or Atom `summary`
    pub description: Option<String>,
    pub guid: Option<String>,
    pub categories: Vec<String>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFeed {
    pub title: Option<String>,
    pub entries: Vec<RawEntry>,
}

/// Parse a feed document, trying RSS first and Atom second
pub fn parse_feed(raw: &[u8]) -> Result<RawFeed, FetchError> {
    let trimmed = trim_leading_ascii_whitespace(raw);
    if trimmed.is_empty() {
        return Err(FetchError::EmptyBody);
    }

    match Channel::read_from(trimmed) {
        Ok(channel) => Ok(RawFeed::from(channel)),
        Err(rss_err) => match AtomFeed::read_from(trimmed) {
            Ok(feed) => Ok(RawFeed::from(feed)),
            Err(_) => Err(FetchError::Parse(rss_err.to_string())),
        },
    }
}

impl From<Channel> for RawFeed {
    fn from(channel: Channel) -> Self {
        let entries = channel
            .items()
            .iter()
            .map(|item| RawEntry {
                title: non_empty(item.title()),
                link: non_empty(item.link()),
                pub_date: non_empty(item.pub_date()),
                content_html: non_empty(item.content()),
                description: non_empty(item.description()),
                guid: non_empty(item.guid().map(|guid| guid.value())),
                categories: item
                    .categories()
                    .iter()
                    .map(|category| category.name().to_string())
                    .collect(),
                // Medium sets dc:creator; plain RSS uses <author>
                author: item
                    .dublin_core_ext()
                    .and_then(|dc| dc.creators().first())
                    .and_then(|creator| non_empty(Some(creator.as_str())))
                    .or_else(|| non_empty(item.author())),
            })
            .collect();

        RawFeed {
            title: non_empty(Some(channel.title())),
            entries,
        }
    }
}

impl From<AtomFeed> for RawFeed {
    fn from(feed: AtomFeed) -> Self {
        let entries = feed
            .entries()
            .iter()
            .map(|entry| {
                let link = entry
                    .links()
                    .iter()
                    .find(|link| link.rel() == "alternate")
                    .or_else(|| entry.links().first())
                    .map(|link| link.href());

                RawEntry {
                    title: non_empty(Some(entry.title().value.as_str())),
                    link: non_empty(link),
                    pub_date: Some(entry.published().unwrap_or(entry.updated()).to_rfc3339()),
                    content_html: non_empty(entry.content().and_then(|content| content.value())),
                    description: non_empty(entry.summary().map(|summary| summary.value.as_str())),
                    guid: non_empty(Some(entry.id())),
                    categories: entry
                        .categories()
                        .iter()
                        .map(|category| category.term().to_string())
                        .collect(),
                    author: non_empty(entry.authors().first().map(|person| person.name())),
                }
            })
            .collect();

        RawFeed {
            title: non_empty(Some(feed.title().value.as_str())),
            entries,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

fn trim_leading_ascii_whitespace(raw: &[u8]) -> &[u8] {
    let start = raw
        .iter()
        .position(|byte| !byte.is_ascii_whitespace())
        .unwrap_or(raw.len());
    &raw[start..]
}
