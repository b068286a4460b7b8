//! HTTP retrieval with the two-URL, two-strategy fallback chain

use futures::FutureExt;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{redirect, Client};
use tracing::{error, info, warn};

use crate::chain::{first_success, Attempt};
use crate::error::{FeedError, FetchError, SourceFailure};
use crate::normalize::normalize_feed;
use crate::parse::{parse_feed, RawFeed};
use crate::source::{CandidateUrls, FeedAccount, FeedSettings};
use crate::types::FeedOutcome;

const FEED_ACCEPT: &str = "application/rss+xml, application/atom+xml, application/xml, text/xml";

/// Sent by the manual fetch; some hosts only serve feeds to browsers
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

const MAX_REDIRECTS: usize = 10;

/// How a single URL is retrieved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Feed-reader request, body handed straight to the parser
    Parser,
    /// Raw GET with browser headers, body read as text then parsed
    Manual,
}

impl Strategy {
    /// Order in which strategies are tried against each URL
    pub const ORDER: [Strategy; 2] = [Strategy::Parser, Strategy::Manual];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Parser => "parser",
            Strategy::Manual => "manual",
        }
    }
}

/// A candidate URL that parsed
struct FetchedSource {
    url: String,
    feed: RawFeed,
}

/// Client for fetching and normalizing an account's feed
#[derive(Clone)]
pub struct FeedClient {
    client: Client,
    settings: FeedSettings,
}

impl FeedClient {
    /// Create a client; fails on invalid URL templates
    pub fn new(settings: FeedSettings) -> Result<Self, FeedError> {
        settings.validate()?;

        let client = Client::builder()
            .timeout(settings.request_timeout)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| FeedError::Client(e.to_string()))?;

        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &FeedSettings {
        &self.settings
    }

    /// Fetch and normalize the feed for `account`.
    ///
    /// A feed with zero entries is `Ok` with no posts.
    pub async fn fetch_posts(&self, account: &FeedAccount) -> Result<FeedOutcome, FeedError> {
        let urls = CandidateUrls::derive(account, &self.settings);
        let attempts: Vec<Attempt<'_, FetchedSource, SourceFailure>> = urls
            .in_order()
            .into_iter()
            .map(|url| self.fetch_source(url.to_string()).boxed())
            .collect();

        match first_success(attempts).await {
            Ok(source) => {
                let posts = normalize_feed(source.feed);
                info!(
                    feed_url = %source.url,
                    posts = posts.len(),
                    "Fetched blog feed"
                );
                Ok(FeedOutcome {
                    feed_url: source.url,
                    posts,
                })
            }
            Err(failures) => {
                for failure in &failures {
                    error!(url = %failure.url, error = %failure.error, "Feed URL failed");
                }
                Err(FeedError::from_failures(account.identifier(), failures))
            }
        }
    }

    /// Try every strategy against one URL, keeping the first error
    async fn fetch_source(&self, url: String) -> Result<FetchedSource, SourceFailure> {
        let attempts: Vec<Attempt<'_, RawFeed, FetchError>> = Strategy::ORDER
            .iter()
            .map(|strategy| self.attempt(*strategy, &url).boxed())
            .collect();
        let result = first_success(attempts).await;

        match result {
            Ok(feed) => Ok(FetchedSource { url, feed }),
            Err(errors) => {
                let error = errors.into_iter().next().unwrap_or(FetchError::NotAttempted);
                warn!(url = %url, error = %error, "All fetch strategies failed");
                Err(SourceFailure { url, error })
            }
        }
    }

    async fn attempt(&self, strategy: Strategy, url: &str) -> Result<RawFeed, FetchError> {
        let result = match strategy {
            Strategy::Parser => self.parser_fetch(url).await,
            Strategy::Manual => self.manual_fetch(url).await,
        };

        match &result {
            Ok(feed) => info!(
                url,
                strategy = strategy.as_str(),
                entries = feed.entries.len(),
                "Feed attempt succeeded"
            ),
            Err(err) => warn!(
                url,
                strategy = strategy.as_str(),
                error = %err,
                "Feed attempt failed"
            ),
        }

        result
    }

    async fn parser_fetch(&self, url: &str) -> Result<RawFeed, FetchError> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.settings.user_agent.as_str())
            .header(ACCEPT, FEED_ACCEPT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        parse_feed(&body)
    }

    async fn manual_fetch(&self, url: &str) -> Result<RawFeed, FetchError> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(ACCEPT, FEED_ACCEPT)
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        parse_feed(text.as_bytes())
    }
}
