//! Feed error types

use std::fmt;

use thiserror::Error;

/// Substrings that mark a parse or transport message as connectivity related
const NETWORK_HINTS: &[&str] = &["network", "fetch", "cors", "connection", "dns"];

/// Failure of a single fetch attempt (one URL, one strategy)
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Transport(String),

    /// The request could not be built or its body decoded, e.g. a URL
    /// made invalid by the configured username
    #[error("Invalid feed request: {0}")]
    Request(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Feed payload is empty")]
    EmptyBody,

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("No fetch strategy was attempted")]
    NotAttempted,
}

impl FetchError {
    /// Whether this failure points at the host refusing or dropping automated requests
    pub fn is_network(&self) -> bool {
        match self {
            FetchError::Transport(_) => true,
            FetchError::Parse(msg) => mentions_network(msg),
            FetchError::Request(_)
            | FetchError::Status(_)
            | FetchError::EmptyBody
            | FetchError::NotAttempted => false,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
            FetchError::Transport(err.to_string())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

fn mentions_network(msg: &str) -> bool {
    let msg = msg.to_lowercase();
    NETWORK_HINTS.iter().any(|hint| msg.contains(hint))
}

/// A candidate URL that could not be turned into a feed
#[derive(Debug)]
pub struct SourceFailure {
    pub url: String,
    /// Error of the first strategy tried against `url`
    pub error: FetchError,
}

impl fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.error, self.url)
    }
}

/// Final outcome when no candidate URL produced a feed
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Network error fetching RSS feed. The feed host may be blocking requests. Try visiting {url} directly in your browser.")]
    NetworkBlocked { url: String },

    #[error(
        "Failed to fetch RSS feed for {username}. Tried: {}. Errors: {}",
        tried_urls(.failures),
        failure_messages(.failures)
    )]
    BothSourcesFailed {
        username: String,
        failures: Vec<SourceFailure>,
    },

    #[error("Invalid feed URL template {0:?}: missing {{username}} placeholder")]
    InvalidTemplate(String),

    #[error("HTTP client error: {0}")]
    Client(String),
}

impl FeedError {
    /// Classify exhausted candidate URLs.
    ///
    /// Any network-class failure wins, naming the first URL that was tried.
    pub fn from_failures(username: &str, failures: Vec<SourceFailure>) -> Self {
        if failures.iter().any(|failure| failure.error.is_network()) {
            if let Some(first) = failures.first() {
                return FeedError::NetworkBlocked {
                    url: first.url.clone(),
                };
            }
        }

        FeedError::BothSourcesFailed {
            username: username.to_string(),
            failures,
        }
    }

    /// Stable machine-readable tag
    pub fn kind(&self) -> &'static str {
        match self {
            FeedError::NetworkBlocked { .. } => "network_blocked",
            FeedError::BothSourcesFailed { .. } => "both_sources_failed",
            FeedError::InvalidTemplate(_) => "invalid_template",
            FeedError::Client(_) => "client",
        }
    }
}

fn tried_urls(failures: &[SourceFailure]) -> String {
    failures
        .iter()
        .map(|failure| failure.url.as_str())
        .collect::<Vec<_>>()
        .join(" and ")
}

fn failure_messages(failures: &[SourceFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
