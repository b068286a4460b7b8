//! Application configuration

use std::env;
use std::time::Duration;

use folio_feed::source::{
    DEFAULT_ACCOUNT, DEFAULT_ALTERNATE_TEMPLATE, DEFAULT_PRIMARY_TEMPLATE,
};
use folio_feed::{FeedAccount, FeedError, FeedSettings};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,
    /// `APP_ENV=development`; exposes error details in API responses
    pub development_mode: bool,

    // Blog feed
    pub medium_account: FeedAccount,
    pub feed: FeedSettings,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let feed = FeedSettings {
            primary_template: env::var("MEDIUM_FEED_URL")
                .unwrap_or_else(|_| DEFAULT_PRIMARY_TEMPLATE.to_string()),
            alternate_template: env::var("MEDIUM_ALT_FEED_URL")
                .unwrap_or_else(|_| DEFAULT_ALTERNATE_TEMPLATE.to_string()),
            request_timeout: Duration::from_millis(
                env::var("FEED_REQUEST_TIMEOUT_MS")
                    .unwrap_or_else(|_| "15000".to_string())
                    .parse()
                    .unwrap_or(15000),
            ),
            ..FeedSettings::default()
        };
        feed.validate()?;

        Ok(Self {
            // Server
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            development_mode: env::var("APP_ENV")
                .map(|value| value.eq_ignore_ascii_case("development"))
                .unwrap_or(false),

            // Blog feed
            medium_account: FeedAccount::new(
                &env::var("MEDIUM_USERNAME").unwrap_or_else(|_| DEFAULT_ACCOUNT.to_string()),
            ),
            feed,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid feed configuration: {0}")]
    Feed(#[from] FeedError),
}
