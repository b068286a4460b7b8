//! Shared application state

use std::sync::Arc;

use folio_feed::{FeedClient, FeedError};

use crate::config::Config;

/// State handed to every handler. Cheap to clone; nothing in it is mutable.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub feed_client: FeedClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, FeedError> {
        let feed_client = FeedClient::new(config.feed.clone())?;
        Ok(Self {
            config: Arc::new(config),
            feed_client,
        })
    }
}
