//! Blog feed endpoints
//!
//! `GET /api/medium` returns the normalized posts of the configured Medium
//! account. Three shapes:
//! - `{ posts }` on success
//! - `{ error, posts: [], feedUrl, username }` (200) when the feed is empty
//! - `{ error, posts: [], details? }` (500) when every candidate URL failed

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use folio_feed::FeedPost;
use serde::Serialize;
use tracing::{error, info};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

/// Number of posts shown by the landing page preview
pub const PREVIEW_LIMIT: usize = 3;

pub const EMPTY_FEED_MESSAGE: &str = "No posts found in RSS feed";

#[derive(Debug, Serialize)]
pub struct PostsResponse {
    pub posts: Vec<FeedPost>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyFeedResponse {
    pub error: &'static str,
    pub posts: Vec<FeedPost>,
    pub feed_url: String,
    pub username: String,
}

/// All posts from the feed
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<Response> {
    load_posts(&state, None).await
}

/// Latest [`PREVIEW_LIMIT`] posts
pub async fn preview_posts(State(state): State<AppState>) -> ApiResult<Response> {
    load_posts(&state, Some(PREVIEW_LIMIT)).await
}

async fn load_posts(state: &AppState, limit: Option<usize>) -> ApiResult<Response> {
    let account = &state.config.medium_account;
    info!(username = account.identifier(), "Fetching blog posts");

    let outcome = state
        .feed_client
        .fetch_posts(account)
        .await
        .map_err(|e| {
            error!(username = account.identifier(), kind = e.kind(), error = %e, "Failed to fetch blog posts");
            ApiError::FeedUnavailable {
                error: e,
                expose_details: state.config.development_mode,
            }
        })?;

    if outcome.is_empty() {
        info!(feed_url = %outcome.feed_url, "Feed parsed but contained no posts");
        return Ok(Json(EmptyFeedResponse {
            error: EMPTY_FEED_MESSAGE,
            posts: Vec::new(),
            feed_url: outcome.feed_url,
            username: account.identifier().to_string(),
        })
        .into_response());
    }

    let mut posts = outcome.posts;
    if let Some(limit) = limit {
        posts.truncate(limit);
    }

    Ok(Json(PostsResponse { posts }).into_response())
}
