//! Folio site server
//!
//! Serves the portfolio pages, the `/api/medium` blog feed endpoint, and
//! maps the `demos.` and `blog.` subdomains onto their path prefixes.

pub mod config;
pub mod error;
pub mod routes;
pub mod routing;
pub mod security;
pub mod state;

use axum::extract::Request;
use tower::util::MapRequest;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use routing::{decide, RouteDecision};
pub use state::AppState;

/// The complete site: host rewriting in front of the router
pub type SiteService = MapRequest<axum::Router, fn(Request) -> Request>;

/// Build the service that is handed to `axum::serve`.
///
/// Rewriting happens outside the `Router` so the new path is what gets
/// matched against routes.
pub fn build_app(state: AppState) -> SiteService {
    let rewrite: fn(Request) -> Request = routing::rewrite_request;
    MapRequest::new(routes::create_router(state), rewrite)
}
