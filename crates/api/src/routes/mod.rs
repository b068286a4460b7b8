//! HTTP routes

pub mod health;
pub mod medium;
pub mod pages;

use axum::{middleware, routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{error::not_found, security::security_headers_middleware, state::AppState};

/// Create all site routes
pub fn create_router(state: AppState) -> Router {
    // Health check routes (at root level for infrastructure monitoring)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness));

    let api_routes = Router::new()
        .route("/medium", get(medium::list_posts))
        .route("/medium/preview", get(medium::preview_posts));

    // Subdomain hosts land here after rewriting
    let page_routes = Router::new()
        .route("/", get(pages::home))
        .route("/demos", get(pages::demos))
        .route("/demos/*rest", get(pages::demos))
        .route("/blog", get(pages::blog))
        .route("/blog/*rest", get(pages::blog));

    Router::new()
        .merge(health_routes)
        .merge(page_routes)
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
