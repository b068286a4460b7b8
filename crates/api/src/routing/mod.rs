//! Host-based routing for the site
//!
//! Subdomains are served from path prefixes of the one app:
//! - demos.example.com -> /demos
//! - blog.example.com -> /blog
//!
//! [`rewrite_request`] must run before axum matches routes, so it wraps the
//! whole `Router` (see [`crate::build_app`]) rather than being a route layer.

mod host_rewrite;

pub use host_rewrite::{decide, subdomain_token, Namespace, RouteDecision, NAMESPACES};

use axum::{
    extract::Request,
    http::{header::HOST, uri::PathAndQuery, Uri},
};
use tracing::{debug, warn};

/// Path prefixes that are never rewritten
pub const BYPASS_PREFIXES: &[&str] = &["/api", "/static", "/assets", "/health"];

pub const FAVICON_PATH: &str = "/favicon.ico";

/// Whether `path` is exempt from host rewriting
pub fn is_bypassed(path: &str) -> bool {
    path == FAVICON_PATH
        || BYPASS_PREFIXES.iter().any(|prefix| {
            path.strip_prefix(prefix)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
}

/// Move a subdomain request under its namespace prefix, keeping the query string
pub fn rewrite_request(mut request: Request) -> Request {
    let path = request.uri().path();
    if is_bypassed(path) {
        return request;
    }

    let host = request
        .headers()
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| request.uri().authority().map(|authority| authority.as_str()))
        .unwrap_or_default();

    let decision = decide(host, path);
    let Some(new_path) = decision.rewritten_path else {
        return request;
    };

    match with_path(request.uri(), &new_path) {
        Ok(uri) => {
            debug!(host, from = %request.uri(), to = %uri, "Rewrote subdomain request");
            *request.uri_mut() = uri;
        }
        Err(e) => warn!(host, path = %new_path, error = %e, "Could not rewrite request URI"),
    }

    request
}

fn with_path(uri: &Uri, path: &str) -> Result<Uri, axum::http::Error> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query)?);
    Ok(Uri::from_parts(parts)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request(host: &str, uri: &str) -> Request {
        axum::http::Request::builder()
            .uri(uri)
            .header(HOST, host)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_bypassed_paths() {
        assert!(is_bypassed("/api/medium"));
        assert!(is_bypassed("/api"));
        assert!(is_bypassed("/static/site.css"));
        assert!(is_bypassed("/favicon.ico"));
        assert!(is_bypassed("/health/live"));
        assert!(!is_bypassed("/apiary"));
        assert!(!is_bypassed("/"));
        assert!(!is_bypassed("/blog"));
    }

    #[test]
    fn test_rewrite_keeps_query() {
        let rewritten = rewrite_request(request("demos.example.com", "/gallery?page=2"));
        assert_eq!(rewritten.uri().path(), "/demos/gallery");
        assert_eq!(rewritten.uri().query(), Some("page=2"));
    }

    #[test]
    fn test_root_collapses_to_prefix() {
        let rewritten = rewrite_request(request("blog.localhost:3000", "/"));
        assert_eq!(rewritten.uri(), "/blog");
    }

    #[test]
    fn test_api_requests_are_not_rewritten() {
        let rewritten = rewrite_request(request("blog.example.com", "/api/medium"));
        assert_eq!(rewritten.uri(), "/api/medium");
    }

    #[test]
    fn test_missing_host_passes_through() {
        let req = axum::http::Request::builder().uri("/about").body(Body::empty()).unwrap();
        assert_eq!(rewrite_request(req).uri(), "/about");
    }

    #[test]
    fn test_authority_is_used_without_host_header() {
        let req = axum::http::Request::builder()
            .uri("http://demos.example.com/x")
            .body(Body::empty())
            .unwrap();
        assert_eq!(rewrite_request(req).uri().path(), "/demos/x");
    }
}
