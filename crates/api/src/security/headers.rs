//! Browser hardening headers
//!
//! Every response leaves with the same fixed set of headers. The CSP
//! admits the site's own assets plus remote post thumbnails; a handler
//! that sets its own policy keeps it.

use axum::{
    extract::Request,
    http::{
        header::{CONTENT_SECURITY_POLICY, X_FRAME_OPTIONS},
        HeaderValue,
    },
    middleware::Next,
    response::Response,
};

const SITE_POLICY: &str = "default-src 'self'; \
     img-src 'self' https: data:; \
     style-src 'self' 'unsafe-inline'; \
     frame-ancestors 'none'; \
     base-uri 'self'; \
     form-action 'self'";

/// Always overwritten
const FIXED: [(&str, &str); 4] = [
    ("x-frame-options", "DENY"),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    ("permissions-policy", "camera=(), microphone=(), geolocation=()"),
];

pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    for (name, value) in FIXED {
        headers.insert(name, HeaderValue::from_static(value));
    }
    headers
        .entry(CONTENT_SECURITY_POLICY)
        .or_insert(HeaderValue::from_static(SITE_POLICY));

    response
}
