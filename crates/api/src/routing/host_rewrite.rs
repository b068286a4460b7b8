//! Subdomain-to-path rewriting
//!
//! Maps subdomain hosts onto path prefixes of the main site:
//! - demos.example.com/x -> /demos/x
//! - blog.localhost:3000/ -> /blog
//!
//! Everything else (www, bare domains, unknown subdomains, IP literals)
//! passes through untouched.

use std::net::IpAddr;

/// Development loopback host name
const LOOPBACK_HOST: &str = "localhost";

/// Conventional prefix that never counts as a subdomain
const WWW_LABEL: &str = "www";

/// A routing namespace selected by subdomain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    /// Leftmost host label, e.g. `demos`
    pub token: &'static str,
    /// Path prefix the request is moved under, e.g. `/demos`
    pub prefix: &'static str,
}

/// Recognized subdomains; add a row to add a namespace
pub const NAMESPACES: &[Namespace] = &[
    Namespace {
        token: "demos",
        prefix: "/demos",
    },
    Namespace {
        token: "blog",
        prefix: "/blog",
    },
];

impl Namespace {
    /// Look up a subdomain token
    pub fn for_token(token: &str) -> Option<Namespace> {
        NAMESPACES
            .iter()
            .find(|namespace| namespace.token == token)
            .copied()
    }

    /// Path under this namespace, or None if `path` already carries the prefix
    pub fn rewrite(&self, path: &str) -> Option<String> {
        if path.starts_with(self.prefix) {
            return None;
        }
        if path.is_empty() || path == "/" {
            return Some(self.prefix.to_string());
        }
        Some(format!("{}{}", self.prefix, path))
    }
}

/// Routing outcome for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDecision {
    pub namespace: Option<Namespace>,
    /// New path when the request must be rewritten
    pub rewritten_path: Option<String>,
}

impl RouteDecision {
    pub fn is_rewrite(&self) -> bool {
        self.rewritten_path.is_some()
    }
}

/// Decide how a request for (`host`, `path`) is routed
pub fn decide(host: &str, path: &str) -> RouteDecision {
    let namespace = subdomain_token(host).and_then(|token| Namespace::for_token(&token));
    let rewritten_path = namespace.and_then(|namespace| namespace.rewrite(path));

    RouteDecision {
        namespace,
        rewritten_path,
    }
}

/// Leftmost label of `host` when it names a subdomain
pub fn subdomain_token(host: &str) -> Option<String> {
    let host = normalize_host(host)?;
    let labels: Vec<&str> = host.split('.').collect();

    if host.contains(LOOPBACK_HOST) {
        return match labels.as_slice() {
            [first, _, ..] if *first != LOOPBACK_HOST && !first.is_empty() => {
                Some(first.to_string())
            }
            _ => None,
        };
    }

    match labels.as_slice() {
        [first, _, ..] if *first != WWW_LABEL && !first.is_empty() => Some(first.to_string()),
        _ => None,
    }
}

/// Lowercase the host and drop any port. IP literals yield None.
fn normalize_host(host: &str) -> Option<String> {
    let host = host.trim();
    if host.is_empty() || host.starts_with('[') || host.parse::<IpAddr>().is_ok() {
        return None;
    }

    let host = host.split(':').next().unwrap_or(host).to_lowercase();
    if host.is_empty() || host.parse::<IpAddr>().is_ok() {
        return None;
    }
    Some(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewritten(host: &str, path: &str) -> Option<String> {
        decide(host, path).rewritten_path
    }

    #[test]
    fn test_subdomain_rewrites() {
        assert_eq!(rewritten("demos.example.com", "/").as_deref(), Some("/demos"));
        assert_eq!(
            rewritten("demos.example.com", "/particles").as_deref(),
            Some("/demos/particles")
        );
        assert_eq!(rewritten("blog.localhost:3000", "/").as_deref(), Some("/blog"));
        assert_eq!(
            rewritten("BLOG.Example.com:443", "/post").as_deref(),
            Some("/blog/post")
        );
    }

    #[test]
    fn test_already_prefixed_paths_pass_through() {
        let decision = decide("demos.example.com", "/demos/x");
        assert_eq!(decision.namespace, Namespace::for_token("demos"));
        assert!(!decision.is_rewrite());
        assert_eq!(rewritten("blog.localhost", "/blog"), None);
    }

    #[test]
    fn test_main_site_hosts_pass_through() {
        assert_eq!(rewritten("www.example.com", "/about"), None);
        assert_eq!(rewritten("example.com", "/"), None);
        assert_eq!(rewritten("localhost:3000", "/"), None);
        assert_eq!(rewritten("api.example.com", "/"), None);
        assert_eq!(decide("www.example.com", "/about").namespace, None);
    }

    #[test]
    fn test_malformed_hosts_have_no_subdomain() {
        assert_eq!(subdomain_token(""), None);
        assert_eq!(subdomain_token("   "), None);
        assert_eq!(subdomain_token("127.0.0.1:3000"), None);
        assert_eq!(subdomain_token("10.0.0.1"), None);
        assert_eq!(subdomain_token("[::1]:3000"), None);
        assert_eq!(subdomain_token("::1"), None);
        assert_eq!(subdomain_token(".example.com"), None);
        assert_eq!(subdomain_token("localhost"), None);
    }

    #[test]
    fn test_subdomain_token_extraction() {
        assert_eq!(subdomain_token("demos.localhost:3000").as_deref(), Some("demos"));
        assert_eq!(subdomain_token("demos.example.com").as_deref(), Some("demos"));
        assert_eq!(subdomain_token("www.example.com"), None);
        assert_eq!(subdomain_token("example"), None);
    }

    #[test]
    fn test_namespace_table() {
        assert_eq!(Namespace::for_token("demos").map(|n| n.prefix), Some("/demos"));
        assert_eq!(Namespace::for_token("blog").map(|n| n.prefix), Some("/blog"));
        assert_eq!(Namespace::for_token("www"), None);
        assert_eq!(Namespace::for_token("admin"), None);
    }
}
