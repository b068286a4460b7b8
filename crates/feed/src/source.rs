//! Account identifiers and candidate feed URLs

use std::time::Duration;

use crate::error::FeedError;

/// Account used when none is configured
pub const DEFAULT_ACCOUNT: &str = "@granthopkins";

/// Placeholder substituted with the bare username in URL templates
pub const USERNAME_PLACEHOLDER: &str = "{username}";

pub const DEFAULT_PRIMARY_TEMPLATE: &str = "https://medium.com/feed/@{username}";
pub const DEFAULT_ALTERNATE_TEMPLATE: &str = "https://{username}.medium.com/feed";

/// Default per-request timeout (15 seconds)
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// A publishing account, e.g. `@username`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedAccount {
    identifier: String,
    username: String,
}

impl FeedAccount {
    /// Build from a configured identifier.
    ///
    /// Blank identifiers (or a lone `@`) fall back to [`DEFAULT_ACCOUNT`].
    pub fn new(identifier: &str) -> Self {
        let identifier = identifier.trim();
        let username = identifier.strip_prefix('@').unwrap_or(identifier);
        if username.is_empty() {
            return Self::default();
        }

        Self {
            identifier: identifier.to_string(),
            username: username.to_string(),
        }
    }

    /// Identifier as configured (`@username`)
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Username without the leading `@`
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl Default for FeedAccount {
    fn default() -> Self {
        Self {
            identifier: DEFAULT_ACCOUNT.to_string(),
            username: DEFAULT_ACCOUNT.trim_start_matches('@').to_string(),
        }
    }
}

/// Tunables for [`crate::FeedClient`]
#[derive(Debug, Clone)]
pub struct FeedSettings {
    pub primary_template: String,
    pub alternate_template: String,
    /// User agent sent by the parser fetch
    pub user_agent: String,
    pub request_timeout: Duration,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            primary_template: DEFAULT_PRIMARY_TEMPLATE.to_string(),
            alternate_template: DEFAULT_ALTERNATE_TEMPLATE.to_string(),
            user_agent: concat!("folio-feed/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl FeedSettings {
    /// Both templates must carry the username placeholder
    pub fn validate(&self) -> Result<(), FeedError> {
        for template in [&self.primary_template, &self.alternate_template] {
            if !template.contains(USERNAME_PLACEHOLDER) {
                return Err(FeedError::InvalidTemplate(template.clone()));
            }
        }
        Ok(())
    }
}

/// The ordered URLs tried for an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateUrls {
    pub primary: String,
    pub alternate: String,
}

impl CandidateUrls {
    pub fn derive(account: &FeedAccount, settings: &FeedSettings) -> Self {
        Self {
            primary: expand(&settings.primary_template, account.username()),
            alternate: expand(&settings.alternate_template, account.username()),
        }
    }

    /// URLs in the order they are attempted
    pub fn in_order(&self) -> [&str; 2] {
        [&self.primary, &self.alternate]
    }
}

fn expand(template: &str, username: &str) -> String {
    template.replace(USERNAME_PLACEHOLDER, username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_strips_at_sign() {
        let account = FeedAccount::new("@ada");
        assert_eq!(account.identifier(), "@ada");
        assert_eq!(account.username(), "ada");

        let bare = FeedAccount::new("  ada ");
        assert_eq!(bare.identifier(), "ada");
        assert_eq!(bare.username(), "ada");
    }

    #[test]
    fn test_only_one_at_sign_is_stripped() {
        let account = FeedAccount::new("@@ada");
        assert_eq!(account.identifier(), "@@ada");
        assert_eq!(account.username(), "@ada");
    }

    #[test]
    fn test_blank_account_uses_default() {
        assert_eq!(FeedAccount::new(""), FeedAccount::default());
        assert_eq!(FeedAccount::new("@"), FeedAccount::default());
        assert_eq!(FeedAccount::default().identifier(), DEFAULT_ACCOUNT);
    }

    #[test]
    fn test_default_candidate_urls() {
        let urls = CandidateUrls::derive(&FeedAccount::new("@ada"), &FeedSettings::default());
        assert_eq!(urls.primary, "https://medium.com/feed/@ada");
        assert_eq!(urls.alternate, "https://ada.medium.com/feed");
        assert_eq!(
            urls.in_order(),
            ["https://medium.com/feed/@ada", "https://ada.medium.com/feed"]
        );
    }

    #[test]
    fn test_template_without_placeholder_is_rejected() {
        let settings = FeedSettings {
            alternate_template: "https://example.com/feed".to_string(),
            ..FeedSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(FeedError::InvalidTemplate(t)) if t == "https://example.com/feed"
        ));
        assert!(FeedSettings::default().validate().is_ok());
    }
}
