// src/config.rs
//! Gateway configuration resolved from the environment.

use crate::constants::GRAPHQL_UNPAGINATED_CAP;
use crate::error::GatewayError;
use crate::types::BaseUrl;

/// Environment variable holding the WordPress base URL.
pub const WORDPRESS_URL_VAR: &str = "WORDPRESS_URL";

/// Environment variable selecting GraphQL-first behavior.
///
/// Anything except the literal string `"false"` (including the variable
/// being unset) leaves GraphQL enabled.
pub const USE_GRAPHQL_VAR: &str = "USE_WORDPRESS_GRAPHQL";

/// Resolved gateway settings.
///
/// The base URL is optional on purpose: an unconfigured deployment is a
/// soft condition (§7 taxonomy), surfaced as empty results rather than a
/// construction failure. Strategies call [`GatewayConfig::require_base_url`]
/// per request and report `MissingConfiguration` when it is absent.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    base_url: Option<BaseUrl>,
    use_graphql: bool,
    unpaginated_cap: u32,
}

impl GatewayConfig {
    /// Builds a configuration around a known base URL, GraphQL enabled.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url: Some(base_url),
            use_graphql: true,
            unpaginated_cap: GRAPHQL_UNPAGINATED_CAP,
        }
    }

    /// Builds an unconfigured instance (no base URL). Every strategy call
    /// will soft-fail with `MissingConfiguration`.
    pub fn unconfigured() -> Self {
        Self {
            base_url: None,
            use_graphql: true,
            unpaginated_cap: GRAPHQL_UNPAGINATED_CAP,
        }
    }

    /// Resolves configuration from `WORDPRESS_URL` and
    /// `USE_WORDPRESS_GRAPHQL`.
    ///
    /// A missing or malformed URL leaves the config unconfigured (logged,
    /// not fatal); a missing post is less harmful than a broken render.
    pub fn from_env() -> Self {
        let base_url = match std::env::var(WORDPRESS_URL_VAR) {
            Ok(raw) => match BaseUrl::parse(&raw) {
                Ok(url) => Some(url),
                Err(e) => {
                    log::warn!("{} is set but invalid: {}", WORDPRESS_URL_VAR, e);
                    None
                }
            },
            Err(_) => {
                log::warn!("{} is not set; content fetches will be empty", WORDPRESS_URL_VAR);
                None
            }
        };

        let use_graphql = std::env::var(USE_GRAPHQL_VAR)
            .map(|v| v != "false")
            .unwrap_or(true);

        Self {
            base_url,
            use_graphql,
            unpaginated_cap: GRAPHQL_UNPAGINATED_CAP,
        }
    }

    /// Enables or disables the GraphQL-first behavior.
    pub fn with_graphql(mut self, enabled: bool) -> Self {
        self.use_graphql = enabled;
        self
    }

    /// Overrides the item cap used by the non-paginated GraphQL fallback.
    pub fn with_unpaginated_cap(mut self, cap: u32) -> Self {
        self.unpaginated_cap = cap;
        self
    }

    pub fn base_url(&self) -> Option<&BaseUrl> {
        self.base_url.as_ref()
    }

    /// The base URL, or the `MissingConfiguration` failure that drives
    /// the fallback chain.
    pub fn require_base_url(&self) -> Result<&BaseUrl, GatewayError> {
        self.base_url.as_ref().ok_or_else(|| {
            GatewayError::MissingConfiguration(format!("{} is not set", WORDPRESS_URL_VAR))
        })
    }

    pub fn use_graphql(&self) -> bool {
        self.use_graphql
    }

    pub fn unpaginated_cap(&self) -> u32 {
        self.unpaginated_cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_reports_missing_base_url() {
        let config = GatewayConfig::unconfigured();
        let err = config.require_base_url().unwrap_err();
        assert!(err.is_not_configured());
    }

    #[test]
    fn builder_overrides() {
        let config = GatewayConfig::new(BaseUrl::parse("https://cms.example.com").unwrap())
            .with_graphql(false)
            .with_unpaginated_cap(25);
        assert!(!config.use_graphql());
        assert_eq!(config.unpaginated_cap(), 25);
        assert!(config.require_base_url().is_ok());
    }
}
