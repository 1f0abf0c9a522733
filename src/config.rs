//! Service configuration.
//!
//! The embedding application supplies the organization and, optionally, an
//! access token. Everything else has a default pointing at the public
//! GitHub API.

/// Public GitHub REST API
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Configuration for [`crate::ReleaseService`]
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Organization (or user) owning the projects
    pub organization: String,
    /// Access token; requests are unauthenticated when `None`
    pub token: Option<String>,
    /// Base URL of the REST API, without trailing path
    pub api_base_url: String,
    /// Value of the `User-Agent` header (GitHub rejects requests without one)
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            organization: String::new(),
            token: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: format!("docs_releases/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

// Keeps the token out of logs and panics.
impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("organization", &self.organization)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ServiceConfig {
    /// Unauthenticated configuration for `organization`
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            ..Self::default()
        }
    }

    /// Set the access token. Empty tokens are ignored.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = non_empty(token.into());
        self
    }

    /// Point the service at a different API (GitHub Enterprise, test servers)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Build configuration from the environment.
    ///
    /// Token lookup order is `GH_TOKEN`, then `GITHUB_TOKEN`.
    /// `DOCS_RELEASES_API_URL` overrides the API base URL.
    pub fn from_env(organization: impl Into<String>) -> Self {
        Self::from_lookup(organization, |name| std::env::var(name).ok())
    }

    fn from_lookup<F>(organization: impl Into<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(organization);
        config.token = ["GH_TOKEN", "GITHUB_TOKEN"]
            .into_iter()
            .find_map(|name| lookup(name).and_then(non_empty));
        if let Some(url) = lookup("DOCS_RELEASES_API_URL").and_then(non_empty) {
            config.api_base_url = url;
        }
        config
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
