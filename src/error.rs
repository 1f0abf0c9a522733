//! Error types for docs release queries.
//!
//! `NotFound` is a distinct variant so callers can branch on it without
//! inspecting error text. Everything else coming back from the API or the
//! network is a transport failure and is propagated unchanged.

use thiserror::Error;

/// Result type alias for docs release operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all docs release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// The release does not exist, or exists but carries no docs archive,
    /// is a draft, or is a prerelease
    #[error("Unable to find a release '{tag}' for project '{project}'")]
    NotFound {
        /// Project (repository) name
        project: String,
        /// Requested tag
        tag: String,
    },

    /// Network, TLS or response decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status returned by the GitHub API
    #[error("GitHub API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message reported by GitHub, or the raw body
        message: String,
    },

    /// GitHub API rate limit exhausted
    #[error("GitHub API rate limit exceeded")]
    RateLimited {
        /// Unix timestamp at which the limit resets, when GitHub reported one
        reset: Option<u64>,
    },

    /// Configured API base URL could not be used to build a request URL
    #[error("Invalid GitHub API URL '{url}': {reason}")]
    InvalidUrl {
        /// Offending URL
        url: String,
        /// Reason for the error
        reason: String,
    },

    /// Release tag is not a semantic version
    #[error("Failed to parse version from tag '{tag}': {source}")]
    InvalidVersion {
        /// Tag as stored by GitHub
        tag: String,
        /// Parsing error
        #[source]
        source: semver::Error,
    },

    /// Caller passed an unusable argument
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Reason for the error
        reason: String,
    },
}

impl ReleaseError {
    /// Whether this is the "release not found" condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReleaseError::NotFound { .. })
    }

    /// Whether this error came from talking to the remote API
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ReleaseError::Http(_) | ReleaseError::Api { .. } | ReleaseError::RateLimited { .. }
        )
    }

    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReleaseError::NotFound { project, tag } => vec![
                format!("Verify that tag '{tag}' exists in '{project}' and is published"),
                "Drafts and prereleases are never listed".to_string(),
                "Make sure the release has a 'docs.tar.gz' asset attached".to_string(),
            ],
            ReleaseError::RateLimited { reset } => {
                let mut suggestions =
                    vec!["Set GH_TOKEN or GITHUB_TOKEN to raise the rate limit".to_string()];
                if let Some(reset) = reset {
                    suggestions.push(format!("Retry after unix time {reset}"));
                }
                suggestions
            }
            ReleaseError::Api { status: 401, .. } => vec![
                "Check that the GitHub token is valid and not expired".to_string(),
            ],
            ReleaseError::Api { status: 404, .. } => vec![
                "Check the organization and project names".to_string(),
                "Private repositories require a token with read access".to_string(),
            ],
            ReleaseError::InvalidVersion { tag, .. } => vec![format!(
                "Rename or delete the release tagged '{tag}' so it follows semantic versioning"
            )],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
