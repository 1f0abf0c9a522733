//! Wire types for the GitHub releases API. Only the fields this crate reads.
//!
//! Flags and strings are optional so that an absent field is distinguishable
//! from an explicit value; the eligibility predicate treats absence as the
//! permissive default.

use serde::Deserialize;

/// A release as returned by `GET /repos/{owner}/{repo}/releases`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitHubRelease {
    /// Tag name, e.g. "v1.2.3"
    pub tag_name: Option<String>,
    /// Draft flag
    pub draft: Option<bool>,
    /// Prerelease flag
    pub prerelease: Option<bool>,
    /// Attached files
    #[serde(default)]
    pub assets: Vec<GitHubAsset>,
}

/// A file attached to a release
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitHubAsset {
    /// File name
    pub name: Option<String>,
    /// Public download URL
    pub browser_download_url: Option<String>,
}

/// Body of a GitHub error response
#[derive(Debug, Deserialize)]
pub struct GitHubErrorBody {
    /// Human readable error message
    pub message: String,
}
