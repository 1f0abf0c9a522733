//! The `Release` entity and the docs eligibility rule.

pub mod version;

pub use version::{parse_tag, sort_releases};

use crate::error::Result;
use crate::github::GitHubRelease;
use serde::Serialize;

/// Asset a release must carry to be listed
pub const DOCS_ASSET_NAME: &str = "docs.tar.gz";

/// A published release that ships a documentation archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    /// Tag of the release, e.g. "v1.2.3"
    pub tag: String,
    /// Download URL of the `docs.tar.gz` asset; never empty
    pub docs_url: String,
}

impl Release {
    /// Map an API release onto a [`Release`] if it is eligible.
    ///
    /// Drafts and prereleases are rejected; a missing flag counts as
    /// `false`. The first asset named exactly `docs.tar.gz` supplies the
    /// URL, and a release whose matching asset has no URL is rejected.
    pub fn from_github(release: &GitHubRelease) -> Option<Self> {
        if release.draft.unwrap_or(false) || release.prerelease.unwrap_or(false) {
            return None;
        }

        let docs_url = release
            .assets
            .iter()
            .find(|asset| asset.name.as_deref() == Some(DOCS_ASSET_NAME))
            .and_then(|asset| asset.browser_download_url.as_deref())
            .filter(|url| !url.is_empty())?;

        Some(Self {
            tag: release.tag_name.clone().unwrap_or_default(),
            docs_url: docs_url.to_string(),
        })
    }

    /// Semantic version encoded in the tag
    pub fn version(&self) -> Result<semver::Version> {
        parse_tag(&self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::GitHubAsset;

    fn asset(name: &str, url: &str) -> GitHubAsset {
        GitHubAsset {
            name: Some(name.to_string()),
            browser_download_url: Some(url.to_string()),
        }
    }

    fn release(
        draft: Option<bool>,
        prerelease: Option<bool>,
        assets: Vec<GitHubAsset>,
    ) -> GitHubRelease {
        GitHubRelease {
            tag_name: Some("v1.0.0".to_string()),
            draft,
            prerelease,
            assets,
        }
    }

    #[test]
    fn test_published_release_with_docs_is_eligible() {
        let r = release(
            Some(false),
            Some(false),
            vec![
                asset("app.zip", "https://example.com/app.zip"),
                asset("docs.tar.gz", "https://example.com/docs.tar.gz"),
            ],
        );
        assert_eq!(
            Release::from_github(&r),
            Some(Release {
                tag: "v1.0.0".to_string(),
                docs_url: "https://example.com/docs.tar.gz".to_string(),
            })
        );
    }

    #[test]
    fn test_absent_flags_are_permissive() {
        let r = release(None, None, vec![asset("docs.tar.gz", "https://example.com/d")]);
        assert!(Release::from_github(&r).is_some());
    }

    #[test]
    fn test_draft_is_rejected() {
        let r = release(Some(true), None, vec![asset("docs.tar.gz", "https://example.com/d")]);
        assert!(Release::from_github(&r).is_none());
    }

    #[test]
    fn test_prerelease_is_rejected() {
        let r = release(None, Some(true), vec![asset("docs.tar.gz", "https://example.com/d")]);
        assert!(Release::from_github(&r).is_none());
    }

    #[test]
    fn test_missing_docs_asset_is_rejected() {
        let r = release(None, None, vec![asset("docs.zip", "https://example.com/d")]);
        assert!(Release::from_github(&r).is_none());
        assert!(Release::from_github(&release(None, None, vec![])).is_none());
    }

    #[test]
    fn test_asset_name_match_is_case_sensitive() {
        let r = release(None, None, vec![asset("Docs.tar.gz", "https://example.com/d")]);
        assert!(Release::from_github(&r).is_none());
    }

    #[test]
    fn test_empty_or_missing_url_is_rejected() {
        let r = release(None, None, vec![asset("docs.tar.gz", "")]);
        assert!(Release::from_github(&r).is_none());

        let r = release(
            None,
            None,
            vec![GitHubAsset {
                name: Some("docs.tar.gz".to_string()),
                browser_download_url: None,
            }],
        );
        assert!(Release::from_github(&r).is_none());
    }

    #[test]
    fn test_first_matching_asset_wins() {
        let r = release(
            None,
            None,
            vec![
                asset("docs.tar.gz", "https://example.com/first"),
                asset("docs.tar.gz", "https://example.com/second"),
            ],
        );
        assert_eq!(
            Release::from_github(&r).map(|r| r.docs_url),
            Some("https://example.com/first".to_string())
        );
    }
}
