//! Release queries: fetch, filter to docs-carrying releases, sort by version.

use crate::config::ServiceConfig;
use crate::error::{ReleaseError, Result};
use crate::github::GitHubClient;
use crate::release::{Release, sort_releases};
use log::{debug, info, warn};

/// Largest page size the releases endpoint accepts
pub const MAX_PER_PAGE: u8 = 100;

/// Read-only query service over the releases of one organization.
///
/// Construction never fails and performs no I/O. The service holds no
/// mutable state, so clones can be used concurrently.
#[derive(Debug, Clone)]
pub struct ReleaseService {
    client: GitHubClient,
}

impl ReleaseService {
    /// Create a service from configuration
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            client: GitHubClient::new(config),
        }
    }

    /// Create a service on top of a caller-owned HTTP client.
    ///
    /// Timeouts, proxies and connection pooling are whatever `http` was
    /// built with; the service adds none of its own.
    pub fn with_http_client(config: ServiceConfig, http: reqwest::Client) -> Self {
        Self {
            client: GitHubClient::with_http_client(config, http),
        }
    }

    /// Organization the service queries
    pub fn organization(&self) -> &str {
        self.client.organization()
    }

    /// List published releases of `project` carrying a `docs.tar.gz` asset,
    /// sorted ascending by semantic version.
    ///
    /// Only the first page (up to 100 releases) is fetched unless `all` is
    /// set, in which case pages are followed sequentially until GitHub stops
    /// advertising a next page. A failure on any page discards everything
    /// collected so far.
    ///
    /// # Errors
    /// - `ReleaseError::InvalidArgument` - `project` is empty
    /// - `ReleaseError::InvalidVersion` - an eligible release has a tag that
    ///   is not a semantic version
    /// - any transport error from the API
    pub async fn list_releases(&self, project: &str, all: bool) -> Result<Vec<Release>> {
        require_non_empty("project", project)?;

        let mut releases = Vec::new();
        let mut page = 1;
        loop {
            debug!(
                "Fetching releases page {page} for {}/{project}",
                self.organization()
            );
            let response = self.client.list_releases(project, page, MAX_PER_PAGE).await?;
            let fetched = response.releases.len();
            releases.extend(response.releases.iter().filter_map(Release::from_github));
            debug!("Page {page}: {fetched} release(s), {} eligible so far", releases.len());

            match response.next_page {
                Some(next) if all && next > page => page = next,
                Some(next) if all => {
                    warn!("Ignoring non-advancing next page {next} after page {page}");
                    break;
                }
                _ => break,
            }
        }

        let releases = sort_releases(releases)?;
        info!(
            "Found {} release(s) with docs for {}/{project}",
            releases.len(),
            self.organization()
        );
        Ok(releases)
    }

    /// Fetch the release of `project` tagged exactly `tag`.
    ///
    /// # Errors
    /// - `ReleaseError::NotFound` - no such tag, or the release is a draft,
    ///   a prerelease, or has no `docs.tar.gz` asset
    /// - `ReleaseError::InvalidArgument` - `project` or `tag` is empty
    /// - any other transport error from the API, unchanged
    pub async fn get_release(&self, project: &str, tag: &str) -> Result<Release> {
        require_non_empty("project", project)?;
        require_non_empty("tag", tag)?;

        let not_found = || ReleaseError::NotFound {
            project: project.to_string(),
            tag: tag.to_string(),
        };

        let Some(release) = self.client.get_release_by_tag(project, tag).await? else {
            debug!("No release tagged {tag} in {}/{project}", self.organization());
            return Err(not_found());
        };

        match Release::from_github(&release) {
            Some(release) => Ok(release),
            None => {
                warn!(
                    "Release {tag} of {}/{project} is not eligible for docs",
                    self.organization()
                );
                Err(not_found())
            }
        }
    }
}

fn require_non_empty(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReleaseError::InvalidArgument {
            reason: format!("{name} must not be empty"),
        });
    }
    Ok(())
}
