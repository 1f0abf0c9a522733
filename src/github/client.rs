//! Thin client over the GitHub releases endpoints.
//!
//! Each method issues exactly one HTTP request. Paging, filtering and
//! ordering live in [`crate::service`].

use super::models::{GitHubErrorBody, GitHubRelease};
use super::pagination;
use crate::config::ServiceConfig;
use crate::error::{ReleaseError, Result};
use log::debug;
use reqwest::header::{ACCEPT, LINK, USER_AGENT};
use reqwest::{Response, StatusCode};
use url::Url;

const GITHUB_JSON: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";

/// One page of the release listing
#[derive(Debug, Clone, Default)]
pub struct ReleasePage {
    /// Releases in the order GitHub returned them
    pub releases: Vec<GitHubRelease>,
    /// Page number advertised by the `rel="next"` link
    pub next_page: Option<u32>,
}

/// GitHub REST client bound to one organization
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl GitHubClient {
    /// Create a client with its own connection pool
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a client on top of a caller-provided `reqwest::Client`
    pub fn with_http_client(config: ServiceConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    /// Organization every request is scoped to
    pub fn organization(&self) -> &str {
        &self.config.organization
    }

    /// `GET /repos/{org}/{project}/releases?per_page={per_page}&page={page}`
    pub async fn list_releases(
        &self,
        project: &str,
        page: u32,
        per_page: u8,
    ) -> Result<ReleasePage> {
        let mut url = self.endpoint(&[
            "repos",
            self.config.organization.as_str(),
            project,
            "releases",
        ])?;
        url.query_pairs_mut()
            .append_pair("per_page", &per_page.to_string())
            .append_pair("page", &page.to_string());

        let response = check_status(self.get(url).await?).await?;
        let next_page = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(pagination::next_page);
        let releases = response.json::<Vec<GitHubRelease>>().await?;

        Ok(ReleasePage {
            releases,
            next_page,
        })
    }

    /// `GET /repos/{org}/{project}/releases/tags/{tag}`
    ///
    /// # Returns
    /// - `Ok(Some(_))` - Release exists
    /// - `Ok(None)` - GitHub answered 404
    /// - `Err(_)` - Network, authentication or any other API error
    pub async fn get_release_by_tag(
        &self,
        project: &str,
        tag: &str,
    ) -> Result<Option<GitHubRelease>> {
        let url = self.endpoint(&[
            "repos",
            self.config.organization.as_str(),
            project,
            "releases",
            "tags",
            tag,
        ])?;

        let response = self.get(url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let release = check_status(response).await?.json::<GitHubRelease>().await?;
        Ok(Some(release))
    }

    async fn get(&self, url: Url) -> Result<Response> {
        debug!("GET {url}");

        let mut request = self
            .http
            .get(url)
            .header(ACCEPT, GITHUB_JSON)
            .header(USER_AGENT, &self.config.user_agent)
            .header(API_VERSION_HEADER, API_VERSION);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        Ok(request.send().await?)
    }

    /// Join percent-encoded path segments onto the configured base URL
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let base = &self.config.api_base_url;
        let invalid = |reason: String| ReleaseError::InvalidUrl {
            url: base.clone(),
            reason,
        };

        let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Map non-success responses onto [`ReleaseError`]
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let headers = response.headers();
    let remaining = header_u64(headers, "x-ratelimit-remaining");
    if status == StatusCode::TOO_MANY_REQUESTS
        || (status == StatusCode::FORBIDDEN && remaining == Some(0))
    {
        return Err(ReleaseError::RateLimited {
            reset: header_u64(headers, "x-ratelimit-reset"),
        });
    }

    let body = response.text().await?;
    let message = match serde_json::from_str::<GitHubErrorBody>(&body) {
        Ok(error) => error.message,
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
        Err(_) => body,
    };

    Err(ReleaseError::Api {
        status: status.as_u16(),
        message,
    })
}

fn header_u64(headers: &reqwest::header::HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}
