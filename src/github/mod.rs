//! GitHub REST API access for release queries

mod client;
mod models;
mod pagination;

pub use client::{GitHubClient, ReleasePage};
pub use models::{GitHubAsset, GitHubErrorBody, GitHubRelease};
pub use pagination::next_page;
