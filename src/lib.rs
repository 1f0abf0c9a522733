//! # Docs Releases
//!
//! Read-only queries over the GitHub releases of an organization's projects,
//! restricted to releases that ship a documentation archive.
//!
//! A release is listed only when it is published (not a draft, not a
//! prerelease) and has an asset named exactly `docs.tar.gz`. Results are
//! ordered by the semantic version of their tags.
//!
//! ## Features
//!
//! - **Pagination**: first page only, or every page via the `Link` header
//! - **Lookup by tag**: missing and ineligible releases report the same `NotFound`
//! - **Numeric ordering**: `v1.2.0 < v1.3.0 < v1.10.0`
//! - **Optional authentication**: bearer token from config or `GH_TOKEN`/`GITHUB_TOKEN`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use docs_releases::{ReleaseService, ServiceConfig};
//!
//! # async fn example() -> docs_releases::Result<()> {
//! let service = ReleaseService::new(ServiceConfig::from_env("acme"));
//! for release in service.list_releases("widgets", true).await? {
//!     println!("{} {}", release.tag, release.docs_url);
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod release;
pub mod service;

pub use config::ServiceConfig;
pub use error::{ReleaseError, Result};
pub use release::{DOCS_ASSET_NAME, Release};
pub use service::ReleaseService;
