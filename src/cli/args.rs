//! Command line argument parsing and validation.

use clap::{Parser, Subcommand};

/// Query GitHub releases that ship documentation
#[derive(Parser, Debug)]
#[command(
    name = "docs_releases",
    version,
    about = "List GitHub releases that ship a docs.tar.gz asset",
    long_about = "List published GitHub releases that carry a docs.tar.gz asset, sorted by semantic version.

Usage:
  docs_releases --org acme list widgets
  docs_releases --org acme list widgets --all --json
  docs_releases --org acme get widgets v1.2.0

The token is read from --token, GH_TOKEN or GITHUB_TOKEN; requests are
unauthenticated without one. DOCS_RELEASES_API_URL points the tool at a
GitHub Enterprise API."
)]
pub struct Args {
    /// Organization (or user) owning the projects
    #[arg(long, env = "DOCS_RELEASES_ORG", global = true)]
    pub org: Option<String>,

    /// GitHub access token
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// GitHub API base URL
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Query to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available queries
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List releases with docs, oldest version first
    List {
        /// Project (repository) name
        project: String,

        /// Follow every page instead of only the latest 100 releases
        #[arg(long)]
        all: bool,
    },

    /// Show the release with exactly this tag
    Get {
        /// Project (repository) name
        project: String,

        /// Release tag as stored on GitHub
        tag: String,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.org.as_deref().is_none_or(|org| org.trim().is_empty()) {
            return Err(
                "An organization is required. Use --org or set DOCS_RELEASES_ORG".to_string(),
            );
        }

        match &self.command {
            Command::List { project, .. } if project.trim().is_empty() => {
                Err("project must not be empty".to_string())
            }
            Command::Get { project, .. } if project.trim().is_empty() => {
                Err("project must not be empty".to_string())
            }
            Command::Get { tag, .. } if tag.trim().is_empty() => {
                Err("tag must not be empty".to_string())
            }
            _ => Ok(()),
        }
    }
}
