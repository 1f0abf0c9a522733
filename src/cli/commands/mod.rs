//! Command execution for the `list` and `get` queries.

use crate::cli::{Args, Command};
use crate::config::ServiceConfig;
use crate::release::Release;
use crate::service::ReleaseService;
use anyhow::Context;
use std::io::Write;

/// Exit code when a requested release does not exist or has no docs
pub const EXIT_NOT_FOUND: i32 = 2;

/// Execute the parsed command and return the process exit code
pub async fn execute_command(args: Args) -> anyhow::Result<i32> {
    if let Err(validation_error) = args.validate() {
        eprintln!("Invalid arguments: {validation_error}");
        return Ok(1);
    }

    let service = ReleaseService::new(service_config(&args));

    match &args.command {
        Command::List { project, all } => {
            let releases = service.list_releases(project, *all).await?;
            print_releases(&releases, args.json)?;
            Ok(0)
        }
        Command::Get { project, tag } => match service.get_release(project, tag).await {
            Ok(release) => {
                print_releases(std::slice::from_ref(&release), args.json)?;
                Ok(0)
            }
            Err(e) if e.is_not_found() => {
                eprintln!("{e}");
                Ok(EXIT_NOT_FOUND)
            }
            Err(e) => Err(e.into()),
        },
    }
}

/// Build the service configuration: environment first, flags override
pub fn service_config(args: &Args) -> ServiceConfig {
    let mut config = ServiceConfig::from_env(args.org.clone().unwrap_or_default());
    if let Some(token) = &args.token {
        config = config.with_token(token.as_str());
    }
    if let Some(url) = &args.api_url {
        config = config.with_api_base_url(url.as_str());
    }
    config
}

fn print_releases(releases: &[Release], json: bool) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, releases)
            .context("Failed to serialize releases")?;
        writeln!(stdout)?;
    } else {
        for release in releases {
            writeln!(stdout, "{}\t{}", release.tag, release.docs_url)?;
        }
    }
    stdout.flush().context("Failed to write to stdout")
}
