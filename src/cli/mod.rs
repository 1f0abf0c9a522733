//! Command line interface for docs_releases.

mod args;
mod commands;

pub use args::{Args, Command};
pub use commands::{EXIT_NOT_FOUND, execute_command, service_config};

/// Main CLI entry point
pub async fn run() -> anyhow::Result<i32> {
    let args = Args::parse_args();
    execute_command(args).await
}
