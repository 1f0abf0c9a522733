//! Docs Releases - list GitHub releases that ship a documentation archive.

use docs_releases::ReleaseError;
use docs_releases::cli;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("Fatal error: {e:#}");

            // Show recovery suggestions for query errors
            if let Some(release_error) = e.downcast_ref::<ReleaseError>() {
                let suggestions = release_error.recovery_suggestions();
                if !suggestions.is_empty() {
                    eprintln!("\nRecovery suggestions:");
                    for suggestion in suggestions {
                        eprintln!("  {suggestion}");
                    }
                }
            }

            process::exit(1);
        }
    }
}
