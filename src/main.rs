// SPDX-License-Identifier: MIT

//! Pixname CLI - rename images with a vision language model

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};

use pixname::batch::{rename_directory, BatchOptions};
use pixname::openai::{OpenAiClient, DEFAULT_API_URL};
use pixname::slug::DEFAULT_MAX_SLUG_LEN;

/// Pixname CLI - rename images using a vision model
#[derive(Parser, Debug)]
#[command(name = "pixname")]
#[command(version)]
#[command(about = "Rename images in a directory using a vision language model", long_about = None)]
struct Cli {
    /// Directory containing the images to rename
    path: PathBuf,

    /// Model identifier passed to the naming service
    #[arg(long, default_value = "gpt-4o-mini")]
    model: String,

    /// Show planned renames without changing files
    #[arg(long)]
    dry_run: bool,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Maximum slug length
    #[arg(long, default_value_t = DEFAULT_MAX_SLUG_LEN)]
    max_length: usize,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,

    /// Suppress non-essential output (quiet mode)
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.dry_run {
        warn!("DRY RUN MODE - files will not be renamed");
    }

    let client = match OpenAiClient::from_env(&cli.api_url) {
        Ok(client) => client,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let opts = BatchOptions {
        model: cli.model,
        dry_run: cli.dry_run,
        max_length: cli.max_length,
    };

    match rename_directory(&cli.path, &client, &opts).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_defaults() {
        let cli = Cli::try_parse_from(["pixname", "/tmp/photos"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("/tmp/photos"));
        assert_eq!(cli.model, "gpt-4o-mini");
        assert_eq!(cli.max_length, 40);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_cli_parsing_flags() {
        let cli = Cli::try_parse_from([
            "pixname",
            "/tmp/photos",
            "--dry-run",
            "--model",
            "gpt-4o",
            "--max-length",
            "30",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert_eq!(cli.model, "gpt-4o");
        assert_eq!(cli.max_length, 30);
    }

    #[test]
    fn test_cli_requires_path() {
        assert!(Cli::try_parse_from(["pixname"]).is_err());
    }
}
