// Declare modules
pub mod cli;
pub mod config;
pub mod editorconfig;
pub mod error;
pub mod formatter;
pub mod host;
pub mod models;
pub mod reindent;
pub mod runner;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::process::ExitCode;

use self::cli::Cli;
use self::config::resolve_config;
use self::formatter::SummaryFormatter;
use self::host::{ConsoleNotifier, FileBuffer, LocalFs, Notifier};

pub use self::error::ReindentError;
pub use self::models::{FileCandidate, IndentSetting, IndentStyle, RunConfig, RunSummary};

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<ExitCode> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Configuration
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let config = resolve_config(args, &current_dir)?;

    // 3. Reindent
    let notifier = ConsoleNotifier;
    match execute(&config, &notifier) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            notifier.error(&err.to_string());
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Runs either the project-wide or the single-file command and reports the result.
pub fn execute(config: &RunConfig, notifier: &impl Notifier) -> Result<(), ReindentError> {
    let message = match &config.single_file {
        Some(path) => {
            let summary = runner::run_single(config, || {
                FileBuffer::open(LocalFs, path).map_err(|source| ReindentError::FileOpenError {
                    path: path.clone(),
                    source,
                })
            })?;
            SummaryFormatter::single_file_summary(&summary, config.dry_run)
        }
        None => {
            let summary = runner::run_all(config, &LocalFs)?;
            SummaryFormatter::project_summary(&summary, config.dry_run)
        }
    };

    if config.show_results {
        notifier.inform(&message);
    }
    Ok(())
}
