use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Reapply .editorconfig indentation to project files"
)]
pub struct Cli {
    /// Project root to scan (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Path to the config file (defaults to <root>/.editorconfig)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// File suffixes to process (e.g., '.lua' '.md')
    #[arg(long = "ext", num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    /// Glob patterns, relative to the root, for files or directories to skip
    #[arg(long, num_args = 1..)]
    pub exclude: Option<Vec<String>>,

    /// Reindent only this file instead of the whole project
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Do not print a summary after the run
    #[arg(long)]
    pub quiet: bool,

    /// Use a named profile from settings.toml
    #[arg(long)]
    pub settings: Option<String>,
}
