use std::fmt;
use std::path::PathBuf;

/// Default suffixes eligible for a bulk reindent.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".lua", ".md", ".markdown"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    Space,
    Tab,
}

impl IndentStyle {
    /// Exact, case-sensitive match against the two recognized tokens.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "space" => Some(IndentStyle::Space),
            "tab" => Some(IndentStyle::Tab),
            _ => None,
        }
    }
}

impl fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentStyle::Space => f.write_str("space"),
            IndentStyle::Tab => f.write_str("tab"),
        }
    }
}

/// Indentation declared by the project config. `width` is always > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentSetting {
    pub style: IndentStyle,
    pub width: usize,
}

/// Everything a run needs, resolved once from the CLI and the settings file.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub extensions: Vec<String>,
    pub exclude: Vec<String>,
    pub single_file: Option<PathBuf>,
    pub show_results: bool,
    pub dry_run: bool,
}

/// A file discovered during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub path: PathBuf,
    pub relative_path: String,
}

/// Counters for a single invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub files_failed: usize,
}
