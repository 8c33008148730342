use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReindentError {
    #[error(".editorconfig not found or unreadable at {path}: {source}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid or missing `{key}` in .editorconfig: {reason}")]
    InvalidConfig { key: &'static str, reason: String },

    #[error("Failed to read file {path}: {source}")]
    FileOpenError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid exclude pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Cannot list directory {path}: {reason}")]
    DirectoryUnreadable { path: PathBuf, reason: String },
}
