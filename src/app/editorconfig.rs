//! Reads the two indentation keys out of an `.editorconfig`-style file.
//!
//! Only `indent_style` and `indent_size` are recognized. Sections, globs and
//! every other directive are ignored.

use crate::app::error::ReindentError;
use crate::app::models::{IndentSetting, IndentStyle};
use regex::Regex;
use std::fs;
use std::path::Path;

pub const INDENT_STYLE_KEY: &str = "indent_style";
pub const INDENT_SIZE_KEY: &str = "indent_size";

/// Largest accepted `indent_size`.
pub const MAX_INDENT_SIZE: usize = 64;

/// Reads `config_path` fully and parses it.
pub fn load(config_path: &Path) -> Result<IndentSetting, ReindentError> {
    let content =
        fs::read_to_string(config_path).map_err(|source| ReindentError::ConfigNotFound {
            path: config_path.to_path_buf(),
            source,
        })?;
    log::debug!("Loaded {} bytes from {}", content.len(), config_path.display());

    parse(&content)
}

/// Extracts an [`IndentSetting`] from config text. Both keys must be present and valid.
pub fn parse(content: &str) -> Result<IndentSetting, ReindentError> {
    let style_raw = find_value(content, INDENT_STYLE_KEY).ok_or(ReindentError::InvalidConfig {
        key: INDENT_STYLE_KEY,
        reason: "key not found".to_string(),
    })?;
    let size_raw = find_value(content, INDENT_SIZE_KEY).ok_or(ReindentError::InvalidConfig {
        key: INDENT_SIZE_KEY,
        reason: "key not found".to_string(),
    })?;

    let style = IndentStyle::from_token(&style_raw).ok_or_else(|| ReindentError::InvalidConfig {
        key: INDENT_STYLE_KEY,
        reason: format!("expected `space` or `tab`, got `{}`", style_raw),
    })?;
    let width = parse_width(&size_raw)?;

    log::info!("Indent style: {}, indent size: {}", style, width);
    Ok(IndentSetting { style, width })
}

fn parse_width(raw: &str) -> Result<usize, ReindentError> {
    let invalid = |reason: String| ReindentError::InvalidConfig {
        key: INDENT_SIZE_KEY,
        reason,
    };

    let value: i64 = raw
        .parse()
        .map_err(|_| invalid(format!("`{}` is not a base-10 integer", raw)))?;
    if value <= 0 {
        return Err(invalid(format!("`{}` must be a positive integer", value)));
    }
    match usize::try_from(value) {
        Ok(width) if width <= MAX_INDENT_SIZE => Ok(width),
        _ => Err(invalid(format!(
            "`{}` is larger than the maximum of {}",
            value, MAX_INDENT_SIZE
        ))),
    }
}

/// Value of the first line matching `^key\s*=\s*(.+)$`, trimmed.
///
/// Later duplicates are ignored even when the first one holds an unusable value.
fn find_value(content: &str, key: &str) -> Option<String> {
    let pattern = Regex::new(&format!(r"^{}\s*=\s*(.+)$", regex::escape(key))).ok()?;

    content
        .lines()
        .find_map(|line| pattern.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}
