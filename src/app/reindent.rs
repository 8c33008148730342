//! Leading-whitespace normalization.
//!
//! A line's indentation is measured as a flat column count where every tab is
//! worth `width` columns and every space is worth one. That count is then
//! rendered back in the target style. Nothing after the first character that
//! is neither a space nor a tab is touched.

use crate::app::models::{IndentSetting, IndentStyle};

/// Reindents a single line (without its trailing `'\n'`).
///
/// A line whose column count does not fit in `usize` is returned unchanged.
pub fn reindent_line(line: &str, setting: &IndentSetting) -> String {
    let (leading, content) = split_indent(line);
    let Some(columns) = indent_columns(leading, setting.width) else {
        return line.to_string();
    };

    let mut out = render_indent(columns, setting);
    out.push_str(content);
    out
}

/// Reindents every `'\n'`-separated line of `text`.
///
/// An N-newline input yields N+1 segments, so a trailing newline survives as
/// an empty final segment and line breaks round-trip exactly.
pub fn reindent_text(text: &str, setting: &IndentSetting) -> String {
    text.split('\n')
        .map(|line| reindent_line(line, setting))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits off the maximal prefix made only of `' '` and `'\t'`.
pub fn split_indent(line: &str) -> (&str, &str) {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    line.split_at(end)
}

fn indent_columns(leading: &str, width: usize) -> Option<usize> {
    let tabs = leading.bytes().filter(|&b| b == b'\t').count();
    let spaces = leading.len() - tabs;
    tabs.checked_mul(width)?.checked_add(spaces)
}

fn render_indent(columns: usize, setting: &IndentSetting) -> String {
    match setting.style {
        IndentStyle::Space => " ".repeat(columns),
        IndentStyle::Tab => {
            let mut indent = "\t".repeat(columns / setting.width);
            indent.push_str(&" ".repeat(columns % setting.width));
            indent
        }
    }
}
