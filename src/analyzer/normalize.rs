use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"--[^\r\n]*").unwrap());
static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Collapses whitespace and break-line runs into single spaces and trims the ends.
pub fn normalize(sql: &str) -> String {
    WHITESPACE_RUN.replace_all(sql, " ").trim().to_string()
}

/// Removes `-- line` and `/* block */` comments before structural analysis.
pub fn strip_comments(sql: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(sql, " ");
    LINE_COMMENT.replace_all(&without_blocks, " ").to_string()
}
