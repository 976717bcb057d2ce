use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analyzer::parsed_query::CLAUSE_SHAPE;
use crate::analyzer::{
    ListSplitter, normalize, parameter_tokens, strip_comments, unique_parameters,
};

static SELECT_FROM_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)SELECT\s+.+?\s+FROM\s").unwrap());
static SELECT_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)SELECT\s+\*\s+FROM").unwrap());
static SELECT_DISTINCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)SELECT\s+DISTINCT").unwrap());
static COLUMN_CHARSET: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.\s()/*+-]").unwrap());

/// Destructive statement shapes that must never reach the report runner.
/// Each match produces its own error, labeled with the human-readable form.
static SAFETY_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)DROP\s+TABLE", "DROP TABLE"),
        (r"(?i)TRUNCATE\s+TABLE", "TRUNCATE TABLE"),
        (r"(?i)DELETE\s+FROM", "DELETE FROM"),
        (r"(?i)ALTER\s+TABLE", "ALTER TABLE"),
        (r"(?i);\s*DROP", "; DROP"),
        (r"(?i);\s*DELETE", "; DELETE"),
    ]
    .into_iter()
    .map(|(pattern, label)| (Regex::new(pattern).unwrap(), label))
    .collect()
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> ValidationResult {
        ValidationResult {
            is_valid: true,
            errors: vec![],
            warnings: vec![],
        }
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.is_valid = false;
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

/// Coarse validation of a single candidate SELECT statement.
///
/// Only the empty-input case returns early; every other rule runs against
/// the comment-stripped, whitespace-normalized text and contributes
/// independently, so the caller gets the full picture in one pass.
pub fn validate(sql: &str) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if sql.trim().is_empty() {
        result.error("Query cannot be empty");
        return result;
    }

    let normalized = normalize(&strip_comments(sql));

    if !SELECT_FROM_SHAPE.is_match(&normalized) {
        result.error("Query must start with SELECT and include FROM clause");
    }

    for (pattern, label) in SAFETY_PATTERNS.iter() {
        if pattern.is_match(&normalized) {
            result.error(format!(
                "Invalid SQL: contains potentially harmful pattern '{label}'"
            ));
        }
    }

    // the same parameter appearing twice is benign reuse, so this stays a warning
    let raw_parameters = parameter_tokens(&normalized);
    if raw_parameters.len() > unique_parameters(&normalized).len() {
        result.warn("Duplicate parameter names detected");
    }

    if SELECT_STAR.is_match(&normalized) {
        result.warn("Using SELECT * is not recommended. Please specify columns explicitly.");
    }

    if SELECT_DISTINCT.is_match(&normalized) {
        result.warn("DISTINCT operation may impact performance on large datasets");
    }

    check_statement_structure(&normalized, &mut result);

    result
}

/// Advisory check for auxiliary pre-query blocks: nudges statement
/// termination, never errors, never parses structure.
pub fn validate_pre_query(sql: &str) -> ValidationResult {
    check_terminated(sql)
}

/// Advisory check for auxiliary post-query blocks.
pub fn validate_post_query(sql: &str) -> ValidationResult {
    check_terminated(sql)
}

fn check_terminated(sql: &str) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if !sql.trim().ends_with(';') {
        result.warn("Consider terminating SQL statements with semicolon");
    }

    result
}

/// Deeper structural checks, applied only once the statement has a usable
/// SELECT ... FROM shape.
fn check_statement_structure(normalized: &str, result: &mut ValidationResult) {
    let Some(caps) = CLAUSE_SHAPE.captures(normalized) else {
        return;
    };

    if normalized.matches('(').count() != normalized.matches(')').count() {
        result.error("Unmatched parentheses in query");
    }

    for (index, fragment) in ListSplitter::split_top_level(&caps[1]).iter().enumerate() {
        if fragment.is_empty() {
            result.error(format!(
                "Empty column found at position {}. Check for extra commas or invalid syntax.",
                index + 1
            ));
        } else if COLUMN_CHARSET.is_match(fragment) {
            result.error(format!(
                "Invalid character in column: \"{fragment}\". Only letters, numbers, underscores, and basic operators are allowed."
            ));
        }
    }

    let lowered = normalized.to_lowercase();

    if let (Some(where_at), Some(from_at)) = (lowered.find(" where "), lowered.find(" from ")) {
        if where_at < from_at {
            result.error("WHERE clause must come after FROM clause");
        }
    }

    if let (Some(order_at), Some(group_at)) = (lowered.find(" order "), lowered.find(" group ")) {
        if order_at < group_at {
            result.error("ORDER BY must come after GROUP BY");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::analyzer::{validate, validate_post_query, validate_pre_query};

    #[test]
    pub fn test_empty_query() {
        let result = validate("");

        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Query cannot be empty"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    pub fn test_whitespace_only_query() {
        let result = validate("   \n\t ");

        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Query cannot be empty"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    pub fn test_clean_query() {
        let result = validate("SELECT a, b FROM t");

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    pub fn test_multiline_query_is_normalized_first() {
        let result = validate("SELECT a,\n       b\nFROM   t");

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    pub fn test_missing_from() {
        let result = validate("SELECT a");

        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec!["Query must start with SELECT and include FROM clause"]
        );
    }

    #[test]
    pub fn test_select_star_warns_but_stays_valid() {
        let result = validate("SELECT * FROM t");

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert_eq!(
            result.warnings,
            vec!["Using SELECT * is not recommended. Please specify columns explicitly."]
        );
    }

    #[test]
    pub fn test_select_distinct_warns() {
        let result = validate("SELECT DISTINCT region FROM sales");

        assert!(result.is_valid);
        assert_eq!(
            result.warnings,
            vec!["DISTINCT operation may impact performance on large datasets"]
        );
    }

    #[test]
    pub fn test_drop_table_is_rejected() {
        let result = validate("DROP TABLE t");

        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("DROP TABLE")));
    }

    #[test]
    pub fn test_piggybacked_drop_is_rejected() {
        let result = validate("SELECT a FROM t; DROP TABLE t");

        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("DROP TABLE")));
        assert!(result.errors.iter().any(|e| e.contains("; DROP")));
    }

    #[test]
    pub fn test_safety_patterns_tolerate_extra_whitespace() {
        let result = validate("delete\n  from t");

        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("DELETE FROM")));
    }

    #[test]
    pub fn test_duplicate_parameters_warn() {
        let result = validate("SELECT a FROM t WHERE x = :p AND y = :p");

        assert!(result.is_valid);
        assert_eq!(result.warnings, vec!["Duplicate parameter names detected"]);
    }

    #[test]
    pub fn test_distinct_parameters_do_not_warn() {
        let result = validate("SELECT a FROM t WHERE x = :p AND y = :q");

        assert!(result.is_valid);
        assert!(result.warnings.is_empty());
    }

    #[test]
    pub fn test_unmatched_parentheses() {
        let result = validate("SELECT a FROM t WHERE (x = 1");

        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("Unmatched parentheses")));
    }

    #[test]
    pub fn test_comment_with_unpaired_paren_does_not_block() {
        let result = validate("SELECT a FROM t -- filter (optional");

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    pub fn test_block_comment_with_stray_comma_does_not_block() {
        let result = validate("SELECT a /* was: a, b */ FROM t");

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    pub fn test_empty_column_slot() {
        let result = validate("SELECT a,, b FROM t");

        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("Empty column found at position 2")));
    }

    #[test]
    pub fn test_invalid_character_in_column() {
        let result = validate("SELECT a; b FROM t");

        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("Invalid character in column")));
    }

    #[test]
    pub fn test_function_column_passes_charset() {
        let result = validate("SELECT COUNT(a), price * qty FROM t");

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    pub fn test_order_by_before_group_by() {
        let result = validate("SELECT a FROM t ORDER BY a GROUP BY a");

        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("ORDER BY must come after GROUP BY")));
    }

    #[test]
    pub fn test_pre_query_without_semicolon_warns() {
        let result = validate_pre_query("UPDATE t SET x = 1");

        assert!(result.is_valid);
        assert_eq!(
            result.warnings,
            vec!["Consider terminating SQL statements with semicolon"]
        );
    }

    #[test]
    pub fn test_pre_query_with_semicolon_is_clean() {
        let result = validate_pre_query("UPDATE t SET x = 1;");

        assert!(result.is_valid);
        assert!(result.warnings.is_empty());
    }

    #[test]
    pub fn test_post_query_without_semicolon_warns() {
        let result = validate_post_query("ANALYZE t");

        assert!(result.is_valid);
        assert_eq!(
            result.warnings,
            vec!["Consider terminating SQL statements with semicolon"]
        );
    }

    #[test]
    pub fn test_serialized_shape_uses_camel_case() {
        let result = validate("SELECT a, b FROM t");

        let json = serde_json::to_value(&result).expect("Failed to serialize validation result");

        assert_eq!(json["isValid"], true);
        assert!(json["errors"].as_array().expect("errors array").is_empty());
    }
}
