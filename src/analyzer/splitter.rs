use once_cell::sync::Lazy;
use regex::Regex;

static AND_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+AND\s+").unwrap());

pub struct ListSplitter;

impl ListSplitter {
    /// Splits a comma-separated list on top-level commas only. Commas nested
    /// inside parentheses (function args, subexpressions) never split.
    /// Fragments come back trimmed; empty fragments are kept so callers can
    /// flag stray commas.
    pub fn split_top_level(text: &str) -> Vec<String> {
        let mut fragments = vec![];
        let mut current = String::new();
        let mut depth: usize = 0;

        for ch in text.chars() {
            match ch {
                '(' => {
                    depth += 1;
                    current.push(ch);
                }
                ')' => {
                    depth = depth.saturating_sub(1);
                    current.push(ch);
                }
                ',' if depth == 0 => {
                    fragments.push(current.trim().to_string());
                    current.clear();
                }
                _ => current.push(ch),
            }
        }

        fragments.push(current.trim().to_string());
        fragments
    }

    /// Splits a WHERE predicate on `AND` separators. The split is not
    /// paren-aware: an `AND` inside a parenthesized group still separates.
    pub fn split_conditions(text: &str) -> Vec<String> {
        AND_SEPARATOR
            .split(text)
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_string)
            .collect()
    }
}
