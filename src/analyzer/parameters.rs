use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

static NAMED_PARAMETER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":[A-Za-z][A-Za-z0-9_]*").unwrap());

/// Every `:name` token in order of appearance, duplicates included.
pub fn parameter_tokens(text: &str) -> Vec<String> {
    NAMED_PARAMETER
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Unique `:name` tokens, first-appearance order preserved.
pub fn unique_parameters(text: &str) -> Vec<String> {
    let mut seen: IndexSet<String> = IndexSet::new();
    for token in NAMED_PARAMETER.find_iter(text) {
        seen.insert(token.as_str().to_string());
    }

    seen.into_iter().collect()
}
