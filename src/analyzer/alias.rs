use once_cell::sync::Lazy;
use regex::Regex;

use crate::analyzer::is_clause_keyword;

static EXPLICIT_ALIAS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(.+?)\s+AS\s+([A-Za-z_][A-Za-z0-9_]*)$").unwrap());
static BARE_ALIAS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s+([A-Za-z_][A-Za-z0-9_]*)$").unwrap());

/// A SELECT-list or FROM-list fragment split into its source text and the
/// alias introduced by `AS alias` or by a bare trailing identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasSplit {
    pub source: String,
    pub alias: Option<String>,
}

impl AliasSplit {
    pub fn detect(fragment: &str) -> AliasSplit {
        let fragment = fragment.trim();

        if let Some(caps) = EXPLICIT_ALIAS.captures(fragment) {
            return AliasSplit {
                source: caps[1].trim().to_string(),
                alias: Some(caps[2].to_string()),
            };
        }

        if let Some(caps) = BARE_ALIAS.captures(fragment) {
            // "GROUP BY x" style text must not read as "<keyword> aliased by
            // x"; the token right before the candidate alias decides.
            let source = caps[1].trim();
            let preceding = source.split_whitespace().last().unwrap_or(source);
            if !is_clause_keyword(preceding) {
                return AliasSplit {
                    source: source.to_string(),
                    alias: Some(caps[2].to_string()),
                };
            }
        }

        AliasSplit {
            source: fragment.to_string(),
            alias: None,
        }
    }
}
