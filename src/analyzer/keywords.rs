use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Clause keywords that must never be read as a bare column or table alias.
/// Dialect-specific guard words belong here, nowhere else.
static CLAUSE_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "SELECT", "FROM", "WHERE", "GROUP", "ORDER", "BY",
        "HAVING", "UNION", "INTERSECT", "EXCEPT",
    ])
});

pub fn is_clause_keyword(word: &str) -> bool {
    CLAUSE_KEYWORDS.contains(word.to_ascii_uppercase().as_str())
}
