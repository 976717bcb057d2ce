use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analyzer::{
    ColumnDescriptor, ListSplitter, TableDescriptor, normalize, strip_comments, unique_parameters,
};

/// One pass splits the statement into its clause texts: column list between
/// SELECT and FROM (non-greedy), table list between FROM and an optional
/// WHERE, and the WHERE predicate to the end of the statement.
pub(crate) static CLAUSE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)SELECT\s+(.+?)\s+FROM\s+(.+?)(?:\s+WHERE\s+(.+))?$").unwrap());

/// Structural decomposition of a single SELECT statement, recomputed on
/// every input change and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuery {
    pub columns: Vec<ColumnDescriptor>,
    pub tables: Vec<TableDescriptor>,
    pub conditions: Vec<String>,
    pub parameters: Vec<String>,
}

/// Best-effort structural analysis of a single SELECT statement.
///
/// Never fails: when no SELECT ... FROM shape is found the result is an
/// empty `ParsedQuery`, so the consuming UI keeps rendering while the user
/// types. The fallback leaves a debug event on the `tracing` subscriber for
/// anyone who needs to tell "nothing found" apart from a caller bug.
pub fn parse(sql: &str) -> ParsedQuery {
    match parse_statement(sql) {
        Some(parsed) => parsed,
        None => {
            tracing::debug!(
                input = sql,
                "no SELECT ... FROM shape found, returning empty parse result"
            );
            ParsedQuery::default()
        }
    }
}

fn parse_statement(sql: &str) -> Option<ParsedQuery> {
    let normalized = normalize(&strip_comments(sql));
    let caps = CLAUSE_SHAPE.captures(&normalized)?;

    let columns = ListSplitter::split_top_level(&caps[1])
        .into_iter()
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| ColumnDescriptor::from_fragment(&fragment))
        .collect();

    let tables = ListSplitter::split_top_level(&caps[2])
        .into_iter()
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| TableDescriptor::from_fragment(&fragment))
        .collect();

    // parameters are bound in the WHERE clause, so only that text is scanned
    let (conditions, parameters) = match caps.get(3) {
        Some(predicate) => (
            ListSplitter::split_conditions(predicate.as_str()),
            unique_parameters(predicate.as_str()),
        ),
        None => (vec![], vec![]),
    };

    Some(ParsedQuery {
        columns,
        tables,
        conditions,
        parameters,
    })
}
