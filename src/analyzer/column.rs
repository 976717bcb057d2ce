use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analyzer::AliasSplit;

static QUALIFIED_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\.([A-Za-z_][A-Za-z0-9_]*)$").unwrap());
static NON_IDENTIFIER_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.]").unwrap());

/// One item of a SELECT list. Descriptor order follows declaration order,
/// which is the report column order downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_prefix: Option<String>,
    pub is_expression: bool,
}

impl ColumnDescriptor {
    /// Builds a descriptor from one trimmed SELECT-list fragment.
    ///
    /// `name` resolves to the alias when one is present, else to the trailing
    /// part of a plain `table.column` reference, else to the whole source
    /// text. `is_expression` flags any source text that is not a plain,
    /// possibly dotted, identifier.
    pub fn from_fragment(fragment: &str) -> ColumnDescriptor {
        let AliasSplit { source, alias } = AliasSplit::detect(fragment);

        let (table_prefix, trailing) = match QUALIFIED_REFERENCE.captures(&source) {
            Some(caps) => (Some(caps[1].to_string()), caps[2].to_string()),
            None => (None, source.clone()),
        };

        ColumnDescriptor {
            name: alias.clone().unwrap_or(trailing),
            alias,
            table_prefix,
            is_expression: NON_IDENTIFIER_CHAR.is_match(&source),
        }
    }
}

impl fmt::Display for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table_prefix {
            Some(prefix) => write!(f, "col: {}.{}", prefix, self.name),
            None => write!(f, "col: {}", self.name),
        }
    }
}
