use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analyzer::AliasSplit;

/// One item of a FROM list. Explicit `JOIN` text that is not comma-separated
/// stays part of `name`; joins are not decomposed further.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl TableDescriptor {
    pub fn from_fragment(fragment: &str) -> TableDescriptor {
        let AliasSplit { source, alias } = AliasSplit::detect(fragment);

        TableDescriptor {
            name: source,
            alias,
        }
    }
}

impl fmt::Display for TableDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "table: {} ({})", self.name, alias),
            None => write!(f, "table: {}", self.name),
        }
    }
}
