use super::Schema;
use crate::{Error, Result};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Maps a table to the column shown to users in place of its surrogate key.
///
/// When a listing selects a foreign-key column, the referenced row is
/// displayed by this column (a doctor's specialization by its `name`, not its
/// numeric id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelMap {
    columns: IndexMap<String, String>,
}

impl LabelMap {
    /// An empty mapping; every lookup falls back.
    pub fn empty() -> Self {
        Self {
            columns: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, table: impl Into<String>, column: impl Into<String>) {
        self.columns.insert(table.into(), column.into());
    }

    pub fn with(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.insert(table, column);
        self
    }

    /// Returns the display column of `table`, or `fallback` (the foreign
    /// key's own target column) when the table has no entry.
    pub fn display_column<'a>(&'a self, table: &str, fallback: &'a str) -> &'a str {
        self.columns
            .get(table)
            .map(String::as_str)
            .unwrap_or(fallback)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.columns
            .iter()
            .map(|(table, column)| (table.as_str(), column.as_str()))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Checks every mapped display column against `schema`.
    ///
    /// Entries for tables the schema does not declare are never consulted
    /// and are ignored. An entry naming a column its table lacks fails with
    /// an invalid identifier error.
    pub fn verify(&self, schema: &Schema) -> Result<()> {
        for (table, column) in self.iter() {
            let Some(def) = schema.table(table) else {
                continue;
            };

            if !def.has_column(column) {
                return Err(Error::invalid_identifier(
                    format!("{table}.{column}"),
                    "label column is not declared by its table",
                ));
            }
        }

        Ok(())
    }
}

impl Default for LabelMap {
    fn default() -> Self {
        Self::empty()
            .with("specialization", "name")
            .with("doctor", "name")
            .with("patient", "name")
    }
}
