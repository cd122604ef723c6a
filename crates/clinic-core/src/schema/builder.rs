mod table;
pub use table::TableBuilder;

use super::{Schema, Table};
use crate::{Error, Result};
use indexmap::IndexMap;

/// Assembles a [`Schema`] and checks it for consistency.
#[derive(Debug, Default)]
pub struct Builder {
    /// Tables in the order they were declared
    tables: Vec<Table>,
}

impl Builder {
    /// Declares a table, configured by `f`.
    pub fn table(
        mut self,
        name: impl Into<String>,
        f: impl FnOnce(TableBuilder) -> TableBuilder,
    ) -> Self {
        let table = f(TableBuilder::new(name)).into_table();
        self.tables.push(table);
        self
    }

    /// Adds an already described table, e.g. one read from a catalog.
    pub fn table_def(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    pub fn build(self) -> Result<Schema> {
        let mut tables = IndexMap::with_capacity(self.tables.len());

        for table in self.tables {
            verify_columns(&table)?;

            if tables.contains_key(&table.name) {
                return Err(Error::invalid_schema(format!(
                    "table `{}` is declared more than once",
                    table.name
                )));
            }

            tables.insert(table.name.clone(), table);
        }

        let schema = Schema { tables };

        for table in schema.tables() {
            verify_foreign_keys(&schema, table)?;
        }

        Ok(schema)
    }
}

fn verify_columns(table: &Table) -> Result<()> {
    for (i, column) in table.columns.iter().enumerate() {
        if table.columns[..i].iter().any(|c| c.name == column.name) {
            return Err(Error::invalid_schema(format!(
                "column `{}` is declared more than once in table `{}`",
                column.name, table.name
            )));
        }
    }

    Ok(())
}

fn verify_foreign_keys(schema: &Schema, table: &Table) -> Result<()> {
    for fk in &table.foreign_keys {
        if !table.has_column(&fk.from_column) {
            return Err(Error::invalid_schema(format!(
                "foreign key column `{}.{}` does not exist",
                table.name, fk.from_column
            )));
        }

        let Some(target) = schema.table(&fk.to_table) else {
            return Err(Error::invalid_schema(format!(
                "foreign key `{}.{}` references missing table `{}`",
                table.name, fk.from_column, fk.to_table
            )));
        };

        if !target.has_column(&fk.to_column) {
            return Err(Error::invalid_schema(format!(
                "foreign key `{}.{}` references missing column `{}.{}`",
                table.name, fk.from_column, fk.to_table, fk.to_column
            )));
        }
    }

    Ok(())
}
