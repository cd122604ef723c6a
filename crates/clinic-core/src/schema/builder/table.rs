use crate::schema::{Column, ForeignKey, Table};

/// Declares the columns and foreign keys of one table.
#[derive(Debug)]
pub struct TableBuilder {
    table: Table,
}

impl TableBuilder {
    pub(super) fn new(name: impl Into<String>) -> Self {
        Self {
            table: Table::new(name),
        }
    }

    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.table.columns.push(Column::new(name));
        self
    }

    pub fn primary_key(mut self, name: impl Into<String>) -> Self {
        self.table.columns.push(Column {
            name: name.into(),
            primary_key: true,
        });
        self
    }

    /// Declares that `from_column` references `to_table.to_column`. The
    /// column itself must be declared separately.
    pub fn foreign_key(
        mut self,
        from_column: impl Into<String>,
        to_table: impl Into<String>,
        to_column: impl Into<String>,
    ) -> Self {
        self.table
            .foreign_keys
            .push(ForeignKey::new(from_column, to_table, to_column));
        self
    }

    pub(super) fn into_table(self) -> Table {
        self.table
    }
}
