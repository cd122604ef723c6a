mod builder;
pub use builder::{Builder, TableBuilder};

mod column;
pub use column::Column;

mod fk;
pub use fk::ForeignKey;

mod introspect;
pub use introspect::Introspect;

mod label;
pub use label::LabelMap;

mod table;
pub use table::Table;

use indexmap::IndexMap;

/// Immutable description of the store's tables, loaded once at start-up.
///
/// The table and column names held here form the allow-list that every
/// identifier must pass before it is written into a SQL statement.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    tables: IndexMap<String, Table>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the table named `name`, if the schema declares one.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn tables(&self) -> impl ExactSizeIterator<Item = &Table> + '_ {
        self.tables.values()
    }

    pub fn table_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.tables.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
