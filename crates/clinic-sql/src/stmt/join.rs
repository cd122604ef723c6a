use super::{ColumnRef, Ident};

/// `JOIN table ON table.to_column = source.from_column`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    /// The joined table
    pub table: Ident,

    /// Column of the joined table matched by the foreign key
    pub target: ColumnRef,

    /// Foreign-key column of the source table
    pub source: ColumnRef,
}
