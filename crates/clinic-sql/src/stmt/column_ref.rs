use super::Ident;

/// A column as it appears in a select list or predicate: bare (`name`) or
/// qualified by its table (`doctor.name`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub table: Option<Ident>,
    pub column: Ident,
}

impl ColumnRef {
    pub fn bare(column: Ident) -> Self {
        Self {
            table: None,
            column,
        }
    }

    pub fn qualified(table: Ident, column: Ident) -> Self {
        Self {
            table: Some(table),
            column,
        }
    }

    /// Drops the table qualifier.
    pub fn unqualified(self) -> Self {
        Self::bare(self.column)
    }
}
