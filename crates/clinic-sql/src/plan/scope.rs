use crate::stmt::Ident;
use clinic_core::{schema::Table, Error, Introspect, Result};

use std::borrow::Cow;

/// A table whose name and columns have been checked against the schema.
pub(super) struct TableScope<'a> {
    pub(super) ident: Ident,
    pub(super) table: Cow<'a, Table>,
}

impl<'a> TableScope<'a> {
    /// Validates `name` as an identifier, then describes it. Malformed names
    /// never reach the introspector.
    pub(super) fn resolve<I: Introspect + ?Sized>(introspect: &'a I, name: &str) -> Result<Self> {
        let ident = Ident::new(name)?;
        let table = introspect.describe(name)?;

        Ok(Self { ident, table })
    }

    /// Returns `name` as an identifier if the table declares that column.
    pub(super) fn column(&self, name: &str) -> Result<Ident> {
        if !self.table.has_column(name) {
            return Err(Error::invalid_identifier(
                name,
                format!("not a column of table `{}`", self.table.name),
            ));
        }

        Ident::new(name)
    }
}
