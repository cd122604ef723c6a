use super::{ForeignKey, Schema, Table};
use crate::{Error, Result};

use std::borrow::Cow;

/// Read access to table metadata.
///
/// The in-memory [`Schema`] implements this for normal operation. Drivers
/// implement it by querying their catalog on every call.
pub trait Introspect {
    /// Describes `table`: its columns and its declared foreign keys.
    ///
    /// Fails with an invalid schema error if the table does not exist or its
    /// metadata cannot be read.
    fn describe(&self, table: &str) -> Result<Cow<'_, Table>>;

    /// Returns the foreign keys declared by `table`, in catalog order.
    fn foreign_keys(&self, table: &str) -> Result<Vec<ForeignKey>> {
        Ok(self.describe(table)?.foreign_keys.clone())
    }
}

impl Introspect for Schema {
    fn describe(&self, table: &str) -> Result<Cow<'_, Table>> {
        self.table(table)
            .map(Cow::Borrowed)
            .ok_or_else(|| Error::invalid_schema(format!("table `{table}` does not exist")))
    }
}

impl<T: Introspect + ?Sized> Introspect for &T {
    fn describe(&self, table: &str) -> Result<Cow<'_, Table>> {
        (**self).describe(table)
    }

    fn foreign_keys(&self, table: &str) -> Result<Vec<ForeignKey>> {
        (**self).foreign_keys(table)
    }
}
