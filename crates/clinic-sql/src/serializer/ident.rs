use super::{Formatter, Params, ToSql};

use crate::stmt::{ColumnRef, Ident};

impl ToSql for &Ident {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push_str(self.as_str());
    }
}

impl ToSql for &ColumnRef {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        if let Some(table) = &self.table {
            fmt!(f, table ".");
        }
        fmt!(f, &self.column);
    }
}
