pub mod plan;
pub use plan::{build_select, count, delete, insert, lookup, search, update};

pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer};

pub mod stmt;
pub use stmt::Statement;

use clinic_core::{schema::LabelMap, stmt::Value, Introspect, Result};

/// Builds the labelled select for `columns` of `table` and renders it.
///
/// A labelled select binds no values, so the SQL text is all there is.
pub fn select_sql<S: AsRef<str>>(
    introspect: &impl Introspect,
    labels: &LabelMap,
    table: &str,
    columns: &[S],
) -> Result<String> {
    let select = build_select(introspect, labels, table, columns)?;

    let mut params = Vec::<Value>::new();
    let sql = Serializer::sqlite().serialize(&select.into(), &mut params);
    debug_assert!(params.is_empty(), "labelled select bound values; sql={sql}");

    Ok(sql)
}
