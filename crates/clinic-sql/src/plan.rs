//! Builds statements from table and column names.
//!
//! Every name is checked against the schema before it becomes an
//! [`Ident`](crate::stmt::Ident), and every value is carried as a bound
//! parameter. The returned statements
//! are plain data; [`crate::Serializer`] renders them.

mod crud;
pub use crud::{count, delete, insert, lookup, update};

mod scope;
use scope::TableScope;

mod search;
pub use search::search;

use crate::stmt::{ColumnRef, Join, Returning, Select};
use clinic_core::{schema::LabelMap, Error, Introspect, Result};

/// Builds a select of `columns` from `table`, showing foreign-key columns by
/// the label of the row they reference.
///
/// A requested foreign-key column is replaced by
/// `<to_table>.<display column>` and its table is joined once, in the order
/// referenced tables are first encountered. Other columns are qualified with
/// `table` when a join exists and left bare otherwise. When two columns
/// reference the same table, the first one's foreign key drives the join.
///
/// The table and each referenced table are introspected once. Display and
/// target columns are checked against the referenced table, so a label map
/// naming a missing column fails with an invalid identifier error even if it
/// never went through [`LabelMap::verify`].
pub fn build_select<I, S>(
    introspect: &I,
    labels: &LabelMap,
    table: &str,
    columns: &[S],
) -> Result<Select>
where
    I: Introspect + ?Sized,
    S: AsRef<str>,
{
    let scope = TableScope::resolve(introspect, table)?;

    if columns.is_empty() {
        return Err(Error::invalid_identifier(table, "no columns requested"));
    }

    let mut returning = Vec::with_capacity(columns.len());
    let mut joins: Vec<Join> = vec![];
    let mut targets: Vec<TableScope<'_>> = vec![];

    for column in columns {
        let column = column.as_ref();
        let ident = scope.column(column)?;

        let Some(fk) = scope.table.foreign_key(column) else {
            returning.push(ColumnRef::qualified(scope.ident.clone(), ident));
            continue;
        };

        let seen = targets
            .iter()
            .position(|target| target.table.name == fk.to_table);

        let index = match seen {
            Some(index) => index,
            None => {
                targets.push(TableScope::resolve(introspect, &fk.to_table)?);
                targets.len() - 1
            }
        };
        let target = &targets[index];

        let display = target.column(labels.display_column(&fk.to_table, &fk.to_column))?;

        if !joins.iter().any(|join| join.table == target.ident) {
            joins.push(Join {
                table: target.ident.clone(),
                target: ColumnRef::qualified(target.ident.clone(), target.column(&fk.to_column)?),
                source: ColumnRef::qualified(scope.ident.clone(), ident),
            });
        }

        returning.push(ColumnRef::qualified(target.ident.clone(), display));
    }

    if joins.is_empty() {
        returning = returning.into_iter().map(ColumnRef::unqualified).collect();
    }

    log::debug!(
        "planned select; table={table} columns={} joins={}",
        returning.len(),
        joins.len()
    );

    Ok(Select {
        returning: Returning::Columns(returning),
        source: scope.ident,
        joins,
        filter: None,
    })
}
