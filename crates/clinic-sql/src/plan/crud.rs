use super::TableScope;

use crate::stmt::{ColumnRef, Delete, Expr, Insert, Returning, Select, Update, Value};
use clinic_core::{Error, Introspect, Result};

/// `SELECT key FROM table WHERE column = ?1`
///
/// Resolves a row's key from another unique attribute, e.g. a patient's id
/// from their email.
pub fn lookup<I: Introspect + ?Sized>(
    introspect: &I,
    table: &str,
    key: &str,
    column: &str,
    value: impl Into<Value>,
) -> Result<Select> {
    let scope = TableScope::resolve(introspect, table)?;
    let key = scope.column(key)?;
    let column = scope.column(column)?;

    Ok(Select {
        returning: Returning::Columns(vec![ColumnRef::bare(key)]),
        source: scope.ident,
        joins: vec![],
        filter: Some(Expr::eq(ColumnRef::bare(column), value.into())),
    })
}

/// `SELECT COUNT(*) FROM table WHERE a = ?1 AND b = ?2 ...`
///
/// Without conditions every row is counted.
pub fn count<I: Introspect + ?Sized>(
    introspect: &I,
    table: &str,
    conditions: &[(&str, Value)],
) -> Result<Select> {
    let scope = TableScope::resolve(introspect, table)?;

    let mut operands = Vec::with_capacity(conditions.len());
    for (column, value) in conditions {
        let column = scope.column(column)?;
        operands.push(Expr::eq(ColumnRef::bare(column), value.clone()));
    }

    Ok(Select {
        returning: Returning::Count,
        source: scope.ident,
        joins: vec![],
        filter: (!operands.is_empty()).then(|| Expr::and_from_vec(operands)),
    })
}

/// `INSERT INTO table (a, b) VALUES (?1, ?2)`
pub fn insert<I: Introspect + ?Sized>(
    introspect: &I,
    table: &str,
    values: &[(&str, Value)],
) -> Result<Insert> {
    let scope = TableScope::resolve(introspect, table)?;

    if values.is_empty() {
        return Err(Error::invalid_identifier(table, "no columns to insert"));
    }

    let mut columns = Vec::with_capacity(values.len());
    for (column, _) in values {
        columns.push(scope.column(column)?);
    }

    Ok(Insert {
        table: scope.ident,
        columns,
        values: values.iter().map(|(_, value)| value.clone()).collect(),
    })
}

/// `UPDATE table SET a = ?1, b = ?2 WHERE key = ?3`
pub fn update<I: Introspect + ?Sized>(
    introspect: &I,
    table: &str,
    assignments: &[(&str, Value)],
    key: (&str, Value),
) -> Result<Update> {
    let scope = TableScope::resolve(introspect, table)?;

    if assignments.is_empty() {
        return Err(Error::invalid_identifier(table, "no columns to update"));
    }

    let mut set = Vec::with_capacity(assignments.len());
    for (column, value) in assignments {
        set.push((scope.column(column)?, value.clone()));
    }

    let (key, value) = key;
    let key = scope.column(key)?;

    Ok(Update {
        table: scope.ident,
        assignments: set,
        filter: Expr::eq(ColumnRef::bare(key), value),
    })
}

/// `DELETE FROM table WHERE column = ?1`
pub fn delete<I: Introspect + ?Sized>(
    introspect: &I,
    table: &str,
    key: (&str, Value),
) -> Result<Delete> {
    let scope = TableScope::resolve(introspect, table)?;

    let (column, value) = key;
    let column = scope.column(column)?;

    Ok(Delete {
        from: scope.ident,
        filter: Expr::eq(ColumnRef::bare(column), value),
    })
}
