//! Reads table metadata out of the SQLite catalog.

use clinic_core::{
    schema::{Column, ForeignKey, Table},
    Error, Result,
};
use rusqlite::{Connection, OptionalExtension};

const TABLE_NAMES: &str = "SELECT name FROM sqlite_master \
WHERE type = 'table' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\'";

const TABLE_EXISTS: &str = "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1";

const TABLE_NAME_NOCASE: &str =
    "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1 COLLATE NOCASE";

const TABLE_COLUMNS: &str = "SELECT name, pk FROM pragma_table_info(?1) ORDER BY cid";

const TABLE_FOREIGN_KEYS: &str =
    "SELECT \"from\", \"table\", \"to\" FROM pragma_foreign_key_list(?1) ORDER BY id, seq";

pub(crate) fn table_names(connection: &Connection) -> Result<Vec<String>> {
    log::trace!("listing tables");

    let mut stmt = connection
        .prepare(TABLE_NAMES)
        .map_err(Error::driver_operation_failed)?;

    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(Error::driver_operation_failed)?;

    names
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(Error::driver_operation_failed)
}

/// Describes `table` from the catalog. A missing table and an unreadable
/// catalog are both schema errors; the latter keeps the driver error as its
/// cause.
pub(crate) fn describe(connection: &Connection, table: &str) -> Result<Table> {
    log::trace!("describing table; table={table}");

    let exists = connection
        .query_row(TABLE_EXISTS, [table], |_| Ok(()))
        .optional()
        .map_err(|err| unreadable(err, table))?;

    if exists.is_none() {
        return Err(Error::invalid_schema(format!(
            "table `{table}` does not exist"
        )));
    }

    let mut ret = Table::new(table);
    ret.columns = columns(connection, table).map_err(|err| unreadable(err, table))?;

    for (from_column, to_table, to_column) in
        foreign_keys(connection, table).map_err(|err| unreadable(err, table))?
    {
        let to_table = catalog_name(connection, &to_table)
            .map_err(|err| unreadable(err, table))?
            .unwrap_or(to_table);

        let to_column = match to_column {
            Some(to_column) => to_column,
            None if to_table == table => implicit_target(&ret.columns, table, &to_table)?,
            None => {
                let target =
                    columns(connection, &to_table).map_err(|err| unreadable(err, &to_table))?;
                implicit_target(&target, table, &to_table)?
            }
        };

        ret.foreign_keys
            .push(ForeignKey::new(from_column, to_table, to_column));
    }

    Ok(ret)
}

/// The catalog's spelling of `name`. Table names are matched without regard
/// to case, as SQLite does when resolving a `REFERENCES` clause.
fn catalog_name(connection: &Connection, name: &str) -> rusqlite::Result<Option<String>> {
    connection
        .query_row(TABLE_NAME_NOCASE, [name], |row| row.get(0))
        .optional()
}

fn columns(connection: &Connection, table: &str) -> rusqlite::Result<Vec<Column>> {
    let mut stmt = connection.prepare(TABLE_COLUMNS)?;

    let columns = stmt.query_map([table], |row| {
        Ok(Column {
            name: row.get(0)?,
            primary_key: row.get::<_, i64>(1)? > 0,
        })
    })?;

    columns.collect()
}

/// `(from, table, to)` per foreign-key column. `to` is `NULL` when the
/// constraint names only the target table.
fn foreign_keys(
    connection: &Connection,
    table: &str,
) -> rusqlite::Result<Vec<(String, String, Option<String>)>> {
    let mut stmt = connection.prepare(TABLE_FOREIGN_KEYS)?;

    let foreign_keys = stmt.query_map([table], |row| {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?))
    })?;

    foreign_keys.collect()
}

/// A foreign key without a target column references the target's primary
/// key. `target` holds the target table's columns, empty if it does not exist.
fn implicit_target(target: &[Column], table: &str, to_table: &str) -> Result<String> {
    if target.is_empty() {
        return Err(Error::invalid_schema(format!(
            "foreign key of `{table}` references missing table `{to_table}`"
        )));
    }

    match target.iter().find(|column| column.primary_key) {
        Some(column) => Ok(column.name.clone()),
        None => Err(Error::invalid_schema(format!(
            "foreign key of `{table}` references `{to_table}`, which has no primary key"
        ))),
    }
}

fn unreadable(err: rusqlite::Error, table: &str) -> Error {
    Error::driver_operation_failed(err).context(Error::invalid_schema(format!(
        "cannot read metadata of table `{table}`"
    )))
}
