mod catalog;

mod response;
pub use response::Response;

mod value;
pub(crate) use value::Value;

use clinic_core::{
    schema::Table,
    stmt::{self, ValueRecord},
    Error, Introspect, Result, Schema,
};
use clinic_sql::{Serializer, Statement};
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

/// Where a SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::driver_operation_failed(err).context(Error::invalid_connection_url(format!(
                "cannot parse `{url_str}`"
            )))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else if url.path().is_empty() {
            Err(Error::invalid_connection_url(format!(
                "connection URL has no database path; url={url_str}"
            )))
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    /// Opens a connection. Every in-memory connection is a fresh, empty
    /// database.
    pub fn connect(&self) -> Result<Connection> {
        match self {
            Sqlite::File(path) => Connection::open(path),
            Sqlite::InMemory => Connection::in_memory(),
        }
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;

        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        let sqlite = Self { connection };
        Ok(sqlite)
    }

    /// Runs one or more `;`-separated statements that bind nothing, e.g. a
    /// bootstrap script.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.connection
            .execute_batch(sql)
            .map_err(Error::driver_operation_failed)
    }

    /// Reads every user table into a [`Schema`].
    pub fn load_schema(&self) -> Result<Schema> {
        let names = catalog::table_names(&self.connection).map_err(|err| {
            err.context(Error::invalid_schema("cannot list the tables of the store"))
        })?;

        let mut builder = Schema::builder();
        for name in &names {
            builder = builder.table_def(self.describe(name)?.into_owned());
        }

        let schema = builder.build()?;
        log::info!("loaded schema; tables={}", schema.tables().len());
        Ok(schema)
    }

    /// Serializes `stmt`, binds its values and runs it.
    ///
    /// Queries return their rows; every other statement returns the number of
    /// rows it changed.
    pub fn exec(&self, stmt: &Statement) -> Result<Response> {
        let mut params: Vec<stmt::Value> = vec![];
        let sql = Serializer::sqlite().serialize(stmt, &mut params);

        log::debug!("executing statement; params={}", params.len());

        if stmt.is_query() {
            let rows = self.query(&sql, params)?;
            return Ok(Response::Rows(rows));
        }

        let mut prepared = self
            .connection
            .prepare_cached(&sql)
            .map_err(Error::driver_operation_failed)?;

        let count = prepared
            .execute(rusqlite::params_from_iter(params.into_iter().map(Value::from)))
            .map_err(Error::driver_operation_failed)?;

        Ok(Response::Count(count as u64))
    }

    /// Runs a query given as SQL text. Values are bound to `?1`, `?2`, ... in
    /// order; nothing is interpolated.
    pub fn query(&self, sql: &str, params: Vec<stmt::Value>) -> Result<Vec<ValueRecord>> {
        let mut prepared = self
            .connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        let width = prepared.column_count();

        let mut rows = prepared
            .query(rusqlite::params_from_iter(params.into_iter().map(Value::from)))
            .map_err(Error::driver_operation_failed)?;

        let mut ret = vec![];

        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut items = Vec::with_capacity(width);

                    for index in 0..width {
                        items.push(Value::from_sql(row, index)?.into_inner());
                    }

                    ret.push(ValueRecord::from_vec(items));
                }
                Ok(None) => break,
                Err(err) => {
                    return Err(Error::driver_operation_failed(err));
                }
            }
        }

        Ok(ret)
    }
}

impl Introspect for Connection {
    /// Reads the table from the live catalog.
    fn describe(&self, table: &str) -> Result<Cow<'_, Table>> {
        catalog::describe(&self.connection, table).map(Cow::Owned)
    }
}
