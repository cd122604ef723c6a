use crate::{Config, ConsultationRow, Error, LabelMap, Result, Schema, Value, ValueRecord};

use chrono::NaiveDate;
use clinic_core::{
    consultation::{upcoming_sorted, UPCOMING_SQL},
    Introspect,
};
use clinic_driver_sqlite::{Connection, Sqlite};
use clinic_sql::{stmt::Ident, Statement};
use std::sync::Arc;

/// A handle to the clinic store.
///
/// The schema is read once, when the handle is opened, and every table and
/// column name passed to the handle is checked against it. Each operation
/// opens its own connection and closes it before returning.
#[derive(Debug, Clone)]
pub struct Db {
    driver: Arc<Sqlite>,
    schema: Arc<Schema>,
    labels: Arc<LabelMap>,
}

impl Db {
    /// Connects, loads the schema, and checks the label map against it.
    pub fn open(config: &Config) -> Result<Db> {
        let driver = Sqlite::new(&config.database.url)?;

        let schema = {
            let connection = driver.connect()?;
            connection.load_schema()?
        };

        config.labels.verify(&schema)?;

        if schema.is_empty() {
            log::warn!("clinic store has no tables; url={}", driver.url());
        }

        log::info!(
            "opened clinic store; url={} tables={}",
            driver.url(),
            schema.tables().len()
        );

        Ok(Db {
            driver: Arc::new(driver),
            schema: Arc::new(schema),
            labels: Arc::new(config.labels.clone()),
        })
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }

    /// Renders the labelled select for `columns` of `table` without running
    /// it.
    pub fn select_sql<S: AsRef<str>>(&self, table: &str, columns: &[S]) -> Result<String> {
        clinic_sql::select_sql(&*self.schema, &self.labels, table, columns)
    }

    /// Rows of `table`, with foreign-key columns shown by label.
    pub fn listing<S: AsRef<str>>(&self, table: &str, columns: &[S]) -> Result<Vec<ValueRecord>> {
        let select = clinic_sql::build_select(&*self.schema, &self.labels, table, columns)?;
        self.rows(select.into())
    }

    /// Like [`Db::listing`], keeping only rows where some shown value contains
    /// `text`, ignoring case.
    pub fn search<S: AsRef<str>>(
        &self,
        table: &str,
        columns: &[S],
        text: &str,
    ) -> Result<Vec<ValueRecord>> {
        let select = clinic_sql::build_select(&*self.schema, &self.labels, table, columns)?;
        self.rows(clinic_sql::search(select, text).into())
    }

    /// Finds the primary key of the first row of `table` whose `column`
    /// equals `value`.
    pub fn lookup_id(
        &self,
        table: &str,
        column: &str,
        value: impl Into<Value>,
    ) -> Result<Option<i64>> {
        Ident::new(table)?;

        let key = self
            .schema
            .describe(table)?
            .primary_key_column()
            .map(|column| column.name.clone())
            .ok_or_else(|| Error::invalid_schema(format!("table `{table}` has no primary key")))?;

        let select = clinic_sql::lookup(&*self.schema, table, &key, column, value)?;

        match self.rows(select.into())?.into_iter().next() {
            Some(mut record) => Ok(Some(record.take(0)?.to_i64()?)),
            None => Ok(None),
        }
    }

    /// Whether `table` holds a row matching every `(column, value)` pair.
    pub fn exists(&self, table: &str, conditions: &[(&str, Value)]) -> Result<bool> {
        let select = clinic_sql::count(&*self.schema, table, conditions)?;

        let mut rows = self.rows(select.into())?;
        let Some(record) = rows.first_mut() else {
            return Err(Error::invalid_result("count returned no rows"));
        };

        Ok(record.take(0)?.to_i64()? > 0)
    }

    /// Inserts one row and returns the number of rows inserted.
    pub fn insert(&self, table: &str, values: &[(&str, Value)]) -> Result<u64> {
        let stmt = clinic_sql::insert(&*self.schema, table, values)?;
        self.count(stmt.into())
    }

    /// Updates the rows whose `key` column matches and returns how many
    /// changed.
    pub fn update(
        &self,
        table: &str,
        assignments: &[(&str, Value)],
        key: (&str, Value),
    ) -> Result<u64> {
        let stmt = clinic_sql::update(&*self.schema, table, assignments, key)?;
        self.count(stmt.into())
    }

    /// Deletes the rows whose `key` column matches and returns how many were
    /// removed.
    pub fn delete(&self, table: &str, key: (&str, Value)) -> Result<u64> {
        let stmt = clinic_sql::delete(&*self.schema, table, key)?;
        self.count(stmt.into())
    }

    /// Consultations on or after `today`, soonest first.
    pub fn upcoming_consultations(&self, today: NaiveDate) -> Result<Vec<ConsultationRow>> {
        let records = self.connect()?.query(UPCOMING_SQL, vec![])?;

        let rows = records
            .into_iter()
            .map(ConsultationRow::from_record)
            .collect::<Result<Vec<_>>>()?;

        upcoming_sorted(&rows, today)
    }

    fn connect(&self) -> Result<Connection> {
        self.driver.connect()
    }

    fn rows(&self, stmt: Statement) -> Result<Vec<ValueRecord>> {
        self.connect()?.exec(&stmt)?.into_rows()
    }

    fn count(&self, stmt: Statement) -> Result<u64> {
        self.connect()?.exec(&stmt)?.into_count()
    }
}
