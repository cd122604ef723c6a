mod config;
pub use config::{Config, DatabaseConfig};

mod db;
pub use db::Db;

pub use clinic_core::{
    bail,
    consultation::ConsultationRow,
    err,
    schema::{LabelMap, Schema},
    stmt::{Value, ValueRecord},
    Error, Result,
};

pub use clinic_driver_sqlite::Sqlite;
