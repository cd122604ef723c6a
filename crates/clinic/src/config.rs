use crate::{Error, LabelMap, Result};

use serde::{Deserialize, Serialize};
use std::{path::Path, str::FromStr};

const DEFAULT_DATABASE_URL: &str = "sqlite:database/clinic.db";

/// Configuration for opening a clinic [`Db`](crate::Db)
///
/// Read from TOML. Every section is optional:
///
/// ```toml
/// [database]
/// url = "sqlite:database/clinic.db"
///
/// [labels]
/// specialization = "name"
/// doctor = "name"
/// patient = "name"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,

    /// Display column per referenced table
    pub labels: LabelMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `sqlite:<path>` or `sqlite::memory:`
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|err| {
            Error::from(err).context(crate::err!("cannot read config `{}`", path.display()))
        })?;

        let config: Config = contents
            .parse()
            .map_err(|err: Error| err.context(crate::err!("in config `{}`", path.display())))?;

        log::debug!(
            "loaded config; path={} labels={}",
            path.display(),
            config.labels.len()
        );
        Ok(config)
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database.url = url.into();
        self
    }

    /// Set the label map
    pub fn labels(mut self, labels: LabelMap) -> Self {
        self.labels = labels;
        self
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|err| Error::from(anyhow::Error::from(err)))
    }
}
