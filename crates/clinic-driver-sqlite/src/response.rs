use clinic_core::{stmt::ValueRecord, Error, Result};

/// What executing a statement produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Number of rows changed
    Count(u64),

    /// Rows returned by a query
    Rows(Vec<ValueRecord>),
}

impl Response {
    pub fn into_rows(self) -> Result<Vec<ValueRecord>> {
        match self {
            Response::Rows(rows) => Ok(rows),
            Response::Count(_) => Err(Error::invalid_result("expected rows, got count")),
        }
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Response::Count(count) => Ok(count),
            Response::Rows(_) => Err(Error::invalid_result("expected count, got rows")),
        }
    }
}
