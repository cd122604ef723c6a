use super::{Ident, Value};

/// `INSERT INTO table (columns) VALUES (values)`
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: Ident,
    pub columns: Vec<Ident>,

    /// Bound as parameters, one per column
    pub values: Vec<Value>,
}
