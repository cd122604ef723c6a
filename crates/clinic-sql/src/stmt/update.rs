use super::{Expr, Ident, Value};

/// `UPDATE table SET column = value, ... WHERE filter`
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: Ident,
    pub assignments: Vec<(Ident, Value)>,
    pub filter: Expr,
}
