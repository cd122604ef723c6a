use super::{Expr, Ident};

/// `DELETE FROM table WHERE filter`
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub from: Ident,
    pub filter: Expr,
}
