use super::{ColumnRef, Expr, Ident, Join};

/// A query plan: what to return, from where, joined with what.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub returning: Returning,

    /// The table named in the `FROM` clause
    pub source: Ident,

    /// One entry per distinct referenced table, in first-seen order
    pub joins: Vec<Join>,

    /// Optional `WHERE` clause
    pub filter: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Returning {
    /// The listed columns, in order
    Columns(Vec<ColumnRef>),

    /// `COUNT(*)`
    Count,
}

impl Returning {
    pub fn len(&self) -> usize {
        match self {
            Returning::Columns(columns) => columns.len(),
            Returning::Count => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn columns(&self) -> &[ColumnRef] {
        match self {
            Returning::Columns(columns) => columns,
            Returning::Count => &[],
        }
    }
}

impl Select {
    /// Adds `expr` to the filter, combined with `AND` if one is already set.
    pub fn and_filter(&mut self, expr: Expr) {
        self.filter = Some(match self.filter.take() {
            Some(existing) => Expr::and_from_vec(vec![existing, expr]),
            None => expr,
        });
    }
}
