mod column_ref;
pub use column_ref::ColumnRef;

mod delete;
pub use delete::Delete;

mod expr;
pub use expr::Expr;

mod ident;
pub use ident::Ident;

mod insert;
pub use insert::Insert;

mod join;
pub use join::Join;

mod select;
pub use select::{Returning, Select};

mod update;
pub use update::Update;

pub use clinic_core::stmt::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Delete(Delete),
    Insert(Insert),
    Query(Select),
    Update(Update),
}

impl Statement {
    pub fn is_query(&self) -> bool {
        matches!(self, Statement::Query(_))
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Query(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}
