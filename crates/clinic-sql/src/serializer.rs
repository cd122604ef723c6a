#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod ident;
mod statement;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string
///
/// Identifiers in the statement have already been validated, so they are
/// written as is. Every value is pushed to the `Params` sink and replaced by
/// a numbered placeholder.
#[derive(Debug, Default)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a, T> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    /// A serializer producing SQLite syntax.
    pub fn sqlite() -> Serializer {
        Serializer::default()
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        log::debug!("serialized statement; sql={ret}");
        ret
    }
}
