mod error;
pub use error::Error;

pub mod consultation;

pub mod schema;
pub use schema::{Introspect, Schema};

pub mod stmt;

/// A Result type alias that uses the clinic [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
