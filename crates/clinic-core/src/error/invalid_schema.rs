use super::Error;

/// Error when schema metadata is missing or unreadable.
///
/// This occurs when:
/// - A table is not present in the schema catalog
/// - The catalog cannot be queried (store unreachable, corrupt file)
/// - A schema built in memory declares the same table or column twice
///
/// A wrong answer here would corrupt every query derived from it, so these
/// errors are always surfaced to the caller.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSchema(_))
    }
}
