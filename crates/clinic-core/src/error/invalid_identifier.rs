use super::Error;

/// Error when a table or column name cannot be placed in a SQL statement.
///
/// This occurs when:
/// - A name is not a plain SQL identifier (`[A-Za-z_][A-Za-z0-9_]*`)
/// - A column is not declared by the table it is requested from
/// - A label mapping points at a table or column the schema does not have
///
/// The name is never coerced into something valid.
#[derive(Debug)]
pub(super) struct InvalidIdentifier {
    ident: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for InvalidIdentifier {}

impl core::fmt::Display for InvalidIdentifier {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid identifier `{}`: {}", self.ident, self.reason)
    }
}

impl Error {
    /// Creates an invalid identifier error.
    pub fn invalid_identifier(ident: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidIdentifier(InvalidIdentifier {
            ident: ident.into().into(),
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid identifier error.
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidIdentifier(_))
    }
}
