use super::Error;

/// Error when a stored value does not have the expected textual format.
///
/// Raised by the row post-processor when a combined date-time field does not
/// parse. The whole batch is rejected, so callers never render a partially
/// filtered listing.
#[derive(Debug)]
pub(super) struct InvalidFormat {
    value: Box<str>,
    expected: &'static str,
}

impl std::error::Error for InvalidFormat {}

impl core::fmt::Display for InvalidFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid format: `{}` does not match `{}`",
            self.value, self.expected
        )
    }
}

impl Error {
    /// Creates an invalid format error for `value`, which should have matched
    /// the human-readable pattern `expected`.
    pub fn invalid_format(value: impl Into<String>, expected: &'static str) -> Error {
        Error::from(super::ErrorKind::InvalidFormat(InvalidFormat {
            value: value.into().into(),
            expected,
        }))
    }

    /// Returns `true` if this error is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidFormat(_))
    }
}
