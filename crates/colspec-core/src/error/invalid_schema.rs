use super::Error;

/// Error when a schema declaration is invalid.
///
/// This occurs when:
/// - A field carries neither a primary-key nor a column role
/// - A declared column length is zero
/// - An entity declares duplicate column names or multiple primary-key fields
/// - `auto_increment` is requested on a non-integer key
///
/// These errors indicate a static declaration mistake and are surfaced to the
/// caller as hard failures, never retried.
#[derive(Debug)]
pub(super) struct InvalidSchemaError {
    message: Box<str>,
}

impl std::error::Error for InvalidSchemaError {}

impl core::fmt::Display for InvalidSchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchemaError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSchema(_))
    }
}
