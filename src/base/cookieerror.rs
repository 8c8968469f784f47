use thiserror::Error;

/// Errors surfaced by cookie construction and the header adapters.
///
/// Escaping, unescaping and serialization are total and never produce one of
/// these; only the version setter and the collaborator-facing header
/// conversions can fail.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CookieError {
    #[error("Invalid cookie version {0} (expected 0 or 1)")]
    InvalidVersion(i32),
    #[error("Serialized cookie is not a valid header value")]
    InvalidHeaderValue,
    #[error("Header value is not valid visible ASCII")]
    InvalidHeaderEncoding,
    #[error("Failed to parse cookie: {message}")]
    ParseFailed { message: String },
}

impl CookieError {
    /// Create a parse failure with the given message.
    pub fn parse_failed(message: impl Into<String>) -> Self {
        Self::ParseFailed {
            message: message.into(),
        }
    }

    /// True if the error comes from a caller passing an illegal argument,
    /// as opposed to malformed wire input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidVersion(_))
    }
}

impl From<cookie::ParseError> for CookieError {
    fn from(err: cookie::ParseError) -> Self {
        CookieError::parse_failed(err.to_string())
    }
}

impl From<http::header::InvalidHeaderValue> for CookieError {
    fn from(_: http::header::InvalidHeaderValue) -> Self {
        CookieError::InvalidHeaderValue
    }
}

impl From<http::header::ToStrError> for CookieError {
    fn from(_: http::header::ToStrError) -> Self {
        CookieError::InvalidHeaderEncoding
    }
}
