//! Error handling for API key extraction.
//!
//! Extraction can fail in exactly two ways, and callers are expected to
//! match on the variant to decide how to reject the request (typically
//! with a 401 response).

use thiserror::Error;

/// Result type alias for header extraction operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors produced while extracting an API key from request headers
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header was found under that exact key, or the
    /// header was present but carried no value
    #[error("no authorization header included")]
    NoAuthHeader,

    /// An `Authorization` header was found but its value does not parse
    /// as `ApiKey <credential>` with exactly one separating space
    #[error("malformed authorization header")]
    MalformedHeader,
}

impl AuthError {
    /// HTTP status code a caller would typically reject the request with
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::NoAuthHeader | AuthError::MalformedHeader => 401,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AuthError::NoAuthHeader.to_string(),
            "no authorization header included"
        );
        assert_eq!(
            AuthError::MalformedHeader.to_string(),
            "malformed authorization header"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::NoAuthHeader.status_code(), 401);
        assert_eq!(AuthError::MalformedHeader.status_code(), 401);
    }
}
