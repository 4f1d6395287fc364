//! API key extraction from request headers.

use tracing::debug;

use crate::error::{AuthError, Result};
use crate::header::HeaderMap;
use crate::{API_KEY_SCHEME, AUTHORIZATION};

/// Extract the API key from a request's `Authorization` header.
///
/// The header value must have the form `ApiKey <credential>`: the literal
/// scheme token, exactly one space, then the credential. The credential is
/// returned verbatim and may be empty (`"ApiKey "` yields `Ok("")`).
///
/// Fails with [`AuthError::NoAuthHeader`] when no value is stored under
/// the exact-case key `Authorization`, and with
/// [`AuthError::MalformedHeader`] when a value is present but the scheme
/// token is not exactly `ApiKey` or more than one space separates it from
/// the credential.
///
/// The function is pure: it reads only from `headers` and the same input
/// always produces the same result, so it is safe to call concurrently.
///
/// Failed lookups are logged at debug level without the header value,
/// since the credential is sensitive.
pub fn extract_api_key(headers: &HeaderMap) -> Result<&str> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => {
            debug!("no authorization header on request");
            return Err(AuthError::NoAuthHeader);
        }
    };

    let (scheme, credential) = value.split_once(' ').ok_or_else(|| {
        debug!("authorization header has no scheme separator");
        AuthError::MalformedHeader
    })?;

    // A second space right after the scheme would otherwise leak into the
    // credential; the contract treats it as malformed rather than trimming.
    if scheme != API_KEY_SCHEME || credential.starts_with(' ') {
        debug!("authorization header does not match the ApiKey scheme");
        return Err(AuthError::MalformedHeader);
    }

    Ok(credential)
}
