//! # ApiKey Auth
//!
//! API key extraction and validation for HTTP Authorization headers.
//!
//! This library implements the header-parsing half of an API key
//! authentication scheme: given the headers of an incoming HTTP request,
//! it locates the `Authorization` header, checks that its value has the
//! form `ApiKey <credential>` with exactly one separating space, and hands
//! the credential back to the caller for verification.
//!
//! Key verification, storage, and request routing are the caller's
//! responsibility. This crate only decides whether a header parses.
//!
//! ## Quick Start
//!
//! ```rust
//! use apikey_auth::{extract_api_key, HeaderMap};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert("Authorization", "ApiKey 123SensitiveString321");
//!
//! let key = extract_api_key(&headers)?;
//! assert_eq!(key, "123SensitiveString321");
//! # Ok::<(), apikey_auth::AuthError>(())
//! ```
//!
//! ## Lookup semantics
//!
//! Header lookup is case-sensitive: only a header stored under the exact
//! key `Authorization` is recognized, so `authorization` or
//! `AUTHORIZATION` are treated as absent. This is the upstream contract
//! this crate implements, pinned by its test suite; see [`HeaderMap::get`].

pub mod error;
pub mod extract;
pub mod header;
pub mod logging;

// Re-export main types for convenience
pub use error::{AuthError, Result};
pub use extract::extract_api_key;
pub use header::HeaderMap;

/// Header name the credential is read from, matched case-sensitively
pub const AUTHORIZATION: &str = "Authorization";

/// Authentication scheme token expected before the credential
pub const API_KEY_SCHEME: &str = "ApiKey";
