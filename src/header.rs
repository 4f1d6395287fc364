//! Case-sensitive header map.
//!
//! HTTP header types normally match names case-insensitively, but the
//! extraction contract this crate implements requires an exact-byte key
//! match: a header stored as `authorization` must NOT satisfy a lookup
//! for `Authorization`. This module provides a minimal multimap with
//! those semantics instead of reusing a framework header type.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from header name to an ordered sequence of values.
///
/// Names are matched case-sensitively. Each name holds one or more values
/// in insertion order; [`HeaderMap::get`] returns the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderMap(HashMap<String, Vec<String>>);

impl HeaderMap {
    /// Create an empty header map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to a single value, discarding any previous values
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), vec![value.into()]);
    }

    /// Append a value to `name`, keeping any previous values
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.entry(name.into()).or_default().push(value.into());
    }

    /// First value stored under the exact-case `name`.
    ///
    /// Returns `None` when the key is absent or its value sequence is
    /// empty. Lookup never falls back to other casings of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name)?.first().map(String::as_str)
    }

    /// All values stored under the exact-case `name`, in insertion order
    pub fn get_all(&self, name: &str) -> &[String] {
        self.0.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any values are stored under the exact-case `name`
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Remove `name` and return its values, if any
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.0.remove(name)
    }

    /// Number of distinct header names
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map holds no headers
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, values)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl From<HashMap<String, Vec<String>>> for HeaderMap {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, String)> for HeaderMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut headers = Self::new();
        headers.extend(iter);
        headers
    }
}

impl Extend<(String, String)> for HeaderMap {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.append(name, value);
        }
    }
}
