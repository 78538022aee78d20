//! Per-request variable store for the shtml directive engine.
//!
//! Command handlers resolve names (such as the `var` argument of `echo`)
//! against a store scoped to a single request. This crate provides the
//! [`VariableStore`] trait consumed by the engine, plus [`RequestVariables`],
//! an in-memory implementation the host populates before scanning begins.
//!
//! Keys and values are raw bytes: directive arguments are byte spans of the
//! scanned document and are matched without any encoding assumptions.
//!
//! # Example
//!
//! ```
//! use shtml_vars::{RequestVariables, VariableStore};
//!
//! let mut vars = RequestVariables::new();
//! vars.insert("REMOTE_ADDR", "127.0.0.1");
//!
//! assert_eq!(vars.lookup(b"REMOTE_ADDR"), Some(&b"127.0.0.1"[..]));
//! assert_eq!(vars.lookup(b"REMOTE_USER"), None);
//! ```

use std::collections::HashMap;

/// Name → value lookup scoped to one request.
///
/// Implementations return a borrowed view of the value; `None` means the
/// name is not defined for this request. An undefined variable is an
/// ordinary outcome, not an error, and lookups never fail in any other way.
pub trait VariableStore {
    /// Resolve `name` to its value bytes, if defined.
    fn lookup(&self, name: &[u8]) -> Option<&[u8]>;
}

/// In-memory variable store populated by the host for each request.
///
/// Values may be empty; consumers such as `echo` treat an empty value the
/// same as an undefined name.
#[derive(Debug, Default, Clone)]
pub struct RequestVariables {
    vars: HashMap<Vec<u8>, Vec<u8>>,
}

impl RequestVariables {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a variable, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Number of defined variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// True if no variables are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl VariableStore for RequestVariables {
    fn lookup(&self, name: &[u8]) -> Option<&[u8]> {
        self.vars.get(name).map(Vec::as_slice)
    }
}

impl<K, V> FromIterator<(K, V)> for RequestVariables
where
    K: Into<Vec<u8>>,
    V: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_and_lookup() {
        let mut vars = RequestVariables::new();
        vars.insert("PATH_INFO", "/index.shtml");

        assert_eq!(vars.lookup(b"PATH_INFO"), Some(&b"/index.shtml"[..]));
    }

    #[test]
    fn test_lookup_missing() {
        let vars = RequestVariables::new();
        assert_eq!(vars.lookup(b"QUERY_STRING"), None);
    }

    #[test]
    fn test_insert_replaces() {
        let mut vars = RequestVariables::new();
        vars.insert("X", "one");
        vars.insert("X", "two");

        assert_eq!(vars.lookup(b"X"), Some(&b"two"[..]));
        assert_eq!(vars.len(), 1);
    }

    #[test]
    fn test_empty_value_is_defined() {
        let mut vars = RequestVariables::new();
        vars.insert("EMPTY", "");

        assert_eq!(vars.lookup(b"EMPTY"), Some(&b""[..]));
    }

    #[test]
    fn test_lookup_is_byte_exact() {
        let mut vars = RequestVariables::new();
        vars.insert("host", "a");

        assert_eq!(vars.lookup(b"HOST"), None);
        assert_eq!(vars.lookup(b"hos"), None);
    }

    #[test]
    fn test_from_iter() {
        let vars: RequestVariables = [("A", "1"), ("B", "2")].into_iter().collect();

        assert_eq!(vars.len(), 2);
        assert_eq!(vars.lookup(b"B"), Some(&b"2"[..]));
    }

    #[test]
    fn test_binary_names_and_values() {
        let mut vars = RequestVariables::new();
        vars.insert(vec![0xffu8, 0x00], vec![0x01u8, 0x02]);

        assert_eq!(vars.lookup(&[0xff, 0x00]), Some(&[0x01u8, 0x02][..]));
    }
}
