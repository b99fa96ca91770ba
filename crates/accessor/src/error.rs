//! Error types for path resolution, tree construction, and path parsing.

use serde_json::Value;
use thiserror::Error;

/// Umbrella error returned by the crate-level entry points.
///
/// The `Accessor` and `Path` methods themselves return the narrow error type
/// for their failure mode; this enum exists so [`crate::get`] and
/// [`crate::update`] have a single error channel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessorError {
    #[error(transparent)]
    NoSuchPath(#[from] NoSuchPathError),
    #[error(transparent)]
    InvalidKey(#[from] InvalidKeyError),
    #[error(transparent)]
    InvalidPath(#[from] InvalidPathError),
}

/// A path failed to resolve against the actual shape of the tree.
///
/// The error is created at the frame where resolution fails, with an empty
/// `stack`. Each enclosing map/sequence frame appends its own key while the
/// error unwinds, so `stack` ends up ordered nearest ancestor first.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason}: key {key:?} at {}", render_location(.stack, .key))]
pub struct NoSuchPathError {
    /// Human-readable cause, e.g. `"no such key"` or `"index out of range"`.
    pub reason: String,
    /// The single key that failed to resolve.
    pub key: String,
    /// Ancestor keys accumulated during unwinding, nearest ancestor first.
    pub stack: Vec<String>,
}

impl NoSuchPathError {
    pub(crate) fn no_such_key(key: &str) -> Self {
        Self::new("no such key", key)
    }

    pub(crate) fn not_a_number(key: &str) -> Self {
        Self::new("not a number", key)
    }

    pub(crate) fn index_out_of_range(key: &str) -> Self {
        Self::new("index out of range", key)
    }

    pub(crate) fn no_key_on_scalar(value: &Value, key: &str) -> Self {
        Self::new(format!("{}({value}) has no key", scalar_type_name(value)), key)
    }

    fn new(reason: impl Into<String>, key: &str) -> Self {
        NoSuchPathError {
            reason: reason.into(),
            key: key.to_string(),
            stack: Vec::new(),
        }
    }

    /// Records `key` as the next enclosing ancestor.
    pub(crate) fn push_ancestor(mut self, key: &str) -> Self {
        self.stack.push(key.to_string());
        self
    }

    /// The full offending location, root first, ending with the failed key.
    pub fn location(&self) -> String {
        render_location(&self.stack, &self.key)
    }
}

fn render_location(stack: &[String], key: &str) -> String {
    let mut keys: Vec<&str> = stack.iter().rev().map(String::as_str).collect();
    keys.push(key);
    keys.join("/")
}

fn scalar_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A map key encountered during construction was not a string.
///
/// `serde_json::Value` objects are always string-keyed; this arises from
/// permissive decoders (YAML mappings) whose keys can be any value. `key` is
/// a rendering of the offending key for diagnostics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("map key is not a string: {key}")]
pub struct InvalidKeyError {
    pub key: String,
}

impl InvalidKeyError {
    pub(crate) fn new(key: impl Into<String>) -> Self {
        InvalidKeyError { key: key.into() }
    }
}

/// A path string or key list was malformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidPathError {
    #[error("path is empty")]
    Empty,
    #[error("path contains an empty key")]
    EmptyKey,
    #[error("whole-document replacement is not supported")]
    WholeDocument,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_such_path_renders_reason_key_and_location() {
        let err = NoSuchPathError::no_such_key("x")
            .push_ancestor("b")
            .push_ancestor("a");
        assert_eq!(err.stack, vec!["b".to_string(), "a".to_string()]);
        assert_eq!(err.location(), "a/b/x");
        assert_eq!(err.to_string(), "no such key: key \"x\" at a/b/x");
    }

    #[test]
    fn no_such_path_without_ancestors() {
        let err = NoSuchPathError::index_out_of_range("5");
        assert_eq!(err.location(), "5");
        assert_eq!(err.to_string(), "index out of range: key \"5\" at 5");
    }

    #[test]
    fn scalar_reason_includes_type_and_value() {
        let err = NoSuchPathError::no_key_on_scalar(&json!(1), "a");
        assert_eq!(err.reason, "number(1) has no key");

        let err = NoSuchPathError::no_key_on_scalar(&json!("hello"), "a");
        assert_eq!(err.reason, "string(\"hello\") has no key");

        let err = NoSuchPathError::no_key_on_scalar(&json!(null), "a");
        assert_eq!(err.reason, "null(null) has no key");
    }

    #[test]
    fn invalid_key_rendering() {
        let err = InvalidKeyError::new("42");
        assert_eq!(err.to_string(), "map key is not a string: 42");
    }

    #[test]
    fn umbrella_conversions() {
        let err: AccessorError = InvalidPathError::Empty.into();
        assert_eq!(err.to_string(), "path is empty");

        let err: AccessorError = NoSuchPathError::not_a_number("x").into();
        assert!(matches!(err, AccessorError::NoSuchPath(_)));
    }
}
