//! Path-addressed access to dynamically-typed document trees.
//!
//! Decoding JSON or YAML without a schema produces generic nested maps,
//! sequences, and scalars. This crate classifies such a value into an
//! [`Accessor`] tree (map, sequence, and value nodes) and resolves
//! `/`-separated [`Path`]s against it, so a caller can read or replace
//! `"/friends/0/name"` without knowing the document's shape at compile time.
//!
//! The tree is built once, mutated in place through [`Accessor::set`], and
//! flattened back to a plain value with [`Accessor::into_value`]. Failed
//! resolutions report the offending key together with the ancestor keys
//! traversed on the way down. Nothing here is safe for concurrent mutation;
//! one logical writer per tree.
//!
//! # Example
//!
//! ```
//! use accessor::{get, update};
//! use serde_json::json;
//!
//! let doc = json!({"name": "me", "friends": [{"name": "hello"}]});
//!
//! assert_eq!(get(&doc, "/friends/0/name")?, json!("hello"));
//!
//! let doc = update(doc, "/friends/0/name", "hello2")?;
//! assert_eq!(doc, json!({"name": "me", "friends": [{"name": "hello2"}]}));
//! # Ok::<(), accessor::AccessorError>(())
//! ```

use serde_json::Value;

pub mod error;
pub mod node;
pub mod path;
#[cfg(feature = "yaml")]
mod yaml;

pub use error::{AccessorError, InvalidKeyError, InvalidPathError, NoSuchPathError};
pub use node::Accessor;
pub use path::Path;

/// Finds the value at `path` in `document`.
///
/// `"/"` addresses the whole document and returns it unchanged.
///
/// # Errors
///
/// [`InvalidPathError`] when the path text is malformed, [`NoSuchPathError`]
/// when it does not resolve against the document's shape.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let doc = json!({"friends": [{"name": "hello"}]});
/// assert_eq!(accessor::get(&doc, "/friends/0/name").unwrap(), json!("hello"));
/// assert_eq!(accessor::get(&doc, "/").unwrap(), doc);
/// ```
pub fn get(document: &Value, path: &str) -> Result<Value, AccessorError> {
    if path == "/" {
        return Ok(document.clone());
    }
    let path = Path::parse(path)?;
    let tree = Accessor::from(document.clone());
    let node = tree.get(&path)?;
    Ok(node.to_value())
}

/// Replaces the value at `path` in `document` and returns the updated
/// document.
///
/// The location addressed by `path` must already exist. Whole-document
/// replacement (`"/"`) is rejected with [`InvalidPathError`].
///
/// # Errors
///
/// [`InvalidPathError`] when the path text is malformed or `"/"`,
/// [`NoSuchPathError`] when it does not resolve. Resolution failures happen
/// strictly before the single mutation point, so a failed update never
/// observes a partially mutated document.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let doc = json!({"friends": [{"name": "hello"}]});
/// let doc = accessor::update(doc, "/friends/0/name", "hello2").unwrap();
/// assert_eq!(doc, json!({"friends": [{"name": "hello2"}]}));
/// ```
pub fn update(
    document: Value,
    path: &str,
    value: impl Into<Value>,
) -> Result<Value, AccessorError> {
    if path == "/" {
        return Err(InvalidPathError::WholeDocument.into());
    }
    let path = Path::parse(path)?;
    let mut tree = Accessor::from(document);
    tree.set(&path, value)?;
    Ok(tree.into_value())
}
