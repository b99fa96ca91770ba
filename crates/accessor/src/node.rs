//! The accessor tree: map, sequence, and value nodes.

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value;

use crate::error::NoSuchPathError;
use crate::path::Path;

/// A tree node over a dynamically-typed document.
///
/// The constructor classifies a decoded value into one of three shapes:
/// string-keyed maps, ordered sequences, and opaque scalars. The tree is
/// structurally isomorphic to the input and exclusively owns its children;
/// [`Accessor::into_value`] inverts the construction.
///
/// Resolution consumes one path key per level: maps look the key up,
/// sequences parse it as a dense 0-based index, scalars have no children.
///
/// # Example
///
/// ```
/// use accessor::{Accessor, Path};
/// use serde_json::json;
///
/// let mut tree = Accessor::new(json!({"friends": [{"name": "hello"}]}));
///
/// let path = Path::parse("/friends/0/name")?;
/// assert_eq!(tree.get(&path)?.to_value(), json!("hello"));
///
/// tree.set(&path, "hello2")?;
/// assert_eq!(tree.into_value(), json!({"friends": [{"name": "hello2"}]}));
/// # Ok::<(), accessor::AccessorError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Accessor {
    /// String-keyed mapping; entries keep insertion order.
    Map(IndexMap<String, Accessor>),
    /// Ordered sequence with dense 0-based indices.
    Sequence(Vec<Accessor>),
    /// An opaque scalar, stored verbatim.
    Value(Value),
}

impl Accessor {
    /// Builds an accessor tree from a decoded document.
    pub fn new(value: impl Into<Value>) -> Self {
        Accessor::from(value.into())
    }

    /// Resolves `path` to a node of the tree.
    ///
    /// The root path resolves to the node itself.
    ///
    /// # Errors
    ///
    /// [`NoSuchPathError`] when a key is absent, a sequence key is not a
    /// non-negative integer or is out of range, or a scalar is indexed into.
    /// The error's stack carries the enclosing keys, nearest ancestor first.
    pub fn get(&self, path: &Path) -> Result<&Accessor, NoSuchPathError> {
        self.get_at(path.keys())
    }

    /// Mutable counterpart of [`Accessor::get`].
    pub fn get_mut(&mut self, path: &Path) -> Result<&mut Accessor, NoSuchPathError> {
        self.get_mut_at(path.keys())
    }

    /// Replaces the node at `path` with `value` run through the constructor.
    ///
    /// Resolution happens strictly before the single mutation point, so a
    /// failed `set` leaves the tree untouched. The key addressed by the last
    /// path segment must already exist; `set` never creates new entries.
    ///
    /// # Errors
    ///
    /// The same kinds as [`Accessor::get`].
    pub fn set(&mut self, path: &Path, value: impl Into<Value>) -> Result<(), NoSuchPathError> {
        self.set_at(path.keys(), Accessor::from(value.into()))
    }

    fn get_at(&self, keys: &[String]) -> Result<&Accessor, NoSuchPathError> {
        let Some((key, rest)) = keys.split_first() else {
            return Ok(self);
        };
        match self {
            Accessor::Map(entries) => {
                let child = entries
                    .get(key)
                    .ok_or_else(|| NoSuchPathError::no_such_key(key))?;
                child.get_at(rest).map_err(|e| e.push_ancestor(key))
            }
            Accessor::Sequence(items) => {
                let index = parse_index(key, items.len())?;
                items[index].get_at(rest).map_err(|e| e.push_ancestor(key))
            }
            Accessor::Value(value) => Err(NoSuchPathError::no_key_on_scalar(value, key)),
        }
    }

    fn get_mut_at(&mut self, keys: &[String]) -> Result<&mut Accessor, NoSuchPathError> {
        let Some((key, rest)) = keys.split_first() else {
            return Ok(self);
        };
        match self {
            Accessor::Map(entries) => {
                let child = entries
                    .get_mut(key)
                    .ok_or_else(|| NoSuchPathError::no_such_key(key))?;
                child.get_mut_at(rest).map_err(|e| e.push_ancestor(key))
            }
            Accessor::Sequence(items) => {
                let index = parse_index(key, items.len())?;
                items[index]
                    .get_mut_at(rest)
                    .map_err(|e| e.push_ancestor(key))
            }
            Accessor::Value(value) => Err(NoSuchPathError::no_key_on_scalar(value, key)),
        }
    }

    fn set_at(&mut self, keys: &[String], node: Accessor) -> Result<(), NoSuchPathError> {
        let Some((key, rest)) = keys.split_first() else {
            *self = node;
            return Ok(());
        };
        match self {
            Accessor::Map(entries) => {
                let child = entries
                    .get_mut(key)
                    .ok_or_else(|| NoSuchPathError::no_such_key(key))?;
                child.set_at(rest, node).map_err(|e| e.push_ancestor(key))
            }
            Accessor::Sequence(items) => {
                let index = parse_index(key, items.len())?;
                items[index]
                    .set_at(rest, node)
                    .map_err(|e| e.push_ancestor(key))
            }
            Accessor::Value(value) => Err(NoSuchPathError::no_key_on_scalar(value, key)),
        }
    }

    /// Flattens the tree back into a plain nested value, consuming it.
    pub fn into_value(self) -> Value {
        match self {
            Accessor::Map(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, child)| (key, child.into_value()))
                    .collect(),
            ),
            Accessor::Sequence(items) => {
                Value::Array(items.into_iter().map(Accessor::into_value).collect())
            }
            Accessor::Value(value) => value,
        }
    }

    /// Flattens the tree back into a plain nested value, cloning it.
    pub fn to_value(&self) -> Value {
        self.clone().into_value()
    }

    /// Visits every scalar leaf depth-first in pre-order.
    ///
    /// The visitor receives the full path from the root and the scalar; for
    /// a bare scalar tree it receives the root path. The first error the
    /// visitor returns aborts the traversal and is returned unchanged.
    pub fn for_each<E, F>(&self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&Path, &Value) -> Result<(), E>,
    {
        let mut prefix = Vec::new();
        self.for_each_at(&mut prefix, &mut visit)
    }

    fn for_each_at<E, F>(&self, prefix: &mut Vec<String>, visit: &mut F) -> Result<(), E>
    where
        F: FnMut(&Path, &Value) -> Result<(), E>,
    {
        match self {
            Accessor::Map(entries) => {
                for (key, child) in entries {
                    prefix.push(key.clone());
                    let result = child.for_each_at(prefix, visit);
                    prefix.pop();
                    result?;
                }
                Ok(())
            }
            Accessor::Sequence(items) => {
                for (index, child) in items.iter().enumerate() {
                    prefix.push(index.to_string());
                    let result = child.for_each_at(prefix, visit);
                    prefix.pop();
                    result?;
                }
                Ok(())
            }
            Accessor::Value(value) => {
                let path = Path::from_keys(prefix.clone());
                visit(&path, value)
            }
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Accessor::Map(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Accessor::Sequence(_))
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Accessor::Value(_))
    }

    /// The map entries, if this is a map node.
    pub fn as_map(&self) -> Option<&IndexMap<String, Accessor>> {
        match self {
            Accessor::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// The sequence items, if this is a sequence node.
    pub fn as_sequence(&self) -> Option<&[Accessor]> {
        match self {
            Accessor::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The stored scalar, if this is a value node.
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Accessor::Value(value) => Some(value),
            _ => None,
        }
    }
}

/// Classification: string-keyed containers become map nodes, ordered
/// containers become sequence nodes, everything else is an opaque scalar.
impl From<Value> for Accessor {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(entries) => Accessor::Map(
                entries
                    .into_iter()
                    .map(|(key, child)| (key, Accessor::from(child)))
                    .collect(),
            ),
            Value::Array(items) => {
                Accessor::Sequence(items.into_iter().map(Accessor::from).collect())
            }
            other => Accessor::Value(other),
        }
    }
}

fn parse_index(key: &str, len: usize) -> Result<usize, NoSuchPathError> {
    let index: usize = key
        .parse()
        .map_err(|_| NoSuchPathError::not_a_number(key))?;
    if index >= len {
        return Err(NoSuchPathError::index_out_of_range(key));
    }
    Ok(index)
}

/// Serializes as the unwrapped document shape, so a tree can be embedded
/// directly in any serde encoder.
impl Serialize for Accessor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Accessor::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, child) in entries {
                    map.serialize_entry(key, child)?;
                }
                map.end()
            }
            Accessor::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for child in items {
                    seq.serialize_element(child)?;
                }
                seq.end()
            }
            Accessor::Value(value) => value.serialize(serializer),
        }
    }
}

/// Decodes a dynamic value and runs it through the constructor.
impl<'de> Deserialize<'de> for Accessor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Accessor::from(Value::deserialize(deserializer)?))
    }
}
