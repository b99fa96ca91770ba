//! The `Path` value type: an immutable sequence of string keys.

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidPathError;

/// An ordered, immutable sequence of string keys addressing a location in a
/// document tree.
///
/// A `Path` produced by [`Path::parse`] or [`Path::new`] always carries at
/// least one key, and no key is empty. The distinguished [`Path::root`]
/// value carries no keys and means "this node as a whole"; it cannot be
/// produced by parsing.
///
/// All operations return new values rather than mutating.
///
/// # Example
///
/// ```
/// use accessor::Path;
///
/// let path = Path::parse("/friends/0/name")?;
/// assert_eq!(path.key(), Some("friends"));
/// assert_eq!(path.to_string(), "friends/0/name");
///
/// let tail = path.sub_path().unwrap();
/// assert_eq!(tail.to_string(), "0/name");
/// # Ok::<(), accessor::InvalidPathError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    keys: Vec<String>,
}

impl Path {
    /// Parses a `/`-separated key sequence.
    ///
    /// One leading and one trailing slash are tolerated and stripped, so
    /// `"a/b"`, `"/a/b"`, and `"/a/b/"` all parse to the same path. Empty or
    /// whitespace-only input, and any empty segment (`"/"`, `"//"`,
    /// `"a//b"`), fail with [`InvalidPathError`].
    pub fn parse(text: &str) -> Result<Self, InvalidPathError> {
        if text.trim().is_empty() {
            return Err(InvalidPathError::Empty);
        }
        let trimmed = text.strip_prefix('/').unwrap_or(text);
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Err(InvalidPathError::Empty);
        }
        Self::new(trimmed.split('/'))
    }

    /// Builds a path from a key sequence.
    ///
    /// Fails with [`InvalidPathError`] if `keys` is empty or contains an
    /// empty string.
    pub fn new<I, S>(keys: I) -> Result<Self, InvalidPathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        if keys.is_empty() {
            return Err(InvalidPathError::Empty);
        }
        if keys.iter().any(String::is_empty) {
            return Err(InvalidPathError::EmptyKey);
        }
        Ok(Path { keys })
    }

    /// The exhausted path: no keys remain, the addressed location is the
    /// node itself.
    pub fn root() -> Self {
        Path { keys: Vec::new() }
    }

    /// Returns `true` for [`Path::root`].
    pub fn is_root(&self) -> bool {
        self.keys.is_empty()
    }

    /// The head key, or `None` for the root path.
    pub fn key(&self) -> Option<&str> {
        self.keys.first().map(String::as_str)
    }

    /// The path with the head key removed, or `None` when nothing remains
    /// after the head.
    pub fn sub_path(&self) -> Option<Path> {
        if self.keys.len() <= 1 {
            return None;
        }
        Some(Path {
            keys: self.keys[1..].to_vec(),
        })
    }

    /// Returns a new path with `key` prepended.
    ///
    /// The key is not validated; callers keep the non-empty-key invariant.
    pub fn push_head(&self, key: impl Into<String>) -> Path {
        let mut keys = Vec::with_capacity(self.keys.len() + 1);
        keys.push(key.into());
        keys.extend(self.keys.iter().cloned());
        Path { keys }
    }

    /// All keys, ancestors first.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Same as [`Path::is_root`].
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub(crate) fn from_keys(keys: Vec<String>) -> Self {
        Path { keys }
    }
}

impl fmt::Display for Path {
    /// Canonical `/`-joined form, ancestors to leaf. The root path renders
    /// as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.keys.join("/"))
    }
}

impl FromStr for Path {
    type Err = InvalidPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_one_leading_and_trailing_slash() {
        let bare = Path::parse("a/b/0").unwrap();
        assert_eq!(Path::parse("/a/b/0").unwrap(), bare);
        assert_eq!(Path::parse("/a/b/0/").unwrap(), bare);
        assert_eq!(Path::parse("a/b/0/").unwrap(), bare);
        assert_eq!(bare.keys(), ["a", "b", "0"]);
    }

    #[test]
    fn parse_rejects_empty_and_all_slash_input() {
        assert_eq!(Path::parse(""), Err(InvalidPathError::Empty));
        assert_eq!(Path::parse("/"), Err(InvalidPathError::Empty));
        assert_eq!(Path::parse("//"), Err(InvalidPathError::Empty));
        assert_eq!(Path::parse("   "), Err(InvalidPathError::Empty));
    }

    #[test]
    fn parse_rejects_empty_segments() {
        assert_eq!(Path::parse("a//b"), Err(InvalidPathError::EmptyKey));
        assert_eq!(Path::parse("//a"), Err(InvalidPathError::EmptyKey));
        assert_eq!(Path::parse("a///"), Err(InvalidPathError::EmptyKey));
    }

    #[test]
    fn new_rejects_empty_input() {
        assert_eq!(Path::new(Vec::<String>::new()), Err(InvalidPathError::Empty));
        assert_eq!(Path::new(["a", "", "b"]), Err(InvalidPathError::EmptyKey));
    }

    #[test]
    fn head_tail_decomposition() {
        let path = Path::parse("a/b/0").unwrap();
        assert_eq!(path.key(), Some("a"));

        let tail = path.sub_path().unwrap();
        assert_eq!(tail.key(), Some("b"));

        let tail = tail.sub_path().unwrap();
        assert_eq!(tail.key(), Some("0"));
        assert!(tail.sub_path().is_none());
    }

    #[test]
    fn root_path_is_exhausted() {
        let root = Path::root();
        assert!(root.is_root());
        assert_eq!(root.key(), None);
        assert!(root.sub_path().is_none());
        assert_eq!(root.to_string(), "");
    }

    #[test]
    fn push_head_prepends() {
        let path = Path::parse("b/c").unwrap();
        let path = path.push_head("a");
        assert_eq!(path.to_string(), "a/b/c");

        let single = Path::root().push_head("only");
        assert_eq!(single.key(), Some("only"));
        assert!(single.sub_path().is_none());
    }

    #[test]
    fn display_and_from_str_round_trip() {
        let path: Path = "a/b/0".parse().unwrap();
        assert_eq!(path.to_string(), "a/b/0");
        assert_eq!(Path::parse(&path.to_string()).unwrap(), path);
    }

    #[test]
    fn keys_with_spaces_are_preserved() {
        let path = Path::parse("a b/c").unwrap();
        assert_eq!(path.keys(), ["a b", "c"]);
    }
}
