//! Construction from decoded YAML documents.
//!
//! YAML mappings may carry non-string keys, which the tree rejects with
//! [`InvalidKeyError`]. Scalars are canonicalized to their JSON
//! representation; tags are dropped and their inner value classified.

use indexmap::IndexMap;
use serde_json::Value;
use serde_yaml::Value as YamlValue;

use crate::error::InvalidKeyError;
use crate::node::Accessor;

impl Accessor {
    /// Builds an accessor tree from a decoded YAML document.
    ///
    /// # Errors
    ///
    /// [`InvalidKeyError`] when any mapping key is not a string.
    pub fn from_yaml(value: YamlValue) -> Result<Self, InvalidKeyError> {
        Accessor::try_from(value)
    }
}

impl TryFrom<YamlValue> for Accessor {
    type Error = InvalidKeyError;

    fn try_from(value: YamlValue) -> Result<Self, InvalidKeyError> {
        match value {
            YamlValue::Mapping(mapping) => {
                let mut entries = IndexMap::with_capacity(mapping.len());
                for (key, child) in mapping {
                    let YamlValue::String(key) = key else {
                        return Err(InvalidKeyError::new(describe_key(&key)));
                    };
                    entries.insert(key, Accessor::try_from(child)?);
                }
                Ok(Accessor::Map(entries))
            }
            YamlValue::Sequence(items) => items
                .into_iter()
                .map(Accessor::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Accessor::Sequence),
            YamlValue::Tagged(tagged) => Accessor::try_from(tagged.value),
            YamlValue::Null => Ok(Accessor::Value(Value::Null)),
            YamlValue::Bool(b) => Ok(Accessor::Value(Value::Bool(b))),
            YamlValue::Number(n) => Ok(Accessor::Value(number_to_json(n))),
            YamlValue::String(s) => Ok(Accessor::Value(Value::String(s))),
        }
    }
}

fn number_to_json(n: serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::from(i)
    } else if let Some(u) = n.as_u64() {
        Value::from(u)
    } else {
        // Non-finite floats have no JSON form; store null like serde_json does.
        n.as_f64()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

fn describe_key(key: &YamlValue) -> String {
    match key {
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::String(s) => format!("{s:?}"),
        YamlValue::Sequence(_) => "[sequence]".to_string(),
        YamlValue::Mapping(_) => "{mapping}".to_string(),
        YamlValue::Tagged(tagged) => tagged.tag.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn yaml(text: &str) -> YamlValue {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn string_keyed_mapping_constructs() {
        let tree = Accessor::from_yaml(yaml("name: me\nfriends:\n  - name: hello\n")).unwrap();
        assert_eq!(
            tree.into_value(),
            json!({"name": "me", "friends": [{"name": "hello"}]})
        );
    }

    #[test]
    fn non_string_key_fails_construction() {
        let err = Accessor::from_yaml(yaml("1: a\n2: b\n")).unwrap_err();
        assert_eq!(err.key, "1");

        let err = Accessor::from_yaml(yaml("true: a\n")).unwrap_err();
        assert_eq!(err.key, "true");
    }

    #[test]
    fn nested_non_string_key_fails_construction() {
        let err = Accessor::from_yaml(yaml("outer:\n  - 3.5: x\n")).unwrap_err();
        assert_eq!(err.key, "3.5");
    }

    #[test]
    fn scalars_canonicalize_to_json() {
        let tree = Accessor::from_yaml(yaml("a: 1\nb: 2.5\nc: true\nd: ~\n")).unwrap();
        assert_eq!(
            tree.into_value(),
            json!({"a": 1, "b": 2.5, "c": true, "d": null})
        );
    }

    #[test]
    fn tags_are_dropped() {
        let tree = Accessor::from_yaml(yaml("a: !degrees 45\n")).unwrap();
        assert_eq!(tree.into_value(), json!({"a": 45}));
    }
}
