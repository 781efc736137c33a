//! Key-value snapshot used as the properties representation of a version

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Prefix accepted in front of every property key, e.g. `version.major`
pub const KEY_PREFIX: &str = "version.";

pub const MAJOR: &str = "major";
pub const MINOR: &str = "minor";
pub const PATCH: &str = "patch";
pub const QUALIFIER: &str = "qualifier";
pub const PRERELEASE: &str = "prerelease";
pub const METADATA: &str = "metadata";

/// An immutable, insertion-ordered map of string keys to string values.
///
/// Later entries with a duplicate key replace the earlier value but keep the
/// earlier position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(IndexMap<String, String>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Look up `key`, falling back to `version.{key}`
    pub fn get_with_prefix(&self, key: &str) -> Option<&str> {
        self.get(key)
            .or_else(|| self.get(&format!("{KEY_PREFIX}{key}")))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<IndexMap<String, String>> for Properties {
    fn from(map: IndexMap<String, String>) -> Self {
        Self(map)
    }
}

impl From<Properties> for IndexMap<String, String> {
    fn from(properties: Properties) -> Self {
        properties.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[("major", "1"), ("version.major", "2")], Some("1"))] // bare key wins
    #[case(&[("version.major", "2")], Some("2"))]
    #[case(&[("minor", "3")], None)]
    #[case(&[], None)]
    fn get_with_prefix_prefers_bare_key(
        #[case] entries: &[(&str, &str)],
        #[case] expected: Option<&str>,
    ) {
        let properties: Properties = entries.iter().copied().collect();

        assert_eq!(properties.get_with_prefix(MAJOR), expected);
    }

    #[test]
    fn from_iter_keeps_insertion_order_and_last_value() {
        let properties: Properties = [("b", "1"), ("a", "2"), ("b", "3")].into_iter().collect();

        let entries: Vec<_> = properties.iter().collect();
        assert_eq!(entries, vec![("b", "3"), ("a", "2")]);
        assert_eq!(properties.len(), 2);
    }

    #[test]
    fn converts_to_and_from_index_map() {
        let mut map = IndexMap::new();
        map.insert("version.major".to_string(), "5".to_string());
        map.insert("qualifier".to_string(), "rc.1".to_string());

        let properties = Properties::from(map.clone());

        assert!(properties.contains_key("version.major"));
        assert!(!properties.contains_key("major"));
        let restored: IndexMap<String, String> = properties.into();
        assert_eq!(restored, map);
    }

    #[test]
    fn serializes_as_flat_json_object() {
        let properties: Properties = [("major", "1"), ("minor", "2")].into_iter().collect();

        let json = serde_json::to_value(&properties).unwrap();
        assert_eq!(json, serde_json::json!({ "major": "1", "minor": "2" }));
    }
}
