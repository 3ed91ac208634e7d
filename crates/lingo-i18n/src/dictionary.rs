//! Flat, insertion-ordered string dictionaries for a single locale.
//!
//! # Invariants
//!
//! 1. **Flat**: every key and every value is a `String`. Nested data cannot
//!    be represented, and the `serde` feature rejects it on input.
//!
//! 2. **Ordered**: iteration follows insertion order. Re-inserting an
//!    existing key replaces the value in place and keeps its position.
//!
//! 3. **First match wins**: [`LocaleDictionary::key_of`] returns the
//!    earliest key whose value matches, so duplicate values resolve
//!    deterministically.

use std::collections::HashMap;

/// Locale identifier (e.g., `"en"`, `"es"`, `"pt-BR"`).
pub type Locale = String;

/// Key/value strings for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleDictionary {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl LocaleDictionary {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a string, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        if let Some(&slot) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[slot].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Look up a string by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1.as_str())
    }

    /// Find the first key (in insertion order) whose value is exactly `value`.
    #[must_use]
    pub fn key_of(&self, value: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, v)| v == value)
            .map(|(k, _)| k.as_str())
    }

    /// Whether `key` is defined.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> Extend<(K, V)> for LocaleDictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for LocaleDictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for LocaleDictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::LocaleDictionary;

    impl Serialize for LocaleDictionary {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }

    struct DictionaryVisitor;

    impl<'de> Visitor<'de> for DictionaryVisitor {
        type Value = LocaleDictionary;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a flat map of string keys to string values")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut dict = LocaleDictionary::new();
            while let Some((key, value)) = access.next_entry::<String, String>()? {
                dict.insert(key, value);
            }
            Ok(dict)
        }
    }

    impl<'de> Deserialize<'de> for LocaleDictionary {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(DictionaryVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> LocaleDictionary {
        LocaleDictionary::from([
            ("hello", "Hello World!"),
            ("subtitle", "This is a subtitle!"),
        ])
    }

    #[test]
    fn insert_and_get() {
        let dict = english();
        assert_eq!(dict.get("hello"), Some("Hello World!"));
        assert_eq!(dict.get("subtitle"), Some("This is a subtitle!"));
        assert_eq!(dict.get("missing"), None);
    }

    #[test]
    fn insert_returns_replaced_value() {
        let mut dict = english();
        assert_eq!(dict.insert("hello", "Hi"), Some("Hello World!".into()));
        assert_eq!(dict.insert("footer", "Bye"), None);
        assert_eq!(dict.get("hello"), Some("Hi"));
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn reinsert_keeps_position() {
        let mut dict = english();
        dict.insert("hello", "Hi");
        let keys: Vec<&str> = dict.keys().collect();
        assert_eq!(keys, vec!["hello", "subtitle"]);
    }

    #[test]
    fn key_of_exact_match() {
        let dict = english();
        assert_eq!(dict.key_of("Hello World!"), Some("hello"));
        assert_eq!(dict.key_of("hello world!"), None);
        assert_eq!(dict.key_of("Hello World"), None);
    }

    #[test]
    fn key_of_first_match_wins() {
        let dict = LocaleDictionary::from([("ok", "OK"), ("confirm", "OK"), ("cancel", "Cancel")]);
        assert_eq!(dict.key_of("OK"), Some("ok"));
    }

    #[test]
    fn duplicate_keys_in_input_last_value_wins() {
        let dict: LocaleDictionary = vec![("a", "1"), ("b", "2"), ("a", "3")]
            .into_iter()
            .collect();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("a"), Some("3"));
        assert_eq!(dict.keys().next(), Some("a"));
    }

    #[test]
    fn iter_in_insertion_order() {
        let dict = LocaleDictionary::from([("z", "last?"), ("a", "first?")]);
        let pairs: Vec<(&str, &str)> = dict.iter().collect();
        assert_eq!(pairs, vec![("z", "last?"), ("a", "first?")]);
    }

    #[test]
    fn empty_dictionary() {
        let dict = LocaleDictionary::new();
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
        assert_eq!(dict.key_of(""), None);
        assert!(!dict.contains_key("anything"));
    }

    #[test]
    fn empty_value_is_a_valid_phrase() {
        let dict = LocaleDictionary::from([("blank", "")]);
        assert_eq!(dict.key_of(""), Some("blank"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_preserves_document_order() {
        let dict: LocaleDictionary =
            serde_json::from_str(r#"{"subtitle": "Sub", "hello": "Hi"}"#).unwrap();
        let keys: Vec<&str> = dict.keys().collect();
        assert_eq!(keys, vec!["subtitle", "hello"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_nested_values() {
        assert!(serde_json::from_str::<LocaleDictionary>(r#"{"menu": {"open": "Open"}}"#).is_err());
        assert!(serde_json::from_str::<LocaleDictionary>(r#"{"count": 3}"#).is_err());
        assert!(serde_json::from_str::<LocaleDictionary>(r#"{"gone": null}"#).is_err());
        assert!(serde_json::from_str::<LocaleDictionary>(r#"["Hello"]"#).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_as_object() {
        let json = serde_json::to_string(&english()).unwrap();
        assert_eq!(
            json,
            r#"{"hello":"Hello World!","subtitle":"This is a subtitle!"}"#
        );
    }
}
