//! Insertion-ordered multimap of option values.

use indexmap::IndexMap;
use serde::Serialize;

/// Option values keyed by name.
///
/// Keys keep the order in which they first appeared and each key keeps every
/// value supplied for it, duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Options {
    values: IndexMap<String, Vec<String>>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under a key
    pub(crate) fn push(&mut self, key: &str, value: &str) {
        self.values
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }

    /// All values for a key, empty when the key was never given
    pub fn get(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first value given for a key
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key).first().map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_appearance_order_and_duplicates() {
        let mut options = Options::new();
        options.push("b", "1");
        options.push("a", "2");
        options.push("b", "3");
        options.push("b", "3");

        assert_eq!(options.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(options.get("b"), ["1", "3", "3"]);
        assert_eq!(options.first("b"), Some("1"));
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn absent_key_yields_nothing() {
        let options = Options::new();
        assert!(options.get("nonexistent").is_empty());
        assert_eq!(options.first("nonexistent"), None);
        assert!(!options.contains_key("nonexistent"));
        assert!(options.is_empty());
    }

    #[test]
    fn serializes_as_ordered_object() {
        let mut options = Options::new();
        options.push("mode", "integration");
        options.push("include", "CategoryA");
        options.push("include", "CategoryB");

        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(
            json,
            r#"{"mode":["integration"],"include":["CategoryA","CategoryB"]}"#
        );
    }
}
