//! Ordered map type for TOML tables.
//!
//! This module provides [`ConfigMap`], a wrapper around [`IndexMap`] that keeps
//! keys in insertion order. The Writer serializes keys in exactly that order,
//! so the order a table is built in is the order that lands on disk. The
//! canonicalizer relies on this: it rebuilds every table with sorted keys.
//!
//! Equality is content based: two maps holding the same pairs in different
//! orders compare equal.
//!
//! ## Examples
//!
//! ```rust
//! use pyprojectsort::{ConfigMap, ConfigValue};
//!
//! let mut map = ConfigMap::new();
//! map.insert("name".to_string(), ConfigValue::from("demo"));
//! map.insert("version".to_string(), ConfigValue::from("0.1.0"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("demo"));
//! ```

use crate::ConfigValue;
use indexmap::IndexMap;

/// An insertion-ordered map of string keys to configuration values.
///
/// # Examples
///
/// ```rust
/// use pyprojectsort::{ConfigMap, ConfigValue};
///
/// let mut map = ConfigMap::new();
/// map.insert("second".to_string(), ConfigValue::from(2));
/// map.insert("first".to_string(), ConfigValue::from(1));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["second", "first"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigMap(IndexMap<String, ConfigValue>);

impl ConfigMap {
    /// Creates an empty `ConfigMap`.
    #[must_use]
    pub fn new() -> Self {
        ConfigMap(IndexMap::new())
    }

    /// Creates an empty `ConfigMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ConfigMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is replaced in place
    /// (the key keeps its original position) and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyprojectsort::{ConfigMap, ConfigValue};
    ///
    /// let mut map = ConfigMap::new();
    /// assert!(map.insert("key".to_string(), ConfigValue::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), ConfigValue::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: ConfigValue) -> Option<ConfigValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, ConfigValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, ConfigValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ConfigValue> {
        self.0.iter()
    }

    /// Reorders the entries by ascending byte-wise key comparison.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyprojectsort::{ConfigMap, ConfigValue};
    ///
    /// let mut map: ConfigMap = [("b", 2), ("a", 1)]
    ///     .into_iter()
    ///     .map(|(k, v)| (k.to_string(), ConfigValue::from(v)))
    ///     .collect();
    /// map.sort_keys();
    ///
    /// let keys: Vec<_> = map.keys().map(String::as_str).collect();
    /// assert_eq!(keys, vec!["a", "b"]);
    /// ```
    pub fn sort_keys(&mut self) {
        self.0.sort_keys();
    }

    /// Returns the entries ordered by key, regardless of insertion order.
    pub(crate) fn sorted_entries(&self) -> Vec<(&String, &ConfigValue)> {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl IntoIterator for ConfigMap {
    type Item = (String, ConfigValue);
    type IntoIter = indexmap::map::IntoIter<String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConfigMap {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = indexmap::map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, ConfigValue)> for ConfigMap {
    fn from_iter<T: IntoIterator<Item = (String, ConfigValue)>>(iter: T) -> Self {
        ConfigMap(IndexMap::from_iter(iter))
    }
}
