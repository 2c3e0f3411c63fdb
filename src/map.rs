//! Ordered map type for object nodes.
//!
//! This module provides [`Map`], a wrapper around [`IndexMap`] that maintains
//! insertion order for object fields. The core treats field order as
//! semantically irrelevant; each format capability decides the final encoded
//! order (both shipped formats sort keys lexicographically).
//!
//! ## Why IndexMap?
//!
//! `Map` uses `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Deterministic iteration**: fields are visited in a consistent order
//!   during traversal, so repeated runs augment the tree identically
//! - **Stable debugging**: printed trees keep the shape of the source text
//!
//! ## Examples
//!
//! ```rust
//! use durapend::{Map, Value};
//!
//! let mut map = Map::new();
//! map.insert("created_at".to_string(), Value::from("2020-01-01 00:00:00"));
//! map.insert("updated_at".to_string(), Value::from("2020-01-01 00:00:01"));
//!
//! assert_eq!(map.len(), 2);
//! assert!(map.contains_key("created_at"));
//! ```

use indexmap::IndexMap;

/// An ordered map of string keys to document values.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion order.
/// The encoded key order is owned by the format capability, not by this type.
///
/// # Examples
///
/// ```rust
/// use durapend::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map(IndexMap<String, crate::Value>);

impl Map {
    /// Creates an empty `Map`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use durapend::Map;
    ///
    /// let map = Map::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Map(IndexMap::new())
    }

    /// Creates an empty `Map` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Map(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is replaced in place
    /// (the key keeps its original position) and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use durapend::{Map, Value};
    ///
    /// let mut map = Map::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::Value> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use durapend::{Map, Value};
    ///
    /// let mut map = Map::new();
    /// map.insert("key".to_string(), Value::Null);
    /// assert!(map.contains_key("key"));
    /// assert!(!map.contains_key("other"));
    /// ```
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key from the map, returning its value if it was present.
    ///
    /// Remaining entries keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<crate::Value> {
        self.0.shift_remove(key)
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

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over mutable references to the values in insertion order.
    pub fn values_mut(&mut self) -> indexmap::map::ValuesMut<'_, String, crate::Value> {
        self.0.values_mut()
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }

    /// Returns an iterator over the entries with mutable references to the values.
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, crate::Value> {
        self.0.iter_mut()
    }
}

impl From<IndexMap<String, crate::Value>> for Map {
    fn from(map: IndexMap<String, crate::Value>) -> Self {
        Map(map)
    }
}

impl From<Map> for IndexMap<String, crate::Value> {
    fn from(map: Map) -> Self {
        map.0
    }
}

impl IntoIterator for Map {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (String, crate::Value)>>(iter: I) -> Self {
        Map(iter.into_iter().collect())
    }
}

impl Extend<(String, crate::Value)> for Map {
    fn extend<I: IntoIterator<Item = (String, crate::Value)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}
