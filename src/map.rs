//! The string-keyed store backing [`JsonObject`](crate::JsonObject).
//!
//! [`JsonMap`] hides the choice of backing container behind a
//! construction-time [`KeyOrder`] strategy:
//!
//! - [`KeyOrder::Insertion`] keeps keys in first-insertion order, backed
//!   by an [`IndexMap`]. This makes serialization deterministic and is
//!   the default.
//! - [`KeyOrder::Sorted`] keeps keys in lexicographic order, backed by a
//!   [`BTreeMap`]. This is the "ordered variant" of the object model:
//!   the same type with a different iteration order, nothing more.
//!
//! ## Examples
//!
//! ```rust
//! use jsondoc::{JsonMap, KeyOrder, Value};
//!
//! let mut map = JsonMap::with_order(KeyOrder::Sorted);
//! map.insert("zebra".to_string(), Value::from(1));
//! map.insert("aardvark".to_string(), Value::from(2));
//!
//! let keys: Vec<_> = map.keys().collect();
//! assert_eq!(keys, ["aardvark", "zebra"]);
//! ```

use crate::options::KeyOrder;
use crate::Value;
use indexmap::IndexMap;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// An owned map from string keys to [`Value`]s with a configurable
/// iteration order.
///
/// Keys are unique; inserting under an existing key replaces the prior
/// value. Two maps compare equal when they hold the same entries,
/// regardless of their order strategies.
#[derive(Clone, Debug)]
pub struct JsonMap {
    store: Store,
}

#[derive(Clone, Debug)]
enum Store {
    Insertion(IndexMap<String, Value>),
    Sorted(BTreeMap<String, Value>),
}

impl JsonMap {
    /// Creates an empty map in insertion order.
    #[must_use]
    pub fn new() -> Self {
        Self::with_order(KeyOrder::Insertion)
    }

    /// Creates an empty map with the given order strategy.
    #[must_use]
    pub fn with_order(order: KeyOrder) -> Self {
        let store = match order {
            KeyOrder::Insertion => Store::Insertion(IndexMap::new()),
            KeyOrder::Sorted => Store::Sorted(BTreeMap::new()),
        };
        JsonMap { store }
    }

    /// Creates an empty insertion-order map with room for `capacity`
    /// entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsonMap {
            store: Store::Insertion(IndexMap::with_capacity(capacity)),
        }
    }

    /// Returns the order strategy this map was constructed with.
    #[must_use]
    pub fn order(&self) -> KeyOrder {
        match self.store {
            Store::Insertion(_) => KeyOrder::Insertion,
            Store::Sorted(_) => KeyOrder::Sorted,
        }
    }

    /// Inserts a key/value pair, returning the previous value if the key
    /// was already present.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        match &mut self.store {
            Store::Insertion(map) => map.insert(key, value),
            Store::Sorted(map) => map.insert(key, value),
        }
    }

    /// Returns a reference to the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match &self.store {
            Store::Insertion(map) => map.get(key),
            Store::Sorted(map) => map.get(key),
        }
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        match &mut self.store {
            Store::Insertion(map) => map.get_mut(key),
            Store::Sorted(map) => map.get_mut(key),
        }
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        match &self.store {
            Store::Insertion(map) => map.contains_key(key),
            Store::Sorted(map) => map.contains_key(key),
        }
    }

    /// Removes `key`, returning its value if it was present. Removal
    /// preserves the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        match &mut self.store {
            Store::Insertion(map) => map.shift_remove(key),
            Store::Sorted(map) => map.remove(key),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.store {
            Store::Insertion(map) => map.len(),
            Store::Sorted(map) => map.len(),
        }
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the keys in this map's order.
    pub fn keys(&self) -> Keys<'_> {
        Keys { inner: self.iter() }
    }

    /// Iterates over the values in this map's order.
    pub fn values(&self) -> Values<'_> {
        Values { inner: self.iter() }
    }

    /// Iterates over key/value pairs in this map's order.
    pub fn iter(&self) -> Iter<'_> {
        let inner = match &self.store {
            Store::Insertion(map) => IterInner::Insertion(map.iter()),
            Store::Sorted(map) => IterInner::Sorted(map.iter()),
        };
        Iter { inner }
    }
}

impl Default for JsonMap {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for JsonMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

/// Iterator over `(&String, &Value)` pairs of a [`JsonMap`].
pub struct Iter<'a> {
    inner: IterInner<'a>,
}

enum IterInner<'a> {
    Insertion(indexmap::map::Iter<'a, String, Value>),
    Sorted(btree_map::Iter<'a, String, Value>),
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a String, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Insertion(iter) => iter.next(),
            IterInner::Sorted(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Insertion(iter) => iter.size_hint(),
            IterInner::Sorted(iter) => iter.size_hint(),
        }
    }
}

/// Iterator over the keys of a [`JsonMap`].
pub struct Keys<'a> {
    inner: Iter<'a>,
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Iterator over the values of a [`JsonMap`].
pub struct Values<'a> {
    inner: Iter<'a>,
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Owning iterator over the entries of a [`JsonMap`].
pub struct IntoIter {
    inner: IntoIterInner,
}

enum IntoIterInner {
    Insertion(indexmap::map::IntoIter<String, Value>),
    Sorted(btree_map::IntoIter<String, Value>),
}

impl Iterator for IntoIter {
    type Item = (String, Value);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IntoIterInner::Insertion(iter) => iter.next(),
            IntoIterInner::Sorted(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IntoIterInner::Insertion(iter) => iter.size_hint(),
            IntoIterInner::Sorted(iter) => iter.size_hint(),
        }
    }
}

impl IntoIterator for JsonMap {
    type Item = (String, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        let inner = match self.store {
            Store::Insertion(map) => IntoIterInner::Insertion(map.into_iter()),
            Store::Sorted(map) => IntoIterInner::Sorted(map.into_iter()),
        };
        IntoIter { inner }
    }
}

impl<'a> IntoIterator for &'a JsonMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(String, Value)> for JsonMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        JsonMap {
            store: Store::Insertion(IndexMap::from_iter(iter)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_preserved() {
        let mut map = JsonMap::new();
        map.insert("b".to_string(), Value::from(1));
        map.insert("a".to_string(), Value::from(2));
        map.insert("c".to_string(), Value::from(3));

        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn sorted_order_resorts_keys() {
        let mut map = JsonMap::with_order(KeyOrder::Sorted);
        map.insert("b".to_string(), Value::from(1));
        map.insert("a".to_string(), Value::from(2));
        map.insert("c".to_string(), Value::from(3));

        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, ["a", "b", "c"]);
        assert_eq!(map.order(), KeyOrder::Sorted);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut map = JsonMap::new();
        map.insert("x".to_string(), Value::from(1));
        map.insert("y".to_string(), Value::from(2));
        map.insert("z".to_string(), Value::from(3));

        assert_eq!(map.remove("y"), Some(Value::from(2)));
        assert_eq!(map.remove("y"), None);

        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, ["x", "z"]);
    }

    #[test]
    fn equality_ignores_order_strategy() {
        let mut insertion = JsonMap::new();
        insertion.insert("b".to_string(), Value::from(1));
        insertion.insert("a".to_string(), Value::from(2));

        let mut sorted = JsonMap::with_order(KeyOrder::Sorted);
        sorted.insert("a".to_string(), Value::from(2));
        sorted.insert("b".to_string(), Value::from(1));

        assert_eq!(insertion, sorted);
    }
}
