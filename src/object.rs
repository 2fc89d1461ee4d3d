//! The name/value container at the center of the document model.
//!
//! A [`JsonObject`] is a collection of unique string keys bound to
//! [`Value`]s. It can be built programmatically with the `put` family,
//! parsed from relaxed JSON-like text, queried with the typed `get_*`
//! accessors, and re-emitted as strictly conforming JSON.
//!
//! ## Strict and lenient pairs
//!
//! Every accessor and mutator comes in two flavors with identical
//! coercion rules:
//!
//! - the strict form (`get_*`, `put`, `accumulate`, `append`) propagates
//!   a specific [`Error`];
//! - the lenient form (`opt_*`, `put_opt`, `put_once`) swallows any
//!   failure and substitutes a default or does nothing.
//!
//! ## Null versus absent
//!
//! Storing an explicit null and not storing a key are different states:
//!
//! ```rust
//! use jsondoc::{Error, JsonObject, Value};
//!
//! let mut obj = JsonObject::new();
//! obj.put("k", Value::Null).unwrap();
//!
//! assert_eq!(obj.get("k").unwrap(), None);          // present, null
//! assert!(matches!(
//!     obj.get("missing"),
//!     Err(Error::KeyNotFound { .. })                // absent
//! ));
//! ```
//!
//! ## The ordered variant
//!
//! Constructing with [`KeyOrder::Sorted`] fixes iteration and
//! serialization to lexicographic key order; everything else is
//! unchanged:
//!
//! ```rust
//! use jsondoc::JsonObject;
//!
//! let mut obj = JsonObject::sorted();
//! obj.put("beta", 2).unwrap();
//! obj.put("alpha", 1).unwrap();
//! assert_eq!(obj.to_string(), r#"{"alpha":1,"beta":2}"#);
//! ```

use crate::map::{self, JsonMap};
use crate::{Error, JsonArray, KeyOrder, Number, Result, Value, WriteOptions};
use serde::{Serialize, Serializer};
use std::fmt;

/// A mapping from unique string keys to JSON values.
///
/// The object exclusively owns its entries; nested objects and arrays
/// are owned by their containing value, so the model never constructs
/// shared mutable substructure.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct JsonObject {
    map: JsonMap,
}

impl JsonObject {
    /// Creates an empty object iterating in insertion order.
    #[must_use]
    pub fn new() -> Self {
        JsonObject {
            map: JsonMap::new(),
        }
    }

    /// Creates an empty object with the given key-order strategy.
    #[must_use]
    pub fn with_order(order: KeyOrder) -> Self {
        JsonObject {
            map: JsonMap::with_order(order),
        }
    }

    /// Creates an empty ordered-variant object (lexicographic key
    /// order).
    #[must_use]
    pub fn sorted() -> Self {
        Self::with_order(KeyOrder::Sorted)
    }

    /// Returns this object's key-order strategy.
    #[must_use]
    pub fn order(&self) -> KeyOrder {
        self.map.order()
    }

    /// Parses an object from relaxed JSON-like text with the given
    /// key-order strategy. [`FromStr`](std::str::FromStr) is the
    /// insertion-order shorthand.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Syntax`] on malformed text or a duplicate
    /// key; no partial object is produced.
    pub fn parse_with_order(source: &str, order: KeyOrder) -> Result<Self> {
        crate::de::object_from_str(source, order)
    }

    /// Builds an object from an external key/value source. Entries are
    /// inserted with [`put_opt`](Self::put_opt) semantics: invalid
    /// values are silently skipped, later duplicates overwrite.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut object = JsonObject::new();
        for (key, value) in pairs {
            let key = key.into();
            object.put_opt(Some(key.as_str()), value);
        }
        object
    }

    /// Builds a nested object from `(dotted.path.key, value)` string
    /// pairs, the shape a locale resource bundle yields. Each dotted key
    /// is split into path segments and intermediate objects are
    /// materialized on demand; an intermediate segment already bound to
    /// a non-object value is replaced with a fresh object.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::JsonObject;
    ///
    /// let obj = JsonObject::from_properties([
    ///     ("server.host".to_string(), "localhost".to_string()),
    ///     ("server.port".to_string(), "8080".to_string()),
    ///     ("name".to_string(), "demo".to_string()),
    /// ]);
    ///
    /// assert_eq!(
    ///     obj.get_object("server").unwrap().opt_string("host"),
    ///     "localhost"
    /// );
    /// ```
    pub fn from_properties<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut root = JsonObject::new();
        for (key, value) in pairs {
            let segments: Vec<&str> = key.split('.').collect();
            if let Some((last, path)) = segments.split_last() {
                let target = path
                    .iter()
                    .fold(&mut root, |obj, segment| obj.ensure_object(segment));
                target.store((*last).to_string(), Value::String(value));
            }
        }
        root
    }

    fn ensure_object(&mut self, segment: &str) -> &mut JsonObject {
        if !matches!(self.map.get(segment), Some(Value::Object(_))) {
            self.map
                .insert(segment.to_string(), Value::Object(JsonObject::new()));
        }
        match self.map.get_mut(segment) {
            Some(Value::Object(obj)) => obj,
            _ => unreachable!("segment was just materialized as an object"),
        }
    }

    /// Copies the named keys out of this object into a new one with the
    /// same key-order strategy. Missing names are ignored; explicit
    /// nulls are copied as nulls.
    #[must_use]
    pub fn subset(&self, names: &[&str]) -> JsonObject {
        let mut object = JsonObject::with_order(self.order());
        for name in names {
            if let Some(value) = self.map.get(name) {
                object.store((*name).to_string(), value.clone());
            }
        }
        object
    }

    /// Re-keys this object into the ordered variant. Nested values are
    /// copied as-is.
    #[must_use]
    pub fn to_sorted(&self) -> JsonObject {
        let mut object = JsonObject::sorted();
        for (key, value) in self.iter() {
            object.store(key.clone(), value.clone());
        }
        object
    }

    /// The strict insertion core shared by every `put` flavor: a missing
    /// key fails with [`Error::InvalidKey`], a non-finite number with
    /// [`Error::InvalidNumber`]; otherwise the value is stored,
    /// overwriting any prior entry.
    pub fn insert(&mut self, key: Option<String>, value: Value) -> Result<()> {
        let key = key.ok_or(Error::InvalidKey)?;
        value.check_finite()?;
        self.map.insert(key, value);
        Ok(())
    }

    /// Raw storage with no validity checks; parsing and internal copies
    /// go through here.
    pub(crate) fn store(&mut self, key: String, value: Value) {
        self.map.insert(key, value);
    }

    /// Inserts a key/value pair, replacing any prior value under the
    /// key.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidNumber`] if the value is a non-finite
    /// number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::JsonObject;
    ///
    /// let mut obj = JsonObject::new();
    /// obj.put("greeting", "Hello, World!").unwrap();
    /// assert_eq!(obj.to_string(), r#"{"greeting":"Hello, World!"}"#);
    /// ```
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<&mut Self> {
        self.insert(Some(key.into()), value.into())?;
        Ok(self)
    }

    /// Inserts only if the key is not already present. Failures,
    /// including an invalid value, are silently ignored.
    pub fn put_once(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let key = key.into();
        if !self.map.contains_key(&key) {
            let _ = self.insert(Some(key), value.into());
        }
        self
    }

    /// Inserts, silently ignoring a missing key or an invalid value.
    /// This is the lenient counterpart of [`insert`](Self::insert).
    pub fn put_opt(&mut self, key: Option<&str>, value: impl Into<Value>) -> &mut Self {
        let _ = self.insert(key.map(str::to_string), value.into());
        self
    }

    /// Accumulates values under a key. The first insertion stores the
    /// value itself (an array value is stored boxed in a one-element
    /// array); a second insertion promotes the entry to a two-element
    /// array; further insertions append.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidNumber`] if the value is a non-finite
    /// number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::JsonObject;
    ///
    /// let mut obj = JsonObject::new();
    /// obj.accumulate("x", 1).unwrap();
    /// obj.accumulate("x", 2).unwrap();
    /// obj.accumulate("x", 3).unwrap();
    /// assert_eq!(obj.to_string(), r#"{"x":[1,2,3]}"#);
    /// ```
    pub fn accumulate(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<&mut Self> {
        let key = key.into();
        let value = value.into();
        value.check_finite()?;
        match self.map.get_mut(&key) {
            None => {
                let stored = match value {
                    Value::Array(arr) => {
                        let mut outer = JsonArray::new();
                        outer.store(Value::Array(arr));
                        Value::Array(outer)
                    }
                    other => other,
                };
                self.map.insert(key, stored);
            }
            Some(Value::Array(arr)) => {
                arr.store(value);
            }
            Some(existing) => {
                let prior = std::mem::replace(existing, Value::Null);
                let mut arr = JsonArray::new();
                arr.store(prior);
                arr.store(value);
                *existing = Value::Array(arr);
            }
        }
        Ok(self)
    }

    /// Appends to the array under a key, creating a one-element array if
    /// the key is absent.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidNumber`] for a non-finite number, or
    /// [`Error::TypeMismatch`] if the key holds a non-array value.
    pub fn append(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<&mut Self> {
        let key = key.into();
        let value = value.into();
        value.check_finite()?;
        match self.map.get_mut(&key) {
            None => {
                let mut arr = JsonArray::new();
                arr.store(value);
                self.map.insert(key, Value::Array(arr));
            }
            Some(Value::Array(arr)) => {
                arr.store(value);
            }
            Some(other) => {
                return Err(Error::object_mismatch(&key, "an array", other.type_name()));
            }
        }
        Ok(self)
    }

    /// Increments the number under a key, creating it as the integer `1`
    /// if absent. The numeric subkind is preserved; integer increments
    /// wrap on overflow.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TypeMismatch`] if the key holds a non-numeric
    /// value.
    pub fn increment(&mut self, key: impl Into<String>) -> Result<&mut Self> {
        let key = key.into();
        match self.map.get_mut(&key) {
            None => {
                self.map.insert(key, Value::Number(Number::Int(1)));
            }
            Some(Value::Number(n)) => {
                *n = match *n {
                    Number::Int(i) => Number::Int(i.wrapping_add(1)),
                    Number::Long(l) => Number::Long(l.wrapping_add(1)),
                    Number::Double(d) => Number::Double(d + 1.0),
                };
            }
            Some(other) => {
                return Err(Error::object_mismatch(&key, "a number", other.type_name()));
            }
        }
        Ok(self)
    }

    /// Removes a key, returning its prior value, or `None` if it was
    /// absent.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.map.remove(key)
    }

    /// Copies every entry of `other` into this object. With
    /// `overwrite` false, existing keys are left alone
    /// ([`put_once`](Self::put_once) semantics); with `overwrite` true,
    /// they are replaced.
    pub fn put_all(&mut self, other: JsonObject, overwrite: bool) -> &mut Self {
        for (key, value) in other.map {
            if overwrite {
                let _ = self.insert(Some(key), value);
            } else {
                self.put_once(key, value);
            }
        }
        self
    }

    /// The raw value under `key` with no null translation; strict
    /// getters build on this.
    fn fetch(&self, key: &str) -> Result<&Value> {
        self.map.get(key).ok_or_else(|| Error::KeyNotFound {
            key: key.to_string(),
        })
    }

    /// Returns the value under `key`.
    ///
    /// An explicit null yields `Ok(None)`; an absent key fails with
    /// [`Error::KeyNotFound`].
    pub fn get(&self, key: &str) -> Result<Option<&Value>> {
        match self.fetch(key)? {
            Value::Null => Ok(None),
            value => Ok(Some(value)),
        }
    }

    /// Returns the boolean under `key`, accepting the strings `"true"`
    /// and `"false"` (any case) as well.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        let value = self.fetch(key)?;
        match value {
            Value::Bool(b) => Ok(*b),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(true),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(false),
            other => Err(Error::object_mismatch(key, "a boolean", other.type_name())),
        }
    }

    /// Returns the number under `key` as a double, parsing a string
    /// value if necessary.
    pub fn get_f64(&self, key: &str) -> Result<f64> {
        let value = self.fetch(key)?;
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            Value::String(s) => s
                .parse::<f64>()
                .map_err(|_| Error::object_mismatch(key, "a number", value.type_name())),
            other => Err(Error::object_mismatch(key, "a number", other.type_name())),
        }
    }

    /// Returns the number under `key` as an `i32`, parsing a string
    /// value if necessary. A double is truncated toward zero.
    pub fn get_i32(&self, key: &str) -> Result<i32> {
        let value = self.fetch(key)?;
        match value {
            Value::Number(n) => n
                .as_i32()
                .ok_or_else(|| Error::object_mismatch(key, "an int", value.type_name())),
            Value::String(s) => s
                .parse::<i32>()
                .map_err(|_| Error::object_mismatch(key, "an int", value.type_name())),
            other => Err(Error::object_mismatch(key, "an int", other.type_name())),
        }
    }

    /// Returns the number under `key` as an `i64`, parsing a string
    /// value if necessary. A double is truncated toward zero.
    pub fn get_i64(&self, key: &str) -> Result<i64> {
        let value = self.fetch(key)?;
        match value {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| Error::object_mismatch(key, "a long", value.type_name())),
            Value::String(s) => s
                .parse::<i64>()
                .map_err(|_| Error::object_mismatch(key, "a long", value.type_name())),
            other => Err(Error::object_mismatch(key, "a long", other.type_name())),
        }
    }

    /// Returns the string under `key`; an explicit null yields
    /// `Ok(None)`.
    pub fn get_string(&self, key: &str) -> Result<Option<&str>> {
        match self.fetch(key)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            other => Err(Error::object_mismatch(key, "a string", other.type_name())),
        }
    }

    /// Returns the object under `key`; no coercion is attempted.
    pub fn get_object(&self, key: &str) -> Result<&JsonObject> {
        match self.fetch(key)? {
            Value::Object(obj) => Ok(obj),
            other => Err(Error::object_mismatch(key, "an object", other.type_name())),
        }
    }

    /// Returns the array under `key`; no coercion is attempted.
    pub fn get_array(&self, key: &str) -> Result<&JsonArray> {
        match self.fetch(key)? {
            Value::Array(arr) => Ok(arr),
            other => Err(Error::object_mismatch(key, "an array", other.type_name())),
        }
    }

    /// Returns the value under `key`, or `None` when the key is absent
    /// or holds an explicit null.
    #[must_use]
    pub fn opt(&self, key: &str) -> Option<&Value> {
        self.get(key).ok().flatten()
    }

    /// Lenient [`get_bool`](Self::get_bool); defaults to `false`.
    #[must_use]
    pub fn opt_bool(&self, key: &str) -> bool {
        self.opt_bool_or(key, false)
    }

    /// Lenient [`get_bool`](Self::get_bool) with a caller default.
    #[must_use]
    pub fn opt_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_bool(key).unwrap_or(default)
    }

    /// Lenient [`get_f64`](Self::get_f64); defaults to NaN.
    #[must_use]
    pub fn opt_f64(&self, key: &str) -> f64 {
        self.opt_f64_or(key, f64::NAN)
    }

    /// Lenient [`get_f64`](Self::get_f64) with a caller default.
    #[must_use]
    pub fn opt_f64_or(&self, key: &str, default: f64) -> f64 {
        self.get_f64(key).unwrap_or(default)
    }

    /// Lenient [`get_i32`](Self::get_i32); defaults to zero.
    #[must_use]
    pub fn opt_i32(&self, key: &str) -> i32 {
        self.opt_i32_or(key, 0)
    }

    /// Lenient [`get_i32`](Self::get_i32) with a caller default.
    #[must_use]
    pub fn opt_i32_or(&self, key: &str, default: i32) -> i32 {
        self.get_i32(key).unwrap_or(default)
    }

    /// Lenient [`get_i64`](Self::get_i64); defaults to zero.
    #[must_use]
    pub fn opt_i64(&self, key: &str) -> i64 {
        self.opt_i64_or(key, 0)
    }

    /// Lenient [`get_i64`](Self::get_i64) with a caller default.
    #[must_use]
    pub fn opt_i64_or(&self, key: &str, default: i64) -> i64 {
        self.get_i64(key).unwrap_or(default)
    }

    /// Lenient [`get_string`](Self::get_string); defaults to the empty
    /// string. An explicit null also yields the default.
    #[must_use]
    pub fn opt_string(&self, key: &str) -> &str {
        self.opt_string_or(key, "")
    }

    /// Lenient [`get_string`](Self::get_string) with a caller default.
    #[must_use]
    pub fn opt_string_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.get_string(key) {
            Ok(Some(s)) => s,
            _ => default,
        }
    }

    /// Lenient [`get_object`](Self::get_object).
    #[must_use]
    pub fn opt_object(&self, key: &str) -> Option<&JsonObject> {
        self.get_object(key).ok()
    }

    /// Lenient [`get_array`](Self::get_array).
    #[must_use]
    pub fn opt_array(&self, key: &str) -> Option<&JsonArray> {
        self.get_array(key).ok()
    }

    /// Returns `true` if the key is present (even bound to an explicit
    /// null).
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Returns `true` only when the key is present and holds an explicit
    /// null. An absent key is not "null"; it is absent.
    #[must_use]
    pub fn is_null(&self, key: &str) -> bool {
        matches!(self.map.get(key), Some(Value::Null))
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the object has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over the keys in this object's order.
    pub fn keys(&self) -> map::Keys<'_> {
        self.map.keys()
    }

    /// Iterates over the values in this object's order.
    pub fn values(&self) -> map::Values<'_> {
        self.map.values()
    }

    /// Iterates over key/value pairs in this object's order.
    pub fn iter(&self) -> map::Iter<'_> {
        self.map.iter()
    }

    /// Returns the keys as an array, or `None` when the object is
    /// empty.
    #[must_use]
    pub fn names(&self) -> Option<JsonArray> {
        if self.is_empty() {
            return None;
        }
        Some(self.keys().map(|k| Value::String(k.clone())).collect())
    }

    /// Returns the values under the given names as an array, in the
    /// names' order, with absent keys and explicit nulls as nulls.
    /// An empty name list yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TypeMismatch`] if a name element is not a
    /// string.
    pub fn to_array(&self, names: &JsonArray) -> Result<Option<JsonArray>> {
        if names.is_empty() {
            return Ok(None);
        }
        let mut values = JsonArray::with_capacity(names.len());
        for index in 0..names.len() {
            let name = names
                .get_string(index)?
                .ok_or_else(|| Error::array_mismatch(index, "a string", "null"))?;
            match self.opt(name) {
                Some(value) => values.store(value.clone()),
                None => values.store(Value::Null),
            }
        }
        Ok(Some(values))
    }

    /// Serializes to pretty-printed JSON with `indent` spaces per level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::JsonObject;
    ///
    /// let mut obj = JsonObject::new();
    /// obj.put("a", 1).unwrap();
    /// obj.put("b", 2).unwrap();
    /// assert_eq!(obj.to_string_pretty(2), "{\n  \"a\": 1,\n  \"b\": 2\n}");
    /// ```
    #[must_use]
    pub fn to_string_pretty(&self, indent: usize) -> String {
        crate::ser::object_to_string(self, &WriteOptions { indent })
    }

    /// Writes serialized output to an `io::Write` sink.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Io`] if the sink fails.
    pub fn write_to<W: std::io::Write>(&self, writer: W, options: &WriteOptions) -> Result<()> {
        crate::ser::write_io(writer, &crate::ser::object_to_string(self, options))
    }
}

impl fmt::Display for JsonObject {
    /// Compact, strictly conforming JSON text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::ser::object_to_string(self, &WriteOptions::new()))
    }
}

impl std::str::FromStr for JsonObject {
    type Err = Error;

    /// Parses a `{` … `}` text in the lenient grammar, iterating in
    /// insertion order.
    fn from_str(source: &str) -> Result<Self> {
        crate::de::object_from_str(source, KeyOrder::Insertion)
    }
}

impl IntoIterator for JsonObject {
    type Item = (String, Value);
    type IntoIter = map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonObject {
    type Item = (&'a String, &'a Value);
    type IntoIter = map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl Serialize for JsonObject {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
