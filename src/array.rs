//! The ordered sequence container of the document model.
//!
//! [`JsonArray`] is a growable, index-addressable sequence of [`Value`]s
//! with the same strict/lenient accessor pairs as
//! [`JsonObject`](crate::JsonObject): every `get_*` has an `opt_*`
//! counterpart that substitutes a default instead of failing.
//!
//! ## Examples
//!
//! ```rust
//! use jsondoc::JsonArray;
//!
//! let mut arr = JsonArray::new();
//! arr.push(1).unwrap();
//! arr.push("two").unwrap();
//! arr.push(true).unwrap();
//!
//! assert_eq!(arr.len(), 3);
//! assert_eq!(arr.get_i32(0).unwrap(), 1);
//! assert_eq!(arr.opt_string(1), "two");
//! assert_eq!(arr.to_string(), r#"[1,"two",true]"#);
//! ```

use crate::{Error, Result, Value, WriteOptions};
use serde::{Serialize, Serializer};
use std::fmt;

/// An ordered, growable sequence of JSON values.
///
/// The array exclusively owns its elements. Indices are zero-based;
/// writing past the end with [`JsonArray::put`] pads the gap with
/// explicit nulls.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct JsonArray {
    values: Vec<Value>,
}

impl JsonArray {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        JsonArray { values: Vec::new() }
    }

    /// Creates an empty array with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsonArray {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Appends a value.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidNumber`] if the value is a non-finite
    /// number.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<&mut Self> {
        let value = value.into();
        value.check_finite()?;
        self.values.push(value);
        Ok(self)
    }

    /// Sets the element at `index`, growing the array with explicit
    /// nulls if `index` is past the current end.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidNumber`] if the value is a non-finite
    /// number.
    pub fn put(&mut self, index: usize, value: impl Into<Value>) -> Result<&mut Self> {
        let value = value.into();
        value.check_finite()?;
        if index < self.values.len() {
            self.values[index] = value;
        } else {
            while self.values.len() < index {
                self.values.push(Value::Null);
            }
            self.values.push(value);
        }
        Ok(self)
    }

    /// Appends a value without validity checks; parsing and internal
    /// promotion go through here.
    pub(crate) fn store(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Removes and returns the element at `index`, shifting the rest
    /// down. Returns `None` if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index < self.values.len() {
            Some(self.values.remove(index))
        } else {
            None
        }
    }

    /// The element at `index` with no null translation; strict getters
    /// build on this.
    fn fetch(&self, index: usize) -> Result<&Value> {
        self.values.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.values.len(),
        })
    }

    /// Returns the element at `index`.
    ///
    /// An explicit null yields `Ok(None)`; an index past the end fails
    /// with [`Error::IndexOutOfBounds`].
    pub fn get(&self, index: usize) -> Result<Option<&Value>> {
        match self.fetch(index)? {
            Value::Null => Ok(None),
            value => Ok(Some(value)),
        }
    }

    /// Returns the boolean at `index`, accepting the strings `"true"`
    /// and `"false"` (any case) as well.
    pub fn get_bool(&self, index: usize) -> Result<bool> {
        let value = self.fetch(index)?;
        match value {
            Value::Bool(b) => Ok(*b),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(true),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(false),
            other => Err(Error::array_mismatch(index, "a boolean", other.type_name())),
        }
    }

    /// Returns the number at `index` as a double, parsing a string
    /// element if necessary.
    pub fn get_f64(&self, index: usize) -> Result<f64> {
        let value = self.fetch(index)?;
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            Value::String(s) => s
                .parse::<f64>()
                .map_err(|_| Error::array_mismatch(index, "a number", value.type_name())),
            other => Err(Error::array_mismatch(index, "a number", other.type_name())),
        }
    }

    /// Returns the number at `index` as an `i32`, parsing a string
    /// element if necessary. A double is truncated toward zero.
    pub fn get_i32(&self, index: usize) -> Result<i32> {
        let value = self.fetch(index)?;
        match value {
            Value::Number(n) => n
                .as_i32()
                .ok_or_else(|| Error::array_mismatch(index, "an int", value.type_name())),
            Value::String(s) => s
                .parse::<i32>()
                .map_err(|_| Error::array_mismatch(index, "an int", value.type_name())),
            other => Err(Error::array_mismatch(index, "an int", other.type_name())),
        }
    }

    /// Returns the number at `index` as an `i64`, parsing a string
    /// element if necessary. A double is truncated toward zero.
    pub fn get_i64(&self, index: usize) -> Result<i64> {
        let value = self.fetch(index)?;
        match value {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| Error::array_mismatch(index, "a long", value.type_name())),
            Value::String(s) => s
                .parse::<i64>()
                .map_err(|_| Error::array_mismatch(index, "a long", value.type_name())),
            other => Err(Error::array_mismatch(index, "a long", other.type_name())),
        }
    }

    /// Returns the string at `index`; an explicit null yields `Ok(None)`.
    pub fn get_string(&self, index: usize) -> Result<Option<&str>> {
        match self.fetch(index)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            other => Err(Error::array_mismatch(index, "a string", other.type_name())),
        }
    }

    /// Returns the object at `index`; no coercion is attempted.
    pub fn get_object(&self, index: usize) -> Result<&crate::JsonObject> {
        match self.fetch(index)? {
            Value::Object(obj) => Ok(obj),
            other => Err(Error::array_mismatch(index, "an object", other.type_name())),
        }
    }

    /// Returns the array at `index`; no coercion is attempted.
    pub fn get_array(&self, index: usize) -> Result<&JsonArray> {
        match self.fetch(index)? {
            Value::Array(arr) => Ok(arr),
            other => Err(Error::array_mismatch(index, "an array", other.type_name())),
        }
    }

    /// Returns the element at `index`, or `None` when the index is out
    /// of range or the element is an explicit null.
    #[must_use]
    pub fn opt(&self, index: usize) -> Option<&Value> {
        self.get(index).ok().flatten()
    }

    /// Lenient [`get_bool`](Self::get_bool); defaults to `false`.
    #[must_use]
    pub fn opt_bool(&self, index: usize) -> bool {
        self.opt_bool_or(index, false)
    }

    /// Lenient [`get_bool`](Self::get_bool) with a caller default.
    #[must_use]
    pub fn opt_bool_or(&self, index: usize, default: bool) -> bool {
        self.get_bool(index).unwrap_or(default)
    }

    /// Lenient [`get_f64`](Self::get_f64); defaults to NaN.
    #[must_use]
    pub fn opt_f64(&self, index: usize) -> f64 {
        self.opt_f64_or(index, f64::NAN)
    }

    /// Lenient [`get_f64`](Self::get_f64) with a caller default.
    #[must_use]
    pub fn opt_f64_or(&self, index: usize, default: f64) -> f64 {
        self.get_f64(index).unwrap_or(default)
    }

    /// Lenient [`get_i32`](Self::get_i32); defaults to zero.
    #[must_use]
    pub fn opt_i32(&self, index: usize) -> i32 {
        self.opt_i32_or(index, 0)
    }

    /// Lenient [`get_i32`](Self::get_i32) with a caller default.
    #[must_use]
    pub fn opt_i32_or(&self, index: usize, default: i32) -> i32 {
        self.get_i32(index).unwrap_or(default)
    }

    /// Lenient [`get_i64`](Self::get_i64); defaults to zero.
    #[must_use]
    pub fn opt_i64(&self, index: usize) -> i64 {
        self.opt_i64_or(index, 0)
    }

    /// Lenient [`get_i64`](Self::get_i64) with a caller default.
    #[must_use]
    pub fn opt_i64_or(&self, index: usize, default: i64) -> i64 {
        self.get_i64(index).unwrap_or(default)
    }

    /// Lenient [`get_string`](Self::get_string); defaults to the empty
    /// string.
    #[must_use]
    pub fn opt_string(&self, index: usize) -> &str {
        self.opt_string_or(index, "")
    }

    /// Lenient [`get_string`](Self::get_string) with a caller default.
    #[must_use]
    pub fn opt_string_or<'a>(&'a self, index: usize, default: &'a str) -> &'a str {
        match self.get_string(index) {
            Ok(Some(s)) => s,
            _ => default,
        }
    }

    /// Lenient [`get_object`](Self::get_object).
    #[must_use]
    pub fn opt_object(&self, index: usize) -> Option<&crate::JsonObject> {
        self.get_object(index).ok()
    }

    /// Lenient [`get_array`](Self::get_array).
    #[must_use]
    pub fn opt_array(&self, index: usize) -> Option<&JsonArray> {
        self.get_array(index).ok()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Joins the elements' compact JSON renditions with `separator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::JsonArray;
    ///
    /// let arr: JsonArray = "[1, \"two\", true]".parse().unwrap();
    /// assert_eq!(arr.join(", "), r#"1, "two", true"#);
    /// ```
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        let rendered: Vec<String> = self
            .values
            .iter()
            .map(|v| crate::ser::to_string(v))
            .collect();
        rendered.join(separator)
    }

    /// Serializes to pretty-printed JSON with `indent` spaces per level.
    #[must_use]
    pub fn to_string_pretty(&self, indent: usize) -> String {
        crate::ser::array_to_string(self, &WriteOptions { indent })
    }

    /// Writes serialized output to an `io::Write` sink.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Io`] if the sink fails.
    pub fn write_to<W: std::io::Write>(&self, writer: W, options: &WriteOptions) -> Result<()> {
        crate::ser::write_io(writer, &crate::ser::array_to_string(self, options))
    }
}

impl fmt::Display for JsonArray {
    /// Compact, strictly conforming JSON text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::ser::array_to_string(self, &WriteOptions::new()))
    }
}

impl std::str::FromStr for JsonArray {
    type Err = Error;

    /// Parses a `[` … `]` text in the lenient grammar.
    fn from_str(source: &str) -> Result<Self> {
        crate::de::array_from_str(source)
    }
}

impl<T: Into<Value>> From<Vec<T>> for JsonArray {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Into<Value>> FromIterator<T> for JsonArray {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        JsonArray {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for JsonArray {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonArray {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl Serialize for JsonArray {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.values.len()))?;
        for element in &self.values {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}
