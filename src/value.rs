//! The dynamic value representation at the heart of the document model.
//!
//! This module provides the [`Value`] enum, a closed tagged union over
//! everything a JSON document can hold, and the [`Number`] type that
//! carries its numeric subkinds.
//!
//! ## Core Types
//!
//! - [`Value`]: any JSON value (null, bool, number, string, array, object)
//! - [`Number`]: an `i32`, `i64`, or finite `f64` magnitude
//!
//! ## Null versus absent
//!
//! [`Value::Null`] is the *explicit* JSON null, a value a document can
//! contain. "The key is not present" is a different state, reported by
//! the container APIs, never by a `Value`. Host code sees the explicit
//! null as `Option::None` when reading through the typed accessors.
//!
//! ## Creating Values
//!
//! ```rust
//! use jsondoc::{json, Number, Value};
//!
//! let null = Value::Null;
//! let flag = Value::from(true);
//! let count = Value::from(42);
//! let name = Value::from("Alice");
//!
//! let doc = json!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert!(doc.is_object());
//! ```
//!
//! ## Literal coercion
//!
//! [`Value::from_literal`] turns a bare text token into a value using the
//! same rule the lenient parser applies to unquoted tokens:
//!
//! ```rust
//! use jsondoc::{Number, Value};
//!
//! assert_eq!(Value::from_literal("true"), Value::Bool(true));
//! assert_eq!(Value::from_literal("3.14"), Value::Number(Number::Double(3.14)));
//! assert_eq!(Value::from_literal("007"), Value::String("007".to_string()));
//! ```

use crate::{Error, JsonArray, JsonObject, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed JSON value.
///
/// Containers ([`Value::Object`], [`Value::Array`]) exclusively own their
/// children; there is no shared substructure in a value tree.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// The explicit null sentinel, distinct from "key absent".
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(JsonArray),
    Object(JsonObject),
}

/// A numeric value: a 32-bit integer, a 64-bit integer, or a double.
///
/// Strict insertion rejects non-finite doubles, but the variant itself is
/// freely constructible; the writer renders a non-finite `Double` as the
/// text `null`.
///
/// Equality is numeric across subkinds, so `Int(3)`, `Long(3)`, and
/// `Double(3.0)` all compare equal. The subkind stays observable through
/// the `as_*` accessors and through `increment`, which preserves it.
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Int(i32),
    Long(i64),
    Double(f64),
}

impl Number {
    /// Returns `true` for the integer subkinds.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_) | Number::Long(_))
    }

    /// Returns `true` unless this is a non-finite double.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Number::Int(_) | Number::Long(_) => true,
            Number::Double(d) => d.is_finite(),
        }
    }

    /// Converts to an `i32` if the value fits exactly after truncating any
    /// fractional part.
    #[must_use]
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Number::Int(i) => Some(*i),
            Number::Long(l) => i32::try_from(*l).ok(),
            Number::Double(d) => {
                let t = d.trunc();
                if d.is_finite() && t >= i32::MIN as f64 && t <= i32::MAX as f64 {
                    Some(t as i32)
                } else {
                    None
                }
            }
        }
    }

    /// Converts to an `i64` if the value fits after truncating any
    /// fractional part.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(*i as i64),
            Number::Long(l) => Some(*l),
            Number::Double(d) => {
                let t = d.trunc();
                if d.is_finite() && t >= i64::MIN as f64 && t <= i64::MAX as f64 {
                    Some(t as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts to an `f64`. Always succeeds.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::Long(l) => *l as f64,
            Number::Double(d) => *d,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Double(_), _) | (_, Number::Double(_)) => self.as_f64() == other.as_f64(),
            _ => self.as_i64() == other.as_i64(),
        }
    }
}

impl fmt::Display for Number {
    /// Canonical JSON text: minimal decimal form, no trailing zeros or
    /// bare decimal points. Non-finite doubles render as `null`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Long(l) => write!(f, "{}", l),
            Number::Double(d) => {
                if !d.is_finite() {
                    return f.write_str("null");
                }
                if *d == 0.0 {
                    return f.write_str(if d.is_sign_negative() { "-0.0" } else { "0" });
                }
                let text = d.to_string();
                // An integral double past the 64-bit range must keep an
                // exponent marker, or the text would re-read as a string.
                if !text.contains('.')
                    && !text.contains('e')
                    && !text.contains('E')
                    && text.parse::<i64>().is_err()
                {
                    write!(f, "{:e}", d)
                } else {
                    f.write_str(&text)
                }
            }
        }
    }
}

macro_rules! number_from_int {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::$variant(value.into())
                }
            }
        )*
    };
}

number_from_int! {
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Long,
    u8 => Int,
    u16 => Int,
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        match i32::try_from(value) {
            Ok(i) => Number::Int(i),
            Err(_) => Number::Long(value as i64),
        }
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(l) => match i32::try_from(l) {
                Ok(i) => Number::Int(i),
                Err(_) => Number::Long(l),
            },
            Err(_) => Number::Double(value as f64),
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Double(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Double(value)
    }
}

impl Value {
    /// Returns `true` if the value is the explicit null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// If the value is a boolean, returns it.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a number, returns it.
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an array, returns a mutable reference to it.
    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut JsonArray> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// If the value is an object, returns a mutable reference to it.
    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut JsonObject> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// A short noun for this value's kind, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }

    /// Converts a bare text token into a value.
    ///
    /// The fallback chain is applied in exactly this order: empty string
    /// stays a string; case-insensitive `true`/`false` become booleans;
    /// case-insensitive `null` becomes [`Value::Null`]; a token starting
    /// with a digit or `-` is tried as a number: floating form (`.`, `e`,
    /// or `E` present) must parse to a finite double, integer form must
    /// round-trip its decimal text exactly and is held in the narrowest
    /// of `i32`/`i64` that fits; anything that falls through is the
    /// literal string.
    #[must_use]
    pub fn from_literal(token: &str) -> Value {
        if token.is_empty() {
            return Value::String(String::new());
        }
        if token.eq_ignore_ascii_case("true") {
            return Value::Bool(true);
        }
        if token.eq_ignore_ascii_case("false") {
            return Value::Bool(false);
        }
        if token.eq_ignore_ascii_case("null") {
            return Value::Null;
        }

        let first = token.as_bytes()[0];
        if first.is_ascii_digit() || first == b'-' {
            if token.contains('.') || token.contains('e') || token.contains('E') {
                if let Ok(d) = token.parse::<f64>() {
                    if d.is_finite() {
                        return Value::Number(Number::Double(d));
                    }
                }
            } else if let Ok(l) = token.parse::<i64>() {
                // Only an exact decimal round-trip counts as a number;
                // "007" and "-0" stay strings.
                if l.to_string() == token {
                    return match i32::try_from(l) {
                        Ok(i) => Value::Number(Number::Int(i)),
                        Err(_) => Value::Number(Number::Long(l)),
                    };
                }
            }
        }
        Value::String(token.to_string())
    }

    /// Rejects values a strict insert must not store.
    pub(crate) fn check_finite(&self) -> Result<()> {
        if let Value::Number(n) = self {
            if !n.is_finite() {
                return Err(Error::InvalidNumber);
            }
        }
        Ok(())
    }
}

impl fmt::Display for Value {
    /// Compact, strictly conforming JSON text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::ser::to_string(self))
    }
}

impl std::str::FromStr for Value {
    type Err = Error;

    /// Parses any JSON value from the lenient grammar.
    fn from_str(source: &str) -> Result<Self> {
        crate::de::from_str(source)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! value_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<JsonArray> for Value {
    fn from(value: JsonArray) -> Self {
        Value::Array(value)
    }
}

impl From<JsonObject> for Value {
    fn from(value: JsonObject) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().collect())
    }
}

/// Host-null wraps to the explicit null sentinel.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// Explicit projection of an external type into the value model.
///
/// A type declares its own field mapping instead of being introspected
/// at runtime; builders that consume arbitrary application types take
/// `impl ToJson` at the boundary.
///
/// # Examples
///
/// ```rust
/// use jsondoc::{JsonObject, ToJson, Value};
///
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// impl ToJson for Server {
///     fn to_json(&self) -> Value {
///         let mut obj = JsonObject::new();
///         obj.put("host", self.host.as_str()).unwrap();
///         obj.put("port", self.port as i32).unwrap();
///         obj.into()
///     }
/// }
///
/// let server = Server { host: "localhost".to_string(), port: 8080 };
/// assert_eq!(server.to_json().to_string(), r#"{"host":"localhost","port":8080}"#);
/// ```
pub trait ToJson {
    /// Builds the value-model representation of `self`.
    fn to_json(&self) -> Value;
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Int(i)) => serializer.serialize_i32(*i),
            Value::Number(Number::Long(l)) => serializer.serialize_i64(*l),
            Value::Number(Number::Double(d)) => serializer.serialize_f64(*d),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => arr.serialize(serializer),
            Value::Object(obj) => obj.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
                Ok(match i32::try_from(value) {
                    Ok(i) => Value::Number(Number::Int(i)),
                    Err(_) => Value::Number(Number::Long(value)),
                })
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E> {
                Ok(Value::Number(Number::from(value)))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Value, E> {
                Ok(Value::Number(Number::Double(value)))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut values: Vec<Value> = Vec::new();
                while let Some(element) = seq.next_element()? {
                    values.push(element);
                }
                Ok(Value::Array(JsonArray::from(values)))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut object = JsonObject::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    object.store(key, value);
                }
                Ok(Value::Object(object))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_coercion_order() {
        assert_eq!(Value::from_literal(""), Value::String(String::new()));
        assert_eq!(Value::from_literal("True"), Value::Bool(true));
        assert_eq!(Value::from_literal("FALSE"), Value::Bool(false));
        assert_eq!(Value::from_literal("null"), Value::Null);
        assert_eq!(Value::from_literal("NULL"), Value::Null);
        assert_eq!(Value::from_literal("42"), Value::Number(Number::Int(42)));
        assert_eq!(
            Value::from_literal("3000000000"),
            Value::Number(Number::Long(3_000_000_000))
        );
        assert_eq!(
            Value::from_literal("-1.5"),
            Value::Number(Number::Double(-1.5))
        );
        assert_eq!(
            Value::from_literal("1e3"),
            Value::Number(Number::Double(1000.0))
        );
    }

    #[test]
    fn literal_fallbacks_to_string() {
        // Not an exact decimal round-trip.
        assert_eq!(
            Value::from_literal("007"),
            Value::String("007".to_string())
        );
        assert_eq!(Value::from_literal("-0"), Value::String("-0".to_string()));
        // Overflows the floating range.
        assert_eq!(
            Value::from_literal("1e999"),
            Value::String("1e999".to_string())
        );
        // Does not start with a digit or '-'.
        assert_eq!(
            Value::from_literal("+1"),
            Value::String("+1".to_string())
        );
        assert_eq!(
            Value::from_literal("12abc"),
            Value::String("12abc".to_string())
        );
    }

    #[test]
    fn number_equality_is_numeric() {
        assert_eq!(Number::Int(3), Number::Long(3));
        assert_eq!(Number::Int(3), Number::Double(3.0));
        assert_eq!(Number::Long(3), Number::Double(3.0));
        assert_ne!(Number::Int(3), Number::Double(3.5));
    }

    #[test]
    fn number_conversions_truncate_doubles() {
        assert_eq!(Number::Double(3.7).as_i32(), Some(3));
        assert_eq!(Number::Double(-3.7).as_i64(), Some(-3));
        assert_eq!(Number::Double(f64::NAN).as_i32(), None);
        assert_eq!(Number::Long(i64::MAX).as_i32(), None);
        assert_eq!(Number::Int(7).as_f64(), 7.0);
    }

    #[test]
    fn unsigned_wrap_narrows_exactly() {
        assert_eq!(Value::from(7u32), Value::Number(Number::Int(7)));
        assert!(matches!(
            Value::from(7u64),
            Value::Number(Number::Int(7))
        ));
        assert_eq!(
            Value::from(u32::MAX),
            Value::Number(Number::Long(u32::MAX as i64))
        );
        assert_eq!(
            Value::from(u64::MAX),
            Value::Number(Number::Double(u64::MAX as f64))
        );
    }

    #[test]
    fn option_wraps_to_null() {
        let absent: Option<i32> = None;
        assert_eq!(Value::from(absent), Value::Null);
        assert_eq!(Value::from(Some(5)), Value::Number(Number::Int(5)));
    }

    #[test]
    fn non_finite_rejected_by_check() {
        assert!(Value::from(f64::NAN).check_finite().is_err());
        assert!(Value::from(f64::INFINITY).check_finite().is_err());
        assert!(Value::from(1.5).check_finite().is_ok());
        assert!(Value::Null.check_finite().is_ok());
    }
}
