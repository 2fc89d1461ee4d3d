//! # jsondoc
//!
//! An embeddable JSON document model: an in-memory tree of JSON values
//! that can be built programmatically, parsed from relaxed JSON-like
//! text, queried with type-coercing accessors, and re-emitted as
//! strictly conforming JSON.
//!
//! ## Key Features
//!
//! - **Lenient in, strict out**: the parser accepts unquoted and
//!   single-quoted tokens, trailing commas, `;` separators, and
//!   `//`/`/* */`/`#` comments; the writer always emits strict JSON.
//! - **Strict/lenient API pairs**: every typed accessor and mutator
//!   comes as a strict form that reports a precise [`Error`] and a
//!   lenient `opt_*`/`put_opt` form that substitutes a default.
//! - **Explicit null**: [`Value::Null`] is a value a document contains;
//!   "key absent" is a distinct state with distinct behavior.
//! - **Ordered variant**: constructing a [`JsonObject`] with
//!   [`KeyOrder::Sorted`] fixes iteration and serialization to
//!   lexicographic key order; a configuration, not a separate type.
//! - **No unsafe code**, single-threaded by design: share instances
//!   across threads only behind external synchronization.
//!
//! ## Quick Start
//!
//! ```rust
//! use jsondoc::JsonObject;
//!
//! // Lenient parsing: bare keys, a trailing comma.
//! let mut obj: JsonObject = "{ greeting: hello, count: 2, }".parse().unwrap();
//! assert_eq!(obj.get_string("greeting").unwrap(), Some("hello"));
//! assert_eq!(obj.get_i32("count").unwrap(), 2);
//!
//! // Programmatic building; output is strict JSON.
//! obj.put("valid", true).unwrap();
//! assert_eq!(
//!     obj.to_string(),
//!     r#"{"greeting":"hello","count":2,"valid":true}"#
//! );
//! ```
//!
//! ## Dynamic values with the json! macro
//!
//! ```rust
//! use jsondoc::{json, Value};
//!
//! let data = json!({
//!     "name": "Alice",
//!     "tags": ["rust", "json"]
//! });
//!
//! if let Value::Object(obj) = data {
//!     assert_eq!(obj.opt_string("name"), "Alice");
//! }
//! ```
//!
//! ## Parsing any value
//!
//! ```rust
//! use jsondoc::from_str;
//!
//! let value = from_str("[1, 2.5, 'three', null]").unwrap();
//! let arr = value.as_array().unwrap();
//! assert_eq!(arr.len(), 4);
//! ```
//!
//! ## Error Handling
//!
//! Strict operations report the specific failure; parsing errors carry
//! the line and column of the offending character:
//!
//! ```rust
//! use jsondoc::{Error, JsonObject};
//!
//! let err = r#"{"a":1,"a":2}"#.parse::<JsonObject>().unwrap_err();
//! assert!(matches!(err, Error::Syntax { .. }));
//! ```

pub mod array;
pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod object;
pub mod options;
pub mod ser;
pub mod value;

pub use array::JsonArray;
pub use de::{from_str, Tokener};
pub use error::{Error, Result};
pub use map::JsonMap;
pub use object::JsonObject;
pub use options::{KeyOrder, WriteOptions};
pub use ser::{quote, raw_text, to_writer, JsonText, Writer};
pub use value::{Number, ToJson, Value};

/// Serializes a value to compact JSON text.
///
/// # Examples
///
/// ```rust
/// use jsondoc::{json, to_string};
///
/// let value = json!({"x": 1});
/// assert_eq!(to_string(&value), r#"{"x":1}"#);
/// ```
#[must_use]
pub fn to_string(value: &Value) -> String {
    ser::to_string(value)
}

/// Serializes a value to pretty-printed JSON text with `indent` spaces
/// per nesting level.
///
/// # Examples
///
/// ```rust
/// use jsondoc::{json, to_string_pretty};
///
/// let value = json!({"x": 1, "y": 2});
/// assert_eq!(to_string_pretty(&value, 2), "{\n  \"x\": 1,\n  \"y\": 2\n}");
/// ```
#[must_use]
pub fn to_string_pretty(value: &Value, indent: usize) -> String {
    ser::to_string_pretty(value, indent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_then_serialize_round_trip() {
        let source = r#"{"object_or_array":"object","empty":false,"time_milliseconds":19608,"validate":true,"size":5}"#;
        let obj: JsonObject = source.parse().unwrap();
        assert_eq!(obj.to_string(), source);
    }

    #[test]
    fn value_display_matches_to_string() {
        let value = from_str("{a: [1, 2]}").unwrap();
        assert_eq!(value.to_string(), to_string(&value));
    }

    #[test]
    fn serde_interop_with_serde_json() {
        let value = json!({"k": [1, 2.5, "s", null, true]});
        let text = serde_json::to_string(&value).unwrap();
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn writer_output_is_strict_json() {
        let obj: JsonObject =
            "{ a: 1, 'b': [true,], c: { nested: null }, // comment\n }".parse().unwrap();
        let text = obj.to_string();
        // The relaxed dialect must never leak into the output.
        serde_json::from_str::<serde_json::Value>(&text).unwrap();
    }
}
