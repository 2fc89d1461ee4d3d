//! Error types for parsing, access, and serialization.
//!
//! Every fallible operation in the crate reports one of the [`Error`]
//! variants below. The split mirrors the API surface:
//!
//! - **Parsing**: [`Error::Syntax`] with line/column information. A
//!   malformed document never yields a partial value.
//! - **Strict access**: [`Error::KeyNotFound`], [`Error::IndexOutOfBounds`],
//!   and [`Error::TypeMismatch`] from the `get_*` family.
//! - **Strict insertion**: [`Error::InvalidKey`] and [`Error::InvalidNumber`]
//!   from `put`/`accumulate`/`append`.
//! - **Serialization**: [`Error::Serialization`] from a failing text hook,
//!   [`Error::Io`] when writing to an `io::Write` sink fails.
//!
//! The lenient halves of the API (`opt_*`, `put_opt`, `put_once`) swallow
//! all of these and substitute defaults or no-ops; they never return an
//! error.
//!
//! ## Examples
//!
//! ```rust
//! use jsondoc::{JsonObject, Error};
//!
//! let result: Result<JsonObject, Error> = "{malformed".parse();
//! assert!(matches!(result, Err(Error::Syntax { .. })));
//! ```

use thiserror::Error;

/// All errors reported by the document model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed input text, with the position of the offending character.
    #[error("syntax error at line {line}, column {column}: {msg}")]
    Syntax {
        line: usize,
        column: usize,
        msg: String,
    },

    /// A strict accessor was called for a key that is not present.
    #[error("key {key:?} not found")]
    KeyNotFound { key: String },

    /// A strict accessor was called with an index past the end of an array.
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A value is present but cannot be coerced to the requested kind.
    #[error("{target} is not {expected} (found {found})")]
    TypeMismatch {
        target: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A strict insert was given no key.
    #[error("null key")]
    InvalidKey,

    /// A strict insert or canonicalization saw a non-finite number.
    #[error("JSON does not allow non-finite numbers")]
    InvalidNumber,

    /// A custom JSON text hook failed or produced unusable output.
    #[error("bad value from JSON text hook: {0}")]
    Serialization(String),

    /// Writing serialized output to an `io::Write` sink failed.
    #[error("io error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a syntax error at the given source position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::Error;
    ///
    /// let err = Error::syntax(3, 14, "expected a ':' after a key");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn syntax(line: usize, column: usize, msg: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            column,
            msg: msg.into(),
        }
    }

    /// Creates a type-mismatch error for an object entry.
    pub fn object_mismatch(key: &str, expected: &'static str, found: &'static str) -> Self {
        Error::TypeMismatch {
            target: format!("JsonObject[{key:?}]"),
            expected,
            found,
        }
    }

    /// Creates a type-mismatch error for an array element.
    pub fn array_mismatch(index: usize, expected: &'static str, found: &'static str) -> Self {
        Error::TypeMismatch {
            target: format!("JsonArray[{index}]"),
            expected,
            found,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
