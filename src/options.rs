//! Configuration types for the document model.
//!
//! Two independent knobs live here:
//!
//! - [`KeyOrder`]: the backing-store strategy chosen when a
//!   [`JsonObject`](crate::JsonObject) is constructed. It decides the
//!   iteration (and therefore serialization) order of keys and nothing
//!   else.
//! - [`WriteOptions`]: serializer formatting, compact (the default) or
//!   pretty-printed with a configurable indent width.
//!
//! ## Examples
//!
//! ```rust
//! use jsondoc::{JsonObject, KeyOrder, WriteOptions};
//!
//! let mut obj = JsonObject::with_order(KeyOrder::Sorted);
//! obj.put("b", 2).unwrap();
//! obj.put("a", 1).unwrap();
//! assert_eq!(obj.to_string(), r#"{"a":1,"b":2}"#);
//!
//! let options = WriteOptions::pretty().with_indent(4);
//! assert_eq!(options.indent, 4);
//! ```

/// Iteration-order strategy for a [`JsonObject`](crate::JsonObject)'s
/// backing store.
///
/// All behavior other than the order in which keys are visited is
/// identical between the two variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// Keys iterate in the order they were first inserted.
    #[default]
    Insertion,
    /// Keys iterate in lexicographic order.
    Sorted,
}

/// Formatting options for serialization.
///
/// An `indent` of zero produces the compact form; any positive value
/// produces the pretty form with that many spaces per nesting level.
///
/// # Examples
///
/// ```rust
/// use jsondoc::WriteOptions;
///
/// let compact = WriteOptions::new();
/// assert_eq!(compact.indent, 0);
///
/// let pretty = WriteOptions::pretty();
/// assert_eq!(pretty.indent, 2);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WriteOptions {
    /// Spaces added per nesting level; zero means compact output.
    pub indent: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions { indent: 0 }
    }
}

impl WriteOptions {
    /// Creates compact-output options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates pretty-printing options with the conventional two-space
    /// indent.
    #[must_use]
    pub fn pretty() -> Self {
        WriteOptions { indent: 2 }
    }

    /// Sets the indent width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::WriteOptions;
    ///
    /// let options = WriteOptions::pretty().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
