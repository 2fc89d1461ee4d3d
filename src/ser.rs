//! The strict JSON writer.
//!
//! However relaxed the parser is, output is always strictly conforming
//! JSON: quoted keys, escaped strings, canonical numbers. Two shapes are
//! produced:
//!
//! - **Compact** (the default `to_string`/`Display` form): no whitespace
//!   at all, `{"k":1,"l":[true,null]}`.
//! - **Pretty** (an indent width > 0): one key or element per line,
//!   indented by `depth * indent` spaces, with a space after each `:`.
//!   A single-entry container stays on one line.
//!
//! ## String escaping
//!
//! [`quote`] escapes `\` and `"`, the usual control-character short
//! forms, every other control character, U+0080–U+009F, and
//! U+2000–U+20FF as `\uXXXX`, and (so that emitted text can be embedded
//! in HTML) a `/` that immediately follows a `<`.
//!
//! ## Numbers
//!
//! Integers print their decimal text. Doubles print the shortest
//! round-trip decimal, so `3.0` emits `3` and `3.1400000` emits `3.14`.
//! Strict insertion rejects non-finite doubles; one constructed directly
//! renders as the text `null` rather than failing.

use crate::{Error, JsonArray, JsonObject, Result, Value, WriteOptions};
use std::fmt::Write as _;
use std::io;

/// Renders a string as a JSON string literal.
///
/// # Examples
///
/// ```rust
/// use jsondoc::quote;
///
/// assert_eq!(quote(""), "\"\"");
/// assert_eq!(quote("a\"b"), "\"a\\\"b\"");
/// assert_eq!(quote("</script>"), "\"<\\/script>\"");
/// ```
#[must_use]
pub fn quote(string: &str) -> String {
    let mut out = String::with_capacity(string.len() + 2);
    quote_into(string, &mut out);
    out
}

/// Appends the JSON string literal form of `string` to `out`.
pub fn quote_into(string: &str, out: &mut String) {
    if string.is_empty() {
        out.push_str("\"\"");
        return;
    }
    out.push('"');
    let mut previous = '\0';
    for c in string.chars() {
        match c {
            '\\' | '"' => {
                out.push('\\');
                out.push(c);
            }
            '/' => {
                if previous == '<' {
                    out.push('\\');
                }
                out.push('/');
            }
            '\u{0008}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{000C}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            c if c < ' '
                || ('\u{0080}'..'\u{00A0}').contains(&c)
                || ('\u{2000}'..'\u{2100}').contains(&c) =>
            {
                // Infallible: writing into a String cannot fail.
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
        previous = c;
    }
    out.push('"');
}

/// An output buffer with formatting state.
///
/// Most callers use the crate-level `to_string` functions or the
/// `Display` impls instead of driving a `Writer` directly.
pub struct Writer {
    out: String,
    options: WriteOptions,
}

impl Writer {
    /// Creates a writer with the given formatting options.
    #[must_use]
    pub fn new(options: WriteOptions) -> Self {
        Writer {
            out: String::with_capacity(256),
            options,
        }
    }

    /// Consumes the writer and returns the accumulated text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.out
    }

    /// Serializes a value at the top level.
    pub fn write_value(&mut self, value: &Value) {
        self.value(value, 0);
    }

    /// Serializes an object at the top level.
    pub fn write_object(&mut self, object: &JsonObject) {
        self.object(object, 0);
    }

    /// Serializes an array at the top level.
    pub fn write_array(&mut self, array: &JsonArray) {
        self.array(array, 0);
    }

    fn pretty(&self) -> bool {
        self.options.indent > 0
    }

    fn newline_indent(&mut self, depth: usize) {
        if self.pretty() {
            self.out.push('\n');
            for _ in 0..depth * self.options.indent {
                self.out.push(' ');
            }
        }
    }

    fn value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => {
                // Display already yields the canonical text, including
                // the "null" compatibility rendering for non-finite
                // doubles that bypassed insertion checks.
                let _ = write!(self.out, "{}", n);
            }
            Value::String(s) => quote_into(s, &mut self.out),
            Value::Array(arr) => self.array(arr, depth),
            Value::Object(obj) => self.object(obj, depth),
        }
    }

    fn object(&mut self, object: &JsonObject, depth: usize) {
        self.out.push('{');
        let length = object.len();
        if length == 1 {
            // A single pair stays on the opening line even when pretty.
            if let Some((key, value)) = object.iter().next() {
                self.pair(key, value, depth);
            }
        } else if length > 1 {
            let mut first = true;
            for (key, value) in object.iter() {
                if !first {
                    self.out.push(',');
                }
                self.newline_indent(depth + 1);
                self.pair(key, value, depth + 1);
                first = false;
            }
            self.newline_indent(depth);
        }
        self.out.push('}');
    }

    fn pair(&mut self, key: &str, value: &Value, depth: usize) {
        quote_into(key, &mut self.out);
        self.out.push(':');
        if self.pretty() {
            self.out.push(' ');
        }
        self.value(value, depth);
    }

    fn array(&mut self, array: &JsonArray, depth: usize) {
        self.out.push('[');
        let length = array.len();
        if length == 1 {
            if let Some(value) = array.iter().next() {
                self.value(value, depth);
            }
        } else if length > 1 {
            let mut first = true;
            for value in array.iter() {
                if !first {
                    self.out.push(',');
                }
                self.newline_indent(depth + 1);
                self.value(value, depth + 1);
                first = false;
            }
            self.newline_indent(depth);
        }
        self.out.push(']');
    }
}

/// Serializes a value to compact JSON text.
#[must_use]
pub fn to_string(value: &Value) -> String {
    to_string_with_options(value, &WriteOptions::new())
}

/// Serializes a value to pretty-printed JSON text with `indent` spaces
/// per level.
#[must_use]
pub fn to_string_pretty(value: &Value, indent: usize) -> String {
    to_string_with_options(value, &WriteOptions { indent })
}

/// Serializes a value with explicit formatting options.
#[must_use]
pub fn to_string_with_options(value: &Value, options: &WriteOptions) -> String {
    let mut writer = Writer::new(*options);
    writer.write_value(value);
    writer.into_inner()
}

pub(crate) fn object_to_string(object: &JsonObject, options: &WriteOptions) -> String {
    let mut writer = Writer::new(*options);
    writer.write_object(object);
    writer.into_inner()
}

pub(crate) fn array_to_string(array: &JsonArray, options: &WriteOptions) -> String {
    let mut writer = Writer::new(*options);
    writer.write_array(array);
    writer.into_inner()
}

/// Serializes a value to an `io::Write` sink.
///
/// # Errors
///
/// Fails with [`Error::Io`] if the sink fails.
pub fn to_writer<W: io::Write>(writer: W, value: &Value, options: &WriteOptions) -> Result<()> {
    write_io(writer, &to_string_with_options(value, options))
}

pub(crate) fn write_io<W: io::Write>(mut writer: W, text: &str) -> Result<()> {
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::Io(e.to_string()))
}

/// A custom "render yourself as JSON text" hook for external types.
///
/// The hook's output is used verbatim; the implementer is responsible
/// for producing strictly conforming text. This is a boundary adapter:
/// hook-bearing values are never stored inside a document tree.
///
/// # Examples
///
/// ```rust
/// use jsondoc::{raw_text, JsonText};
///
/// struct Version(u8, u8);
///
/// impl JsonText for Version {
///     fn to_json_text(&self) -> Result<String, String> {
///         Ok(format!("\"{}.{}\"", self.0, self.1))
///     }
/// }
///
/// assert_eq!(raw_text(&Version(1, 2)).unwrap(), "\"1.2\"");
/// ```
pub trait JsonText {
    /// Produces the JSON text for this value, or a message describing
    /// why it could not.
    fn to_json_text(&self) -> std::result::Result<String, String>;
}

/// Renders a [`JsonText`] hook, failing with [`Error::Serialization`]
/// when the hook errors or produces empty output.
pub fn raw_text<T: JsonText + ?Sized>(value: &T) -> Result<String> {
    match value.to_json_text() {
        Ok(text) if !text.is_empty() => Ok(text),
        Ok(_) => Err(Error::Serialization(
            "text hook produced empty output".to_string(),
        )),
        Err(msg) => Err(Error::Serialization(msg)),
    }
}
