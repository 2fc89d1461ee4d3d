//! The lenient text parser.
//!
//! [`Tokener`] wraps a character source with single-step pushback, a
//! line/column cursor for error positions, and the token-level operations
//! the grammar needs: [`next_clean`](Tokener::next_clean) (skip
//! whitespace and comments), [`next_string`](Tokener::next_string)
//! (quoted strings with escape processing), and
//! [`next_value`](Tokener::next_value) (any JSON value).
//!
//! ## The lenient dialect
//!
//! Construction accepts more than strict JSON:
//!
//! - keys and scalar values may be bare (unquoted) or single-quoted,
//! - `//…`, `/*…*/`, and `#…` comments count as whitespace,
//! - a trailing `,` before a closing brace or bracket is tolerated,
//! - `;` works as a pair or element separator,
//! - an elided array element (`[1,,3]`) parses as an explicit null.
//!
//! Output is always strict JSON regardless of what was accepted on the
//! way in.
//!
//! ## Examples
//!
//! ```rust
//! use jsondoc::JsonObject;
//!
//! let obj: JsonObject = "{ a: 1, b: true, }".parse().unwrap();
//! assert_eq!(obj.get_i32("a").unwrap(), 1);
//! assert!(obj.get_bool("b").unwrap());
//! ```
//!
//! Malformed input fails with a positioned error and never yields a
//! partial document:
//!
//! ```rust
//! use jsondoc::{Error, JsonObject};
//!
//! let err = "{\"a\" 1}".parse::<JsonObject>().unwrap_err();
//! assert!(matches!(err, Error::Syntax { line: 1, .. }));
//! ```

use crate::{Error, JsonArray, JsonObject, KeyOrder, Result, Value};

/// Maximum document nesting depth; exceeding it is a syntax error
/// instead of a stack overflow.
pub const MAX_DEPTH: usize = 128;

/// Characters that terminate a bare (unquoted) token.
const DELIMITERS: &str = ",:]}/\\\"[{;=#";

/// A character-level reader over JSON-like text.
///
/// Maintains a byte position and a line/column cursor; every syntax
/// error carries the cursor position at the point of failure.
pub struct Tokener<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    /// Cursor state before the last `next`, consumed by `back`.
    prev: Option<(usize, usize, usize)>,
    order: KeyOrder,
}

impl<'a> Tokener<'a> {
    /// Creates a tokener over `source`; parsed objects iterate in
    /// insertion order.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self::with_order(source, KeyOrder::Insertion)
    }

    /// Creates a tokener whose parsed objects (including nested ones)
    /// use the given key-order strategy.
    #[must_use]
    pub fn with_order(source: &'a str, order: KeyOrder) -> Self {
        Tokener {
            input: source,
            position: 0,
            line: 1,
            column: 1,
            prev: None,
            order,
        }
    }

    /// Creates a syntax error at the current cursor position.
    #[must_use]
    pub fn syntax_error(&self, msg: impl Into<String>) -> Error {
        Error::syntax(self.line, self.column, msg)
    }

    /// Consumes and returns the next character, or `None` at end of
    /// input.
    pub fn next(&mut self) -> Option<char> {
        let ch = self.input[self.position..].chars().next()?;
        self.prev = Some((self.position, self.line, self.column));
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Pushes back the most recently read character. Calling this twice
    /// without an intervening [`next`](Self::next) is a usage bug.
    pub fn back(&mut self) {
        debug_assert!(self.prev.is_some(), "cannot step back twice");
        if let Some((position, line, column)) = self.prev.take() {
            self.position = position;
            self.line = line;
            self.column = column;
        }
    }

    /// Returns the next significant character, skipping whitespace and
    /// `//…`, `/*…*/`, and `#…` comments. `None` means end of input.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Syntax`] on an unclosed block comment.
    pub fn next_clean(&mut self) -> Result<Option<char>> {
        loop {
            match self.next() {
                None => return Ok(None),
                Some('/') => {
                    let slash = self.prev;
                    match self.next() {
                        Some('/') => self.skip_line(),
                        Some('*') => self.skip_block_comment()?,
                        Some(_) => {
                            // Keep the one-step pushback aimed at the
                            // slash, not at the character after it.
                            self.back();
                            self.prev = slash;
                            return Ok(Some('/'));
                        }
                        None => return Ok(Some('/')),
                    }
                }
                Some('#') => self.skip_line(),
                Some(c) if c <= ' ' => continue,
                Some(c) => return Ok(Some(c)),
            }
        }
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.next() {
            if c == '\n' || c == '\r' {
                break;
            }
        }
    }

    fn skip_block_comment(&mut self) -> Result<()> {
        loop {
            match self.next() {
                None => return Err(self.syntax_error("unclosed comment")),
                Some('*') => {
                    if let Some(c) = self.next() {
                        if c == '/' {
                            return Ok(());
                        }
                        self.back();
                    } else {
                        return Err(self.syntax_error("unclosed comment"));
                    }
                }
                Some(_) => {}
            }
        }
    }

    /// Reads the body of a quoted string up to the closing `quote`,
    /// processing escapes.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Syntax`] on an unterminated string, a raw
    /// newline inside the string, an unknown escape, or a malformed
    /// `\uXXXX` sequence.
    pub fn next_string(&mut self, quote: char) -> Result<String> {
        let mut out = String::new();
        loop {
            match self.next() {
                None | Some('\n') | Some('\r') => {
                    return Err(self.syntax_error("unterminated string"));
                }
                Some('\\') => match self.next() {
                    Some('b') => out.push('\u{0008}'),
                    Some('t') => out.push('\t'),
                    Some('n') => out.push('\n'),
                    Some('f') => out.push('\u{000C}'),
                    Some('r') => out.push('\r'),
                    Some('u') => out.push(self.unicode_escape()?),
                    Some(c @ ('"' | '\'' | '\\' | '/')) => out.push(c),
                    _ => return Err(self.syntax_error("illegal escape")),
                },
                Some(c) if c == quote => return Ok(out),
                Some(c) => out.push(c),
            }
        }
    }

    /// Decodes the four hex digits after `\u`, combining UTF-16
    /// surrogate pairs into a single character.
    fn unicode_escape(&mut self) -> Result<char> {
        let first = self.hex4()?;
        if (0xD800..0xDC00).contains(&first) {
            // High surrogate; the low half must follow immediately.
            if self.next() != Some('\\') || self.next() != Some('u') {
                return Err(self.syntax_error("expected low surrogate escape"));
            }
            let second = self.hex4()?;
            if !(0xDC00..0xE000).contains(&second) {
                return Err(self.syntax_error("invalid low surrogate"));
            }
            let combined = 0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00);
            char::from_u32(combined)
                .ok_or_else(|| self.syntax_error("invalid unicode code point"))
        } else {
            char::from_u32(first).ok_or_else(|| self.syntax_error("invalid unicode code point"))
        }
    }

    fn hex4(&mut self) -> Result<u32> {
        let mut code = 0;
        for _ in 0..4 {
            let c = self
                .next()
                .ok_or_else(|| self.syntax_error("unterminated unicode escape"))?;
            let digit = c
                .to_digit(16)
                .ok_or_else(|| self.syntax_error("invalid hex digit in unicode escape"))?;
            code = code * 16 + digit;
        }
        Ok(code)
    }

    /// Parses the next value: a nested object or array, a quoted string,
    /// or a bare token coerced with [`Value::from_literal`].
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Syntax`] on malformed input or when the
    /// document nests deeper than [`MAX_DEPTH`].
    pub fn next_value(&mut self) -> Result<Value> {
        self.value_at(0)
    }

    fn value_at(&mut self, depth: usize) -> Result<Value> {
        if depth > MAX_DEPTH {
            return Err(self.syntax_error("document nesting too deep"));
        }
        match self.next_clean()? {
            None => Err(self.syntax_error("missing value")),
            Some('{') => Ok(Value::Object(self.object_body(depth)?)),
            Some('[') => Ok(Value::Array(self.array_body(depth)?)),
            Some(q @ ('"' | '\'')) => Ok(Value::String(self.next_string(q)?)),
            Some(first) => self.bare_token(first),
        }
    }

    fn bare_token(&mut self, first: char) -> Result<Value> {
        let mut token = String::new();
        let mut current = Some(first);
        loop {
            match current {
                Some(c) if c >= ' ' && !DELIMITERS.contains(c) => {
                    token.push(c);
                    current = self.next();
                }
                _ => break,
            }
        }
        if current.is_some() {
            self.back();
        }
        let token = token.trim();
        if token.is_empty() {
            return Err(self.syntax_error("missing value"));
        }
        Ok(Value::from_literal(token))
    }

    /// Parses an object; the caller has already consumed the `{`.
    fn object_body(&mut self, depth: usize) -> Result<JsonObject> {
        let mut object = JsonObject::with_order(self.order);
        loop {
            let key = match self.next_clean()? {
                None => return Err(self.syntax_error("a JSON object text must end with '}'")),
                Some('}') => return Ok(object),
                Some(_) => {
                    self.back();
                    key_text(self.value_at(depth + 1)?)
                }
            };

            if self.next_clean()? != Some(':') {
                return Err(self.syntax_error("expected a ':' after a key"));
            }

            if object.has(&key) {
                return Err(self.syntax_error(format!("duplicate key {key:?}")));
            }
            let value = self.value_at(depth + 1)?;
            object.store(key, value);

            match self.next_clean()? {
                Some(',') | Some(';') => match self.next_clean()? {
                    None => {
                        return Err(self.syntax_error("a JSON object text must end with '}'"));
                    }
                    Some('}') => return Ok(object),
                    Some(_) => self.back(),
                },
                Some('}') => return Ok(object),
                _ => return Err(self.syntax_error("expected a ',' or '}'")),
            }
        }
    }

    /// Parses an array; the caller has already consumed the `[`.
    fn array_body(&mut self, depth: usize) -> Result<JsonArray> {
        let mut array = JsonArray::new();
        match self.next_clean()? {
            None => return Err(self.syntax_error("a JSON array text must end with ']'")),
            Some(']') => return Ok(array),
            Some(_) => self.back(),
        }
        loop {
            // An elided element before a separator is an explicit null.
            match self.next_clean()? {
                None => return Err(self.syntax_error("a JSON array text must end with ']'")),
                Some(',') => {
                    self.back();
                    array.store(Value::Null);
                }
                Some(_) => {
                    self.back();
                    array.store(self.value_at(depth + 1)?);
                }
            }

            match self.next_clean()? {
                Some(',') | Some(';') => match self.next_clean()? {
                    None => {
                        return Err(self.syntax_error("a JSON array text must end with ']'"));
                    }
                    Some(']') => return Ok(array),
                    Some(_) => self.back(),
                },
                Some(']') => return Ok(array),
                _ => return Err(self.syntax_error("expected a ',' or ']'")),
            }
        }
    }

    /// Parses a full object text, requiring the leading `{`.
    pub fn next_object(&mut self) -> Result<JsonObject> {
        if self.next_clean()? != Some('{') {
            return Err(self.syntax_error("a JSON object text must begin with '{'"));
        }
        self.object_body(0)
    }

    /// Parses a full array text, requiring the leading `[`.
    pub fn next_array(&mut self) -> Result<JsonArray> {
        if self.next_clean()? != Some('[') {
            return Err(self.syntax_error("a JSON array text must begin with '['"));
        }
        self.array_body(0)
    }
}

/// A parsed key is the raw text of a string value, or the canonical
/// rendition of anything else.
fn key_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Parses any JSON value from relaxed JSON-like text.
///
/// # Errors
///
/// Fails with [`Error::Syntax`] on malformed input; no partial value is
/// produced.
///
/// # Examples
///
/// ```rust
/// use jsondoc::{from_str, Value};
///
/// let value = from_str("[1, 'two', { three: 3 }]").unwrap();
/// assert!(value.is_array());
/// ```
pub fn from_str(source: &str) -> Result<Value> {
    Tokener::new(source).next_value()
}

pub(crate) fn object_from_str(source: &str, order: KeyOrder) -> Result<JsonObject> {
    Tokener::with_order(source, order).next_object()
}

pub(crate) fn array_from_str(source: &str) -> Result<JsonArray> {
    Tokener::new(source).next_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;

    #[test]
    fn strict_json_parses() {
        let obj: JsonObject = r#"{"one":"two","key":"value"}"#.parse().unwrap();
        assert_eq!(obj.get_string("one").unwrap(), Some("two"));
        assert_eq!(obj.get_string("key").unwrap(), Some("value"));
    }

    #[test]
    fn lenient_tokens_and_trailing_comma() {
        let obj: JsonObject = "{ a: 1, b: true, }".parse().unwrap();
        assert_eq!(obj.get("a").unwrap(), Some(&Value::Number(Number::Int(1))));
        assert_eq!(obj.get("b").unwrap(), Some(&Value::Bool(true)));
    }

    #[test]
    fn semicolon_separates_pairs() {
        let obj: JsonObject = "{a: 1; b: 2}".parse().unwrap();
        assert_eq!(obj.get_i32("a").unwrap(), 1);
        assert_eq!(obj.get_i32("b").unwrap(), 2);
    }

    #[test]
    fn single_quoted_and_bare_strings() {
        let obj: JsonObject = "{'a': 'one two', b: bare}".parse().unwrap();
        assert_eq!(obj.get_string("a").unwrap(), Some("one two"));
        assert_eq!(obj.get_string("b").unwrap(), Some("bare"));
    }

    #[test]
    fn comments_are_whitespace() {
        let source = "{\n  // line comment\n  a: 1, /* block\n comment */ b: 2,\n  # hash comment\n  c: 3\n}";
        let obj: JsonObject = source.parse().unwrap();
        assert_eq!(obj.get_i32("a").unwrap(), 1);
        assert_eq!(obj.get_i32("b").unwrap(), 2);
        assert_eq!(obj.get_i32("c").unwrap(), 3);
    }

    #[test]
    fn stray_slash_is_an_error_not_a_comment() {
        // A '/' not followed by '/' or '*' is a structural delimiter, so
        // it can never start a value.
        assert!(matches!(
            "{a: /x}".parse::<JsonObject>(),
            Err(Error::Syntax { .. })
        ));
        assert!(matches!(
            "{/x: 1}".parse::<JsonObject>(),
            Err(Error::Syntax { .. })
        ));
    }

    #[test]
    fn unclosed_comment_is_an_error() {
        assert!(matches!(
            "{a: /* never closed".parse::<JsonObject>(),
            Err(Error::Syntax { .. })
        ));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let err = r#"{"a":1,"a":2}"#.parse::<JsonObject>().unwrap_err();
        match err {
            Error::Syntax { msg, .. } => assert!(msg.contains("duplicate key")),
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }

    #[test]
    fn errors_carry_positions() {
        let err = "{\n  \"a\" 1\n}".parse::<JsonObject>().unwrap_err();
        match err {
            Error::Syntax { line, .. } => assert_eq!(line, 2),
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }

    #[test]
    fn unexpected_end_is_an_error() {
        assert!("{\"a\": 1".parse::<JsonObject>().is_err());
        assert!("[1, 2".parse::<JsonArray>().is_err());
        assert!("{".parse::<JsonObject>().is_err());
    }

    #[test]
    fn must_begin_with_the_container_bracket() {
        assert!("plain".parse::<JsonObject>().is_err());
        assert!("{}".parse::<JsonArray>().is_err());
    }

    #[test]
    fn escapes_decode() {
        let obj: JsonObject = r#"{"s": "a\tb\nc\"d\\e\/fA"}"#.parse().unwrap();
        assert_eq!(obj.get_string("s").unwrap(), Some("a\tb\nc\"d\\e/fA"));
    }

    #[test]
    fn unicode_escapes_decode() {
        let obj: JsonObject = r#"{"s": "\u00e9 \u2603"}"#.parse().unwrap();
        assert_eq!(obj.get_string("s").unwrap(), Some("\u{e9} \u{2603}"));
    }

    #[test]
    fn surrogate_pairs_combine() {
        let obj: JsonObject = r#"{"s": "\uD83D\uDE00"}"#.parse().unwrap();
        assert_eq!(obj.get_string("s").unwrap(), Some("\u{1F600}"));
    }

    #[test]
    fn lone_surrogate_is_an_error() {
        assert!(r#"{"s": "\uD83D"}"#.parse::<JsonObject>().is_err());
    }

    #[test]
    fn illegal_escape_is_an_error() {
        assert!(r#"{"s": "\x41"}"#.parse::<JsonObject>().is_err());
    }

    #[test]
    fn arrays_parse_with_elision_and_semicolons() {
        let arr: JsonArray = "[1,,3]".parse().unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.get(1).unwrap(), None);

        let arr: JsonArray = "[1; 2, 3,]".parse().unwrap();
        assert_eq!(arr.len(), 3);

        let arr: JsonArray = "[]".parse().unwrap();
        assert!(arr.is_empty());
    }

    #[test]
    fn nested_containers() {
        let value = from_str(r#"{"a": {"b": [1, {"c": 2}]}}"#).unwrap();
        let obj = value.as_object().unwrap();
        let inner = obj.get_object("a").unwrap();
        let arr = inner.get_array("b").unwrap();
        assert_eq!(arr.get_object(1).unwrap().get_i32("c").unwrap(), 2);
    }

    #[test]
    fn non_string_keys_stringify() {
        let obj: JsonObject = "{true: 1, 2: two}".parse().unwrap();
        assert_eq!(obj.get_i32("true").unwrap(), 1);
        assert_eq!(obj.get_string("2").unwrap(), Some("two"));
    }

    #[test]
    fn depth_bound_is_enforced() {
        let mut deep = String::new();
        for _ in 0..(MAX_DEPTH + 2) {
            deep.push('[');
        }
        let err = from_str(&deep).unwrap_err();
        match err {
            Error::Syntax { msg, .. } => assert!(msg.contains("too deep")),
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }

    #[test]
    fn pushback_restores_the_cursor() {
        let mut tokener = Tokener::new("ab");
        assert_eq!(tokener.next(), Some('a'));
        tokener.back();
        assert_eq!(tokener.next(), Some('a'));
        assert_eq!(tokener.next(), Some('b'));
        assert_eq!(tokener.next(), None);
    }

    #[test]
    fn sorted_order_applies_to_parsing() {
        let obj = JsonObject::parse_with_order("{b: 2, a: 1}", KeyOrder::Sorted).unwrap();
        let keys: Vec<_> = obj.keys().collect();
        assert_eq!(keys, ["a", "b"]);
    }
}
