//! Recursive-descent parser for sjson text.
//!
//! The grammar is JSON with one extension: any unquoted run of characters
//! that contains no whitespace, no `"` and none of `{ } [ ] , :` is a
//! *literal* scalar. `true`, `42` and `north_east` are all literals.
//!
//! # Key design decisions
//!
//! - **"No value" is not an error at the value level**: `parse_value` returns
//!   `Value::None` when it meets a closing delimiter, a separator or end of
//!   input. Containers turn that into a hard error; the top level turns it
//!   into an empty document.
//! - **Top level reads one value**: text after the first value is ignored
//!   unless [`ParseOptions::reject_trailing`] is set.
//! - **Line tracking lives in `bump`**: every consumed character goes through
//!   one place, which counts LF, CR and CR+LF as a single line break each,
//!   including line breaks inside strings.
//! - **Depth guard**: each container level counts against
//!   [`ParseOptions::max_depth`], so adversarial nesting fails with
//!   [`Error::NestingTooDeep`] instead of exhausting the stack.
//! - **Lenient strings**: end of input inside a string ends the string.

use std::io::Read;
use std::iter::Peekable;
use std::str::Chars;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value::{Map, Value};

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Maximum container nesting depth accepted.
    pub max_depth: usize,
    /// Fail when non-whitespace follows the first value.
    pub reject_trailing: bool,
}

impl ParseOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    /// No depth limit; nesting is bounded only by the call stack.
    pub const fn unlimited() -> Self {
        Self::with_max_depth(usize::MAX)
    }

    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            reject_trailing: false,
        }
    }

    /// Same limits, but anything after the first value is an error.
    pub const fn strict(self) -> Self {
        Self {
            reject_trailing: true,
            ..self
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::with_max_depth(Self::DEFAULT_MAX_DEPTH)
    }
}

/// Parse a complete sjson document with default options.
///
/// Empty or whitespace-only input yields `Value::None`, as does input that
/// starts with one of `, } ] :`. Only the first value is read; whatever
/// follows it is left unparsed.
///
/// ```
/// use sjson_core::{parse, Value};
///
/// let doc = parse("{dir: north_east, name: \"Ada\"}").unwrap();
/// assert_eq!(doc.get("dir"), Some(&Value::literal("north_east")));
/// assert_eq!(doc.get("name"), Some(&Value::string("Ada")));
/// ```
pub fn parse(input: &str) -> Result<Value> {
    parse_with(input, &ParseOptions::default())
}

/// Parse a complete sjson document with explicit options.
pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Value> {
    let mut parser = Parser::new(input, *options);
    let value = parser.parse_value()?;
    if options.reject_trailing {
        parser.skip_whitespace();
        if let Some(c) = parser.peek() {
            return Err(parser.unexpected("end of input", c));
        }
    }
    Ok(value)
}

/// Read everything from `reader` and parse it as one document.
pub fn from_reader<R: Read>(mut reader: R, options: &ParseOptions) -> Result<Value> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_with(&text, options)
}

/// True for characters that end an unquoted literal.
pub(crate) fn ends_literal(c: char) -> bool {
    c.is_whitespace() || matches!(c, '{' | '}' | '[' | ']' | ',' | ':' | '"')
}

/// Streaming view over sjson text.
///
/// [`Parser::parse_value`] reads one value at a time and leaves the rest of
/// the input in place, so several whitespace-separated values can be pulled
/// from one source.
pub struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    after_cr: bool,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: ParseOptions) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            after_cr: false,
            depth: 0,
            options,
        }
    }

    /// Current 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Parse the next value.
    ///
    /// Returns `Value::None` without consuming anything when the next
    /// non-whitespace character is one of `, } ] :` or input is exhausted.
    pub fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.peek() {
            None | Some(',' | '}' | ']' | ':') => Ok(Value::None),
            Some('{') => {
                self.bump();
                self.parse_object()
            }
            Some('[') => {
                self.bump();
                self.parse_array()
            }
            Some('"') => {
                self.bump();
                Ok(Value::String(self.parse_string()))
            }
            Some(_) => Ok(Value::Literal(self.parse_literal())),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Consume one character, keeping the line count current.
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        match c {
            '\r' => self.line += 1,
            '\n' if !self.after_cr => self.line += 1,
            _ => {}
        }
        self.after_cr = c == '\r';
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::Parse {
            line: self.line,
            message: message.into(),
        }
    }

    fn unexpected(&self, expected: &str, found: char) -> Error {
        self.error(format!("expected {expected}, found '{}'", found.escape_debug()))
    }

    fn unexpected_end(&self, expected: &str) -> Error {
        self.error(format!("expected {expected}, found end of input"))
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.options.max_depth {
            return Err(Error::NestingTooDeep {
                line: self.line,
                limit: self.options.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Require one of `close` or `,` after a container entry. Returns true
    /// when the container is finished.
    fn expect_separator(&mut self, close: char) -> Result<bool> {
        let expected = format!(", or {close}");
        self.skip_whitespace();
        match self.bump() {
            Some(',') => Ok(false),
            Some(c) if c == close => Ok(true),
            Some(c) => Err(self.unexpected(&expected, c)),
            None => Err(self.unexpected_end(&expected)),
        }
    }

    /// Parse an object body; the opening brace is already consumed.
    fn parse_object(&mut self) -> Result<Value> {
        self.enter()?;
        let mut map = Map::new();

        self.skip_whitespace();
        if self.peek() == Some('}') {
            self.bump();
            self.depth -= 1;
            return Ok(Value::Object(map));
        }

        loop {
            let key = match self.parse_value()? {
                Value::String(key) | Value::Literal(key) => key,
                Value::None => {
                    return Err(match self.peek() {
                        Some(c) => self.unexpected("key", c),
                        None => self.unexpected_end("key"),
                    })
                }
                _ => return Err(self.error("expected key, found object or array")),
            };

            self.skip_whitespace();
            match self.bump() {
                Some(':') => {}
                Some(c) => return Err(self.unexpected(":", c)),
                None => return Err(self.unexpected_end(":")),
            }

            let value = self.parse_value()?;
            if value.is_none() {
                return Err(match self.peek() {
                    Some(c) => self.unexpected("value", c),
                    None => self.unexpected_end("value"),
                });
            }
            map.insert(key, value);

            if self.expect_separator('}')? {
                break;
            }
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    /// Parse an array body; the opening bracket is already consumed.
    fn parse_array(&mut self) -> Result<Value> {
        self.enter()?;
        let mut items = Vec::new();

        self.skip_whitespace();
        if self.peek() == Some(']') {
            self.bump();
            self.depth -= 1;
            return Ok(Value::Array(items));
        }

        loop {
            let value = self.parse_value()?;
            if value.is_none() {
                return Err(match self.peek() {
                    Some(c) => self.unexpected("value", c),
                    None => self.unexpected_end("value"),
                });
            }
            items.push(value);

            if self.expect_separator(']')? {
                break;
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }

    /// Parse a string body; the opening quote is already consumed.
    ///
    /// Unknown escapes are kept verbatim, backslash included.
    fn parse_string(&mut self) -> String {
        let mut out = String::new();
        while let Some(c) = self.bump() {
            match c {
                '"' => break,
                '\\' => match self.bump() {
                    Some('r') => out.push('\r'),
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('v') => out.push('\u{0b}'),
                    Some('f') => out.push('\u{0c}'),
                    Some('b') => out.push('\u{08}'),
                    Some(q @ ('"' | '\'' | '\\')) => out.push(q),
                    Some(other) => {
                        out.push('\\');
                        out.push(other);
                    }
                    None => out.push('\\'),
                },
                _ => out.push(c),
            }
        }
        out
    }

    fn parse_literal(&mut self) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if ends_literal(c) {
                break;
            }
            out.push(c);
            self.bump();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_counts_as_one_line() {
        let mut p = Parser::new("\r\n\r\n\rx", ParseOptions::default());
        p.skip_whitespace();
        assert_eq!(p.line(), 4);
    }

    #[test]
    fn parse_value_leaves_trailing_input() {
        let mut p = Parser::new("a b", ParseOptions::default());
        assert_eq!(p.parse_value().unwrap(), Value::literal("a"));
        assert_eq!(p.parse_value().unwrap(), Value::literal("b"));
        assert_eq!(p.parse_value().unwrap(), Value::None);
    }

    #[test]
    fn disallowed_leading_character_is_no_value() {
        let mut p = Parser::new("}", ParseOptions::default());
        assert_eq!(p.parse_value().unwrap(), Value::None);
        assert_eq!(p.peek(), Some('}'));
    }
}
