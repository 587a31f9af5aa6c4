//! sjson serializer — renders a [`Value`] tree as indented text.
//!
//! Layout rules:
//!
//! - Scalars are written compactly on one line.
//! - Object members after the first start on a new line, indented with one
//!   tab per nesting level. There is no trailing newline before `}`.
//! - Array elements are separated by `, ` while both neighbours are scalars;
//!   otherwise the next element starts on a new indented line.
//! - Keys and literals are written bare when they would read back as the
//!   same token, and quoted with string escaping when they would not.
//!
//! A top-level `None` renders as nothing, which parses back to `None`. A
//! `None` nested inside a container renders as `null`.
//!
//! # Example
//! ```
//! use sjson_core::{parse, to_string};
//!
//! let doc = parse(r#"{"b":[1,2,{"c":x}],"a":"hi"}"#).unwrap();
//! assert_eq!(to_string(&doc), "{a:\"hi\",\n\tb:[1, 2,\n\t\t{c:x}]}");
//! ```

use std::fmt;
use std::io::Write;

use crate::error::Result;
use crate::parser::ends_literal;
use crate::value::{Map, Value};

/// Serialize a value to a `String`.
pub fn to_string(value: &Value) -> String {
    let mut out = String::new();
    if !value.is_none() {
        write_value(value, 0, &mut out);
    }
    out
}

/// Serialize a value into an I/O sink.
pub fn to_writer<W: Write>(value: &Value, mut writer: W) -> Result<()> {
    writer.write_all(to_string(value).as_bytes())?;
    Ok(())
}

fn write_value(value: &Value, depth: usize, out: &mut String) {
    match value {
        Value::None => out.push_str("null"),
        Value::String(s) => write_quoted(s, out),
        Value::Literal(s) => write_bare_or_quoted(s, out),
        Value::Object(map) => write_object(map, depth, out),
        Value::Array(items) => write_array(items, depth, out),
    }
}

fn write_object(map: &Map, depth: usize, out: &mut String) {
    out.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push(',');
            newline(depth + 1, out);
        }
        write_bare_or_quoted(key, out);
        out.push(':');
        write_value(value, depth + 1, out);
    }
    out.push('}');
}

fn write_array(items: &[Value], depth: usize, out: &mut String) {
    out.push('[');
    let mut prev_scalar = None;
    for item in items {
        match prev_scalar {
            None => {}
            Some(true) if item.is_scalar() => out.push_str(", "),
            Some(_) => {
                out.push(',');
                newline(depth + 1, out);
            }
        }
        write_value(item, depth + 1, out);
        prev_scalar = Some(item.is_scalar());
    }
    out.push(']');
}

fn newline(depth: usize, out: &mut String) {
    out.push('\n');
    out.extend(std::iter::repeat_n('\t', depth));
}

/// True when `s` reads back as the same literal token.
pub fn is_bare_safe(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(ends_literal)
}

fn write_bare_or_quoted(s: &str, out: &mut String) {
    if is_bare_safe(s) {
        out.push_str(s);
    } else {
        write_quoted(s, out);
    }
}

fn write_quoted(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\u{0b}' => out.push_str("\\v"),
            '\u{0c}' => out.push_str("\\f"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('"');
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_string(self))
    }
}

impl std::str::FromStr for Value {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse(s)
    }
}
