//! Interop with strict JSON through `serde`.
//!
//! `Value` implements `serde::Serialize`, so any serde format can consume
//! it. Literals are mapped by their [`LiteralKind`]: `true`/`false`/`null`
//! become JSON booleans and null, number-like literals become numbers when
//! they actually parse, and everything else (bare identifiers, malformed
//! numerals such as `12abc`) becomes a JSON string.
//!
//! In the other direction, JSON scalars become literals and JSON strings
//! become quoted strings, so `to_json_string(&Value::from(json))` preserves
//! the data.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::Result;
use crate::value::{LiteralKind, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::None => serializer.serialize_unit(),
            Value::String(s) => serializer.serialize_str(s),
            Value::Literal(s) => serialize_literal(s, serializer),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

fn serialize_literal<S>(s: &str, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match LiteralKind::classify(s) {
        LiteralKind::Null => serializer.serialize_unit(),
        LiteralKind::Bool(b) => serializer.serialize_bool(b),
        LiteralKind::Number => match s.parse::<serde_json::Number>() {
            Ok(n) => n.serialize(serializer),
            Err(_) => serializer.serialize_str(s),
        },
        LiteralKind::Bare => serializer.serialize_str(s),
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::literal("null"),
            serde_json::Value::Bool(b) => Value::from(b),
            serde_json::Value::Number(n) => Value::literal(n.to_string()),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => items.into_iter().map(Value::from).collect(),
            serde_json::Value::Object(map) => {
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect()
            }
        }
    }
}

/// Render `value` as compact strict JSON.
pub fn to_json_string(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Render `value` as indented strict JSON.
pub fn to_json_string_pretty(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Parse strict JSON text into a tree.
pub fn from_json_str(json: &str) -> Result<Value> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    Ok(Value::from(parsed))
}
