//! The sjson document tree.
//!
//! A [`Value`] holds exactly one of five representations. Containers own
//! their children outright, so cloning is a deep copy and [`Value::take`]
//! moves a subtree out, leaving `None` behind.
//!
//! Objects are backed by a `BTreeMap`, so key iteration is sorted rather than
//! insertion-ordered. An empty container is simply a map or vector with no
//! entries; there is no separate "unallocated" state to keep in sync.

use std::collections::BTreeMap;

/// Backing container for object nodes.
pub type Map = BTreeMap<String, Value>;

/// Discriminant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    None,
    Object,
    Array,
    String,
    Literal,
}

/// Loose classification of a literal payload.
///
/// Numeric detection only looks at the first character: anything starting
/// with a digit, `+`, `-` or `.` counts as a number without further
/// validation. Existing documents depend on that looseness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Null,
    Bool(bool),
    Number,
    Bare,
}

impl LiteralKind {
    pub fn classify(payload: &str) -> Self {
        match payload {
            "null" => LiteralKind::Null,
            "true" => LiteralKind::Bool(true),
            "false" => LiteralKind::Bool(false),
            _ => match payload.chars().next() {
                Some(c) if c.is_ascii_digit() || matches!(c, '+' | '-' | '.') => {
                    LiteralKind::Number
                }
                _ => LiteralKind::Bare,
            },
        }
    }
}

/// One node of an sjson document.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Absent or uninitialized.
    #[default]
    None,
    Object(Map),
    Array(Vec<Value>),
    /// Quoted scalar. May be empty.
    String(String),
    /// Unquoted scalar. Must be non-empty.
    Literal(String),
}

impl Value {
    /// A quoted scalar.
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// An unquoted scalar.
    pub fn literal(s: impl Into<String>) -> Self {
        Value::Literal(s.into())
    }

    /// An object with no entries.
    pub fn object() -> Self {
        Value::Object(Map::new())
    }

    /// An array with no elements.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    pub fn mode(&self) -> Mode {
        match self {
            Value::None => Mode::None,
            Value::Object(_) => Mode::Object,
            Value::Array(_) => Mode::Array,
            Value::String(_) => Mode::String,
            Value::Literal(_) => Mode::Literal,
        }
    }

    /// True for `String` and `Literal` nodes.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::String(_) | Value::Literal(_))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Number of entries: 1 for a scalar (even an empty string), the entry
    /// count for containers, 0 for `None`.
    pub fn size(&self) -> usize {
        match self {
            Value::None => 0,
            Value::Object(map) => map.len(),
            Value::Array(items) => items.len(),
            Value::String(_) | Value::Literal(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Scalar payload, for either quoted or unquoted scalars.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Literal(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Classification of a literal payload; `None` for every other mode.
    pub fn literal_kind(&self) -> Option<LiteralKind> {
        match self {
            Value::Literal(s) => Some(LiteralKind::classify(s)),
            _ => None,
        }
    }

    /// Look up an object member. Non-objects have no members.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.as_object_mut().and_then(|map| map.get_mut(key))
    }

    /// Insert `value` under `key`, overwriting any previous entry.
    ///
    /// A node that is not already an object is retyped to an empty object
    /// first and its previous content is dropped.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.make_object().insert(key.into(), value.into());
        self
    }

    /// Append `value`. A node that is not already an array is retyped to an
    /// empty array first and its previous content is dropped.
    pub fn push(&mut self, value: impl Into<Value>) -> &mut Self {
        self.make_array().push(value.into());
        self
    }

    /// Remove `key` from an object. Returns whether an entry was removed.
    pub fn unset(&mut self, key: &str) -> bool {
        match self {
            Value::Object(map) => map.remove(key).is_some(),
            _ => false,
        }
    }

    /// Remove every listed key from an object. Returns how many were present.
    pub fn unset_all<I, K>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let Value::Object(map) = self else {
            return 0;
        };
        keys.into_iter()
            .filter(|key| map.remove(key.as_ref()).is_some())
            .count()
    }

    /// Object keys in map order. Empty for anything but a non-empty object.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Value::Object(map) => map.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Drop any owned content and return to `None`.
    pub fn reset(&mut self) {
        *self = Value::None;
    }

    /// Move the content out, leaving `None` in its place.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Check the node invariants on this node and every descendant.
    ///
    /// Literals must be non-empty and containers must not hold `None`
    /// children. A top-level `None` is valid: it is an empty document.
    pub fn syntax_ok(&self) -> bool {
        match self {
            Value::None | Value::String(_) => true,
            Value::Literal(s) => !s.is_empty(),
            Value::Object(map) => map.values().all(|v| !v.is_none() && v.syntax_ok()),
            Value::Array(items) => items.iter().all(|v| !v.is_none() && v.syntax_ok()),
        }
    }

    pub(crate) fn make_object(&mut self) -> &mut Map {
        if !self.is_object() {
            *self = Value::object();
        }
        match self {
            Value::Object(map) => map,
            _ => unreachable!("retyped to object above"),
        }
    }

    fn make_array(&mut self) -> &mut Vec<Value> {
        if !self.is_array() {
            *self = Value::array();
        }
        match self {
            Value::Array(items) => items,
            _ => unreachable!("retyped to array above"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Literal(if b { "true" } else { "false" }.to_string())
    }
}

macro_rules! literal_from_display {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Literal(n.to_string())
                }
            }
        )*
    };
}

literal_from_display!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_kind_is_loose_about_numbers() {
        assert_eq!(LiteralKind::classify("12abc"), LiteralKind::Number);
        assert_eq!(LiteralKind::classify("-"), LiteralKind::Number);
        assert_eq!(LiteralKind::classify("north_east"), LiteralKind::Bare);
        assert_eq!(LiteralKind::classify("true"), LiteralKind::Bool(true));
        assert_eq!(LiteralKind::classify("null"), LiteralKind::Null);
    }

    #[test]
    fn make_object_discards_previous_content() {
        let mut v = Value::literal("x");
        v.make_object();
        assert_eq!(v, Value::object());
    }
}
