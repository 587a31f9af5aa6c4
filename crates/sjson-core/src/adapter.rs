//! Conversion contract between domain types and sjson trees.
//!
//! Types that persist themselves implement [`ToJson`] and [`FromJson`].
//! Encoding is fallible (an enumerator without a string mapping is a
//! programming error that aborts the save). Decoding reports a mismatch with
//! `false` so callers can apply a default per field and move on.
//!
//! Enumerations go through an [`EnumTable`] instead of hand-written match
//! arms:
//!
//! ```
//! use sjson_core::adapter::EnumTable;
//! use sjson_core::Value;
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Facing { North, NorthEast }
//!
//! static FACING: EnumTable<Facing> =
//!     EnumTable::new("Facing", &[(Facing::North, "north"), (Facing::NorthEast, "north_east")]);
//!
//! assert_eq!(FACING.encode(Facing::NorthEast).unwrap(), Value::literal("north_east"));
//! let mut f = Facing::North;
//! assert!(FACING.decode(&Value::literal("north_east"), &mut f));
//! assert_eq!(f, Facing::NorthEast);
//! ```

use std::fmt::Debug;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::value::Value;

/// Encode `self` as a tree.
pub trait ToJson {
    fn to_json(&self) -> Result<Value>;
}

/// Decode a tree into an existing `self`.
///
/// Returns `false` when the node's shape does not match. On failure `self`
/// may be untouched or partially filled; callers must tolerate either.
pub trait FromJson {
    fn from_json(&mut self, value: &Value) -> bool;
}

/// Encode every item into an array of their encodings.
pub fn encode_seq<'a, T, I>(items: I) -> Result<Value>
where
    T: ToJson + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(|item| item.to_json()).collect()
}

/// Decode an array into `out`, all or nothing.
///
/// Decoding stops at the first element that fails. `out` is only replaced
/// when every element decodes; on failure it keeps its previous content.
pub fn decode_seq<T>(value: &Value, out: &mut Vec<T>) -> bool
where
    T: FromJson + Default,
{
    let Some(items) = value.as_array() else {
        return false;
    };
    let mut decoded = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let mut elem = T::default();
        if !elem.from_json(item) {
            debug!(index, len = items.len(), "sequence element failed to decode");
            return false;
        }
        decoded.push(elem);
    }
    *out = decoded;
    true
}

impl Value {
    /// Decode object member `key` into `out`. Returns `false` if the member
    /// is missing or does not decode, leaving the default choice to the caller.
    pub fn field<T: FromJson>(&self, key: &str, out: &mut T) -> bool {
        self.get(key).is_some_and(|v| out.from_json(v))
    }
}

/// Bidirectional string table for a fieldless enum.
pub struct EnumTable<E: 'static> {
    name: &'static str,
    entries: &'static [(E, &'static str)],
}

impl<E> EnumTable<E>
where
    E: Copy + PartialEq + Debug + 'static,
{
    pub const fn new(name: &'static str, entries: &'static [(E, &'static str)]) -> Self {
        Self { name, entries }
    }

    /// The string key for `variant`.
    pub fn key_for(&self, variant: E) -> Result<&'static str> {
        self.entries
            .iter()
            .find(|(e, _)| *e == variant)
            .map(|(_, key)| *key)
            .ok_or_else(|| Error::UnmappedEnumerator {
                table: self.name,
                variant: format!("{variant:?}"),
            })
    }

    /// The variant whose key is `s`.
    pub fn parse(&self, s: &str) -> Option<E> {
        self.entries
            .iter()
            .find(|(_, key)| *key == s)
            .map(|(e, _)| *e)
    }

    /// Encode `variant` as a literal (or a quoted string if its key is not
    /// a valid bare token, which the serializer handles).
    pub fn encode(&self, variant: E) -> Result<Value> {
        self.key_for(variant).map(Value::literal)
    }

    pub fn decode(&self, value: &Value, out: &mut E) -> bool {
        match value.as_str().and_then(|s| self.parse(s)) {
            Some(e) => {
                *out = e;
                true
            }
            None => false,
        }
    }
}

impl ToJson for Value {
    fn to_json(&self) -> Result<Value> {
        Ok(self.clone())
    }
}

impl FromJson for Value {
    fn from_json(&mut self, value: &Value) -> bool {
        self.clone_from(value);
        true
    }
}

impl ToJson for String {
    fn to_json(&self) -> Result<Value> {
        Ok(Value::string(self.as_str()))
    }
}

impl FromJson for String {
    fn from_json(&mut self, value: &Value) -> bool {
        match value.as_str() {
            Some(s) => {
                self.clear();
                self.push_str(s);
                true
            }
            None => false,
        }
    }
}

/// Scalars that round-trip through their `Display`/`FromStr` text as a literal.
macro_rules! literal_adapter {
    ($($t:ty),*) => {
        $(
            impl ToJson for $t {
                fn to_json(&self) -> Result<Value> {
                    Ok(Value::from(*self))
                }
            }

            impl FromJson for $t {
                fn from_json(&mut self, value: &Value) -> bool {
                    parse_scalar(value, self)
                }
            }
        )*
    };
}

literal_adapter!(bool, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

fn parse_scalar<T: FromStr>(value: &Value, out: &mut T) -> bool {
    match value.as_str().map(str::parse::<T>) {
        Some(Ok(parsed)) => {
            *out = parsed;
            true
        }
        _ => false,
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> Result<Value> {
        encode_seq(self)
    }
}

impl<T: FromJson + Default> FromJson for Vec<T> {
    fn from_json(&mut self, value: &Value) -> bool {
        decode_seq(value, self)
    }
}

impl<T: ToJson> ToJson for Option<T> {
    /// `None` encodes as the `null` literal.
    fn to_json(&self) -> Result<Value> {
        match self {
            Some(inner) => inner.to_json(),
            None => Ok(Value::literal("null")),
        }
    }
}

impl<T: FromJson + Default> FromJson for Option<T> {
    fn from_json(&mut self, value: &Value) -> bool {
        if matches!(value, Value::Literal(s) if s == "null") {
            *self = None;
            return true;
        }
        let mut inner = T::default();
        if inner.from_json(value) {
            *self = Some(inner);
            true
        } else {
            false
        }
    }
}
