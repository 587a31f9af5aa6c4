//! Structural filtering and merging of sjson trees.
//!
//! Predicates look at each immediate child of the receiver as a whole; none
//! of these operations recurse on their own. Callers that want deep filtering
//! recurse inside the predicate.
//!
//! The `destructive_*` variants mutate in place and move values rather than
//! cloning them. Every operation reports an incompatible receiver or source
//! mode by returning `false` and leaving both sides untouched.

use crate::value::{Map, Value};

impl Value {
    /// Return a filtered copy, leaving `self` unchanged.
    ///
    /// - Objects keep the members whose value satisfies `pred`.
    /// - Arrays keep the elements that satisfy `pred`.
    /// - Scalars are returned as-is if they satisfy `pred`, otherwise `None`.
    ///
    /// ```
    /// use sjson_core::parse;
    ///
    /// let doc = parse("{a:1, b:\"x\", c:2}").unwrap();
    /// let literals = doc.grep(|v| v.literal_kind().is_some());
    /// assert_eq!(literals.keys(), ["a", "c"]);
    /// assert_eq!(doc.size(), 3);
    /// ```
    pub fn grep<F>(&self, mut pred: F) -> Value
    where
        F: FnMut(&Value) -> bool,
    {
        match self {
            Value::None => Value::None,
            Value::Object(map) => Value::Object(
                map.iter()
                    .filter(|(_, v)| pred(*v))
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            ),
            Value::Array(items) => {
                Value::Array(items.iter().filter(|v| pred(*v)).cloned().collect())
            }
            scalar => {
                if pred(scalar) {
                    scalar.clone()
                } else {
                    Value::None
                }
            }
        }
    }

    /// In-place counterpart of [`Value::grep`].
    ///
    /// A scalar that fails `pred` becomes `None`. Returns whether the
    /// receiver still holds any content.
    pub fn destructive_grep<F>(&mut self, mut pred: F) -> bool
    where
        F: FnMut(&Value) -> bool,
    {
        match self {
            Value::None => false,
            Value::Object(map) => {
                map.retain(|_, v| pred(v));
                !map.is_empty()
            }
            Value::Array(items) => {
                items.retain(|v| pred(v));
                !items.is_empty()
            }
            scalar => {
                if !pred(scalar) {
                    scalar.reset();
                }
                !scalar.is_none()
            }
        }
    }

    /// Two-phase in-place filter over object members.
    ///
    /// `select` sees every member and rejects candidates. Survivors are
    /// passed to `rewrite`, which may modify the value and rename the key in
    /// place, and returns whether to keep the member. Renamed members are
    /// reinserted under their new key; a rename onto a key that another kept
    /// member ends up with keeps whichever is inserted last in map order.
    ///
    /// Returns `false` without changes if the receiver is not an object,
    /// otherwise whether any members remain.
    pub fn destructive_grep_with<S, R>(&mut self, mut select: S, mut rewrite: R) -> bool
    where
        S: FnMut(&str, &Value) -> bool,
        R: FnMut(&mut String, &mut Value) -> bool,
    {
        let Value::Object(map) = self else {
            return false;
        };

        let mut kept = Map::new();
        for (mut key, mut value) in std::mem::take(map) {
            if select(&key, &value) && rewrite(&mut key, &mut value) {
                kept.insert(key, value);
            }
        }
        *map = kept;
        !map.is_empty()
    }

    /// Move every member of `src` into `self`, overwriting on key collision.
    ///
    /// `self` must be an object or `None` (it becomes an object); `src` must
    /// be an object. When `self` has no members the whole map is moved over
    /// without touching individual entries. Afterwards `src` is an empty
    /// object.
    ///
    /// ```
    /// use sjson_core::{parse, Value};
    ///
    /// let mut base = Value::None;
    /// let mut src = parse("{a:1, b:2}").unwrap();
    /// assert!(base.destructive_merge(&mut src));
    /// assert_eq!(base.keys(), ["a", "b"]);
    /// assert!(src.is_empty());
    /// ```
    pub fn destructive_merge(&mut self, src: &mut Value) -> bool {
        if !self.can_merge_from(src) {
            return false;
        }
        let Value::Object(incoming) = src else {
            return false;
        };
        let target = self.make_object();
        if target.is_empty() {
            std::mem::swap(target, incoming);
        } else {
            target.append(incoming);
        }
        true
    }

    /// Like [`Value::destructive_merge`], but only members whose value
    /// satisfies `pred` move; the rest stay behind in `src`.
    pub fn destructive_merge_if<F>(&mut self, src: &mut Value, mut pred: F) -> bool
    where
        F: FnMut(&Value) -> bool,
    {
        if !self.can_merge_from(src) {
            return false;
        }
        let Value::Object(incoming) = src else {
            return false;
        };
        let target = self.make_object();
        let (moving, staying): (Map, Map) =
            std::mem::take(incoming).into_iter().partition(|(_, v)| pred(v));
        *incoming = staying;
        target.extend(moving);
        true
    }

    fn can_merge_from(&self, src: &Value) -> bool {
        matches!(self, Value::None | Value::Object(_)) && src.is_object()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_into_empty_object_moves_whole_map() {
        let mut base = Value::object();
        let mut src: Value = [("k", Value::literal("1"))].into_iter().collect();
        assert!(base.destructive_merge(&mut src));
        assert_eq!(base.keys(), ["k"]);
        assert_eq!(src, Value::object());
    }

    #[test]
    fn merge_rejects_scalar_receiver() {
        let mut base = Value::string("s");
        let mut src: Value = [("k", Value::literal("1"))].into_iter().collect();
        assert!(!base.destructive_merge(&mut src));
        assert_eq!(base, Value::string("s"));
        assert_eq!(src.size(), 1);
    }
}
