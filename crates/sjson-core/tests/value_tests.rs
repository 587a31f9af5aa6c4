use sjson_core::{parse, Map, Mode, Value};

// ============================================================================
// Mode and size queries
// ============================================================================

#[test]
fn default_is_none() {
    let v = Value::default();
    assert_eq!(v.mode(), Mode::None);
    assert!(v.is_empty());
    assert_eq!(v.size(), 0);
    assert!(!v.is_scalar());
}

#[test]
fn scalars_have_size_one() {
    assert_eq!(Value::string("").size(), 1);
    assert_eq!(Value::literal("42").size(), 1);
    assert!(!Value::string("").is_empty());
    assert!(Value::string("x").is_scalar());
    assert!(Value::literal("x").is_scalar());
}

#[test]
fn container_size_counts_entries() {
    let doc = parse("{a:1, b:[1, 2, 3]}").unwrap();
    assert_eq!(doc.mode(), Mode::Object);
    assert_eq!(doc.size(), 2);
    assert_eq!(doc.get("b").unwrap().size(), 3);
}

#[test]
fn empty_containers_from_parse_and_construction_agree() {
    let parsed_obj = parse("{}").unwrap();
    let built_obj = Value::object();
    let mut emptied_obj = parse("{a:1}").unwrap();
    emptied_obj.unset("a");

    for obj in [&parsed_obj, &built_obj, &emptied_obj] {
        assert_eq!(obj.mode(), Mode::Object);
        assert!(obj.is_empty());
        assert_eq!(obj.size(), 0);
        assert!(obj.keys().is_empty());
        assert_eq!(obj.to_string(), "{}");
    }

    let parsed_arr = parse("[]").unwrap();
    let built_arr = Value::array();
    for arr in [&parsed_arr, &built_arr] {
        assert_eq!(arr.mode(), Mode::Array);
        assert!(arr.is_empty());
        assert_eq!(arr.to_string(), "[]");
    }
}

// ============================================================================
// Mutators
// ============================================================================

#[test]
fn set_on_none_creates_object() {
    let mut v = Value::None;
    v.set("hp", 10).set("name", "Ada");
    assert_eq!(v.mode(), Mode::Object);
    assert_eq!(v.get("hp"), Some(&Value::literal("10")));
    assert_eq!(v.get("name"), Some(&Value::string("Ada")));
}

#[test]
fn set_overwrites_existing_key() {
    let mut v = parse("{a:1}").unwrap();
    v.set("a", 2);
    assert_eq!(v.size(), 1);
    assert_eq!(v.get("a"), Some(&Value::literal("2")));
}

#[test]
fn push_on_string_retypes_to_array() {
    let mut v = Value::string("old");
    v.push(true);
    assert_eq!(v, Value::Array(vec![Value::literal("true")]));
}

#[test]
fn set_on_array_retypes_to_object() {
    let mut v = parse("[1, 2]").unwrap();
    v.set("k", "v");
    assert_eq!(v.keys(), ["k"]);
    assert_eq!(v.size(), 1);
}

#[test]
fn unset_removes_single_key() {
    let mut v = parse("{a:1, b:2}").unwrap();
    assert!(v.unset("a"));
    assert!(!v.unset("a"));
    assert_eq!(v.keys(), ["b"]);
}

#[test]
fn unset_all_counts_removed_keys() {
    let mut v = parse("{a:1, b:2, c:3}").unwrap();
    assert_eq!(v.unset_all(["a", "c", "zzz"]), 2);
    assert_eq!(v.keys(), ["b"]);
}

#[test]
fn unset_on_non_object_is_noop() {
    let mut v = parse("[1]").unwrap();
    assert!(!v.unset("a"));
    assert_eq!(v.unset_all(vec!["a".to_string()]), 0);
    assert_eq!(v.size(), 1);
}

#[test]
fn keys_are_in_sorted_map_order() {
    let v = parse("{zeta:1, alpha:2, mid:3}").unwrap();
    assert_eq!(v.keys(), ["alpha", "mid", "zeta"]);
}

#[test]
fn keys_empty_for_non_objects() {
    assert!(Value::literal("x").keys().is_empty());
    assert!(parse("[1]").unwrap().keys().is_empty());
    assert!(Value::None.keys().is_empty());
}

#[test]
fn reset_releases_content() {
    let mut v = parse("{a:{b:[1, 2]}}").unwrap();
    v.reset();
    assert_eq!(v, Value::None);
}

// ============================================================================
// Copy and move
// ============================================================================

#[test]
fn clone_is_deep() {
    let original = parse("{a:{b:1}}").unwrap();
    let mut copy = original.clone();
    copy.get_mut("a").unwrap().set("b", 2);
    assert_eq!(original.get("a").unwrap().get("b"), Some(&Value::literal("1")));
    assert_eq!(copy.get("a").unwrap().get("b"), Some(&Value::literal("2")));
}

#[test]
fn take_leaves_none_behind() {
    let mut src = parse("{a:1}").unwrap();
    let moved = src.take();
    assert_eq!(src, Value::None);
    assert_eq!(moved.keys(), ["a"]);
}

// ============================================================================
// Invariant checking
// ============================================================================

#[test]
fn syntax_ok_accepts_parsed_documents() {
    let doc = parse(r#"{a:[1, "", {b:c}], d:"e"}"#).unwrap();
    assert!(doc.syntax_ok());
    assert!(Value::None.syntax_ok());
}

#[test]
fn syntax_ok_rejects_empty_literal() {
    assert!(!Value::literal("").syntax_ok());
    let mut doc = Value::object();
    doc.set("deep", Value::Array(vec![Value::literal("")]));
    assert!(!doc.syntax_ok());
}

#[test]
fn syntax_ok_rejects_none_child() {
    let mut doc = Value::object();
    doc.set("missing", Value::None);
    assert!(!doc.syntax_ok());
}

#[test]
fn collect_builds_containers() {
    let arr: Value = (1..=3).map(Value::from).collect();
    assert_eq!(arr.to_string(), "[1, 2, 3]");

    let obj: Value = [("b", Value::from(2)), ("a", Value::from(1))].into_iter().collect();
    let mut expected = Map::new();
    expected.insert("a".to_string(), Value::literal("1"));
    expected.insert("b".to_string(), Value::literal("2"));
    assert_eq!(obj, Value::Object(expected));
}

#[test]
fn as_str_covers_both_scalar_modes() {
    assert_eq!(Value::string("s").as_str(), Some("s"));
    assert_eq!(Value::literal("l").as_str(), Some("l"));
    assert_eq!(Value::object().as_str(), None);
}
