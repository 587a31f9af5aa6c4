use sjson_core::{parse, to_string, Value};

/// Helper: serialize, reparse, and assert the tree survived unchanged.
fn assert_roundtrip(v: &Value) {
    let text = to_string(v);
    let back = parse(&text).unwrap_or_else(|e| panic!("reparse failed: {e}\n{text}"));
    assert_eq!(&back, v, "roundtrip mismatch through:\n{text}");
}

/// Helper: parse text, then check that its serialization reparses equal.
fn assert_text_roundtrip(input: &str) {
    let v = parse(input).unwrap();
    assert_roundtrip(&v);
}

#[test]
fn roundtrip_empty_document() {
    assert_roundtrip(&Value::None);
}

#[test]
fn roundtrip_scalars() {
    assert_roundtrip(&Value::literal("north_east"));
    assert_roundtrip(&Value::literal("-0.5e-3"));
    assert_roundtrip(&Value::string(""));
    assert_roundtrip(&Value::string("tab\there \"quoted\" back\\slash"));
    assert_roundtrip(&Value::string("line1\r\nline2\u{0b}\u{0c}\u{08}"));
    assert_roundtrip(&Value::string("caf\u{00e9} \u{4f60}\u{597d}"));
}

#[test]
fn roundtrip_strings_that_look_like_literals() {
    for s in ["true", "42", "north_east", "null"] {
        assert_roundtrip(&Value::string(s));
    }
}

#[test]
fn roundtrip_unknown_escape_text() {
    assert_roundtrip(&Value::string(r"\q and A"));
}

#[test]
fn roundtrip_save_document() {
    assert_text_roundtrip(
        r#"{
            "version": 3,
            "player": {"name": "Ada", "pos": [4, -2], "facing": north_east, "flags": []},
            "inventory": [
                {"id": sword, "count": 1, "note": "found in the \"old\" mill"},
                {"id": potion, "count": 3}
            ],
            "quests": {},
            "log": ["entered town", "met the smith", [nested, list], 7]
        }"#,
    );
}

#[test]
fn roundtrip_keys_needing_quotes() {
    let mut v = Value::object();
    v.set("", 1)
        .set("has space", 2)
        .set("colon:key", 3)
        .set("brace{", 4)
        .set("quote\"", 5)
        .set("new\nline", 6);
    assert_roundtrip(&v);
}

#[test]
fn roundtrip_deep_nesting() {
    let mut v = Value::literal("leaf");
    for i in 0..50 {
        let mut wrapper = if i % 2 == 0 { Value::array() } else { Value::object() };
        if i % 2 == 0 {
            wrapper.push(v);
            wrapper.push(Value::literal("x"));
        } else {
            wrapper.set(format!("k{i}"), v);
        }
        v = wrapper;
    }
    assert_roundtrip(&v);
}

#[test]
fn unsafe_literal_downgrades_to_string() {
    let v = Value::literal("two words");
    assert_eq!(parse(&to_string(&v)).unwrap(), Value::string("two words"));
}

#[test]
fn serialization_is_stable() {
    let input = r#"{b:[1,2,{c:"d"}],a:x}"#;
    let once = to_string(&parse(input).unwrap());
    let twice = to_string(&parse(&once).unwrap());
    assert_eq!(once, twice);
}
