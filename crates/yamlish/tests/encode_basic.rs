use yamlish::{Value, encode};

#[test]
fn scalars_at_top_level() {
    assert_eq!(encode(&Value::Null), "null");
    assert_eq!(encode(&Value::Bool(true)), "true");
    assert_eq!(encode(&Value::Bool(false)), "false");
    assert_eq!(encode(&Value::from(42i64)), "42");
    assert_eq!(encode(&Value::from("hello")), "hello");
}

#[test]
fn flat_mapping() {
    let v = Value::mapping().entry("a", 1i64).entry("b", "x").build();
    assert_eq!(encode(&v), "a: 1\nb: x");
}

#[test]
fn nested_mapping_becomes_block() {
    let v = Value::mapping()
        .entry("spec", Value::mapping().entry("replicas", 3i64).build())
        .build();
    assert_eq!(encode(&v), "spec:\n  replicas: 3");
}

#[test]
fn mapping_entries_keep_insertion_order() {
    let v = Value::mapping()
        .entry("zeta", 1i64)
        .entry("alpha", 2i64)
        .entry("mid", 3i64)
        .build();
    assert_eq!(encode(&v), "zeta: 1\nalpha: 2\nmid: 3");
}

#[test]
fn deeper_nesting_indents_two_spaces_per_level() {
    let v = Value::mapping()
        .entry(
            "a",
            Value::mapping()
                .entry("b", Value::mapping().entry("c", "d").build())
                .build(),
        )
        .build();
    assert_eq!(encode(&v), "a:\n  b:\n    c: d");
}

#[test]
fn encoding_is_deterministic_and_leaves_input_intact() {
    let v = Value::mapping()
        .entry("name", "web")
        .entry("ports", vec![80i64, 443])
        .build();
    let snapshot = v.clone();
    let first = encode(&v);
    let second = encode(&v);
    assert_eq!(first, second);
    assert_eq!(v, snapshot);
}

#[test]
fn no_trailing_newline() {
    let v = Value::mapping()
        .entry("a", 1i64)
        .entry("b", vec![1i64, 2])
        .build();
    assert!(!encode(&v).ends_with('\n'));
}
