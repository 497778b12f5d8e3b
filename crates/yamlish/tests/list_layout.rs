//! Array layout, including the compact list-item form used when an
//! element is a non-empty mapping.

use yamlish::{Value, encode};

#[test]
fn scalar_items() {
    let v = Value::from(vec![1i64, 2, 3]);
    assert_eq!(encode(&v), "- 1\n- 2\n- 3");
}

#[test]
fn string_items_go_through_the_quoting_policy() {
    let v = Value::from(vec!["plain", "123", "a: b"]);
    assert_eq!(encode(&v), "- plain\n- \"123\"\n- \"a: b\"");
}

#[test]
fn null_and_bool_items() {
    let v = Value::Array(vec![Value::Null, Value::Bool(false)]);
    assert_eq!(encode(&v), "- null\n- false");
}

#[test]
fn compact_list_of_mappings() {
    let item = Value::mapping().entry("name", "a").entry("port", 80i64);
    let v = Value::Array(vec![item.build()]);
    assert_eq!(encode(&v), "- name: a\n  port: 80");
}

#[test]
fn several_mapping_items() {
    let v = Value::Array(vec![
        Value::mapping().entry("name", "a").entry("port", 80i64).build(),
        Value::mapping().entry("name", "b").build(),
    ]);
    assert_eq!(encode(&v), "- name: a\n  port: 80\n- name: b");
}

#[test]
fn complex_first_entry_moves_its_block_below_the_dash() {
    let item = Value::mapping()
        .entry("ports", vec![80i64, 443])
        .entry("name", "web")
        .build();
    let v = Value::Array(vec![item]);
    assert_eq!(encode(&v), "- ports:\n    - 80\n    - 443\n  name: web");
}

#[test]
fn complex_later_entry_nests_under_its_field() {
    let item = Value::mapping()
        .entry("name", "web")
        .entry("selector", Value::mapping().entry("app", "web").build())
        .build();
    let v = Value::Array(vec![item]);
    assert_eq!(encode(&v), "- name: web\n  selector:\n    app: web");
}

#[test]
fn mapping_items_nested_under_a_key() {
    let v = Value::mapping()
        .entry(
            "endpoints",
            Value::Array(vec![
                Value::mapping().entry("host", "a.example.com").build(),
                Value::mapping().entry("host", "b.example.com").build(),
            ]),
        )
        .build();
    assert_eq!(
        encode(&v),
        "endpoints:\n  - host: a.example.com\n  - host: b.example.com"
    );
}

#[test]
fn array_under_a_key() {
    let v = Value::mapping().entry("ports", vec![80i64, 443]).build();
    assert_eq!(encode(&v), "ports:\n  - 80\n  - 443");
}

#[test]
fn empty_mapping_item_renders_inline() {
    let v = Value::Array(vec![Value::Mapping(Vec::new())]);
    assert_eq!(encode(&v), "- {}");
}

#[test]
fn empty_array_item_renders_inline() {
    let v = Value::Array(vec![Value::Array(Vec::new())]);
    assert_eq!(encode(&v), "- []");
}

// A non-mapping complex item is concatenated after the dash, its own
// indentation and all. Odd-looking, but it is the established layout
// and is kept as-is.
#[test]
fn nested_array_item_keeps_the_legacy_concatenation() {
    let v = Value::Array(vec![Value::from(vec![1i64, 2])]);
    assert_eq!(encode(&v), "-   - 1\n  - 2");
}

#[test]
fn deep_compact_item() {
    let item = Value::mapping()
        .entry("a", 1i64)
        .entry("b", Value::mapping().entry("c", 2i64).build())
        .build();
    let v = Value::mapping()
        .entry("items", Value::Array(vec![item]))
        .build();
    assert_eq!(encode(&v), "items:\n  - a: 1\n    b:\n      c: 2");
}
