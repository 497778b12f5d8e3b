use core::fmt::Write as _;

use crate::encode::scalars;
use crate::value::Value;

pub(crate) fn push_value(out: &mut String, value: &Value, indent: usize) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => {
            let _ = write!(out, "{}", n);
        }
        Value::String(s) => scalars::push_string(out, s),
        // Empty containers are always inline, at any level.
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Mapping(entries) if entries.is_empty() => out.push_str("{}"),
        Value::Array(items) => push_array(out, items, indent),
        Value::Mapping(entries) => push_mapping(out, entries, indent),
    }
}

fn push_indent(out: &mut String, indent: usize) {
    for _ in 0..indent {
        out.push_str("  ");
    }
}

/// `key: value` on one line when the value is simple, `key:` plus an
/// indented block when it is complex.
fn push_entry(out: &mut String, key: &str, value: &Value, child_indent: usize) {
    out.push_str(key);
    if value.is_complex() {
        out.push_str(":\n");
    } else {
        out.push_str(": ");
    }
    push_value(out, value, child_indent);
}

fn push_mapping(out: &mut String, entries: &[(String, Value)], indent: usize) {
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        push_indent(out, indent);
        push_entry(out, key, value, indent + 1);
    }
}

fn push_array(out: &mut String, items: &[Value], indent: usize) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match item {
            Value::Mapping(entries) if !entries.is_empty() => {
                push_list_mapping(out, entries, indent);
            }
            _ => {
                push_indent(out, indent);
                out.push_str("- ");
                push_value(out, item, indent + 1);
            }
        }
    }
}

/// Compact list-item layout: a mapping element folds its first entry
/// onto the dash line; the remaining entries align two spaces past the
/// dash, as sibling fields of the item. Nested blocks under any of
/// those fields sit two levels below the dash.
fn push_list_mapping(out: &mut String, entries: &[(String, Value)], indent: usize) {
    push_indent(out, indent);
    out.push_str("- ");
    let (key, value) = &entries[0];
    push_entry(out, key, value, indent + 2);
    for (key, value) in &entries[1..] {
        out.push('\n');
        push_indent(out, indent);
        out.push_str("  ");
        push_entry(out, key, value, indent + 2);
    }
}
