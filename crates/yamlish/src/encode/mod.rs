//! Block-style layout emission: scalars inline, non-empty containers as
//! indented blocks, two spaces per level.

mod layout;
mod scalars;

use crate::value::Value;

/// Render a value tree as block-style text. Pure and total: every tree
/// produces a string, byte-identical across calls, with no trailing
/// newline.
///
/// Recursion depth follows the tree's nesting depth. Trees built
/// through the JSON/serde paths are capped at construction time;
/// hand-built trees deeper than that cap are the caller's
/// responsibility.
pub fn encode(value: &Value) -> String {
    let mut out = String::new();
    layout::push_value(&mut out, value, 0);
    out
}
