//! String quoting policy. A string scalar is quoted only when emitting
//! it verbatim could make it read as a different type (or break the
//! line structure); this is a readability heuristic, not a full YAML
//! lexical analysis.

/// Tokens that read as a boolean or null in most block-format parsers.
const AMBIGUOUS_TOKENS: &[&str] = &["true", "false", "yes", "no", "on", "off", "null"];

fn is_control(c: char) -> bool {
    let u = c as u32;
    u < 0x20 || u == 0x7F
}

/// Plain decimal numeral: digits, optionally followed by a dot and more
/// digits. `"1."` counts, `"1.2.3"` and `".5"` do not.
fn is_plain_numeral(s: &str) -> bool {
    let bytes = s.as_bytes();
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return false;
    }
    match &bytes[digits..] {
        [] => true,
        [b'.', rest @ ..] => rest.iter().all(|b| b.is_ascii_digit()),
        _ => false,
    }
}

pub(crate) fn needs_quotes(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.contains(':') || s.contains('#') || s.contains('\n') {
        return true;
    }
    if s.starts_with(' ') || s.ends_with(' ') {
        return true;
    }
    if AMBIGUOUS_TOKENS.iter().any(|t| s.eq_ignore_ascii_case(t)) {
        return true;
    }
    is_plain_numeral(s)
}

/// JSON string literal escaping: `"` and `\` backslashed, common
/// control characters named, the rest as `\u00XX`.
pub(crate) fn push_quoted(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if is_control(c) => {
                use core::fmt::Write as _;
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

pub(crate) fn push_string(out: &mut String, s: &str) {
    if needs_quotes(s) {
        push_quoted(out, s);
    } else {
        out.push_str(s);
    }
}
