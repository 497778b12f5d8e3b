/// Format a finite f64 the way it reads in a manifest: ryu's shortest
/// representation, with the `.0` suffix on integral values stripped and
/// -0 normalized to 0. Exponent notation is left alone; it only shows
/// up for magnitudes no sane manifest field carries.
pub(crate) fn format_f64(value: f64) -> String {
    if !value.is_finite() {
        debug_assert!(false, "format_f64 called with non-finite value");
        return String::from("null");
    }
    if value == 0.0 {
        return String::from("0");
    }
    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(value);
    match raw.strip_suffix(".0") {
        Some(integral) => String::from(integral),
        None => String::from(raw),
    }
}
