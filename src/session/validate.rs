use regex::Regex;
use std::sync::LazyLock;

// Literal patterns, they always compile.
static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("static regex"));
static FLOAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]*)?$").expect("static regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Float,
}

/// Whole-string check of a field edit. No sign, no whitespace, no exponent.
pub fn is_valid(kind: FieldKind, text: &str) -> bool {
    match kind {
        FieldKind::Integer => INTEGER.is_match(text),
        FieldKind::Float => FLOAT.is_match(text),
    }
}

/// Validated integer value. Digit runs that overflow `u32` are rejected too.
pub fn parse_integer(text: &str) -> Option<u32> {
    if !is_valid(FieldKind::Integer, text) {
        return None;
    }
    text.parse().ok()
}

/// Validated float value. A trailing dot ("12.") is accepted.
pub fn parse_float(text: &str) -> Option<f64> {
    if !is_valid(FieldKind::Float, text) {
        return None;
    }
    text.parse().ok()
}
