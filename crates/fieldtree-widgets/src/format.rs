//! Value text for rows.

use fieldtree_core::{ContainerKind, JsonValue};

use crate::style::RowStyle;

/// Render a leaf value and its type style.
///
/// Strings are JSON-quoted. Numbers print in plain decimal for magnitudes in
/// `[1e-6, 1e21)` and in exponent form (`1e+300`, `2.5e-7`) otherwise; big
/// numbers keep their literal.
/// Containers never reach this function through a [`Field`](fieldtree_core::Field),
/// but are summarized if passed directly.
#[must_use]
pub fn format_leaf(value: &JsonValue) -> (String, RowStyle) {
    match value {
        JsonValue::Undefined => ("undefined".to_owned(), RowStyle::NULL),
        JsonValue::Null => ("null".to_owned(), RowStyle::NULL),
        JsonValue::Bool(b) => (b.to_string(), RowStyle::BOOLEAN),
        JsonValue::Number(n) => (format_number(*n), RowStyle::NUMBER),
        JsonValue::BigNumber(big) => (
            big.as_str().to_owned(),
            RowStyle::NUMBER | RowStyle::BIG_NUMBER,
        ),
        JsonValue::String(s) => (
            serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\"")),
            RowStyle::STRING,
        ),
        JsonValue::Array(items) => (
            format_summary(ContainerKind::Array, items.len()),
            RowStyle::CONTAINER,
        ),
        JsonValue::Object(entries) => (
            format_summary(ContainerKind::Object, entries.len()),
            RowStyle::CONTAINER,
        ),
    }
}

/// Collapsed summary of a container: `{n}` or `[n]`.
#[must_use]
pub fn format_summary(kind: ContainerKind, len: usize) -> String {
    match kind {
        ContainerKind::Object => format!("{{{len}}}"),
        ContainerKind::Array => format!("[{len}]"),
    }
}

const PLAIN_MIN: f64 = 1e-6;
const PLAIN_MAX: f64 = 1e21;

fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        let name = if n > 0.0 { "Infinity" } else { "-Infinity" };
        return name.to_owned();
    }
    if n == 0.0 {
        return "0".to_owned();
    }
    if (PLAIN_MIN..PLAIN_MAX).contains(&n.abs()) {
        return n.to_string();
    }

    // `{:e}` gives the shortest round-trip mantissa but no `+` on positive exponents.
    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
