//! JSON-like value model.
//!
//! [`JsonValue`] mirrors the values a display layer receives: JSON scalars
//! and containers plus `undefined` and an opaque arbitrary-precision number.
//! Object entries keep their source order; nothing is ever sorted.
//!
//! # BigNumber leaves
//!
//! Numbers that cannot round-trip through `f64` are kept as [`BigNumber`],
//! which holds the exact literal. A `BigNumber` is never drillable even when a
//! host would represent it as an object; [`is_big_number`] is checked before
//! any container test.

use std::borrow::Cow;
use std::fmt;
use std::io::Read;

use thiserror::Error;

/// Numeric literals with more significant digits than this lose precision
/// in an `f64` and are kept as [`BigNumber`].
pub const MAX_SAFE_DIGITS: usize = 15;

/// Errors produced while decoding JSON text into a [`JsonValue`].
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An arbitrary-precision number, stored as its decimal literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigNumber(String);

impl BigNumber {
    /// Wrap a decimal literal such as `"12345678901234567890"`.
    #[must_use]
    pub fn new(literal: impl Into<String>) -> Self {
        Self(literal.into())
    }

    /// The exact literal.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A JSON-like value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    /// Absent value. Never produced by the JSON parser.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigNumber(BigNumber),
    String(String),
    Array(Vec<JsonValue>),
    /// Ordered key/value entries.
    Object(Vec<(String, JsonValue)>),
}

/// Returns `true` when `value` is an arbitrary-precision number.
///
/// Such values must be rendered as leaves; their internals are never
/// enumerated as tree children.
#[must_use]
pub fn is_big_number(value: &JsonValue) -> bool {
    matches!(value, JsonValue::BigNumber(_))
}

/// Parse JSON text into a [`JsonValue`].
///
/// Object key order is preserved and long numeric literals become
/// [`BigNumber`]s.
pub fn parse_json(text: &str) -> Result<JsonValue, ValueError> {
    let raw: serde_json::Value = serde_json::from_str(text)?;
    Ok(JsonValue::from(raw))
}

/// Parse JSON from a reader. See [`parse_json`].
pub fn parse_json_reader(reader: impl Read) -> Result<JsonValue, ValueError> {
    let raw: serde_json::Value = serde_json::from_reader(reader)?;
    Ok(JsonValue::from(raw))
}

impl JsonValue {
    /// Whether this value can be expanded to show children.
    #[must_use]
    pub fn is_drillable(&self) -> bool {
        !is_big_number(self) && matches!(self, Self::Array(_) | Self::Object(_))
    }

    /// Number of children for containers, `None` for leaves.
    #[must_use]
    pub fn child_count(&self) -> Option<usize> {
        self.entries().map(|entries| entries.len())
    }

    /// Enumerate child entries in container order.
    ///
    /// Array indices are yielded as decimal strings. Returns `None` for
    /// anything that is not drillable.
    #[must_use]
    pub fn entries(&self) -> Option<Entries<'_>> {
        if is_big_number(self) {
            return None;
        }
        match self {
            Self::Array(items) => Some(Entries::Array(items.iter().enumerate())),
            Self::Object(entries) => Some(Entries::Object(entries.iter())),
            _ => None,
        }
    }

    /// Short lowercase name of the runtime type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::BigNumber(_) => "bignumber",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }
}

/// Iterator over the children of a container value.
#[derive(Debug, Clone)]
pub enum Entries<'a> {
    Array(std::iter::Enumerate<std::slice::Iter<'a, JsonValue>>),
    Object(std::slice::Iter<'a, (String, JsonValue)>),
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Cow<'a, str>, &'a JsonValue);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Array(iter) => iter
                .next()
                .map(|(index, value)| (Cow::Owned(index.to_string()), value)),
            Self::Object(iter) => iter
                .next()
                .map(|(key, value)| (Cow::Borrowed(key.as_str()), value)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Array(iter) => iter.size_hint(),
            Self::Object(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Entries<'_> {}

/// Digits that carry precision: the mantissa without sign, leading zeros
/// or trailing fractional zeros.
fn significant_digits(literal: &str) -> usize {
    let mantissa = literal.split(['e', 'E']).next().unwrap_or(literal);
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits: String = whole
        .chars()
        .chain(fraction.trim_end_matches('0').chars())
        .filter(char::is_ascii_digit)
        .collect();
    digits.trim_start_matches('0').len()
}

fn number_from_literal(literal: String) -> JsonValue {
    if significant_digits(&literal) > MAX_SAFE_DIGITS {
        return JsonValue::BigNumber(BigNumber(literal));
    }
    match literal.parse::<f64>() {
        Ok(number) if number.is_finite() => JsonValue::Number(number),
        _ => JsonValue::BigNumber(BigNumber(literal)),
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => number_from_literal(n.to_string()),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        number_from_literal(value.to_string())
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<BigNumber> for JsonValue {
    fn from(value: BigNumber) -> Self {
        Self::BigNumber(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_parse_to_matching_variants() {
        assert_eq!(parse_json("null").unwrap(), JsonValue::Null);
        assert_eq!(parse_json("true").unwrap(), JsonValue::Bool(true));
        assert_eq!(parse_json("1.5").unwrap(), JsonValue::Number(1.5));
        assert_eq!(
            parse_json(r#""hi""#).unwrap(),
            JsonValue::String("hi".to_owned())
        );
    }

    #[test]
    fn long_integer_becomes_big_number() {
        let value = parse_json("12345678901234567890").unwrap();
        assert_eq!(
            value,
            JsonValue::BigNumber(BigNumber::new("12345678901234567890"))
        );
        assert!(is_big_number(&value));
        assert!(!value.is_drillable());
    }

    #[test]
    fn fifteen_digits_stay_native() {
        let value = parse_json("123456789012345").unwrap();
        assert_eq!(value, JsonValue::Number(123_456_789_012_345.0));
    }

    #[test]
    fn leading_zeros_and_exponent_do_not_count() {
        assert_eq!(significant_digits("0.000123"), 3);
        assert_eq!(significant_digits("-1.25e300"), 3);
        assert_eq!(significant_digits("1234567890123456"), 16);
    }

    #[test]
    fn trailing_fraction_zeros_do_not_count() {
        assert_eq!(significant_digits("1.0000000000000000"), 1);
        assert_eq!(significant_digits("0.000"), 0);
        assert_eq!(significant_digits("100"), 3);
        assert_eq!(
            parse_json("1.0000000000000000").unwrap(),
            JsonValue::Number(1.0)
        );
        assert_eq!(
            parse_json("2.50000000000000000000").unwrap(),
            JsonValue::Number(2.5)
        );
        assert!(is_big_number(&parse_json("1.0000000000000001").unwrap()));
    }

    #[test]
    fn exponent_literals_stay_native() {
        assert_eq!(parse_json("1e300").unwrap(), JsonValue::Number(1e300));
        assert_eq!(parse_json("1e-7").unwrap(), JsonValue::Number(1e-7));
    }

    #[test]
    fn object_order_is_preserved() {
        let value = parse_json(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<String> = value
            .entries()
            .unwrap()
            .map(|(key, _)| key.into_owned())
            .collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn array_entries_use_index_keys() {
        let value = parse_json(r#"["x", "y"]"#).unwrap();
        let keys: Vec<String> = value
            .entries()
            .unwrap()
            .map(|(key, _)| key.into_owned())
            .collect();
        assert_eq!(keys, vec!["0", "1"]);
        assert_eq!(value.child_count(), Some(2));
        assert_eq!(JsonValue::from(1i64).child_count(), None);
    }

    #[test]
    fn leaves_have_no_entries() {
        assert!(JsonValue::Null.entries().is_none());
        assert!(JsonValue::Undefined.entries().is_none());
        assert!(JsonValue::from("text").entries().is_none());
        assert!(JsonValue::from(BigNumber::new("1")).entries().is_none());
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        let err = parse_json("{not json").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse JSON"));
    }

    #[test]
    fn reader_parse_matches_str_parse() {
        let text = r#"{"a": [1, 2]}"#;
        assert_eq!(
            parse_json_reader(text.as_bytes()).unwrap(),
            parse_json(text).unwrap()
        );
    }
}
