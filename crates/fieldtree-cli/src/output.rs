//! Row serialization for `--format json`.

use fieldtree::{Row, RowStyle};
use serde::Serialize;

/// One row as emitted on a JSON line.
#[derive(Debug, Serialize)]
pub struct RowRecord<'a> {
    pub key: String,
    pub depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
    pub value: &'a str,
    pub container: bool,
    pub expanded: bool,
    pub style: Vec<&'static str>,
    pub text: String,
}

impl<'a> RowRecord<'a> {
    #[must_use]
    pub fn from_row(row: &'a Row) -> Self {
        Self {
            key: row.path.key(),
            depth: row.depth,
            label: row.label.as_deref(),
            value: &row.value,
            container: row.is_container(),
            expanded: row.style.contains(RowStyle::EXPANDED),
            style: style_names(row.style),
            text: row.text(),
        }
    }
}

/// Lower-case names of the flags set in `style`.
#[must_use]
pub fn style_names(style: RowStyle) -> Vec<&'static str> {
    style
        .iter_names()
        .filter_map(|(name, _)| STYLE_NAMES.iter().find(|(n, _)| *n == name))
        .map(|(_, lower)| *lower)
        .collect()
}

const STYLE_NAMES: &[(&str, &str)] = &[
    ("STRING", "string"),
    ("NUMBER", "number"),
    ("BIG_NUMBER", "big_number"),
    ("BOOLEAN", "boolean"),
    ("NULL", "null"),
    ("CONTAINER", "container"),
    ("EXPANDED", "expanded"),
    ("ERROR", "error"),
    ("WARNING", "warning"),
    ("PLACEHOLDER", "placeholder"),
];
