//! Reserved keys and their display labels.
//!
//! Data may carry error and warning markers as ordinary entries under the
//! keys `$error` and `$warning`. Rows for those entries show a label prefix
//! instead of the literal key.

use crate::style::RowStyle;

/// Marker keys with dedicated styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedKey {
    Error,
    Warning,
}

impl ReservedKey {
    pub const ERROR_KEY: &'static str = "$error";
    pub const WARNING_KEY: &'static str = "$warning";

    /// Classify a path segment.
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            Self::ERROR_KEY => Some(Self::Error),
            Self::WARNING_KEY => Some(Self::Warning),
            _ => None,
        }
    }

    #[must_use]
    pub const fn style(self) -> RowStyle {
        match self {
            Self::Error => RowStyle::ERROR,
            Self::Warning => RowStyle::WARNING,
        }
    }
}

/// Display strings supplied by the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedLabels {
    pub error: String,
    pub warning: String,
    /// Shown when a value has no fields to render.
    pub empty: String,
}

impl Default for ReservedLabels {
    fn default() -> Self {
        Self {
            error: "Error".to_owned(),
            warning: "Warning".to_owned(),
            empty: "(empty)".to_owned(),
        }
    }
}

impl ReservedLabels {
    #[must_use]
    pub fn label(&self, key: ReservedKey) -> &str {
        match key {
            ReservedKey::Error => &self.error,
            ReservedKey::Warning => &self.warning,
        }
    }
}
