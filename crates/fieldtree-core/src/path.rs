//! Structural paths.
//!
//! A [`FieldPath`] is a sequence of segments, not a delimited string: a key
//! such as `"a.b"` or `"a/b"` is one segment and must never be confused with
//! nesting. [`FieldPath::key`] encodes the segments as a JSON Pointer
//! (RFC 6901), which is injective, so it can key expand-state maps.

use std::fmt;

/// Ordered property-name / index segments from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// The empty path.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Build a path from segments.
    #[must_use]
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Extend this path by one segment.
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment.into());
        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Same as [`FieldPath::is_root`].
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// The final segment, `None` at the root.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Encode as a JSON Pointer. The root encodes as `""`.
    #[must_use]
    pub fn key(&self) -> String {
        let mut key = String::new();
        for segment in &self.segments {
            key.push('/');
            for ch in segment.chars() {
                match ch {
                    '~' => key.push_str("~0"),
                    '/' => key.push_str("~1"),
                    _ => key.push(ch),
                }
            }
        }
        key
    }

    /// Decode a key produced by [`FieldPath::key`].
    ///
    /// A key without a leading `/` is read as if it had one, so hand-typed
    /// keys like `user/name` resolve to `/user/name`.
    #[must_use]
    pub fn parse_key(key: &str) -> Self {
        if key.is_empty() {
            return Self::root();
        }
        let body = key.strip_prefix('/').unwrap_or(key);
        Self {
            segments: body
                .split('/')
                .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
                .collect(),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}
