//! Display-width helpers.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: char = '\u{2026}';

/// Terminal column width of `text`.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Clip `text` to at most `max_width` columns, ending with `…` when clipped.
///
/// Clipping happens on grapheme boundaries, so wide characters and
/// combining sequences are never split.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(text) <= max_width {
        return Cow::Borrowed(text);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    let budget = max_width - 1;
    let mut out = String::with_capacity(max_width * 2);
    let mut used = 0usize;
    for grapheme in text.graphemes(true) {
        let width = display_width(grapheme);
        if used + width > budget {
            break;
        }
        out.push_str(grapheme);
        used += width;
    }
    out.push(ELLIPSIS);
    Cow::Owned(out)
}
