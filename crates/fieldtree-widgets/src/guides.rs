//! Guide glyphs for tree rows.

use fieldtree_core::LineState;

const SEGMENT_COLUMNS: usize = 4;

/// Glyph set used to draw guide columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeGuides {
    /// Plain ASCII (`|`, `+--`, `` `-- ``) for terminals without box drawing.
    Ascii,
    /// Light box drawing.
    #[default]
    Unicode,
    /// Heavy box drawing.
    Bold,
    /// Double-line box drawing.
    Double,
    /// Light box drawing with a rounded final corner.
    Rounded,
}

/// The three drawn columns of a style. `Hidden` is always blank.
struct Glyphs {
    through: &'static str,
    tee: &'static str,
    corner: &'static str,
}

const BLANK: &str = "    ";

const ASCII: Glyphs = Glyphs {
    through: "|   ",
    tee: "+-- ",
    corner: "`-- ",
};
const LIGHT: Glyphs = Glyphs {
    through: "\u{2502}   ",
    tee: "\u{251C}\u{2500}\u{2500} ",
    corner: "\u{2514}\u{2500}\u{2500} ",
};
const HEAVY: Glyphs = Glyphs {
    through: "\u{2503}   ",
    tee: "\u{2523}\u{2501}\u{2501} ",
    corner: "\u{2517}\u{2501}\u{2501} ",
};
const DOUBLE: Glyphs = Glyphs {
    through: "\u{2551}   ",
    tee: "\u{2560}\u{2550}\u{2550} ",
    corner: "\u{255A}\u{2550}\u{2550} ",
};
const ROUNDED: Glyphs = Glyphs {
    corner: "\u{2570}\u{2500}\u{2500} ",
    ..LIGHT
};

impl TreeGuides {
    const fn glyphs(&self) -> &'static Glyphs {
        match self {
            Self::Ascii => &ASCII,
            Self::Unicode => &LIGHT,
            Self::Bold => &HEAVY,
            Self::Double => &DOUBLE,
            Self::Rounded => &ROUNDED,
        }
    }

    /// Guide column drawn for one ancestor level.
    ///
    /// `Visible` gets a tee, `Last` a corner, `Half` a pass-through bar and
    /// `Hidden` blank space.
    #[must_use]
    pub const fn segment(&self, state: LineState) -> &'static str {
        let glyphs = self.glyphs();
        match state {
            LineState::Visible => glyphs.tee,
            LineState::Last => glyphs.corner,
            LineState::Half => glyphs.through,
            LineState::Hidden => BLANK,
        }
    }

    /// Toggle marker for a container row.
    #[must_use]
    pub const fn marker(&self, expanded: bool) -> &'static str {
        match (self, expanded) {
            (Self::Ascii, true) => "- ",
            (Self::Ascii, false) => "+ ",
            (_, true) => "\u{25BE} ",
            (_, false) => "\u{25B8} ",
        }
    }

    /// Concatenated guide prefix for a row.
    #[must_use]
    pub fn prefix(&self, lines: &[LineState]) -> String {
        let mut out = String::with_capacity(lines.len() * SEGMENT_COLUMNS * 3);
        for state in lines {
            out.push_str(self.segment(*state));
        }
        out
    }

    /// Columns taken by one segment; the same for every style.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        SEGMENT_COLUMNS
    }

    /// Parse a style name as used in configuration files.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ascii" => Some(Self::Ascii),
            "unicode" => Some(Self::Unicode),
            "bold" => Some(Self::Bold),
            "double" => Some(Self::Double),
            "rounded" => Some(Self::Rounded),
            _ => None,
        }
    }
}
