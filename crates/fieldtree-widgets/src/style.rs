//! Row style flags.

bitflags::bitflags! {
    /// Semantic styling hints attached to a [`Row`](crate::Row).
    ///
    /// Renderers map these to colors; the flags themselves carry no theme.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RowStyle: u16 {
        const NONE        = 0;
        const STRING      = 1 << 0;
        const NUMBER      = 1 << 1;
        const BIG_NUMBER  = 1 << 2;
        const BOOLEAN     = 1 << 3;
        const NULL        = 1 << 4;
        const CONTAINER   = 1 << 5;
        const EXPANDED    = 1 << 6;
        const ERROR       = 1 << 7;
        const WARNING     = 1 << 8;
        const PLACEHOLDER = 1 << 9;
    }
}

impl RowStyle {
    /// Whether the row should use a highlighted (error or warning) palette.
    #[must_use]
    pub const fn is_alert(self) -> bool {
        self.intersects(Self::ERROR.union(Self::WARNING))
    }
}
