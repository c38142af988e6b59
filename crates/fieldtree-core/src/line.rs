//! Guide-line states.
//!
//! Each field carries one [`LineState`] per ancestor level plus a trailing
//! entry for itself. The trailing entry is [`LineState::Visible`] for a
//! mid-list sibling and [`LineState::Last`] for the final one. Ancestor
//! entries are derived from the parent's entries with
//! [`LineState::inherited`]:
//!
//! | Parent    | Child    |
//! |-----------|----------|
//! | `Visible` | `Half`   |
//! | `Last`    | `Hidden` |
//! | `Half`    | `Half`   |
//! | `Hidden`  | `Hidden` |

/// How the vertical guide line renders at one depth for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineState {
    /// Nothing to draw.
    Hidden,
    /// Sibling connector; more siblings follow.
    Visible,
    /// Continuation of an ancestor's line past this row.
    Half,
    /// Connector of the last sibling in its list.
    Last,
}

impl LineState {
    /// Trailing state for a node, given whether it closes its list.
    #[inline]
    #[must_use]
    pub const fn own(is_last: bool) -> Self {
        if is_last { Self::Last } else { Self::Visible }
    }

    /// State a child inherits at the same ancestor level.
    #[inline]
    #[must_use]
    pub const fn inherited(self) -> Self {
        match self {
            Self::Visible | Self::Half => Self::Half,
            Self::Last | Self::Hidden => Self::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LineState;

    #[test]
    fn own_state_tracks_position() {
        assert_eq!(LineState::own(true), LineState::Last);
        assert_eq!(LineState::own(false), LineState::Visible);
    }

    #[test]
    fn inheritance_table() {
        assert_eq!(LineState::Visible.inherited(), LineState::Half);
        assert_eq!(LineState::Last.inherited(), LineState::Hidden);
        assert_eq!(LineState::Half.inherited(), LineState::Half);
        assert_eq!(LineState::Hidden.inherited(), LineState::Hidden);
    }

    #[test]
    fn inheritance_is_idempotent() {
        for state in [
            LineState::Hidden,
            LineState::Visible,
            LineState::Half,
            LineState::Last,
        ] {
            assert_eq!(state.inherited().inherited(), state.inherited());
        }
    }
}
