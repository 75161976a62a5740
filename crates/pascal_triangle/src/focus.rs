//! Row focus bookkeeping.
//!
//! The presentation layer isolates one row at a time: fade the others out,
//! move the row around, then transform it back. The builder records which
//! row is focused and a snapshot of the row as it was at focus time, so
//! unfocusing restores the pre-focus state exactly.

use crate::triangle::Row;

/// Focus state machine: at most one row is focused, and a snapshot exists
/// exactly while it is.
#[derive(Debug, Clone, Default)]
pub enum FocusState {
    #[default]
    Unfocused,
    Focused {
        row: usize,
        snapshot: Row,
    },
}

impl FocusState {
    /// Index of the focused row, if any.
    pub fn focused_row(&self) -> Option<usize> {
        match self {
            FocusState::Unfocused => None,
            FocusState::Focused { row, .. } => Some(*row),
        }
    }

    pub fn is_focused(&self) -> bool {
        matches!(self, FocusState::Focused { .. })
    }
}
