use crate::row::RowId;

/// Tracks the single active (highlighted) row.
///
/// Only row activation changes this state; there is no automatic clear
/// and activating the already-active row is idempotent.
#[derive(Debug, Default)]
pub struct SelectionState {
    active: Option<RowId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<RowId> {
        self.active
    }

    pub fn is_active(&self, row: RowId) -> bool {
        self.active == Some(row)
    }

    /// Activate a row, returning the previously active row (which may be
    /// the same row).
    pub fn activate(&mut self, row: RowId) -> Option<RowId> {
        self.active.replace(row)
    }
}
