use std::collections::HashMap;
use std::time::Instant;

use roster_lib::{
    CellRef, Notification, RenderTarget, Row, RowId, COLUMN_COUNT, DISMISS_AFTER,
};

use crate::input::TextField;

/// A row as the screen shows it: identity plus cell text copies.
#[derive(Debug, Clone)]
pub struct ScreenRow {
    pub id: RowId,
    pub cells: [String; COLUMN_COUNT],
}

/// The inline cell editor, when one is open.
#[derive(Debug)]
pub struct CellEditor {
    pub cell: CellRef,
    pub field: TextField,
}

/// A notification on screen and the moment it disappears.
#[derive(Debug, Clone)]
pub struct ActiveNotification {
    pub notification: Notification,
    pub expires_at: Instant,
}

/// Retained screen-side state, updated only through the widget's
/// [`RenderTarget`] calls — the terminal analogue of what the DOM held
/// for the original page.
#[derive(Debug, Default)]
pub struct ScreenTable {
    rows: Vec<ScreenRow>,
    active: Option<RowId>,
    editor: Option<CellEditor>,
    notifications: Vec<ActiveNotification>,
}

impl ScreenTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[ScreenRow] {
        &self.rows
    }

    pub fn active(&self) -> Option<RowId> {
        self.active
    }

    pub fn row_index(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    pub fn editor(&self) -> Option<&CellEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut CellEditor> {
        self.editor.as_mut()
    }

    /// Close the inline editor, handing its final text to the caller
    /// for the commit path.
    pub fn take_editor(&mut self) -> Option<CellEditor> {
        self.editor.take()
    }

    pub fn notifications(&self) -> &[ActiveNotification] {
        &self.notifications
    }

    /// Drop notifications whose dismissal deadline has passed.
    pub fn sweep_notifications(&mut self, now: Instant) {
        self.notifications.retain(|n| n.expires_at > now);
    }
}

impl RenderTarget for ScreenTable {
    fn row_appended(&mut self, row: &Row) {
        self.rows.push(ScreenRow {
            id: row.id(),
            cells: row.cells().clone(),
        });
    }

    fn rows_reordered(&mut self, order: &[RowId]) {
        let position: HashMap<RowId, usize> = order
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, i))
            .collect();
        self.rows
            .sort_by_key(|row| position.get(&row.id).copied().unwrap_or(usize::MAX));
    }

    fn cell_updated(&mut self, cell: CellRef, text: &str) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == cell.row) {
            row.cells[cell.column.index()] = text.to_string();
        }
    }

    fn selection_changed(&mut self, _previous: Option<RowId>, active: RowId) {
        self.active = Some(active);
    }

    fn edit_opened(&mut self, cell: CellRef, initial: &str) {
        log::debug!("[screen] editor opened on {cell:?}");
        self.editor = Some(CellEditor {
            cell,
            field: TextField::with_text(initial),
        });
    }

    fn notification_shown(&mut self, notification: &Notification) {
        self.notifications.push(ActiveNotification {
            notification: notification.clone(),
            expires_at: Instant::now() + DISMISS_AFTER,
        });
    }
}
