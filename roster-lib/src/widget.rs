use crate::edit::EditSession;
use crate::form::{self, FormValues, ValidationError};
use crate::notify::Notification;
use crate::row::{CellRef, Column, Row, RowId};
use crate::select::SelectionState;
use crate::sort::{self, SortState};
use crate::store::RowStore;
use crate::view::RenderTarget;

/// The interactive table: owns the row store and all controller state,
/// and pushes every effect through a [`RenderTarget`].
///
/// Single-threaded and event-driven: each command runs to completion
/// before the next, so no state here needs interior locking.
#[derive(Debug, Default)]
pub struct TableWidget {
    store: RowStore,
    sort: SortState,
    selection: SelectionState,
    edit: EditSession,
}

impl TableWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &RowStore {
        &self.store
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn edit(&self) -> &EditSession {
        &self.edit
    }

    /// Append an already-built row (seed data) and mirror it to the view.
    pub fn append_row(&mut self, row: Row, view: &mut dyn RenderTarget) -> RowId {
        view.row_appended(&row);
        self.store.push(row)
    }

    /// A sortable header was activated: toggle or reset the sort state,
    /// stable-sort the store and push the full new order to the view.
    pub fn on_header_activated(&mut self, column: Column, view: &mut dyn RenderTarget) {
        let direction = self.sort.activate(column);
        log::debug!("[sort] column={column:?} direction={direction:?}");

        self.store
            .sort_by(|a, b| direction.apply(sort::compare_cells(a.cell(column), b.cell(column))));
        view.rows_reordered(&self.store.order());
    }

    /// A body row was activated: move the highlight there. Activating
    /// the active row re-applies it; an unknown id is a no-op.
    pub fn on_row_activated(&mut self, row: RowId, view: &mut dyn RenderTarget) {
        if self.store.get(row).is_none() {
            return;
        }
        let previous = self.selection.activate(row);
        view.selection_changed(previous, row);
    }

    /// Validate form input and append the resulting row.
    ///
    /// Success appends exactly one row and emits a success notification;
    /// the caller should then clear the form. Failure leaves the store
    /// untouched, emits an error notification and the caller keeps the
    /// form contents for correction.
    pub fn submit(
        &mut self,
        values: &FormValues,
        view: &mut dyn RenderTarget,
    ) -> Result<RowId, ValidationError> {
        match form::build_row(values) {
            Ok(row) => {
                let id = self.append_row(row, view);
                view.notification_shown(&Notification::success("Success", "New employee added!"));
                Ok(id)
            }
            Err(err) => {
                view.notification_shown(&Notification::error("Error", err.to_string()));
                Err(err)
            }
        }
    }

    /// A cell was double-clicked: open an edit session unless one is
    /// already in progress (in which case this is a no-op).
    pub fn on_cell_double_clicked(&mut self, cell: CellRef, view: &mut dyn RenderTarget) {
        if self.edit.is_editing() {
            return;
        }
        let Some(row) = self.store.get(cell.row) else {
            return;
        };
        let current = row.cell(cell.column).trim().to_string();
        if self.edit.begin(cell, &current) {
            view.edit_opened(cell, &current);
        }
    }

    /// The open editor lost focus (or Enter forced it to): commit its
    /// text into the cell and return to idle. No-op when nothing is
    /// being edited.
    pub fn on_edit_committed(&mut self, input: &str, view: &mut dyn RenderTarget) -> Option<CellRef> {
        let (cell, value) = self.edit.commit(input)?;
        if let Some(row) = self.store.get_mut(cell.row) {
            row.set_cell(cell.column, value.clone());
        }
        view.cell_updated(cell, &value);
        Some(cell)
    }
}
