use crate::notify::Notification;
use crate::row::{CellRef, Row, RowId};

/// The widget's boundary to whatever displays the table.
///
/// The core never draws; it pushes row appends, reorders, cell writes,
/// selection changes, edit-session openings and notifications through
/// this trait and the view renders them however it likes.
pub trait RenderTarget {
    /// A new row was appended to the end of the table.
    fn row_appended(&mut self, row: &Row);

    /// The table order changed wholesale; `order` lists every row.
    fn rows_reordered(&mut self, order: &[RowId]);

    /// A single cell's text changed.
    fn cell_updated(&mut self, cell: CellRef, text: &str);

    /// The active row moved from `previous` (if any) to `active`.
    fn selection_changed(&mut self, previous: Option<RowId>, active: RowId);

    /// An in-place editor should open on `cell`, pre-filled with `initial`.
    fn edit_opened(&mut self, cell: CellRef, initial: &str);

    /// Display a notification; the view dismisses it after
    /// [`crate::notify::DISMISS_AFTER`].
    fn notification_shown(&mut self, notification: &Notification);
}
