pub mod currency;
pub mod edit;
pub mod form;
pub mod notify;
pub mod row;
pub mod select;
pub mod sort;
pub mod store;
pub mod view;
pub mod widget;

pub use edit::EditSession;
pub use form::{FormValues, ValidationError};
pub use notify::{DISMISS_AFTER, Notification, NotificationKind};
pub use row::{CellRef, Column, Office, Row, RowId, COLUMN_COUNT};
pub use select::SelectionState;
pub use sort::{CellKey, SortDirection, SortState};
pub use store::RowStore;
pub use view::RenderTarget;
pub use widget::TableWidget;
