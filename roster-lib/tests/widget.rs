use roster_lib::form::FormValues;
use roster_lib::{
    CellRef, Column, Notification, NotificationKind, Office, RenderTarget, Row, RowId, TableWidget,
    ValidationError,
};

/// Records every call the widget pushes through the view boundary.
#[derive(Debug, Default)]
struct RecordingView {
    events: Vec<ViewEvent>,
}

#[derive(Debug, Clone, PartialEq)]
enum ViewEvent {
    Appended(RowId),
    Reordered(Vec<RowId>),
    CellUpdated(CellRef, String),
    Selection(Option<RowId>, RowId),
    EditOpened(CellRef, String),
    Notified(NotificationKind, String),
}

impl RenderTarget for RecordingView {
    fn row_appended(&mut self, row: &Row) {
        self.events.push(ViewEvent::Appended(row.id()));
    }

    fn rows_reordered(&mut self, order: &[RowId]) {
        self.events.push(ViewEvent::Reordered(order.to_vec()));
    }

    fn cell_updated(&mut self, cell: CellRef, text: &str) {
        self.events.push(ViewEvent::CellUpdated(cell, text.to_string()));
    }

    fn selection_changed(&mut self, previous: Option<RowId>, active: RowId) {
        self.events.push(ViewEvent::Selection(previous, active));
    }

    fn edit_opened(&mut self, cell: CellRef, initial: &str) {
        self.events.push(ViewEvent::EditOpened(cell, initial.to_string()));
    }

    fn notification_shown(&mut self, notification: &Notification) {
        self.events
            .push(ViewEvent::Notified(notification.kind, notification.message.clone()));
    }
}

fn seeded_widget(view: &mut RecordingView) -> (TableWidget, Vec<RowId>) {
    let mut widget = TableWidget::new();
    let mut ids = Vec::new();
    for (name, salary) in [("Alice", "$300"), ("Bob", "$100"), ("Carol", "$200")] {
        let row = Row::new([
            name.to_string(),
            "Developer".to_string(),
            "London".to_string(),
            "35".to_string(),
            salary.to_string(),
        ]);
        ids.push(widget.append_row(row, view));
    }
    view.events.clear();
    (widget, ids)
}

fn valid_input() -> FormValues {
    FormValues {
        name: "Alice".to_string(),
        position: "Dev".to_string(),
        office: Some(Office::Tokyo),
        age: "30".to_string(),
        salary: "50000".to_string(),
    }
}

// ============================================================================
// Sorting Through the Widget
// ============================================================================

#[test]
fn test_header_activation_pushes_new_order() {
    let mut view = RecordingView::default();
    let (mut widget, ids) = seeded_widget(&mut view);

    widget.on_header_activated(Column::Salary, &mut view);

    // $100, $200, $300
    let expected = vec![ids[1], ids[2], ids[0]];
    assert_eq!(view.events, vec![ViewEvent::Reordered(expected.clone())]);
    assert_eq!(widget.store().order(), expected);
}

#[test]
fn test_second_activation_reverses() {
    let mut view = RecordingView::default();
    let (mut widget, ids) = seeded_widget(&mut view);

    widget.on_header_activated(Column::Salary, &mut view);
    widget.on_header_activated(Column::Salary, &mut view);

    assert_eq!(widget.store().order(), vec![ids[0], ids[2], ids[1]]);
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_activating_b_after_a_leaves_only_b_active() {
    let mut view = RecordingView::default();
    let (mut widget, ids) = seeded_widget(&mut view);

    widget.on_row_activated(ids[0], &mut view);
    widget.on_row_activated(ids[1], &mut view);

    assert_eq!(widget.selection().active(), Some(ids[1]));
    assert!(!widget.selection().is_active(ids[0]));
    assert_eq!(
        view.events,
        vec![
            ViewEvent::Selection(None, ids[0]),
            ViewEvent::Selection(Some(ids[0]), ids[1]),
        ]
    );
}

#[test]
fn test_reactivating_the_active_row_is_idempotent() {
    let mut view = RecordingView::default();
    let (mut widget, ids) = seeded_widget(&mut view);

    widget.on_row_activated(ids[2], &mut view);
    widget.on_row_activated(ids[2], &mut view);

    assert_eq!(widget.selection().active(), Some(ids[2]));
    assert_eq!(
        view.events.last(),
        Some(&ViewEvent::Selection(Some(ids[2]), ids[2]))
    );
}

#[test]
fn test_selection_survives_reorder() {
    let mut view = RecordingView::default();
    let (mut widget, ids) = seeded_widget(&mut view);

    widget.on_row_activated(ids[0], &mut view);
    widget.on_header_activated(Column::Salary, &mut view);

    assert_eq!(widget.selection().active(), Some(ids[0]));
}

#[test]
fn test_unknown_row_is_a_no_op() {
    let mut view = RecordingView::default();
    let (mut widget, ids) = seeded_widget(&mut view);

    widget.on_row_activated(ids[0], &mut view);
    let stale = Row::new(std::array::from_fn(|_| String::new()));
    widget.on_row_activated(stale.id(), &mut view);

    assert_eq!(widget.selection().active(), Some(ids[0]));
}

// ============================================================================
// Form Submission
// ============================================================================

#[test]
fn test_successful_submit_appends_and_notifies() {
    let mut view = RecordingView::default();
    let (mut widget, _) = seeded_widget(&mut view);

    let id = widget.submit(&valid_input(), &mut view).unwrap();

    assert_eq!(widget.store().len(), 4);
    assert_eq!(widget.store().get(id).unwrap().cell(Column::Salary), "$50,000");
    assert_eq!(
        view.events,
        vec![
            ViewEvent::Appended(id),
            ViewEvent::Notified(NotificationKind::Success, "New employee added!".to_string()),
        ]
    );
}

#[test]
fn test_failed_submit_leaves_store_unchanged() {
    let mut view = RecordingView::default();
    let (mut widget, _) = seeded_widget(&mut view);

    let values = FormValues {
        name: "Bob".to_string(),
        position: "Dev".to_string(),
        office: Some(Office::Tokyo),
        age: "17".to_string(),
        salary: "1000".to_string(),
    };
    // Name check runs before the age check.
    assert_eq!(widget.submit(&values, &mut view), Err(ValidationError::NameTooShort));

    let values = FormValues {
        name: "Bobby".to_string(),
        ..values
    };
    assert_eq!(widget.submit(&values, &mut view), Err(ValidationError::AgeOutOfRange));

    assert_eq!(widget.store().len(), 3);
    assert_eq!(
        view.events,
        vec![
            ViewEvent::Notified(
                NotificationKind::Error,
                "Name must be at least 4 letters".to_string()
            ),
            ViewEvent::Notified(NotificationKind::Error, "Age must be 18 - 90".to_string()),
        ]
    );
}

// ============================================================================
// Cell Editing
// ============================================================================

#[test]
fn test_double_click_opens_editor_once() {
    let mut view = RecordingView::default();
    let (mut widget, ids) = seeded_widget(&mut view);

    let first = CellRef::new(ids[0], Column::Name);
    widget.on_cell_double_clicked(first, &mut view);
    // Second double-click anywhere while a session is open: no-op.
    widget.on_cell_double_clicked(CellRef::new(ids[1], Column::Salary), &mut view);

    assert_eq!(widget.edit().target(), Some(first));
    assert_eq!(
        view.events,
        vec![ViewEvent::EditOpened(first, "Alice".to_string())]
    );
}

#[test]
fn test_commit_updates_store_and_view() {
    let mut view = RecordingView::default();
    let (mut widget, ids) = seeded_widget(&mut view);

    let cell = CellRef::new(ids[1], Column::Salary);
    widget.on_cell_double_clicked(cell, &mut view);
    let committed = widget.on_edit_committed("2000", &mut view);

    assert_eq!(committed, Some(cell));
    assert_eq!(widget.store().get(ids[1]).unwrap().cell(Column::Salary), "$2,000");
    assert_eq!(
        view.events.last(),
        Some(&ViewEvent::CellUpdated(cell, "$2,000".to_string()))
    );
    assert!(!widget.edit().is_editing());
}

#[test]
fn test_empty_commit_restores_original_text() {
    let mut view = RecordingView::default();
    let (mut widget, ids) = seeded_widget(&mut view);

    let cell = CellRef::new(ids[0], Column::Name);
    widget.on_cell_double_clicked(cell, &mut view);
    widget.on_edit_committed("", &mut view);

    assert_eq!(widget.store().get(ids[0]).unwrap().cell(Column::Name), "Alice");
}

#[test]
fn test_commit_without_open_session_is_none() {
    let mut view = RecordingView::default();
    let (mut widget, _) = seeded_widget(&mut view);

    assert_eq!(widget.on_edit_committed("text", &mut view), None);
    assert!(view.events.is_empty());
}
