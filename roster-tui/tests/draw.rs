use roster_lib::{Column, Notification, RenderTarget, Row, SortState};
use roster_tui::buffer::Buffer;
use roster_tui::form::FormState;
use roster_tui::layout::{Layout, MARGIN_X};
use roster_tui::screen::ScreenTable;
use roster_tui::{draw, theme};

fn frame(screen: &ScreenTable, form: &FormState) -> Buffer {
    let layout = Layout::compute(screen.rows().len());
    let mut buf = Buffer::new(100, 40);
    draw::draw(screen, form, SortState::new(), &layout, &mut buf);
    buf
}

fn line(buf: &Buffer, x: u16, y: u16, len: u16) -> String {
    (x..x + len)
        .filter_map(|cx| buf.get(cx, y).map(|cell| cell.char))
        .collect()
}

fn employee(name: &str) -> Row {
    Row::new([
        name.to_string(),
        "Accountant".to_string(),
        "Tokyo".to_string(),
        "33".to_string(),
        "$162,700".to_string(),
    ])
}

// ============================================================================
// Table Painting
// ============================================================================

#[test]
fn test_header_labels_are_painted() {
    let screen = ScreenTable::new();
    let buf = frame(&screen, &FormState::new());

    let layout = Layout::compute(0);
    assert!(line(&buf, MARGIN_X, layout.header_y, 10).starts_with("Name"));
    assert!(
        line(&buf, Layout::column_x(Column::Salary), layout.header_y, 10).starts_with("Salary")
    );
}

#[test]
fn test_rows_render_their_cells() {
    let mut screen = ScreenTable::new();
    screen.row_appended(&employee("Airi Satou"));
    let buf = frame(&screen, &FormState::new());

    let layout = Layout::compute(1);
    assert!(line(&buf, MARGIN_X, layout.body_y, 12).starts_with("Airi Satou"));
    assert!(
        line(&buf, Layout::column_x(Column::Salary), layout.body_y, 10).starts_with("$162,700")
    );
}

#[test]
fn test_active_row_is_highlighted() {
    let mut screen = ScreenTable::new();
    let airi = employee("Airi Satou");
    let bob = employee("Bob Stone");
    screen.row_appended(&airi);
    screen.row_appended(&bob);
    screen.selection_changed(None, bob.id());

    let buf = frame(&screen, &FormState::new());
    let layout = Layout::compute(2);

    let plain = buf.get(MARGIN_X, layout.body_y).unwrap();
    let active = buf.get(MARGIN_X, layout.body_y + 1).unwrap();
    assert_eq!(plain.bg, theme::BACKGROUND);
    assert_eq!(active.bg, theme::ROW_ACTIVE_BG);
}

#[test]
fn test_open_editor_uses_the_editor_background() {
    let mut screen = ScreenTable::new();
    let airi = employee("Airi Satou");
    screen.row_appended(&airi);
    screen.edit_opened(
        roster_lib::CellRef::new(airi.id(), Column::Salary),
        "$162,700",
    );

    let buf = frame(&screen, &FormState::new());
    let layout = Layout::compute(1);
    let x = Layout::column_x(Column::Salary);
    assert_eq!(buf.get(x, layout.body_y).unwrap().bg, theme::EDITOR_BG);
}

// ============================================================================
// Notifications
// ============================================================================

#[test]
fn test_notification_appears_top_right() {
    let mut screen = ScreenTable::new();
    screen.notification_shown(&Notification::success("Success", "New employee added!"));

    let buf = frame(&screen, &FormState::new());

    // Somewhere on the first notification line the title shows on a
    // success background.
    let found = (0..buf.width()).any(|x| {
        buf.get(x, 1)
            .is_some_and(|cell| cell.char == 'S' && cell.bg == theme::SUCCESS_BG)
    });
    assert!(found);
}
