use roster_lib::{Column, NotificationKind, SortDirection, SortState};

use crate::buffer::{Buffer, Cell, Rgb};
use crate::form::{FieldId, FormState};
use crate::layout::{Layout, FIELD_WIDTH, LABEL_WIDTH, MARGIN_X, SAVE_LABEL};
use crate::screen::ScreenTable;
use crate::text::{char_width, display_width, truncate_to_width};
use crate::theme;

/// Paint the whole frame: table, form, notification stack.
pub fn draw(
    screen: &ScreenTable,
    form: &FormState,
    sort: SortState,
    layout: &Layout,
    buf: &mut Buffer,
) {
    draw_table(screen, sort, layout, buf);
    draw_form(form, layout, buf);
    draw_notifications(screen, buf);
    draw_hint(buf);
}

fn draw_table(screen: &ScreenTable, sort: SortState, layout: &Layout, buf: &mut Buffer) {
    for column in Column::ALL {
        let x = Layout::column_x(column);
        let width = Layout::column_width(column);
        let mut label = column.label().to_string();
        if sort.column() == Some(column) {
            label.push(match sort.direction() {
                SortDirection::Ascending => '▲',
                SortDirection::Descending => '▼',
            });
        }
        put_str(
            buf,
            x,
            layout.header_y,
            &label,
            theme::HEADER_TEXT,
            theme::HEADER_BG,
            true,
            width,
        );
    }

    let rule = "─".repeat(Layout::table_width() as usize);
    put_str(
        buf,
        MARGIN_X,
        layout.header_y + 1,
        &rule,
        theme::MUTED,
        theme::BACKGROUND,
        false,
        Layout::table_width(),
    );

    for (index, row) in screen.rows().iter().enumerate() {
        let y = layout.body_y + index as u16;
        let is_active = screen.active() == Some(row.id);
        let (fg, bg) = if is_active {
            (theme::ROW_ACTIVE_TEXT, theme::ROW_ACTIVE_BG)
        } else {
            (theme::TEXT, theme::BACKGROUND)
        };

        for column in Column::ALL {
            let x = Layout::column_x(column);
            let width = Layout::column_width(column);

            let editing_here = screen
                .editor()
                .is_some_and(|e| e.cell.row == row.id && e.cell.column == column);
            if editing_here {
                if let Some(editor) = screen.editor() {
                    draw_input(
                        buf,
                        x,
                        y,
                        width,
                        editor.field.text(),
                        Some(editor.field.cursor()),
                        theme::TEXT,
                        theme::EDITOR_BG,
                    );
                }
            } else {
                put_str(buf, x, y, &row.cells[column.index()], fg, bg, false, width);
            }
        }
    }
}

fn draw_form(form: &FormState, layout: &Layout, buf: &mut Buffer) {
    for field in FieldId::ALL {
        let rect = layout.field_rect(field);
        let focused = form.focused() == field;

        if field == FieldId::Save {
            let (fg, bg) = if focused {
                (theme::HEADER_TEXT, theme::FIELD_FOCUSED_BG)
            } else {
                (theme::TEXT, theme::FIELD_BG)
            };
            put_str(buf, rect.x, rect.y, SAVE_LABEL, fg, bg, focused, rect.width);
            continue;
        }

        put_str(
            buf,
            MARGIN_X,
            rect.y,
            field.label(),
            theme::MUTED,
            theme::BACKGROUND,
            false,
            LABEL_WIDTH,
        );

        let bg = if focused {
            theme::FIELD_FOCUSED_BG
        } else {
            theme::FIELD_BG
        };

        if field == FieldId::Office {
            let value = format!("◂ {} ▸", form.office());
            put_str(buf, rect.x, rect.y, &value, theme::TEXT, bg, false, FIELD_WIDTH);
        } else if let Some(input) = form.field(field) {
            let cursor = focused.then(|| input.cursor());
            draw_input(
                buf,
                rect.x,
                rect.y,
                FIELD_WIDTH,
                input.text(),
                cursor,
                theme::TEXT,
                bg,
            );
        }
    }
}

fn draw_notifications(screen: &ScreenTable, buf: &mut Buffer) {
    let mut y = 1;
    for active in screen.notifications() {
        let n = &active.notification;
        let bg = match n.kind {
            NotificationKind::Success => theme::SUCCESS_BG,
            NotificationKind::Error => theme::ERROR_BG,
        };

        let width = (display_width(&n.title).max(display_width(&n.message)) + 2).min(40) as u16;
        let x = buf.width().saturating_sub(width + 1);

        let title = format!(" {}", n.title);
        let message = format!(" {}", n.message);
        put_str(buf, x, y, &title, theme::NOTIFICATION_TEXT, bg, true, width);
        put_str(buf, x, y + 1, &message, theme::NOTIFICATION_TEXT, bg, false, width);

        y += 3;
    }
}

fn draw_hint(buf: &mut Buffer) {
    let hint = "click header: sort · click row: select · double-click cell: edit · Esc: quit";
    let y = buf.height().saturating_sub(1);
    let width = buf.width().saturating_sub(MARGIN_X);
    put_str(buf, MARGIN_X, y, hint, theme::MUTED, theme::BACKGROUND, false, width);
}

/// Draw a single-line input's visible text and cursor.
fn draw_input(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    width: u16,
    text: &str,
    cursor: Option<usize>,
    fg: Rgb,
    bg: Rgb,
) {
    // Keep the cursor in view by dropping leading characters when the
    // text outgrows the field.
    let visible_budget = width.saturating_sub(1) as usize;
    let cursor_pos = cursor.unwrap_or(0).min(text.chars().count());
    let skip = cursor_pos.saturating_sub(visible_budget);
    let visible: String = text.chars().skip(skip).collect();

    put_str(buf, x, y, &visible, fg, bg, false, width);

    if let Some(pos) = cursor {
        let offset: usize = text
            .chars()
            .skip(skip)
            .take(pos - skip)
            .map(char_width)
            .sum();
        if (offset as u16) < width {
            if let Some(cell) = buf.get_mut(x + offset as u16, y) {
                // Block cursor: swap the cell's colors.
                let cell_fg = cell.fg;
                cell.fg = cell.bg;
                cell.bg = cell_fg;
            }
        }
    }
}

/// Write `text` starting at (x, y), truncated to `max_width` columns and
/// padded with the background the rest of the way.
fn put_str(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    text: &str,
    fg: Rgb,
    bg: Rgb,
    bold: bool,
    max_width: u16,
) {
    let text = truncate_to_width(text, max_width as usize);
    let mut cx = x;

    for ch in text.chars() {
        let w = char_width(ch).max(1) as u16;
        buf.set(
            cx,
            y,
            Cell {
                char: ch,
                fg,
                bg,
                bold,
                wide_continuation: false,
            },
        );
        for i in 1..w {
            buf.set(
                cx + i,
                y,
                Cell {
                    char: ' ',
                    fg,
                    bg,
                    bold,
                    wide_continuation: true,
                },
            );
        }
        cx += w;
    }

    while cx < x + max_width {
        buf.set(
            cx,
            y,
            Cell {
                char: ' ',
                fg,
                bg,
                bold,
                wide_continuation: false,
            },
        );
        cx += 1;
    }
}
