use std::fs::File;
use std::io;
use std::time::{Duration, Instant};

use roster_lib::{CellRef, Row, TableWidget};
use roster_tui::buffer::Buffer;
use roster_tui::event::{self, ClickTracker, InputEvent, Key};
use roster_tui::form::{FieldId, FormAction, FormState};
use roster_tui::input::EditAction;
use roster_tui::layout::{Layout, Target};
use roster_tui::screen::ScreenTable;
use roster_tui::terminal::Terminal;
use roster_tui::draw;
use simplelog::{Config, LevelFilter, WriteLogger};

fn seed_rows() -> Vec<Row> {
    [
        ["Airi Satou", "Accountant", "Tokyo", "33", "$162,700"],
        ["Angelica Ramos", "Chief Executive Officer", "London", "47", "$1,200,000"],
        ["Ashton Cox", "Junior Technical Author", "San Francisco", "66", "$86,000"],
        ["Bradley Greer", "Software Engineer", "London", "41", "$132,000"],
        ["Brenden Wagner", "Software Engineer", "San Francisco", "28", "$206,850"],
        ["Brielle Williamson", "Integration Specialist", "New York", "61", "$372,000"],
    ]
    .into_iter()
    .map(|cells| Row::new(cells.map(String::from)))
    .collect()
}

fn commit_edit(widget: &mut TableWidget, screen: &mut ScreenTable) {
    if let Some(editor) = screen.take_editor() {
        widget.on_edit_committed(editor.field.text(), screen);
    }
}

fn submit_form(widget: &mut TableWidget, form: &mut FormState, screen: &mut ScreenTable) {
    if widget.submit(&form.values(), screen).is_ok() {
        form.clear();
    }
}

fn main() -> io::Result<()> {
    let log_file = File::create("roster-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut term = Terminal::new()?;
    let mut widget = TableWidget::new();
    let mut screen = ScreenTable::new();
    let mut form = FormState::new();
    let mut clicks = ClickTracker::new();

    for row in seed_rows() {
        widget.append_row(row, &mut screen);
    }

    loop {
        screen.sweep_notifications(Instant::now());

        let (width, height) = term.size()?;
        let layout = Layout::compute(screen.rows().len());
        let mut frame = Buffer::new(width, height);
        draw::draw(&screen, &form, widget.sort(), &layout, &mut frame);
        term.present(frame)?;

        // Short timeout so expired notifications disappear without
        // waiting for input.
        for raw in term.poll(Duration::from_millis(100))? {
            let Some(input) = event::translate(&raw) else {
                continue;
            };
            let layout = Layout::compute(screen.rows().len());

            match input {
                InputEvent::Key {
                    key: Key::Escape, ..
                } => return Ok(()),
                InputEvent::Key {
                    key: Key::Char('q'),
                    modifiers,
                } if modifiers.ctrl => return Ok(()),

                InputEvent::Key { key, modifiers } => {
                    if screen.editor().is_some() {
                        let action = screen
                            .editor_mut()
                            .map(|editor| editor.field.handle_key(key, modifiers));
                        if action == Some(EditAction::Submitted) {
                            // Enter exits through the same path as losing
                            // focus.
                            commit_edit(&mut widget, &mut screen);
                        }
                    } else if form.handle_key(key, modifiers) == FormAction::Submit {
                        submit_form(&mut widget, &mut form, &mut screen);
                    }
                }

                InputEvent::Click { x, y } => {
                    // A click outside the open editor is its focus loss.
                    if let Some(editor) = screen.editor() {
                        let inside = screen
                            .row_index(editor.cell.row)
                            .map(|index| layout.cell_rect(index, editor.cell.column))
                            .is_some_and(|rect| rect.contains(x, y));
                        if inside {
                            continue;
                        }
                        commit_edit(&mut widget, &mut screen);
                    }

                    let Some(target) = layout.hit_test(x, y) else {
                        continue;
                    };
                    let double = clicks.observe(target, Instant::now());
                    log::debug!("[input] click at ({x},{y}) -> {target:?} double={double}");

                    match target {
                        Target::Header(column) => {
                            widget.on_header_activated(column, &mut screen);
                        }
                        Target::Cell { row_index, column } => {
                            let Some(id) = screen.rows().get(row_index).map(|row| row.id) else {
                                continue;
                            };
                            widget.on_row_activated(id, &mut screen);
                            if double {
                                widget.on_cell_double_clicked(CellRef::new(id, column), &mut screen);
                            }
                        }
                        Target::Field(FieldId::Save) => {
                            submit_form(&mut widget, &mut form, &mut screen);
                        }
                        Target::Field(field) => form.focus(field),
                    }
                }

                InputEvent::Resize => {}
            }
        }
    }
}
