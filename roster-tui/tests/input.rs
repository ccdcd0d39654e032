use roster_tui::event::{Key, Modifiers};
use roster_tui::input::{EditAction, TextField};

fn type_str(field: &mut TextField, text: &str) {
    for c in text.chars() {
        field.handle_key(Key::Char(c), Modifiers::default());
    }
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn test_typing_appends_at_cursor() {
    let mut field = TextField::new();
    type_str(&mut field, "Alice");
    assert_eq!(field.text(), "Alice");
    assert_eq!(field.cursor(), 5);
}

#[test]
fn test_insert_in_the_middle() {
    let mut field = TextField::with_text("Ace");
    field.handle_key(Key::Left, Modifiers::default());
    field.handle_key(Key::Left, Modifiers::default());
    type_str(&mut field, "li");
    assert_eq!(field.text(), "Alice");
}

#[test]
fn test_backspace_and_delete() {
    let mut field = TextField::with_text("Alice");

    assert_eq!(
        field.handle_key(Key::Backspace, Modifiers::default()),
        EditAction::Changed
    );
    assert_eq!(field.text(), "Alic");

    field.handle_key(Key::Home, Modifiers::default());
    assert_eq!(
        field.handle_key(Key::Delete, Modifiers::default()),
        EditAction::Changed
    );
    assert_eq!(field.text(), "lic");
}

#[test]
fn test_backspace_at_start_changes_nothing() {
    let mut field = TextField::with_text("Al");
    field.handle_key(Key::Home, Modifiers::default());
    assert_eq!(
        field.handle_key(Key::Backspace, Modifiers::default()),
        EditAction::Handled
    );
    assert_eq!(field.text(), "Al");
}

#[test]
fn test_cursor_stays_in_bounds() {
    let mut field = TextField::with_text("ab");
    field.handle_key(Key::Right, Modifiers::default());
    field.handle_key(Key::Right, Modifiers::default());
    assert_eq!(field.cursor(), 2);

    field.handle_key(Key::Home, Modifiers::default());
    field.handle_key(Key::Left, Modifiers::default());
    assert_eq!(field.cursor(), 0);
}

#[test]
fn test_multibyte_text_edits_by_character() {
    let mut field = TextField::with_text("héllo");
    field.handle_key(Key::Backspace, Modifiers::default());
    assert_eq!(field.text(), "héll");

    field.handle_key(Key::Home, Modifiers::default());
    field.handle_key(Key::Right, Modifiers::default());
    field.handle_key(Key::Delete, Modifiers::default());
    assert_eq!(field.text(), "hllo");
}

#[test]
fn test_enter_submits() {
    let mut field = TextField::with_text("done");
    assert_eq!(
        field.handle_key(Key::Enter, Modifiers::default()),
        EditAction::Submitted
    );
    assert_eq!(field.text(), "done");
}
