use roster_lib::{FormValues, Office};

use crate::event::{Key, Modifiers};
use crate::input::TextField;

/// The form's focusable fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Position,
    Office,
    Age,
    Salary,
    Save,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Position,
        FieldId::Office,
        FieldId::Age,
        FieldId::Salary,
        FieldId::Save,
    ];

    pub fn index(self) -> usize {
        match self {
            FieldId::Name => 0,
            FieldId::Position => 1,
            FieldId::Office => 2,
            FieldId::Age => 3,
            FieldId::Salary => 4,
            FieldId::Save => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name:",
            FieldId::Position => "Position:",
            FieldId::Office => "Office:",
            FieldId::Age => "Age:",
            FieldId::Salary => "Salary:",
            FieldId::Save => "",
        }
    }
}

/// What a key press did to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
}

/// The append-only "add employee" form: four text fields, an office
/// select cycling the fixed office list, and a save action.
#[derive(Debug)]
pub struct FormState {
    name: TextField,
    position: TextField,
    age: TextField,
    salary: TextField,
    office: usize,
    focused: FieldId,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: TextField::new(),
            position: TextField::new(),
            age: TextField::new(),
            salary: TextField::new(),
            office: 0,
            focused: FieldId::Name,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> FieldId {
        self.focused
    }

    pub fn focus(&mut self, field: FieldId) {
        self.focused = field;
    }

    /// Tab: move focus to the next field, wrapping.
    pub fn focus_next(&mut self) {
        let idx = self.focused.index();
        self.focused = FieldId::ALL[(idx + 1) % FieldId::ALL.len()];
    }

    /// Shift+Tab: move focus to the previous field, wrapping.
    pub fn focus_prev(&mut self) {
        let idx = self.focused.index();
        self.focused = FieldId::ALL[(idx + FieldId::ALL.len() - 1) % FieldId::ALL.len()];
    }

    pub fn office(&self) -> Office {
        Office::ALL[self.office]
    }

    pub fn cycle_office(&mut self, step: i32) {
        let len = Office::ALL.len() as i32;
        self.office = ((self.office as i32 + step).rem_euclid(len)) as usize;
    }

    pub fn field(&self, field: FieldId) -> Option<&TextField> {
        match field {
            FieldId::Name => Some(&self.name),
            FieldId::Position => Some(&self.position),
            FieldId::Age => Some(&self.age),
            FieldId::Salary => Some(&self.salary),
            FieldId::Office | FieldId::Save => None,
        }
    }

    fn field_mut(&mut self, field: FieldId) -> Option<&mut TextField> {
        match field {
            FieldId::Name => Some(&mut self.name),
            FieldId::Position => Some(&mut self.position),
            FieldId::Age => Some(&mut self.age),
            FieldId::Salary => Some(&mut self.salary),
            FieldId::Office | FieldId::Save => None,
        }
    }

    /// Snapshot of the current input for validation.
    pub fn values(&self) -> FormValues {
        FormValues {
            name: self.name.text().to_string(),
            position: self.position.text().to_string(),
            office: Some(self.office()),
            age: self.age.text().to_string(),
            salary: self.salary.text().to_string(),
        }
    }

    /// Reset every input to its default state (after a successful
    /// submission; failed submissions keep the contents).
    pub fn clear(&mut self) {
        self.name.clear();
        self.position.clear();
        self.age.clear();
        self.salary.clear();
        self.office = 0;
        self.focused = FieldId::Name;
    }

    /// Route a key press to the focused field. Enter anywhere submits,
    /// like the source form's submit button.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> FormAction {
        match key {
            Key::Tab => {
                self.focus_next();
                return FormAction::None;
            }
            Key::BackTab => {
                self.focus_prev();
                return FormAction::None;
            }
            Key::Enter => return FormAction::Submit,
            _ => {}
        }

        match self.focused {
            FieldId::Office => {
                match key {
                    Key::Left | Key::Up => self.cycle_office(-1),
                    Key::Right | Key::Down => self.cycle_office(1),
                    _ => {}
                }
                FormAction::None
            }
            FieldId::Save => {
                if key == Key::Char(' ') {
                    FormAction::Submit
                } else {
                    FormAction::None
                }
            }
            focused => {
                // Age and salary are numeric-entry fields.
                if let Key::Char(c) = key {
                    let numeric = matches!(focused, FieldId::Age | FieldId::Salary);
                    if numeric && !(c.is_ascii_digit() || c == '.' || c == '-') {
                        return FormAction::None;
                    }
                }
                if let Some(field) = self.field_mut(focused) {
                    field.handle_key(key, modifiers);
                }
                FormAction::None
            }
        }
    }
}
