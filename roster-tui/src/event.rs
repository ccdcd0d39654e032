use std::time::{Duration, Instant};

use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseButton, MouseEventKind};

/// Two clicks on the same target within this window count as a
/// double-click.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// Input after translation from crossterm. Double-clicks are detected
/// separately by [`ClickTracker`] because the terminal only reports
/// single presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key { key: Key, modifiers: Modifiers },
    Click { x: u16, y: u16 },
    Resize,
}

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Other,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

/// Translate one crossterm event. Key repeats/releases and mouse
/// events other than a left press are dropped.
pub fn translate(raw: &CrosstermEvent) -> Option<InputEvent> {
    match raw {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(InputEvent::Key {
            key: key.code.into(),
            modifiers: key.modifiers.into(),
        }),
        CrosstermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Click {
                x: mouse.column,
                y: mouse.row,
            }),
            _ => None,
        },
        CrosstermEvent::Resize(..) => Some(InputEvent::Resize),
        _ => None,
    }
}

/// Turns consecutive clicks on the same target into double-clicks.
///
/// The slot resets once a double-click fires, so a third click starts
/// over as a single click.
#[derive(Debug, Default)]
pub struct ClickTracker<T> {
    last: Option<(T, Instant)>,
}

impl<T: PartialEq> ClickTracker<T> {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Record a click on `target`; returns true when it completes a
    /// double-click.
    pub fn observe(&mut self, target: T, now: Instant) -> bool {
        let double = match self.last.take() {
            Some((prev, at)) => {
                prev == target && now.duration_since(at) <= DOUBLE_CLICK_WINDOW
            }
            None => false,
        };
        if !double {
            self.last = Some((target, now));
        }
        double
    }
}
