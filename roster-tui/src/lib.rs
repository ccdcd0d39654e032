pub mod buffer;
pub mod draw;
pub mod event;
pub mod form;
pub mod input;
pub mod layout;
pub mod screen;
pub mod terminal;
pub mod text;
pub mod theme;

pub use buffer::{Buffer, Cell, Rgb};
pub use event::{ClickTracker, InputEvent, Key, Modifiers};
pub use form::{FieldId, FormState};
pub use input::TextField;
pub use layout::{Layout, Rect, Target};
pub use screen::ScreenTable;
pub use terminal::Terminal;
