//! Fixed palette for the widget. One dark scheme, no variables.

use crate::buffer::Rgb;

pub const BACKGROUND: Rgb = Rgb::new(24, 26, 32);
pub const TEXT: Rgb = Rgb::new(220, 222, 228);
pub const MUTED: Rgb = Rgb::new(130, 135, 150);

pub const HEADER_BG: Rgb = Rgb::new(45, 50, 65);
pub const HEADER_TEXT: Rgb = Rgb::new(240, 242, 248);

pub const ROW_ACTIVE_BG: Rgb = Rgb::new(55, 75, 110);
pub const ROW_ACTIVE_TEXT: Rgb = Rgb::new(245, 247, 252);

pub const FIELD_BG: Rgb = Rgb::new(38, 41, 50);
pub const FIELD_FOCUSED_BG: Rgb = Rgb::new(52, 58, 74);
pub const EDITOR_BG: Rgb = Rgb::new(70, 62, 30);

pub const SUCCESS_BG: Rgb = Rgb::new(28, 92, 48);
pub const ERROR_BG: Rgb = Rgb::new(120, 38, 38);
pub const NOTIFICATION_TEXT: Rgb = Rgb::new(248, 248, 248);
