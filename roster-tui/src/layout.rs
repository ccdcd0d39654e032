use roster_lib::{Column, COLUMN_COUNT};

use crate::form::FieldId;

/// Left edge of the table and the form.
pub const MARGIN_X: u16 = 2;
/// Row of the header cells.
pub const HEADER_Y: u16 = 1;

/// Column display widths, including one trailing space of padding.
pub const COLUMN_WIDTHS: [u16; COLUMN_COUNT] = [16, 20, 15, 6, 12];

pub const LABEL_WIDTH: u16 = 10;
pub const FIELD_WIDTH: u16 = 26;
pub const SAVE_LABEL: &str = "[ Save to table ]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// What an (x, y) screen position maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Header(Column),
    Cell { row_index: usize, column: Column },
    Field(FieldId),
}

/// Fixed screen geometry for one frame. Only the body row count varies,
/// which shifts the form down as rows are added.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub header_y: u16,
    pub body_y: u16,
    pub row_count: usize,
    pub form_y: u16,
}

impl Layout {
    pub fn compute(row_count: usize) -> Self {
        let body_y = HEADER_Y + 2; // header + separator line
        Self {
            header_y: HEADER_Y,
            body_y,
            row_count,
            form_y: body_y + row_count as u16 + 1,
        }
    }

    /// Left edge of a column.
    pub fn column_x(column: Column) -> u16 {
        let mut x = MARGIN_X;
        for c in Column::ALL.iter().take(column.index()) {
            x += COLUMN_WIDTHS[c.index()];
        }
        x
    }

    pub fn column_width(column: Column) -> u16 {
        COLUMN_WIDTHS[column.index()]
    }

    /// Total table width.
    pub fn table_width() -> u16 {
        COLUMN_WIDTHS.iter().sum()
    }

    pub fn cell_rect(&self, row_index: usize, column: Column) -> Rect {
        Rect::new(
            Self::column_x(column),
            self.body_y + row_index as u16,
            Self::column_width(column),
            1,
        )
    }

    /// Screen rectangle of a form field (its input area, not the label).
    pub fn field_rect(&self, field: FieldId) -> Rect {
        match field {
            FieldId::Save => Rect::new(
                MARGIN_X + LABEL_WIDTH,
                self.form_y + 6,
                SAVE_LABEL.len() as u16,
                1,
            ),
            _ => Rect::new(
                MARGIN_X + LABEL_WIDTH,
                self.form_y + field.index() as u16,
                FIELD_WIDTH,
                1,
            ),
        }
    }

    fn column_at(x: u16) -> Option<Column> {
        let mut left = MARGIN_X;
        for column in Column::ALL {
            let right = left + Self::column_width(column);
            if x >= left && x < right {
                return Some(column);
            }
            left = right;
        }
        None
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<Target> {
        if y == self.header_y {
            return Self::column_at(x).map(Target::Header);
        }

        if y >= self.body_y {
            let row_index = (y - self.body_y) as usize;
            if row_index < self.row_count {
                return Self::column_at(x).map(|column| Target::Cell { row_index, column });
            }
        }

        for field in FieldId::ALL {
            if self.field_rect(field).contains(x, y) {
                return Some(Target::Field(field));
            }
        }

        None
    }
}
