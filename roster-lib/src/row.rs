use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Number of columns in the table. The column order is fixed.
pub const COLUMN_COUNT: usize = 5;

/// One of the five table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Position,
    Office,
    Age,
    Salary,
}

impl Column {
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Name,
        Column::Position,
        Column::Office,
        Column::Age,
        Column::Salary,
    ];

    pub fn index(self) -> usize {
        match self {
            Column::Name => 0,
            Column::Position => 1,
            Column::Office => 2,
            Column::Age => 3,
            Column::Salary => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Column> {
        Column::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Position => "Position",
            Column::Office => "Office",
            Column::Age => "Age",
            Column::Salary => "Salary",
        }
    }

    /// The salary column carries `$`-formatted amounts and gets
    /// reformatted on edit commit.
    pub fn is_currency(self) -> bool {
        matches!(self, Column::Salary)
    }
}

/// The fixed set of offices offered by the form's select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Office {
    #[default]
    Tokyo,
    Singapore,
    London,
    NewYork,
    Edinburgh,
    SanFrancisco,
}

impl Office {
    pub const ALL: [Office; 6] = [
        Office::Tokyo,
        Office::Singapore,
        Office::London,
        Office::NewYork,
        Office::Edinburgh,
        Office::SanFrancisco,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Office::Tokyo => "Tokyo",
            Office::Singapore => "Singapore",
            Office::London => "London",
            Office::NewYork => "New York",
            Office::Edinburgh => "Edinburgh",
            Office::SanFrancisco => "San Francisco",
        }
    }
}

impl fmt::Display for Office {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static NEXT_ROW_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque row identity, stable across reorders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl RowId {
    fn next() -> Self {
        RowId(NEXT_ROW_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// One table row: an identity plus the display text of its five cells.
///
/// Rows are built from typed, validated input, but cells are stored as
/// text because the edit session may write arbitrary text into any cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    id: RowId,
    cells: [String; COLUMN_COUNT],
}

impl Row {
    pub fn new(cells: [String; COLUMN_COUNT]) -> Self {
        Self {
            id: RowId::next(),
            cells,
        }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn cell(&self, column: Column) -> &str {
        &self.cells[column.index()]
    }

    pub fn set_cell(&mut self, column: Column, text: impl Into<String>) {
        self.cells[column.index()] = text.into();
    }

    pub fn cells(&self) -> &[String; COLUMN_COUNT] {
        &self.cells
    }
}

/// Names a single cell: a row identity plus a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row: RowId,
    pub column: Column,
}

impl CellRef {
    pub fn new(row: RowId, column: Column) -> Self {
        Self { row, column }
    }
}
