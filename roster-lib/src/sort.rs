use std::cmp::Ordering;

use crate::currency;
use crate::row::Column;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Adjust an ascending ordering for this direction.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Which column the table is sorted by, and which way.
///
/// Reset on every header activation: the same column flips direction, a
/// new column starts ascending.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortState {
    column: Option<Column>,
    direction: SortDirection,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(&self) -> Option<Column> {
        self.column
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Record a header activation and return the direction to sort with.
    pub fn activate(&mut self, column: Column) -> SortDirection {
        if self.column == Some(column) {
            self.direction = self.direction.flip();
        } else {
            self.column = Some(column);
            self.direction = SortDirection::Ascending;
        }
        self.direction
    }
}

/// The comparison key extracted from one cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellKey {
    Number(f64),
    Text(String),
}

/// Extract the comparison key for a cell: trimmed text, stripped of
/// currency formatting and parsed as a number when the whole string is
/// one, otherwise the trimmed text itself.
pub fn sort_key(text: &str) -> CellKey {
    let trimmed = text.trim();
    match currency::parse_amount(trimmed) {
        Some(value) => CellKey::Number(value),
        None => CellKey::Text(trimmed.to_string()),
    }
}

/// Compare two cells in ascending order. Numeric when both cells parse
/// as numbers; otherwise the raw trimmed strings are compared
/// case-insensitively. The same rule applies to every pair within one
/// sort pass.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    let (ta, tb) = (a.trim(), b.trim());
    match (sort_key(ta), sort_key(tb)) {
        (CellKey::Number(x), CellKey::Number(y)) => x.total_cmp(&y),
        _ => caseless_cmp(ta, tb),
    }
}

fn caseless_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}
