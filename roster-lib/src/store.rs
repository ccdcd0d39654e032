use std::cmp::Ordering;

use crate::row::{Row, RowId};

/// The ordered sequence of rows backing the visible table.
///
/// Insertion order is the natural order; the store only ever changes by
/// appending a row or by a full reorder from the sort controller. Rows are
/// never removed.
#[derive(Debug, Default)]
pub struct RowStore {
    rows: Vec<Row>,
}

impl RowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row, returning its identity.
    pub fn push(&mut self, row: Row) -> RowId {
        let id = row.id();
        self.rows.push(row);
        id
    }

    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn get_mut(&mut self, id: RowId) -> Option<&mut Row> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Current row order as identities, for pushing to a view.
    pub fn order(&self) -> Vec<RowId> {
        self.rows.iter().map(Row::id).collect()
    }

    /// Reorder the whole store with a stable sort.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Row, &Row) -> Ordering,
    {
        self.rows.sort_by(compare);
    }
}
