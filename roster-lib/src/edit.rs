use crate::currency;
use crate::row::CellRef;

/// Single-slot in-place edit state machine.
///
/// At most one cell edit is open at a time; a request to start a second
/// one is ignored, not queued. The machine cycles between idle and
/// editing for the lifetime of the widget.
#[derive(Debug, Default)]
pub struct EditSession {
    target: Option<CellRef>,
    original: String,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<CellRef> {
        self.target
    }

    /// The cell text captured when the session opened.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Open a session on a cell, capturing its current trimmed text.
    /// Returns false (leaving the open session untouched) if one is
    /// already in progress.
    pub fn begin(&mut self, cell: CellRef, current_text: &str) -> bool {
        if self.target.is_some() {
            log::debug!("[edit] ignoring begin on {cell:?}: session already open");
            return false;
        }
        self.target = Some(cell);
        self.original = current_text.trim().to_string();
        true
    }

    /// Close the session, resolving the committed text.
    ///
    /// Empty input falls back to the original value. On the currency
    /// column the input is stripped of formatting and redisplayed as
    /// `$` + grouped amount; input that fails the numeric parse also
    /// falls back to the original value. Returns the cell and its final
    /// text, or None when no session is open.
    pub fn commit(&mut self, input: &str) -> Option<(CellRef, String)> {
        let cell = self.target.take()?;
        let original = std::mem::take(&mut self.original);

        let trimmed = input.trim();
        let value = if trimmed.is_empty() {
            original
        } else if cell.column.is_currency() {
            match currency::parse_amount(trimmed) {
                Some(amount) => currency::display(amount),
                None => original,
            }
        } else {
            trimmed.to_string()
        };

        Some((cell, value))
    }
}
