//! Column and row bookkeeping for the sheet being written

use xmlss_core::{ColumnOptions, Error, Result, MAX_COLUMNS};

/// Unstyled columns skipped before an explicitly indexed column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnGap {
    /// Number of skipped columns (at least 1)
    pub skipped: u32,
}

impl ColumnGap {
    /// `ss:Span` of the filler column covering this gap
    pub fn filler_span(&self) -> Option<u32> {
        if self.skipped > 1 {
            Some(self.skipped - 1)
        } else {
            None
        }
    }
}

/// Layout counters for one worksheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetLayout {
    /// 1-based position of the last column emitted
    column_count: u32,
    /// No cell has been written into the open row yet
    row_empty: bool,
}

impl SheetLayout {
    /// Create counters for a fresh sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Last column position emitted so far
    pub fn column_count(&self) -> u32 {
        self.column_count
    }

    /// Account for one `<Column>` element
    ///
    /// Returns the gap a filler column must cover before it, if the column
    /// is explicitly indexed past the next free position. An index at or
    /// before the last emitted column is an overlap, and no column may
    /// reach past [`MAX_COLUMNS`]. The counters are untouched on error.
    pub fn place_column(&mut self, column: &ColumnOptions) -> Result<Option<ColumnGap>> {
        let first = match column.index {
            Some(0) => {
                return Err(Error::validation("column index is 1-based, got 0"));
            }
            Some(index) if index <= self.column_count => {
                return Err(Error::validation(format!(
                    "column index {} overlaps columns already defined (last is {})",
                    index, self.column_count
                )));
            }
            Some(index) => index,
            None => self.column_count.saturating_add(1),
        };

        let last = first
            .checked_add(column.extra_span().unwrap_or(0))
            .filter(|last| *last <= MAX_COLUMNS)
            .ok_or_else(|| {
                Error::validation(format!(
                    "column position out of range (columns are limited to {})",
                    MAX_COLUMNS
                ))
            })?;

        let skipped = first - self.column_count - 1;
        self.column_count = last;
        Ok((skipped > 0).then_some(ColumnGap { skipped }))
    }

    /// Account for the trailing column that ends the section
    pub fn close_columns(&mut self) {
        self.column_count = self.column_count.saturating_add(1);
    }

    /// A row was opened
    pub fn start_row(&mut self) {
        self.row_empty = true;
    }

    /// A cell was written into the open row
    pub fn mark_cell(&mut self) {
        self.row_empty = false;
    }

    /// Check if the open row still needs its placeholder cell
    pub fn row_is_empty(&self) -> bool {
        self.row_empty
    }
}
