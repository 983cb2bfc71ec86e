//! Read access to a row of cells.
//!
//! The engine never owns row storage. Anything that can report its cell
//! count and hand out cell text by position can be sorted and queried.

/// One row of cell values. Rows may differ in length: trailing empty cells
/// are often simply absent.
pub trait RowCells {
    /// Number of cells physically present in this row.
    fn cell_count(&self) -> usize;

    /// Text of the cell at a 0-based position, `None` past the end.
    fn cell(&self, index: usize) -> Option<&str>;

    /// Text at a 1-based column, or `""` when the row is shorter.
    fn value_at(&self, column: usize) -> &str {
        match column {
            0 => "",
            _ => self.cell(column - 1).unwrap_or(""),
        }
    }

    /// Every cell value, in order.
    fn to_strings(&self) -> Vec<String> {
        (0..self.cell_count())
            .map(|i| self.cell(i).unwrap_or("").to_string())
            .collect()
    }
}

impl<S: AsRef<str>> RowCells for [S] {
    fn cell_count(&self) -> usize {
        self.len()
    }

    fn cell(&self, index: usize) -> Option<&str> {
        self.get(index).map(|s| s.as_ref())
    }
}

impl<S: AsRef<str>> RowCells for Vec<S> {
    fn cell_count(&self) -> usize {
        self.len()
    }

    fn cell(&self, index: usize) -> Option<&str> {
        self.get(index).map(|s| s.as_ref())
    }
}

/// Row contents joined with `|`, for diagnostics.
pub(crate) fn describe<R: RowCells + ?Sized>(row: &R) -> String {
    row.to_strings().join("|")
}
