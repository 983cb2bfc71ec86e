//! Cell and block reads addressed by coordinate strings.

use sheetsort_core::{column_index_of, range_bounds, split_coordinate};

use crate::error::{EngineError, Result};
use crate::row::{describe, RowCells};

/// Text of the cell at `coord` (e.g. `"B3"`).
pub fn cell_at<'r, R: RowCells>(rows: &'r [R], coord: &str) -> Result<&'r str> {
    let (letters, row) = split_coordinate(coord)?;
    let column = column_index_of(&letters);
    let target = checked_row(rows, row, column, coord)?;
    Ok(target.value_at(column))
}

/// Cell text for every cell of `range`, row-major.
///
/// Every addressed cell must exist; a row that ends before the range's last
/// column is an error.
pub fn cell_range<'r, R: RowCells>(rows: &'r [R], range: &str) -> Result<Vec<Vec<&'r str>>> {
    let bounds = range_bounds(range)?;
    (bounds.min_row()..=bounds.max_row())
        .map(|row| -> Result<Vec<&'r str>> {
            let target = checked_row(rows, row, bounds.max_col(), range)?;
            Ok((bounds.min_col()..=bounds.max_col())
                .map(|col| target.value_at(col))
                .collect())
        })
        .collect()
}

/// Swap rows and columns of a block. Ragged input is cut to its shortest row.
pub fn transpose<T: Clone>(block: &[Vec<T>]) -> Vec<Vec<T>> {
    let cols = block.iter().map(Vec::len).min().unwrap_or(0);
    (0..cols)
        .map(|c| block.iter().map(|row| row[c].clone()).collect())
        .collect()
}

fn checked_row<'r, R: RowCells>(
    rows: &'r [R],
    row: usize,
    column: usize,
    reference: &str,
) -> Result<&'r R> {
    let target = row
        .checked_sub(1)
        .and_then(|i| rows.get(i))
        .ok_or(EngineError::RowOutOfRange {
            row,
            rows: rows.len(),
        })?;
    let cells = target.cell_count();
    if column == 0 || column > cells {
        return Err(EngineError::ColumnOutOfRange {
            title: reference.to_string(),
            column,
            cells,
            row: describe(target),
        });
    }
    Ok(target)
}
