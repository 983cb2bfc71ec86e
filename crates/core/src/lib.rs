//! `sheetsort-core`: spreadsheet coordinate codec.
//!
//! Column letters, cell coordinates and range references. Pure functions over
//! strings and integers; no row data lives here.

pub mod column;
pub mod coord;
pub mod error;
pub mod range;

pub use column::{
    column_index_of, column_letter_of, column_range, ColumnTable, MAX_TABLE_COLUMN, UNKNOWN_COLUMN,
};
pub use coord::{absolute_coordinate, coordinate, make_absolute, split_coordinate};
pub use error::CoordError;
pub use range::{range_bounds, RangeBounds};
