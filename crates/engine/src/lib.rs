//! `sheetsort-engine`: header lookup and multi-key row sorting.
//!
//! Operates on caller-owned rows through [`RowCells`]. The only file access
//! is [`SortProfile::load`].

pub mod error;
pub mod grid;
pub mod header;
pub mod natural;
pub mod profile;
pub mod row;
pub mod sort;

pub use error::{EngineError, Result};
pub use grid::{cell_at, cell_range, transpose};
pub use header::{HeaderIndex, DESCENDING_PREFIX};
pub use natural::{natural_cmp, strip_currency};
pub use profile::SortProfile;
pub use row::RowCells;
pub use sort::{
    compare_rows, decode_keys, sort_permutation, sort_rows, sort_rows_by_title, SortDirection,
    SortKey,
};
