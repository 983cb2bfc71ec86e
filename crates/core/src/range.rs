//! Cell and range references resolved to integer bounds.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::column::{column_index_of, column_letter_of};
use crate::error::CoordError;

pub(crate) static RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\$?([A-Z]+)\$?([1-9][0-9]*)(?::\$?([A-Z]+)\$?([1-9][0-9]*))?$")
        .expect("range pattern is valid")
});

/// Inclusive rectangular bounds, 1-based on both axes.
///
/// Always normalized so that `min_col <= max_col` and `min_row <= max_row`,
/// with every bound at least 1. Deserialized bounds are normalized the same
/// way; a zero bound is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct RangeBounds {
    min_col: usize,
    min_row: usize,
    max_col: usize,
    max_row: usize,
}

/// Wire shape of [`RangeBounds`] before normalization.
#[derive(Deserialize)]
struct RawBounds {
    min_col: usize,
    min_row: usize,
    max_col: usize,
    max_row: usize,
}

impl TryFrom<RawBounds> for RangeBounds {
    type Error = CoordError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        let bounds = [raw.min_col, raw.min_row, raw.max_col, raw.max_row];
        if bounds.contains(&0) {
            return Err(CoordError::InvalidRange(format!("{bounds:?}")));
        }
        Ok(Self::new(raw.min_col, raw.min_row, raw.max_col, raw.max_row))
    }
}

impl RangeBounds {
    /// Bounds spanning two corners given in any order. A zero bound is
    /// raised to 1.
    pub fn new(col_a: usize, row_a: usize, col_b: usize, row_b: usize) -> Self {
        let (col_a, col_b) = (col_a.max(1), col_b.max(1));
        let (row_a, row_b) = (row_a.max(1), row_b.max(1));
        Self {
            min_col: col_a.min(col_b),
            min_row: row_a.min(row_b),
            max_col: col_a.max(col_b),
            max_row: row_a.max(row_b),
        }
    }

    pub fn min_col(&self) -> usize {
        self.min_col
    }

    pub fn min_row(&self) -> usize {
        self.min_row
    }

    pub fn max_col(&self) -> usize {
        self.max_col
    }

    pub fn max_row(&self) -> usize {
        self.max_row
    }

    /// As a `(min_col, min_row, max_col, max_row)` tuple.
    pub fn as_tuple(&self) -> (usize, usize, usize, usize) {
        (self.min_col, self.min_row, self.max_col, self.max_row)
    }

    pub fn width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    pub fn height(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    pub fn is_single_cell(&self) -> bool {
        self.min_col == self.max_col && self.min_row == self.max_row
    }

    pub fn contains(&self, col: usize, row: usize) -> bool {
        col >= self.min_col && col <= self.max_col && row >= self.min_row && row <= self.max_row
    }
}

impl fmt::Display for RangeBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letter_of(self.min_col), self.min_row)?;
        if !self.is_single_cell() {
            write!(f, ":{}{}", column_letter_of(self.max_col), self.max_row)?;
        }
        Ok(())
    }
}

impl FromStr for RangeBounds {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        range_bounds(s)
    }
}

/// Resolve a cell (`"B3"`) or range (`"C5:G20"`, `"$A$1:$E$6"`) reference.
///
/// A single cell resolves to a 1x1 range. Row 0, a missing column group,
/// trailing characters or numbers too large to represent are errors.
pub fn range_bounds(range: &str) -> Result<RangeBounds, CoordError> {
    let invalid = || CoordError::InvalidRange(range.to_string());
    let caps = RANGE_RE.captures(range).ok_or_else(invalid)?;

    let col = |letters: &str| match column_index_of(letters) {
        0 => Err(invalid()),
        index => Ok(index),
    };
    let row = |digits: &str| digits.parse::<usize>().map_err(|_| invalid());

    let min_col = col(&caps[1])?;
    let min_row = row(&caps[2])?;
    match (caps.get(3), caps.get(4)) {
        (Some(max_col), Some(max_row)) => Ok(RangeBounds::new(
            min_col,
            min_row,
            col(max_col.as_str())?,
            row(max_row.as_str())?,
        )),
        _ => Ok(RangeBounds::new(min_col, min_row, min_col, min_row)),
    }
}
