//! Single-cell coordinates (`B12`, `$AA$19`).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::column::column_letter_of;
use crate::error::CoordError;
use crate::range::RANGE_RE;

static COORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\$?([A-Z]+)\$?([1-9][0-9]*)$").expect("coordinate pattern is valid")
});

/// Split a cell coordinate into its column letters and 1-based row.
///
/// `"AA19"` becomes `("AA", 19)`. Absolute markers are accepted and dropped.
/// Row 0, lower-case letters and trailing characters are rejected.
pub fn split_coordinate(coord: &str) -> Result<(String, usize), CoordError> {
    let invalid = || CoordError::InvalidCoordinate(coord.to_string());
    let caps = COORD_RE.captures(coord).ok_or_else(invalid)?;
    let row = caps[2].parse::<usize>().map_err(|_| invalid())?;
    Ok((caps[1].to_string(), row))
}

/// Rewrite a cell or range reference with `$` before every column group and
/// row number (`"A1:E6"` -> `"$A$1:$E$6"`).
///
/// Input that is not a cell or range reference comes back unchanged.
pub fn make_absolute(reference: &str) -> String {
    let Some(caps) = RANGE_RE.captures(reference) else {
        return reference.to_string();
    };
    match (caps.get(3), caps.get(4)) {
        (Some(col), Some(row)) => format!(
            "${}${}:${}${}",
            &caps[1],
            &caps[2],
            col.as_str(),
            row.as_str()
        ),
        _ => format!("${}${}", &caps[1], &caps[2]),
    }
}

/// Relative coordinate for a 1-based column and row (`(2, 7)` -> `"B7"`).
pub fn coordinate(col: usize, row: usize) -> String {
    format!("{}{}", column_letter_of(col), row)
}

/// Absolute coordinate for a 1-based column and row (`(2, 7)` -> `"$B$7"`).
pub fn absolute_coordinate(col: usize, row: usize) -> String {
    make_absolute(&coordinate(col, row))
}
