//! Column letters <-> 1-based column indices.
//!
//! Column names are a bijective base-26 numeral: the digits `A..Z` stand for
//! `1..26` and there is no zero digit, so `Z` is 26 and `AA` is 27.
//!
//! Index 0 is reserved as the "unknown column" sentinel. It encodes to the
//! placeholder `"?"`, and any letter group that cannot be decoded maps back
//! to 0.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Highest column covered by the precomputed table (`ZZZ`).
pub const MAX_TABLE_COLUMN: usize = 18_278;

/// Placeholder name for the sentinel index 0.
pub const UNKNOWN_COLUMN: &str = "?";

static SHARED: Lazy<ColumnTable> = Lazy::new(ColumnTable::new);

/// Precomputed lookup tables for every one-, two- and three-letter column.
///
/// The table is immutable once built. Use [`ColumnTable::shared`] for the
/// process-wide instance, or build one explicitly and pass it by reference.
/// Columns past [`MAX_TABLE_COLUMN`] are computed on demand.
#[derive(Debug, Clone)]
pub struct ColumnTable {
    /// index -> name; slot 0 holds the placeholder
    names: Vec<String>,
    indices: FxHashMap<String, usize>,
}

impl Default for ColumnTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnTable {
    /// Build the tables for columns `1..=MAX_TABLE_COLUMN`.
    pub fn new() -> Self {
        let mut names = Vec::with_capacity(MAX_TABLE_COLUMN + 1);
        let mut indices = FxHashMap::default();
        indices.reserve(MAX_TABLE_COLUMN);

        names.push(UNKNOWN_COLUMN.to_string());
        for index in 1..=MAX_TABLE_COLUMN {
            let name = encode(index);
            indices.insert(name.clone(), index);
            names.push(name);
        }

        Self { names, indices }
    }

    /// The lazily built, process-wide table.
    pub fn shared() -> &'static ColumnTable {
        &SHARED
    }

    /// Column name for a 1-based index (`1 -> "A"`, `27 -> "AA"`).
    pub fn letter_of(&self, index: usize) -> Cow<'_, str> {
        match self.names.get(index) {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(encode(index)),
        }
    }

    /// 1-based index for a column name, or 0 when `letters` is not a valid
    /// upper-case column name.
    pub fn index_of(&self, letters: &str) -> usize {
        match self.indices.get(letters) {
            Some(&index) => index,
            None => decode(letters).unwrap_or(0),
        }
    }

    /// Number of precomputed columns.
    pub fn len(&self) -> usize {
        self.names.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Column name for a 1-based index, using the shared table.
pub fn column_letter_of(index: usize) -> String {
    ColumnTable::shared().letter_of(index).into_owned()
}

/// 1-based index of a column name, using the shared table. Returns 0 for
/// anything that is not a non-empty run of `A..Z`.
pub fn column_index_of(letters: &str) -> usize {
    ColumnTable::shared().index_of(letters)
}

/// Every column name from `start` through `end`, inclusive.
///
/// Empty when either name is invalid or `start` comes after `end`.
pub fn column_range(start: &str, end: &str) -> Vec<String> {
    let table = ColumnTable::shared();
    let first = table.index_of(start);
    let last = table.index_of(end);
    if first == 0 || last == 0 || first > last {
        return Vec::new();
    }
    (first..=last)
        .map(|index| table.letter_of(index).into_owned())
        .collect()
}

fn encode(index: usize) -> String {
    if index == 0 {
        return UNKNOWN_COLUMN.to_string();
    }
    let mut n = index;
    let mut digits = Vec::new();
    while n > 0 {
        // Subtract before dividing: there is no zero digit.
        let rem = (n - 1) % 26;
        digits.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    digits.iter().rev().map(|&b| char::from(b)).collect()
}

fn decode(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    letters.bytes().try_fold(0usize, |acc, b| {
        if !b.is_ascii_uppercase() {
            return None;
        }
        acc.checked_mul(26)?.checked_add((b - b'A') as usize + 1)
    })
}
