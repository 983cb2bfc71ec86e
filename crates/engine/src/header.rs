//! Column lookup by header title.
//!
//! A [`HeaderIndex`] is built once from a header row. Every non-empty title
//! at 1-based column `p` is registered twice: `title -> p` and
//! `-title -> -p`. The negated alias lets callers request a descending sort
//! key by name alone.

use rustc_hash::FxHashMap;

use crate::error::{EngineError, Result};
use crate::row::{describe, RowCells};

/// Prefix that turns a title into its descending alias.
pub const DESCENDING_PREFIX: char = '-';

/// Title -> signed 1-based column index for one header row.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    indices: FxHashMap<String, isize>,
    /// Non-empty titles in column order
    titles: Vec<String>,
}

impl HeaderIndex {
    /// Index the titles of `header`. Empty cells are skipped. When a title
    /// or its descending alias collides with an earlier entry, the
    /// right-most column wins: in `["-a", "a"]`, `"-a"` resolves to `-2`.
    pub fn build<R: RowCells + ?Sized>(header: &R) -> Self {
        let mut indices = FxHashMap::default();
        let mut titles = Vec::new();

        for position in 1..=header.cell_count() {
            let title = header.value_at(position);
            if title.is_empty() {
                continue;
            }
            let index = position as isize;
            let alias = format!("{DESCENDING_PREFIX}{title}");
            for (key, value) in [(title.to_string(), index), (alias, -index)] {
                if let Some(previous) = indices.insert(key.clone(), value) {
                    log::warn!(
                        "header key {key:?} at column {} replaced by column {position}",
                        previous.unsigned_abs()
                    );
                }
            }
            titles.push(title.to_string());
        }

        log::trace!("indexed {} header title(s)", titles.len());
        Self { indices, titles }
    }

    /// Signed index for `title`: positive for a plain title, negative for a
    /// `-`-prefixed one.
    pub fn resolve(&self, title: &str) -> Result<isize> {
        self.indices
            .get(title)
            .copied()
            .ok_or_else(|| EngineError::UnknownHeader {
                title: title.to_string(),
                known: self.describe_known(),
            })
    }

    /// Resolve every title, failing on the first unknown one.
    pub fn resolve_many<I, S>(&self, titles: I) -> Result<Vec<isize>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        titles
            .into_iter()
            .map(|title| self.resolve(title.as_ref()))
            .collect()
    }

    /// 1-based column of `title`, checked against the cells actually present
    /// in `row`. A `-`-prefixed title resolves to the same column.
    pub fn index_in_row<R: RowCells + ?Sized>(&self, row: &R, title: &str) -> Result<usize> {
        let column = self.resolve(title)?.unsigned_abs();
        let cells = row.cell_count();
        if column <= cells {
            Ok(column)
        } else {
            Err(EngineError::ColumnOutOfRange {
                title: title.to_string(),
                column,
                cells,
                row: describe(row),
            })
        }
    }

    /// Text of the cell under `title` in `row`.
    pub fn text<'r, R: RowCells + ?Sized>(&self, row: &'r R, title: &str) -> Result<&'r str> {
        let column = self.index_in_row(row, title)?;
        Ok(row.cell(column - 1).unwrap_or(""))
    }

    /// Number of non-empty header cells.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Non-empty titles in column order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }

    /// Registered entries in column order, plain title before its alias.
    fn describe_known(&self) -> String {
        let mut entries: Vec<(&String, &isize)> = self.indices.iter().collect();
        entries.sort_by_key(|&(title, index)| (index.unsigned_abs(), *index < 0, title.as_str()));
        let body = entries
            .iter()
            .map(|(title, index)| format!("{title:?}: {index}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{{body}}}")
    }
}
