//! Multi-key row sort.
//!
//! Sort keys arrive as signed 1-based column indices: `3` sorts column C
//! ascending, `-2` sorts column B descending. They are decoded into
//! [`SortKey`]s at entry and compared with [`natural_cmp`], first key major.
//!
//! Invariants:
//! - only rows inside the window move; rows outside are never read
//! - rows are reordered by swapping, never modified
//! - stable: rows that tie on every key keep their relative order

use std::cmp::Ordering;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::header::HeaderIndex;
use crate::natural::natural_cmp;
use crate::row::RowCells;

/// Runs at or below this length are insertion sorted.
const INSERTION_THRESHOLD: usize = 16;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One decoded sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// 1-based column
    pub column: usize,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn ascending(column: usize) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: usize) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }

    /// Decode a signed index: positive is ascending, negative descending.
    /// Zero names no column and yields `None`.
    pub fn from_signed(signed: isize) -> Option<Self> {
        match signed.cmp(&0) {
            Ordering::Greater => Some(Self::ascending(signed.unsigned_abs())),
            Ordering::Less => Some(Self::descending(signed.unsigned_abs())),
            Ordering::Equal => None,
        }
    }

    /// Encode back into the signed form.
    pub fn to_signed(&self) -> isize {
        let column = self.column as isize;
        match self.direction {
            SortDirection::Ascending => column,
            SortDirection::Descending => -column,
        }
    }

    /// Compare two rows on this key alone. Missing cells read as `""`.
    pub fn compare<R: RowCells + ?Sized>(&self, p: &R, q: &R) -> Ordering {
        let ord = natural_cmp(p.value_at(self.column), q.value_at(self.column));
        match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Decode signed indices, dropping zeros (a zero key ties every pair).
pub fn decode_keys(signed: &[isize]) -> Vec<SortKey> {
    signed
        .iter()
        .filter_map(|&s| {
            let key = SortKey::from_signed(s);
            if key.is_none() {
                log::warn!("ignoring sort key 0: columns are 1-based");
            }
            key
        })
        .collect()
}

/// Cascade through `keys`: the first key that tells the rows apart decides.
pub fn compare_rows<R: RowCells + ?Sized>(p: &R, q: &R, keys: &[SortKey]) -> Ordering {
    for key in keys {
        let ord = key.compare(p, q);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Resolve an inclusive 1-based window to 0-based positions.
///
/// `start` below 1 counts as 1. A negative `end`, or one past the last row,
/// means "through the last row". Returns `None` for an empty window.
fn window(len: usize, start: usize, end: isize) -> Option<Range<usize>> {
    let first = start.max(1);
    let last = match usize::try_from(end) {
        Ok(end) => end.min(len),
        Err(_) => len,
    };
    (first <= last).then(|| first - 1..last)
}

/// The order `sort_rows` would produce, without moving anything.
///
/// Entry `k` is the current position of the row that belongs at position
/// `k`. Positions outside the window map to themselves.
pub fn sort_permutation<R: RowCells>(
    rows: &[R],
    start: usize,
    end: isize,
    signed_keys: &[isize],
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    let Some(span) = window(rows.len(), start, end) else {
        return order;
    };
    let keys = decode_keys(signed_keys);
    log::debug!(
        "sorting rows {}..={} of {} by {} key(s)",
        span.start + 1,
        span.end,
        rows.len(),
        keys.len()
    );
    if keys.is_empty() {
        return order;
    }

    stable_sort_by(&mut order[span], &mut |a: &usize, b: &usize| {
        compare_rows(&rows[*a], &rows[*b], &keys)
    });
    order
}

/// Sort `rows[start..=end]` (1-based, inclusive) by signed column indices.
///
/// `end = -1` sorts through the last row. Rows outside the window are left
/// where they are.
pub fn sort_rows<R: RowCells>(rows: &mut [R], start: usize, end: isize, signed_keys: &[isize]) {
    let order = sort_permutation(rows, start, end, signed_keys);
    apply_permutation(rows, order);
}

/// Sort by header titles. A title prefixed with `-` sorts descending.
///
/// Fails without touching `rows` if any title is unknown.
pub fn sort_rows_by_title<R, S>(
    rows: &mut [R],
    start: usize,
    end: isize,
    header: &HeaderIndex,
    titles: &[S],
) -> Result<()>
where
    R: RowCells,
    S: AsRef<str>,
{
    let signed = header.resolve_many(titles)?;
    sort_rows(rows, start, end, &signed);
    Ok(())
}

/// Reorder `items` so that `items[k]` becomes the old `items[order[k]]`,
/// by following permutation cycles with swaps.
fn apply_permutation<T>(items: &mut [T], mut order: Vec<usize>) {
    for i in 0..items.len() {
        let mut current = i;
        loop {
            let next = order[current];
            order[current] = current;
            if next == i || next == current {
                break;
            }
            items.swap(current, next);
            current = next;
        }
    }
}

/// Stable merge sort.
///
/// The std sorts may panic when the comparator is not a total order, and the
/// numeral/text fallback in `natural_cmp` is not one. This always terminates.
fn stable_sort_by<T, F>(items: &mut [T], cmp: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut buf = items.to_vec();
    merge_sort(items, &mut buf, cmp);
}

fn merge_sort<T, F>(items: &mut [T], buf: &mut [T], cmp: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = items.len();
    if n <= INSERTION_THRESHOLD {
        insertion_sort(items, cmp);
        return;
    }

    let mid = n / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        let (left_buf, right_buf) = buf.split_at_mut(mid);
        merge_sort(left, left_buf, cmp);
        merge_sort(right, right_buf, cmp);
    }
    if cmp(&items[mid - 1], &items[mid]) != Ordering::Greater {
        return;
    }

    buf.copy_from_slice(items);
    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < mid && j < n {
        // Take from the right only when strictly smaller.
        if cmp(&buf[j], &buf[i]) == Ordering::Less {
            items[k] = buf[j];
            j += 1;
        } else {
            items[k] = buf[i];
            i += 1;
        }
        k += 1;
    }
    items[k..k + (mid - i)].copy_from_slice(&buf[i..mid]);
    // Anything left on the right is already in place.
}

fn insertion_sort<T, F>(items: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&'static str]]) -> Vec<Vec<&'static str>> {
        data.iter().map(|r| r.to_vec()).collect()
    }

    fn column(rows: &[Vec<&str>], col: usize) -> Vec<String> {
        rows.iter().map(|r| r.value_at(col).to_string()).collect()
    }

    #[test]
    fn test_sort_key_sign_round_trip() {
        assert_eq!(SortKey::from_signed(3), Some(SortKey::ascending(3)));
        assert_eq!(SortKey::from_signed(-2), Some(SortKey::descending(2)));
        assert_eq!(SortKey::from_signed(0), None);
        assert_eq!(SortKey::descending(7).to_signed(), -7);
        assert_eq!(SortKey::ascending(7).to_signed(), 7);
    }

    #[test]
    fn test_window_resolution() {
        assert_eq!(window(10, 1, -1), Some(0..10));
        assert_eq!(window(10, 2, -1), Some(1..10));
        assert_eq!(window(10, 2, 4), Some(1..4));
        assert_eq!(window(10, 0, 3), Some(0..3));
        assert_eq!(window(10, 3, 99), Some(2..10));
        assert_eq!(window(10, 5, 4), None);
        assert_eq!(window(10, 11, -1), None);
        assert_eq!(window(10, 1, 0), None);
        assert_eq!(window(0, 1, -1), None);
    }

    #[test]
    fn test_natural_numeric_order() {
        let mut data = rows(&[&["700"], &["80"], &["9"]]);
        sort_rows(&mut data, 1, -1, &[1]);
        assert_eq!(column(&data, 1), vec!["9", "80", "700"]);
    }

    #[test]
    fn test_descending() {
        let mut data = rows(&[&["b"], &["c"], &["a"]]);
        sort_rows(&mut data, 1, -1, &[-1]);
        assert_eq!(column(&data, 1), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_multi_key_with_reverse() {
        // id, first, last
        let mut data = rows(&[
            &["1", "Jimmy", "Spencer"],
            &["2", "Harry", "Hunter"],
            &["3", "Benjamin", "Spencer"],
            &["4", "Teresa", "Hunter"],
            &["5", "Donald", "Bryant"],
            &["6", "Harry", "Hunter"],
        ]);
        sort_rows(&mut data, 1, -1, &[3, -2]);
        assert_eq!(column(&data, 1), vec!["5", "4", "2", "6", "1", "3"]);
    }

    #[test]
    fn test_window_leaves_outside_rows_alone() {
        let mut data = rows(&[&["title"], &["c"], &["b"], &["a"], &["0"]]);
        sort_rows(&mut data, 2, 4, &[1]);
        assert_eq!(column(&data, 1), vec!["title", "a", "b", "c", "0"]);
    }

    #[test]
    fn test_missing_cells_sort_first() {
        let mut data = rows(&[&["1", "x"], &["2"], &["3", "a"]]);
        sort_rows(&mut data, 1, -1, &[2]);
        assert_eq!(column(&data, 1), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_full_ties_keep_order() {
        let mut data = rows(&[&["k", "1"], &["k", "2"], &["j", "3"], &["k", "4"]]);
        sort_rows(&mut data, 1, -1, &[1]);
        assert_eq!(column(&data, 2), vec!["3", "1", "2", "4"]);
        sort_rows(&mut data, 1, -1, &[-1]);
        assert_eq!(column(&data, 2), vec!["1", "2", "4", "3"]);
    }

    #[test]
    fn test_zero_and_empty_keys_are_noops() {
        let original = rows(&[&["b"], &["a"], &["c"]]);
        let mut data = original.clone();
        sort_rows(&mut data, 1, -1, &[]);
        assert_eq!(data, original);
        sort_rows(&mut data, 1, -1, &[0]);
        assert_eq!(data, original);
        sort_rows(&mut data, 1, -1, &[0, 1]);
        assert_eq!(column(&data, 1), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_permutation_does_not_move_rows() {
        let data = rows(&[&["h"], &["b"], &["c"], &["a"]]);
        assert_eq!(sort_permutation(&data, 2, -1, &[1]), vec![0, 3, 1, 2]);
        assert_eq!(column(&data, 1), vec!["h", "b", "c", "a"]);
    }

    #[test]
    fn test_apply_permutation_cycles() {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        apply_permutation(&mut items, vec![2, 0, 1, 4, 3]);
        assert_eq!(items, vec!['c', 'a', 'b', 'e', 'd']);
    }

    #[test]
    fn test_large_window_uses_merge_path() {
        let values: Vec<String> = (0..200).map(|i| ((i * 37) % 101).to_string()).collect();
        let mut data: Vec<Vec<String>> = values.iter().map(|v| vec![v.clone()]).collect();
        sort_rows(&mut data, 1, -1, &[1]);
        let sorted: Vec<usize> = data.iter().map(|r| r[0].parse().unwrap()).collect();
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(sorted.len(), 200);
    }

    #[test]
    fn test_inconsistent_comparator_terminates() {
        // 1x < 9 < 10 < 1x under the mixed numeral/text fallback
        let mut data: Vec<Vec<&str>> = std::iter::repeat(["1x", "9", "10"])
            .take(20)
            .flatten()
            .map(|v| vec![v])
            .collect();
        sort_rows(&mut data, 1, -1, &[1]);
        assert_eq!(data.len(), 60);
    }

    #[test]
    fn test_sort_by_title_unknown_is_atomic() {
        let header = HeaderIndex::build(&vec!["name"]);
        let original = rows(&[&["name"], &["b"], &["a"]]);
        let mut data = original.clone();
        assert!(sort_rows_by_title(&mut data, 2, -1, &header, &["name", "missing"]).is_err());
        assert_eq!(data, original);

        sort_rows_by_title(&mut data, 2, -1, &header, &["-name"]).unwrap();
        assert_eq!(column(&data, 1), vec!["name", "b", "a"]);
    }
}
