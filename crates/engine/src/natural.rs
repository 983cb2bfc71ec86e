//! Numeral-aware comparison of cell text.
//!
//! Cell values are compared as bytes, with two adjustments:
//! - a leading currency marker (`€` or `$`, plus any following spaces) is
//!   stripped first, so `"€ 9"` compares like `"9"`;
//! - when *both* values are plain numerals (`123` or `12.5`), the shorter is
//!   left-padded with zeros to the other's length, so `"9" < "80" < "700"`.
//!
//! Mixed numeral/text pairs fall back to plain byte order, even where that
//! reads oddly (`"10" < "1x" < "9"`).

use std::borrow::Cow;
use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?$").expect("numeral pattern is valid"));

const CURRENCY_MARKERS: [char; 2] = ['€', '$'];

/// Drop a leading currency marker and the spaces after it.
pub fn strip_currency(value: &str) -> &str {
    if value.starts_with(CURRENCY_MARKERS) {
        value.trim_start_matches(|c: char| CURRENCY_MARKERS.contains(&c) || c == ' ')
    } else {
        value
    }
}

/// Whether `value` is entirely an integer or decimal numeral.
pub fn is_numeral(value: &str) -> bool {
    NUMERAL_RE.is_match(value)
}

/// Compare two cell values in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = strip_currency(a);
    let b = strip_currency(b);

    if a.len() != b.len() && is_numeral(a) && is_numeral(b) {
        let width = a.len().max(b.len());
        return pad(a, width).cmp(&pad(b, width));
    }
    a.cmp(b)
}

fn pad(numeral: &str, width: usize) -> Cow<'_, str> {
    if numeral.len() >= width {
        Cow::Borrowed(numeral)
    } else {
        Cow::Owned(format!("{numeral:0>width$}"))
    }
}
