//! Comparable cell values.

use std::cmp::Ordering;

use tabledom::{Element, inner_html, nth_element_child};

/// The value a cell contributes to a sort.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// The row has no data cell at the sorted column.
    Missing,
    /// Parsed numeric override. May be NaN.
    Number(f64),
    /// The cell's markup, untrimmed.
    Text(String),
}

impl CellValue {
    /// Build a value from a cell's numeric override and its markup.
    ///
    /// A present, non-empty override wins and is parsed with [`parse_float`].
    /// The markup is only produced when there is no override.
    pub fn from_cell(numeric_override: Option<&str>, markup: impl FnOnce() -> String) -> Self {
        match numeric_override.filter(|s| !s.is_empty()) {
            Some(raw) => Self::Number(parse_float(raw)),
            None => Self::Text(markup()),
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Self::Number(n) if n.is_nan())
    }

    /// Compare two values, or `None` when either side is NaN.
    ///
    /// Values of different kinds order as `Missing < Number < Text`. Texts
    /// compare by UTF-16 code units.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b),
            (Self::Number(n), _) | (_, Self::Number(n)) if n.is_nan() => None,
            (Self::Text(a), Self::Text(b)) => Some(a.encode_utf16().cmp(b.encode_utf16())),
            _ => Some(self.rank().cmp(&other.rank())),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::Number(_) => 1,
            Self::Text(_) => 2,
        }
    }
}

/// Extract the sort value of `row` at the 0-based `column`.
///
/// The cell is the row's `column`th child element, and it must be a `td`;
/// anything else yields [`CellValue::Missing`].
pub fn extract_value(row: &Element, column: usize, numeric_key: &str) -> CellValue {
    match nth_element_child(row, column).filter(|cell| cell.is("td")) {
        Some(cell) => CellValue::from_cell(
            cell.get_data(numeric_key).map(String::as_str),
            || inner_html(cell),
        ),
        None => CellValue::Missing,
    }
}

/// Parse the longest numeric prefix of `s`, the way a browser's `parseFloat`
/// does. Returns NaN when there is none.
///
/// Leading whitespace is skipped, a sign and `Infinity` are accepted, and
/// trailing garbage is ignored: `"10px"` is 10.
pub fn parse_float(s: &str) -> f64 {
    let s = s.trim_start_matches(is_js_whitespace);
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    if s[pos..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = pos;
    pos += count_digits(&bytes[pos..]);
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        let frac_len = count_digits(&bytes[frac_start..]);
        if frac_len > 0 || !int_digits.is_empty() {
            frac_digits = &s[frac_start..frac_start + frac_len];
            pos = frac_start + frac_len;
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return f64::NAN;
    }

    let mut exponent = "";
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_end = pos + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            exponent = &s[pos + 1..exp_end + exp_digits];
        }
    }

    let literal = format!(
        "{}{}.{}e{}",
        if negative { "-" } else { "" },
        if int_digits.is_empty() { "0" } else { int_digits },
        if frac_digits.is_empty() { "0" } else { frac_digits },
        if exponent.is_empty() { "0" } else { exponent },
    );
    literal.parse().unwrap_or(f64::NAN)
}

/// ECMAScript `WhiteSpace` and `LineTerminator`. Unlike
/// [`char::is_whitespace`] this excludes U+0085 and includes U+FEFF.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t'
            | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
