//! Row ordering.

use std::cmp::Ordering;
use std::fmt;

use crate::value::CellValue;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Lower values first.
    Ascending,
    /// Higher values first.
    Descending,
}

impl Direction {
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            Self::Descending
        } else {
            Self::Ascending
        }
    }

    pub fn is_descending(self) -> bool {
        self == Self::Descending
    }

    /// Short name, also used in control IDs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

/// A row paired with its sort value and stable identifier.
///
/// Built fresh for every sort and dropped once the rows are back in place.
#[derive(Debug, Clone, PartialEq)]
pub struct RowDescriptor<R> {
    pub row: R,
    pub value: CellValue,
    pub sort_id: u64,
}

impl<R> RowDescriptor<R> {
    pub fn new(row: R, value: CellValue, sort_id: u64) -> Self {
        Self {
            row,
            value,
            sort_id,
        }
    }
}

/// Compare two descriptors for a sort in `direction`.
///
/// Values order by `direction`. NaN values go after every comparable value
/// in both directions. Ties, including NaN against NaN, go to the higher
/// `sort_id` first whatever the direction.
pub fn compare_descriptors<R>(
    a: &RowDescriptor<R>,
    b: &RowDescriptor<R>,
    direction: Direction,
) -> Ordering {
    let by_value = match (a.value.is_nan(), b.value.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = a.value.compare(&b.value).unwrap_or(Ordering::Equal);
            match direction {
                Direction::Ascending => ord,
                Direction::Descending => ord.reverse(),
            }
        }
    };
    by_value.then_with(|| b.sort_id.cmp(&a.sort_id))
}

/// Sort descriptors in place for `direction`. Stable.
pub fn order_rows<R>(descriptors: &mut [RowDescriptor<R>], direction: Direction) {
    descriptors.sort_by(|a, b| compare_descriptors(a, b, direction));
}
