//! Sort execution.

use log::debug;
use tabledom::{Element, first_by_tag_mut};

use crate::ids::{IdGenerator, assign_sort_id};
use crate::order::{Direction, RowDescriptor, order_rows};
use crate::value::{CellValue, extract_value};

/// What a sort call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSummary {
    /// Rows reordered.
    pub rows: usize,
    /// Rows without a data cell at the sorted column.
    pub missing_cells: usize,
    /// Rows whose numeric override did not parse.
    pub nan_values: usize,
}

/// Reorders table bodies by column.
///
/// Owns the row identifier generator. Identifiers are stamped on the rows,
/// so tie order stays consistent across every sort of the same rows.
#[derive(Debug)]
pub struct Sorter {
    ids: IdGenerator,
    numeric_key: String,
}

impl Default for Sorter {
    fn default() -> Self {
        Self::new("num")
    }
}

impl Sorter {
    /// Create a sorter reading numeric overrides from `data-{numeric_key}`.
    pub fn new(numeric_key: impl Into<String>) -> Self {
        Self {
            ids: IdGenerator::new(),
            numeric_key: numeric_key.into(),
        }
    }

    pub fn ids(&self) -> &IdGenerator {
        &self.ids
    }

    /// Sort the rows of `table`'s body by the 0-based `column`.
    ///
    /// Only direct `tr` children of the first `tbody` take part. Rows are
    /// moved, never copied; other body children keep their order ahead of
    /// the rows. A table without a body or without rows is left untouched.
    pub fn sort(&mut self, table: &mut Element, column: usize, direction: Direction) -> SortSummary {
        let Some(body) = first_by_tag_mut(table, "tbody") else {
            debug!("[sort] table {} has no tbody, nothing to sort", table.id);
            return SortSummary::default();
        };

        if !body.child_nodes().iter().any(|node| node.is("tr")) {
            debug!("[sort] tbody {} has no rows", body.id);
            return SortSummary::default();
        }

        let (rows, mut others): (Vec<Element>, Vec<Element>) =
            std::mem::take(body.children_mut())
                .into_iter()
                .partition(|node| node.is("tr"));

        let mut summary = SortSummary {
            rows: rows.len(),
            ..Default::default()
        };

        let mut descriptors: Vec<RowDescriptor<Element>> = rows
            .into_iter()
            .map(|mut row| {
                let sort_id = assign_sort_id(&mut row, &self.ids);
                let value = extract_value(&row, column, &self.numeric_key);
                match &value {
                    CellValue::Missing => summary.missing_cells += 1,
                    v if v.is_nan() => summary.nan_values += 1,
                    _ => {}
                }
                RowDescriptor::new(row, value, sort_id)
            })
            .collect();

        order_rows(&mut descriptors, direction);

        others.extend(descriptors.into_iter().map(|d| d.row));
        *body.children_mut() = others;

        debug!(
            "[sort] column {} {}: {} rows ({} missing cells, {} NaN)",
            column, direction, summary.rows, summary.missing_cells, summary.nan_values
        );
        summary
    }
}
