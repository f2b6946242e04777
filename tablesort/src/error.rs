//! Error types

use crate::order::Direction;

/// Errors from the ID-addressed page API.
///
/// Malformed content never produces an error: a missing body, a missing cell
/// and an unparsable numeric override all degrade to a defined sort order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// No element with this ID exists in the document.
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// A click targeted an element that is not a registered control.
    #[error("No sort control registered for element {0}")]
    UnknownControl(String),

    /// A control's handler record points at a table that has since gone away.
    #[error("Control for column {column} ({direction}) refers to missing table {table}")]
    StaleControl {
        /// ID of the table the control was created for.
        table: String,
        /// Column index the control sorts by.
        column: usize,
        /// Direction the control sorts in.
        direction: Direction,
    },
}
