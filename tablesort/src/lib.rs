//! Client-side table sorting.
//!
//! Tables carrying the sortable marker class get an ascending and a
//! descending control appended to every header cell when the page loads.
//! Activating a control stable-sorts the table body's rows by that column,
//! in place, by moving the existing row nodes.
//!
//! The entry point is [`Page`], which owns the document together with the
//! row identifier generator and the control handler records:
//!
//! ```ignore
//! let mut page = Page::new(root);
//! page.dispatch(&Event::Load);
//! page.dispatch(&Event::click("fruits__sort_0_asc"));
//! ```

pub mod config;
pub mod decorate;
pub mod error;
pub mod ids;
pub mod order;
pub mod page;
pub mod sorter;
pub mod value;

pub use config::SortableConfig;
pub use decorate::{HandlerRecord, HandlerRegistry, control_id, decorate_table};
pub use error::SortError;
pub use ids::{IdGenerator, SORT_ID_KEY, assign_sort_id, sort_id};
pub use order::{Direction, RowDescriptor, compare_descriptors, order_rows};
pub use page::{Dispatch, Page};
pub use sorter::{SortSummary, Sorter};
pub use value::{CellValue, extract_value, parse_float};
