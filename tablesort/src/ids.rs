//! Stable row identifiers.
//!
//! A row's identifier is stamped on the row itself as `data-sort-id` the
//! first time it is sorted, so it travels with the row and is dropped with it.

use std::sync::atomic::{AtomicU64, Ordering};

use tabledom::Element;

/// `data-*` key holding a row's identifier.
pub const SORT_ID_KEY: &str = "sort-id";

/// Monotonic source of row identifiers, starting at 0.
///
/// Identifiers are never handed out twice by the same generator.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next identifier.
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// The identifier the next call to [`next_id`](Self::next_id) returns.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

/// Identifier stamped on `row`, if any.
pub fn sort_id(row: &Element) -> Option<u64> {
    row.get_data(SORT_ID_KEY).and_then(|v| v.parse().ok())
}

/// Return the identifier of `row`, stamping a fresh one on first use.
///
/// A stamp that does not parse is replaced.
pub fn assign_sort_id(row: &mut Element, ids: &IdGenerator) -> u64 {
    if let Some(id) = sort_id(row) {
        return id;
    }
    let id = ids.next_id();
    log::trace!("[sort] assigned id {} to row {}", id, row.id);
    row.set_data(SORT_ID_KEY, id.to_string());
    id
}
