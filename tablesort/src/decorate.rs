//! Header decoration.
//!
//! Every header cell of a sortable table receives a separator and two
//! controls. Each control is described by a [`HandlerRecord`] kept in a
//! [`HandlerRegistry`]; a single listener resolves clicks through it.

use std::collections::HashMap;

use log::debug;
use tabledom::{Content, Element, first_by_tag_mut, for_each_by_tag_mut};

use crate::config::SortableConfig;
use crate::order::Direction;

/// `data-*` key marking a decorated table; its value counts decorations.
pub const DECORATED_KEY: &str = "sort-decorated";
/// `data-*` key holding a control's column index.
pub const COLUMN_KEY: &str = "sort-column";
/// `data-*` key holding a control's direction.
pub const DIRECTION_KEY: &str = "sort-direction";
/// `data-*` key holding the key handler records use to find a table.
pub const TABLE_KEY: &str = "sort-table";

/// What a control does when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerRecord {
    /// Key of the table to sort, see [`table_key`].
    pub table: String,
    /// 0-based column index of the header cell the control sits in.
    pub column: usize,
    pub direction: Direction,
}

/// Handler records by control element ID.
#[derive(Debug, Default)]
pub struct HandlerRegistry {
    records: HashMap<String, HandlerRecord>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, control: impl Into<String>, record: HandlerRecord) {
        self.records.insert(control.into(), record);
    }

    pub fn get(&self, control: &str) -> Option<&HandlerRecord> {
        self.records.get(control)
    }

    /// Records belonging to one table, ordered by column then direction.
    pub fn for_table(&self, table: &str) -> Vec<(&str, &HandlerRecord)> {
        let mut records: Vec<_> = self
            .records
            .iter()
            .filter(|(_, r)| r.table == table)
            .map(|(id, r)| (id.as_str(), r))
            .collect();
        records.sort_by_key(|(id, r)| (r.column, r.direction.is_descending(), *id));
        records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Key identifying a table in handler records and control IDs.
///
/// This is the table's `data-sort-table` stamp when it has one and its
/// element ID otherwise.
pub fn table_key(table: &Element) -> &str {
    table
        .get_data(TABLE_KEY)
        .map_or(table.id.as_str(), String::as_str)
}

/// ID of the control sorting `column` of `table` in `direction`.
pub fn control_id(table: &str, column: usize, direction: Direction) -> String {
    format!("{table}__sort_{column}_{direction}")
}

/// Append sort controls to every `th` in the table's `thead`.
///
/// Returns the number of header cells decorated. An already decorated table
/// is skipped unless the config allows redecoration, in which case the new
/// controls get a generation suffix on their IDs.
pub fn decorate_table(
    table: &mut Element,
    config: &SortableConfig,
    handlers: &mut HandlerRegistry,
) -> usize {
    let previous: u32 = table
        .get_data(DECORATED_KEY)
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    if previous > 0 && !config.allow_redecoration {
        debug!("[decorate] table {} already decorated, skipping", table.id);
        return 0;
    }

    let generation = previous.saturating_add(1);
    let table_id = table_key(table).to_string();

    let Some(thead) = first_by_tag_mut(table, "thead") else {
        debug!("[decorate] table {} has no thead", table_id);
        return 0;
    };

    let decorated = for_each_by_tag_mut(thead, "th", |column, th| {
        th.push_child(Element::text(config.separator.clone()));
        for direction in [Direction::Ascending, Direction::Descending] {
            let mut id = control_id(&table_id, column, direction);
            if generation > 1 {
                id = format!("{id}_{generation}");
            }
            th.push_child(control(config, &id, column, direction));
            handlers.register(
                id,
                HandlerRecord {
                    table: table_id.clone(),
                    column,
                    direction,
                },
            );
        }
    });

    table.set_data(DECORATED_KEY, generation.to_string());
    table.set_data(TABLE_KEY, table_id.clone());
    debug!(
        "[decorate] table {}: {} header cells (generation {})",
        table_id, decorated, generation
    );
    decorated
}

fn control(config: &SortableConfig, id: &str, column: usize, direction: Direction) -> Element {
    let glyph = match direction {
        Direction::Ascending => &config.ascending_glyph,
        Direction::Descending => &config.descending_glyph,
    };
    Element::anchor(config.control_href.clone())
        .id(id)
        .clickable(true)
        .data(COLUMN_KEY, column.to_string())
        .data(DIRECTION_KEY, direction.as_str())
        .content(Content::Text(glyph.clone()))
}
