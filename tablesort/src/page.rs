//! Page-level wiring: load-time decoration and the shared click listener.

use std::collections::HashSet;

use log::{debug, warn};
use tabledom::{
    Element, Event, MouseButton, find_element_mut, first_by_data_mut, for_each_by_tag_mut,
};

use crate::config::SortableConfig;
use crate::decorate::{HandlerRegistry, TABLE_KEY, decorate_table};
use crate::error::SortError;
use crate::order::Direction;
use crate::sorter::{SortSummary, Sorter};

/// Result of dispatching one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// The event reached a sort control or triggered decoration.
    pub handled: bool,
    /// The event's default action (following the control's `href`) must not run.
    pub default_prevented: bool,
}

/// A document with sortable tables.
///
/// Owns the element tree, the row identifier generator and the control
/// handler records. All sorting and decoration goes through here.
#[derive(Debug)]
pub struct Page {
    root: Element,
    config: SortableConfig,
    sorter: Sorter,
    handlers: HandlerRegistry,
    /// Table keys claimed so far, see [`decorate::table_key`](crate::decorate::table_key).
    table_keys: HashSet<String>,
    loaded: bool,
}

impl Page {
    pub fn new(root: Element) -> Self {
        Self::with_config(root, SortableConfig::default())
    }

    pub fn with_config(root: Element, config: SortableConfig) -> Self {
        let sorter = Sorter::new(config.numeric_key.clone());
        Self {
            root,
            config,
            sorter,
            handlers: HandlerRegistry::new(),
            table_keys: HashSet::new(),
            loaded: false,
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn into_root(self) -> Element {
        self.root
    }

    pub fn config(&self) -> &SortableConfig {
        &self.config
    }

    pub fn sorter(&self) -> &Sorter {
        &self.sorter
    }

    pub fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Decorate every table carrying the marker class, in document order.
    ///
    /// Runs once; later calls return 0. Returns the number of tables
    /// decorated.
    pub fn load(&mut self) -> usize {
        if self.loaded {
            debug!("[page] already loaded");
            return 0;
        }
        self.loaded = true;

        let Self {
            root,
            config,
            handlers,
            table_keys,
            ..
        } = self;

        let mut marked = 0;
        let mut decorated = 0;
        for_each_by_tag_mut(root, "table", |_, table| {
            if !table.has_class(&config.marker_class) {
                return;
            }
            marked += 1;
            claim_key(table, table_keys);
            if decorate_table(table, config, handlers) > 0 {
                decorated += 1;
            }
        });
        debug!(
            "[page] loaded: {} of {} marked tables decorated",
            decorated, marked
        );
        decorated
    }

    /// Decorate one table by ID. Returns the number of header cells decorated.
    ///
    /// With duplicate IDs the first table in document order is used.
    pub fn decorate(&mut self, table_id: &str) -> Result<usize, SortError> {
        let table = find_element_mut(&mut self.root, table_id)
            .ok_or_else(|| SortError::TableNotFound(table_id.to_string()))?;
        claim_key(table, &mut self.table_keys);
        Ok(decorate_table(table, &self.config, &mut self.handlers))
    }

    /// Sort one table by ID.
    pub fn sort(
        &mut self,
        table_id: &str,
        column: usize,
        direction: Direction,
    ) -> Result<SortSummary, SortError> {
        let table = find_element_mut(&mut self.root, table_id)
            .ok_or_else(|| SortError::TableNotFound(table_id.to_string()))?;
        Ok(self.sorter.sort(table, column, direction))
    }

    /// Run the handler record of a control.
    pub fn activate(&mut self, control_id: &str) -> Result<SortSummary, SortError> {
        let record = self
            .handlers
            .get(control_id)
            .cloned()
            .ok_or_else(|| SortError::UnknownControl(control_id.to_string()))?;

        let table = first_by_data_mut(&mut self.root, "table", TABLE_KEY, &record.table)
            .ok_or_else(|| SortError::StaleControl {
                table: record.table.clone(),
                column: record.column,
                direction: record.direction,
            })?;
        Ok(self.sorter.sort(table, record.column, record.direction))
    }

    /// The single listener for the page.
    ///
    /// `Load` decorates marked tables. A primary click on a sort control
    /// sorts and prevents the default action; other clicks pass through.
    /// Errors are logged, never returned.
    pub fn dispatch(&mut self, event: &Event) -> Dispatch {
        match event {
            Event::Load => {
                let decorated = self.load();
                Dispatch {
                    handled: decorated > 0,
                    default_prevented: false,
                }
            }
            Event::Click {
                target: Some(target),
                button: MouseButton::Left,
            } => {
                if self.handlers.get(target).is_none() {
                    return Dispatch::default();
                }
                if let Err(e) = self.activate(target) {
                    warn!("[page] {}", e);
                }
                Dispatch {
                    handled: true,
                    default_prevented: true,
                }
            }
            Event::Click { .. } => Dispatch::default(),
        }
    }
}

/// Give `table` a key no other table on the page holds.
///
/// The key is the table's element ID, suffixed with `_2`, `_3` and so on
/// when an earlier table already claimed that ID. A table keeps its key
/// once stamped.
fn claim_key(table: &mut Element, claimed: &mut HashSet<String>) {
    if let Some(key) = table.get_data(TABLE_KEY) {
        claimed.insert(key.clone());
        return;
    }

    let mut key = table.id.clone();
    let mut n = 2;
    while claimed.contains(&key) {
        key = format!("{}_{}", table.id, n);
        n += 1;
    }
    debug!("[page] table {} keyed as {}", table.id, key);
    claimed.insert(key.clone());
    table.set_data(TABLE_KEY, key);
}
