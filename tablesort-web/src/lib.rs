//! Browser binding.
//!
//! [`install`] registers a `load` listener on the window. On load every
//! `table.<marker>` is decorated and one `click` listener is attached to the
//! document; it resolves clicks on sort controls from their `data-*`
//! attributes and sorts the live table body.
//!
//! Row identifiers are stamped on the rows as `data-sort-id`, so they
//! survive across sorts for as long as the row node exists.

use std::rc::Rc;

use tablesort::decorate::{COLUMN_KEY, DECORATED_KEY, DIRECTION_KEY};
use tablesort::{CellValue, Direction, IdGenerator, RowDescriptor, SortableConfig, order_rows};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

/// Attribute carrying a row's stable identifier.
pub const SORT_ID_ATTR: &str = "data-sort-id";

/// Install with the default configuration.
#[wasm_bindgen]
pub fn install() -> Result<(), JsValue> {
    install_with_config(SortableConfig::default())
}

/// Register the window `load` listener that decorates marked tables.
pub fn install_with_config(config: SortableConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let binding = Rc::new(Binding {
        config,
        ids: IdGenerator::new(),
    });

    let on_load = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Err(e) = binding.load() {
            log::warn!("[web] load failed: {:?}", e);
        }
    });
    window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    // Lives as long as the page.
    on_load.forget();
    Ok(())
}

struct Binding {
    config: SortableConfig,
    ids: IdGenerator,
}

impl Binding {
    fn load(self: &Rc<Self>) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let tables = document.query_selector_all(&format!("table.{}", self.config.marker_class))?;
        let mut decorated = 0;
        for i in 0..tables.length() {
            let Some(table) = tables.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            if decorate(&document, &table, &self.config)? > 0 {
                decorated += 1;
            }
        }
        log::debug!("[web] decorated {} of {} tables", decorated, tables.length());

        let binding = Rc::clone(self);
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            binding.on_click(&event);
        });
        document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
        Ok(())
    }

    fn on_click(&self, event: &Event) {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(control)) = target.closest(&format!("a[data-{DIRECTION_KEY}]")) else {
            return;
        };
        let Some((column, direction)) = read_record(&control) else {
            return;
        };
        let Ok(Some(table)) = control.closest("table") else {
            return;
        };

        event.prevent_default();
        if let Err(e) = sort_table(&table, column, direction, &self.ids, &self.config.numeric_key) {
            log::warn!("[web] sort failed: {:?}", e);
        }
    }
}

/// Column and direction of a control, from its `data-*` attributes.
fn read_record(control: &Element) -> Option<(usize, Direction)> {
    let column = control
        .get_attribute(&format!("data-{COLUMN_KEY}"))?
        .parse()
        .ok()?;
    let direction = control
        .get_attribute(&format!("data-{DIRECTION_KEY}"))?
        .parse()
        .ok()?;
    Some((column, direction))
}

/// Append a separator and the two controls to every `thead th` of `table`.
///
/// Returns the number of header cells decorated; 0 when the table was
/// already decorated and the config does not allow redecoration.
pub fn decorate(
    document: &Document,
    table: &Element,
    config: &SortableConfig,
) -> Result<u32, JsValue> {
    let marker = format!("data-{DECORATED_KEY}");
    let previous: u32 = table
        .get_attribute(&marker)
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    if previous > 0 && !config.allow_redecoration {
        return Ok(0);
    }

    let headers = table.query_selector_all("thead th")?;
    for i in 0..headers.length() {
        let Some(th) = headers.item(i) else {
            continue;
        };
        th.append_child(&document.create_text_node(&config.separator))?;
        for direction in [Direction::Ascending, Direction::Descending] {
            let glyph = match direction {
                Direction::Ascending => &config.ascending_glyph,
                Direction::Descending => &config.descending_glyph,
            };
            let control = document.create_element("a")?;
            control.set_attribute("href", &config.control_href)?;
            control.set_attribute(&format!("data-{COLUMN_KEY}"), &i.to_string())?;
            control.set_attribute(&format!("data-{DIRECTION_KEY}"), direction.as_str())?;
            control.set_text_content(Some(glyph.as_str()));
            th.append_child(&control)?;
        }
    }

    table.set_attribute(&marker, &previous.saturating_add(1).to_string())?;
    Ok(headers.length())
}

/// Sort the rows of `table`'s first `tbody` by the 0-based `column`.
///
/// Rows are re-appended in order; appending a node that is already in the
/// body moves it. Returns the number of rows sorted.
pub fn sort_table(
    table: &Element,
    column: usize,
    direction: Direction,
    ids: &IdGenerator,
    numeric_key: &str,
) -> Result<u32, JsValue> {
    let Some(body) = table.query_selector("tbody")? else {
        return Ok(0);
    };

    let children = body.children();
    let mut descriptors = Vec::with_capacity(children.length() as usize);
    for i in 0..children.length() {
        let Some(row) = children.item(i) else {
            continue;
        };
        if !row.tag_name().eq_ignore_ascii_case("tr") {
            continue;
        }
        let sort_id = row_sort_id(&row, ids)?;
        let value = cell_value(&row, column, numeric_key);
        descriptors.push(RowDescriptor::new(row, value, sort_id));
    }

    order_rows(&mut descriptors, direction);
    for descriptor in &descriptors {
        body.append_child(&descriptor.row)?;
    }

    log::debug!("[web] column {} {}: {} rows", column, direction, descriptors.len());
    Ok(descriptors.len() as u32)
}

fn row_sort_id(row: &Element, ids: &IdGenerator) -> Result<u64, JsValue> {
    if let Some(id) = row.get_attribute(SORT_ID_ATTR).and_then(|v| v.parse().ok()) {
        return Ok(id);
    }
    let id = ids.next_id();
    row.set_attribute(SORT_ID_ATTR, &id.to_string())?;
    Ok(id)
}

fn cell_value(row: &Element, column: usize, numeric_key: &str) -> CellValue {
    let cell = u32::try_from(column)
        .ok()
        .and_then(|i| row.children().item(i))
        .filter(|cell| cell.tag_name().eq_ignore_ascii_case("td"));
    match cell {
        Some(cell) => CellValue::from_cell(
            cell.get_attribute(&format!("data-{numeric_key}")).as_deref(),
            || cell.inner_html(),
        ),
        None => CellValue::Missing,
    }
}
