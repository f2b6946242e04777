//! Command-line front end: turn a tab-separated file into a sortable HTML
//! table, optionally sorted by one column.

mod args;
mod error;
mod input;
mod output;

use std::io::Read;

use log::info;
use tabledom::{Element, Event, find_element};
use tablesort::{Direction, Page, SortableConfig, control_id};

pub use args::{Cli, Format};
pub use error::CliError;
pub use input::{TABLE_ID, Tsv, build_table, parse_tsv};
pub use output::{render_html, render_text};

/// Read the input, build and decorate the table, apply the requested sort
/// and render it.
pub fn run(cli: &Cli) -> Result<String, CliError> {
    let source = read_input(cli)?;
    let tsv = parse_tsv(&source)?;
    let config = SortableConfig::default();

    let table = build_table(&tsv, &cli.numeric, &config)?;
    let mut page = Page::with_config(Element::new("body").child(table), config);
    page.dispatch(&Event::Load);

    if let Some(column) = cli.column {
        sort_column(&mut page, column, Direction::from_descending(cli.descending), tsv.headers.len())?;
    }

    let table = find_element(page.root(), TABLE_ID)
        .ok_or_else(|| CliError::Internal("table vanished from page".to_string()))?;
    Ok(match cli.format {
        Format::Html => render_html(table),
        Format::Text => render_text(&tsv.headers, table),
    })
}

/// Sort by clicking the column's control, the same path a browser click takes.
pub fn sort_column(
    page: &mut Page,
    column: usize,
    direction: Direction,
    columns: usize,
) -> Result<(), CliError> {
    if column >= columns {
        return Err(CliError::NoSuchColumn { column, columns });
    }
    let outcome = page.dispatch(&Event::click(control_id(TABLE_ID, column, direction)));
    if !outcome.handled {
        return Err(CliError::Internal(format!("no control for column {column}")));
    }
    info!("sorted column {} {}", column, direction);
    Ok(())
}

fn read_input(cli: &Cli) -> Result<String, CliError> {
    let path = cli.input.display().to_string();
    let io_error = |source: std::io::Error| CliError::Io {
        path: path.clone(),
        source,
    };
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(io_error)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(&cli.input).map_err(io_error)
    }
}
