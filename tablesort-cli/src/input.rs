//! Tab-separated input and table construction.

use log::debug;
use tabledom::Element;
use tablesort::SortableConfig;

use crate::error::CliError;

/// Id of the table built from the input.
pub const TABLE_ID: &str = "table";

/// Parsed tab-separated input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tsv {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Split `source` into a header line and data rows.
///
/// Blank lines are skipped. Rows may be shorter or longer than the header;
/// short rows simply lack cells at the trailing columns.
pub fn parse_tsv(source: &str) -> Result<Tsv, CliError> {
    let mut lines = source
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty());

    let headers = lines.next().ok_or(CliError::EmptyInput)?;
    let headers: Vec<String> = headers.split('\t').map(str::to_string).collect();
    let rows: Vec<Vec<String>> = lines
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect();

    debug!("[input] {} columns, {} rows", headers.len(), rows.len());
    Ok(Tsv { headers, rows })
}

/// Build a marked `<table>` from the input.
///
/// Cells in `numeric` columns carry their text as the numeric override, so
/// they compare as numbers.
pub fn build_table(
    tsv: &Tsv,
    numeric: &[usize],
    config: &SortableConfig,
) -> Result<Element, CliError> {
    let columns = tsv.headers.len();
    if let Some(&column) = numeric.iter().find(|&&c| c >= columns) {
        return Err(CliError::NoSuchColumn { column, columns });
    }

    let head = Element::thead().child(Element::tr().children(tsv.headers.iter().map(Element::th)));
    let body = Element::tbody().children(tsv.rows.iter().map(|cells| {
        Element::tr().children(cells.iter().enumerate().map(|(i, text)| {
            let cell = Element::td(text);
            if numeric.contains(&i) {
                cell.data(config.numeric_key.clone(), text)
            } else {
                cell
            }
        }))
    }));

    Ok(Element::table()
        .id(TABLE_ID)
        .class(config.marker_class.clone())
        .child(head)
        .child(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blank_lines_and_crlf() {
        let tsv = parse_tsv("a\tb\r\n\n1\t2\r\n3\n").unwrap();
        assert_eq!(tsv.headers, vec!["a", "b"]);
        assert_eq!(tsv.rows, vec![vec!["1", "2"], vec!["3"]]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(parse_tsv("\n  \n"), Err(CliError::EmptyInput)));
    }

    #[test]
    fn test_numeric_column_out_of_range() {
        let tsv = parse_tsv("a\tb\n1\t2\n").unwrap();
        let err = build_table(&tsv, &[2], &SortableConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::NoSuchColumn {
                column: 2,
                columns: 2
            }
        ));
    }
}
