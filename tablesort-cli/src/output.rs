//! Rendering the sorted table.

use tabledom::{Element, first_by_tag, text_content, to_html};
use unicode_width::UnicodeWidthStr;

/// The decorated table as HTML, newline-terminated.
pub fn render_html(table: &Element) -> String {
    let mut out = to_html(table);
    out.push('\n');
    out
}

/// Body rows as aligned plain-text columns under `headers`.
///
/// Header cells carry the sort controls after decoration, so the labels
/// come from the input rather than from the tree.
pub fn render_text(headers: &[String], table: &Element) -> String {
    let mut lines: Vec<Vec<String>> = vec![headers.to_vec()];
    if let Some(body) = first_by_tag(table, "tbody") {
        lines.extend(
            body.element_children()
                .filter(|row| row.is("tr"))
                .map(|row| row.element_children().map(text_content).collect()),
        );
    }

    let columns = lines.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for line in &lines {
        for (i, cell) in line.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut out = String::new();
    for line in &lines {
        let mut text = String::new();
        for (i, cell) in line.iter().enumerate() {
            if i > 0 {
                text.push_str("  ");
            }
            text.push_str(cell);
            text.extend(std::iter::repeat_n(' ', widths[i] - cell.width()));
        }
        out.push_str(text.trim_end());
        out.push('\n');
    }
    out
}
