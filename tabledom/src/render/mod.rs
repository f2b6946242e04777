//! HTML serialization of element trees.

use std::fmt::Write;

use crate::element::{Content, Element};

/// Serialize an element and its subtree (`outerHTML`).
pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    write_node(element, &mut out);
    out
}

/// Serialize an element's children (`innerHTML`).
///
/// For a text node this is its escaped data.
pub fn inner_html(element: &Element) -> String {
    let mut out = String::new();
    write_content(&element.content, &mut out);
    out
}

/// Concatenated text of the subtree, unescaped (`textContent`).
pub fn text_content(element: &Element) -> String {
    let mut out = String::new();
    collect_text(element, &mut out);
    out
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
    }
}

fn write_node(element: &Element, out: &mut String) {
    if element.is_text() {
        write_content(&element.content, out);
        return;
    }

    out.push('<');
    out.push_str(&element.tag);
    if element.explicit_id {
        write_attr(out, "id", &element.id);
    }
    if !element.classes.is_empty() {
        write_attr(out, "class", &element.classes.join(" "));
    }
    for (name, value) in &element.attributes {
        write_attr(out, name, value);
    }
    for (key, value) in &element.data {
        write_attr(out, &format!("data-{key}"), value);
    }
    out.push('>');

    write_content(&element.content, out);

    let _ = write!(out, "</{}>", element.tag);
}

fn write_content(content: &Content, out: &mut String) {
    match content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_text(text)),
        Content::Children(children) => {
            for child in children {
                write_node(child, out);
            }
        }
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, r#" {}="{}""#, name, escape_attr(value));
}

/// Escape character data the way `innerHTML` serializes it.
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('\u{a0}', "&nbsp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value for a double-quoted attribute.
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('\u{a0}', "&nbsp;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_text(r#"say "hi""#), r#"say "hi""#);
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr(r#"a "b" & <c>"#), "a &quot;b&quot; &amp; <c>");
    }
}
