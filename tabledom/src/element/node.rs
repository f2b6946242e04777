use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Tag name used for text nodes.
pub const TEXT_TAG: &str = "#text";

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    /// False when `id` was generated; generated IDs are not serialized.
    pub explicit_id: bool,
    /// Lowercase tag name, or [`TEXT_TAG`] for text nodes.
    pub tag: String,
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // Markup attributes other than `id`, `class` and `data-*`, in insertion order.
    pub attributes: Vec<(String, String)>,

    // Interaction
    pub clickable: bool,

    // `data-*` attributes, keyed without the prefix.
    pub data: BTreeMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            explicit_id: false,
            tag: "div".to_string(),
            classes: Vec::new(),
            content: Content::None,
            attributes: Vec::new(),
            clickable: false,
            data: BTreeMap::new(),
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into().to_ascii_lowercase();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: TEXT_TAG.to_string(),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn table() -> Self {
        Self::new("table")
    }

    pub fn thead() -> Self {
        Self::new("thead")
    }

    pub fn tbody() -> Self {
        Self::new("tbody")
    }

    pub fn tr() -> Self {
        Self::new("tr")
    }

    /// Header cell with text content.
    pub fn th(content: impl Into<String>) -> Self {
        Self::new("th").content(Content::Text(content.into()))
    }

    /// Data cell with text content.
    pub fn td(content: impl Into<String>) -> Self {
        Self::new("td").content(Content::Text(content.into()))
    }

    /// Anchor with the given `href`.
    pub fn anchor(href: impl Into<String>) -> Self {
        Self::new("a").attr("href", href)
    }

    pub fn is_text(&self) -> bool {
        self.tag == TEXT_TAG
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self.explicit_id = true;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    // Content
    pub fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        self.children_mut().extend(new_children);
        self
    }

    /// Append a child at the end of this element's children.
    pub fn push_child(&mut self, child: Element) {
        self.children_mut().push(child);
    }

    /// Child nodes, text nodes included. Empty for text nodes and for
    /// elements whose content is still inline text.
    pub fn child_nodes(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Child elements, text nodes skipped.
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.child_nodes().iter().filter(|c| !c.is_text())
    }

    /// Mutable access to the child list.
    ///
    /// Inline text content is first converted into a text node child so that
    /// appended children follow it, the way DOM appends do.
    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        if !matches!(self.content, Content::Children(_)) {
            let children = match std::mem::take(&mut self.content) {
                Content::Text(text) => vec![Element::text(text)],
                _ => Vec::new(),
            };
            self.content = Content::Children(children);
        }
        match &mut self.content {
            Content::Children(children) => children,
            _ => unreachable!("content was normalized to children above"),
        }
    }
}
