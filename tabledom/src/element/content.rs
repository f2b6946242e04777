#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    /// Character data. On a text node this is the node's data; on any other
    /// element it is shorthand for a single text child.
    Text(String),
    Children(Vec<super::Element>),
}
