pub mod element;
pub mod event;
pub mod query;
pub mod render;

pub use element::{find_element, find_element_mut, Content, Element};
pub use event::{Event, MouseButton};
pub use query::{
    collect_by_class, collect_by_tag, first_by_data_mut, first_by_tag, first_by_tag_mut,
    for_each_by_tag_mut, nth_element_child,
};
pub use render::{inner_html, text_content, to_html};
