use crate::element::{Content, Element};

/// Find the first element with the given tag in the subtree, in document order.
/// The root itself is considered.
pub fn first_by_tag<'a>(root: &'a Element, tag: &str) -> Option<&'a Element> {
    if root.is(tag) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = first_by_tag(child, tag) {
                return Some(found);
            }
        }
    }

    None
}

/// Mutable variant of [`first_by_tag`].
pub fn first_by_tag_mut<'a>(root: &'a mut Element, tag: &str) -> Option<&'a mut Element> {
    if root.is(tag) {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = first_by_tag_mut(child, tag) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the first element with the given tag whose `data-{key}` equals `value`.
/// The root itself is considered.
pub fn first_by_data_mut<'a>(
    root: &'a mut Element,
    tag: &str,
    key: &str,
    value: &str,
) -> Option<&'a mut Element> {
    if root.is(tag) && root.get_data(key).is_some_and(|v| v == value) {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = first_by_data_mut(child, tag, key, value) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect every element with the given tag in the subtree, in document order.
pub fn collect_by_tag<'a>(root: &'a Element, tag: &str) -> Vec<&'a Element> {
    let mut result = Vec::new();
    collect_matching(root, &|el| el.is(tag), &mut result);
    result
}

/// Collect every element carrying the given class in the subtree, in document order.
pub fn collect_by_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut result = Vec::new();
    collect_matching(root, &|el| el.has_class(class), &mut result);
    result
}

fn collect_matching<'a>(
    element: &'a Element,
    matches: &dyn Fn(&Element) -> bool,
    result: &mut Vec<&'a Element>,
) {
    if matches(element) {
        result.push(element);
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            collect_matching(child, matches, result);
        }
    }
}

/// Visit every element with the given tag in the subtree, in document order,
/// passing its 0-based position among the matches.
///
/// The callback runs before the element's children are visited, so children
/// it appends are visited too. Returns the number of matches.
pub fn for_each_by_tag_mut(
    root: &mut Element,
    tag: &str,
    mut f: impl FnMut(usize, &mut Element),
) -> usize {
    let mut index = 0;
    visit_by_tag_mut(root, tag, &mut index, &mut f);
    index
}

fn visit_by_tag_mut(
    element: &mut Element,
    tag: &str,
    index: &mut usize,
    f: &mut impl FnMut(usize, &mut Element),
) {
    if element.is(tag) {
        f(*index, element);
        *index += 1;
    }

    if let Content::Children(children) = &mut element.content {
        for child in children {
            visit_by_tag_mut(child, tag, index, f);
        }
    }
}

/// The `n`th (0-based) child element, text nodes skipped.
///
/// This is the element `:nth-child(n + 1)` selects among the children.
pub fn nth_element_child(element: &Element, n: usize) -> Option<&Element> {
    element.element_children().nth(n)
}
