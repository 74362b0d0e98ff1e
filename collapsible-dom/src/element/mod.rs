mod node;

pub use node::{Element, ElementId, Node};

/// Find a builder element by its `id` attribute.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.attributes.get("id").map(String::as_str) == Some(id) {
        return Some(root);
    }

    root.children
        .iter()
        .find_map(|child| find_element(child, id))
}
