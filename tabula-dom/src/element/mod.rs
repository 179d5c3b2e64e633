//! The element tree components build on every pass.

mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Depth-first lookup of the element with `id`, `root` included.
///
/// Ids are expected to be unique; the first match in tree order wins.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }
    root.child_elements()
        .iter()
        .find_map(|child| find_element(child, id))
}
