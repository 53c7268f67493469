mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Whether `target` is `ancestor` itself or one of its descendants.
///
/// Returns false when `ancestor` is not in the tree.
pub fn contains(root: &Element, ancestor: &str, target: &str) -> bool {
    find_element(root, ancestor)
        .and_then(|subtree| find_element(subtree, target))
        .is_some()
}
