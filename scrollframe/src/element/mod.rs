mod node;

pub use node::{Accessibility, Content, Element, Handler, NodeRef, Role, Slot};

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

/// Find the element occupying a widget slot.
pub fn find_slot(root: &Element, slot: Slot) -> Option<&Element> {
    if root.slot == Some(slot) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_slot(child, slot) {
                return Some(found);
            }
        }
    }

    None
}
