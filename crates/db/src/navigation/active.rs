//! Active-path marking for navigation highlighting.

use backoffice_core::menu_ids::MenuIdSet;

use crate::models::menu::MenuView;

/// Flag every node of `tree` whose id is in `active`.
///
/// Top-level nodes and children are marked independently: an active child
/// does not mark its parent, and an active parent does not mark its
/// children.
pub fn mark_active(tree: &mut [MenuView], active: &MenuIdSet) {
    for view in tree.iter_mut() {
        view.is_active = active.contains(view.menu.id);
        for child in view.children.iter_mut() {
            child.is_active = active.contains(child.menu.id);
        }
    }
}
