//! Parent/child consistency rules for the menu hierarchy.
//!
//! Menus form a forest keyed by `parent_id` (0 for roots). Navigation only
//! ever renders two levels, but nothing stops deeper chains from being
//! stored, so reparenting must not close a loop.

use crate::error::CoreError;
use crate::menu::ROOT_PARENT_ID;
use crate::types::DbId;

/// Upper bound on how many ancestors are walked when checking a new parent.
pub const MAX_ANCESTRY_DEPTH: usize = 64;

/// Check that `menu_id` may be placed under `new_parent`.
///
/// `parent_chain` is the ancestry of `new_parent`, starting with
/// `new_parent` itself and walking towards the root. The move is rejected
/// when the menu would become its own parent or an ancestor of itself.
pub fn validate_reparent(
    menu_id: DbId,
    new_parent: DbId,
    parent_chain: &[DbId],
) -> Result<(), CoreError> {
    if new_parent == ROOT_PARENT_ID {
        return Ok(());
    }
    if new_parent == menu_id {
        return Err(CoreError::Validation(
            "A menu can not be its own parent".to_string(),
        ));
    }
    if parent_chain.contains(&menu_id) {
        return Err(CoreError::Validation(format!(
            "Moving menu {menu_id} under {new_parent} would create a cycle"
        )));
    }
    if parent_chain.len() > MAX_ANCESTRY_DEPTH {
        return Err(CoreError::Validation(format!(
            "Menu nesting exceeds {MAX_ANCESTRY_DEPTH} levels"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
