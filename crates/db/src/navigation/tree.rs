//! Two-level menu tree assembly.
//!
//! A tree is fetched in two passes: the top-level rows first, then the
//! direct children of each row. Grandchildren are never resolved.

use backoffice_core::menu::ROOT_PARENT_ID;
use backoffice_core::menu_ids::MenuIdSet;
use backoffice_core::types::DbId;

use super::active::mark_active;
use crate::models::menu::{MenuFilter, MenuView};
use crate::store::{MenuStore, StoreResult};

/// Build the permitted menu tree.
///
/// Top-level rows are the menus in `permitted` (restricted to children of
/// `root` when given), ordered by sort key then id. Each row's children are
/// its direct children that are also in `permitted`, in the same order.
pub async fn build_tree<S>(
    store: &S,
    permitted: &MenuIdSet,
    root: Option<DbId>,
) -> StoreResult<Vec<MenuView>>
where
    S: MenuStore + ?Sized,
{
    let mut top_filter = MenuFilter::permitted(permitted);
    top_filter.parent_id = root;

    let top = store.find_filtered(&top_filter, None, 0).await?;

    let mut tree = Vec::with_capacity(top.len());
    for menu in top {
        let child_filter = MenuFilter::permitted(permitted).with_parent(menu.id);
        let children = store.find_filtered(&child_filter, None, 0).await?;
        tree.push(MenuView::new(menu, children));
    }
    Ok(tree)
}

/// Build the permitted tree and flag the nodes in `active`.
pub async fn build_active_tree<S>(
    store: &S,
    permitted: &MenuIdSet,
    active: &MenuIdSet,
    root: Option<DbId>,
) -> StoreResult<Vec<MenuView>>
where
    S: MenuStore + ?Sized,
{
    let mut tree = build_tree(store, permitted, root).await?;
    mark_active(&mut tree, active);
    Ok(tree)
}

/// Build the tree shown when editing an authorization group.
///
/// Top-level rows are the root menus in `grantable` (what the editor may
/// hand out). Children are listed without permission filtering so the
/// whole branch can be granted. Nodes already in `granted` are flagged
/// active.
pub async fn build_selection_tree<S>(
    store: &S,
    grantable: &MenuIdSet,
    granted: &MenuIdSet,
) -> StoreResult<Vec<MenuView>>
where
    S: MenuStore + ?Sized,
{
    let top_filter = MenuFilter::permitted(grantable).with_parent(ROOT_PARENT_ID);
    let top = store.find_filtered(&top_filter, None, 0).await?;

    let mut tree = Vec::with_capacity(top.len());
    for menu in top {
        let children = store
            .find_filtered(&MenuFilter::children_of(menu.id), None, 0)
            .await?;
        tree.push(MenuView::new(menu, children));
    }
    mark_active(&mut tree, granted);
    Ok(tree)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
