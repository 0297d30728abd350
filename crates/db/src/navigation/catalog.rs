//! Flat views over a member's permitted menus: shortcuts and the route map.

use std::collections::BTreeMap;

use backoffice_core::menu::route_key;
use backoffice_core::menu_ids::MenuIdSet;

use crate::models::menu::{Menu, MenuFilter};
use crate::store::{MenuStore, StoreResult};

/// All permitted menus in sort-key order, with their count.
pub async fn list_shortcuts<S>(store: &S, permitted: &MenuIdSet) -> StoreResult<(Vec<Menu>, i64)>
where
    S: MenuStore + ?Sized,
{
    let filter = MenuFilter::permitted(permitted);
    let menus = store.find_filtered(&filter, None, 0).await?;
    let count = store.count_filtered(&filter).await?;
    Ok((menus, count))
}

/// Map each permitted menu's console route (`/module` + `url`) to its name.
///
/// When two menus share a route, the one later in sort-key order wins.
pub async fn route_map<S>(store: &S, permitted: &MenuIdSet) -> StoreResult<BTreeMap<String, String>>
where
    S: MenuStore + ?Sized,
{
    let menus = store
        .find_filtered(&MenuFilter::permitted(permitted), None, 0)
        .await?;
    Ok(menus
        .into_iter()
        .map(|m| (route_key(&m.module, &m.url), m.name))
        .collect())
}
