//! Permission-filtered, searchable, paginated menu listing.

use backoffice_core::menu::normalize_search;
use backoffice_core::menu_ids::MenuIdSet;
use backoffice_core::pagination::page_offset;
use backoffice_core::types::DbId;
use serde::Serialize;

use crate::models::menu::{Menu, MenuFilter, MenuListRow, MenuSearch};
use crate::store::{MenuStore, StoreResult};

/// Listing request for one level of the menu hierarchy.
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// 1-based page; values at or below 1 select the first page.
    pub page: i64,
    /// Rows per page, expected to be positive.
    pub page_size: i64,
    /// Free-text search, trimmed before use. Blank means no filter.
    pub search: Option<String>,
    pub parent_id: DbId,
}

/// One page of listing rows and the unpaginated match count.
#[derive(Debug, Clone, Serialize)]
pub struct MenuPage {
    pub rows: Vec<MenuListRow>,
    pub total: i64,
}

/// List permitted menus under `query.parent_id` whose name contains the
/// search term, ordered by sort key.
pub async fn list_menus<S>(
    store: &S,
    query: &ListQuery,
    permitted: &MenuIdSet,
) -> StoreResult<MenuPage>
where
    S: MenuStore + ?Sized,
{
    let filter = MenuFilter::permitted(permitted)
        .with_parent(query.parent_id)
        .with_name_search(normalize_search(query.search.as_deref()));
    let offset = page_offset(query.page, query.page_size);

    let menus = store
        .find_filtered(&filter, Some(query.page_size), offset)
        .await?;
    let rows = with_child_counts(store, menus).await?;
    let total = store.count_filtered(&filter).await?;

    Ok(MenuPage { rows, total })
}

/// Same listing through the raw creation-ordered query.
///
/// The search term is matched against name, module, and url, and rows are
/// ordered by creation time instead of sort key.
pub async fn list_menus_by_creation<S>(
    store: &S,
    query: &ListQuery,
    permitted: &MenuIdSet,
) -> StoreResult<MenuPage>
where
    S: MenuStore + ?Sized,
{
    let search = MenuSearch {
        ids: permitted.clone(),
        parent_id: query.parent_id,
        term: normalize_search(query.search.as_deref()),
        limit: query.page_size,
        offset: page_offset(query.page, query.page_size),
    };

    let menus = store.search_by_creation(&search).await?;
    let rows = with_child_counts(store, menus).await?;
    let total = store.count_search(&search).await?;

    Ok(MenuPage { rows, total })
}

/// Attach the unfiltered direct-child count to each menu.
async fn with_child_counts<S>(store: &S, menus: Vec<Menu>) -> StoreResult<Vec<MenuListRow>>
where
    S: MenuStore + ?Sized,
{
    let mut rows = Vec::with_capacity(menus.len());
    for menu in menus {
        let child_count = store.count_by_parent(menu.id).await?;
        rows.push(MenuListRow { menu, child_count });
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
