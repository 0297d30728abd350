//! Shared query parameter types for API handlers.

use backoffice_core::types::DbId;
use serde::Deserialize;

/// Row ordering for `GET /menus`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    /// Sort key, then id. Search matches the name only.
    #[default]
    Sort,
    /// Creation time, then id. Search matches name, module, and url.
    Created,
}

/// Query parameters for the menu listing (`?page=&page_size=&search=&parent_id=&order=`).
///
/// `page` defaults to 1 and `parent_id` to the root. `page_size` is clamped
/// via `backoffice_core::pagination::clamp_page_size`.
#[derive(Debug, Default, Deserialize)]
pub struct MenuListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub search: Option<String>,
    pub parent_id: Option<DbId>,
    #[serde(default)]
    pub order: ListOrder,
}

/// Query parameters for the menu tree (`?root=&active=1,3`).
#[derive(Debug, Default, Deserialize)]
pub struct TreeParams {
    /// Restrict the top level to children of this menu.
    pub root: Option<DbId>,
    /// Comma-separated ids to flag as active.
    pub active: Option<String>,
}

/// Query parameters for the name lookup (`?name=`).
#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub name: String,
}
