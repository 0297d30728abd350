//! Menu entity model, DTOs, query filters, and derived views.

use backoffice_core::menu::contains_ignore_case;
use backoffice_core::menu_ids::MenuIdSet;
use backoffice_core::types::{DbId, SortKey, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Publication status of a menu, stored as `SMALLINT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i16)]
#[serde(rename_all = "lowercase")]
pub enum MenuStatus {
    Inactive = 0,
    #[default]
    Active = 1,
}

/// A menu row from the `menu` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Menu {
    pub id: DbId,
    pub name: String,
    /// Parent menu id, `0` for top-level menus.
    #[sqlx(rename = "pid")]
    pub parent_id: DbId,
    /// Ordering among siblings, ascending.
    #[sqlx(rename = "sort")]
    pub sort_key: SortKey,
    pub module: String,
    pub url: String,
    #[sqlx(rename = "is_hide")]
    pub is_hidden: bool,
    pub is_shortcut: bool,
    pub status: MenuStatus,
    pub icon: Option<String>,
    #[sqlx(rename = "create_at")]
    pub created_at: Timestamp,
    #[sqlx(rename = "update_at")]
    pub updated_at: Timestamp,
}

/// DTO for creating a new menu.
///
/// The required string fields default to empty so that a missing field is
/// reported by validation rather than by body deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMenu {
    #[serde(default)]
    pub name: String,
    pub parent_id: Option<DbId>,
    pub sort_key: Option<SortKey>,
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub url: String,
    pub is_hidden: Option<bool>,
    pub is_shortcut: Option<bool>,
    pub status: Option<MenuStatus>,
    pub icon: Option<String>,
}

/// DTO for updating an existing menu. All fields are optional; only
/// present fields are written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMenu {
    pub name: Option<String>,
    pub parent_id: Option<DbId>,
    pub sort_key: Option<SortKey>,
    pub module: Option<String>,
    pub url: Option<String>,
    pub is_hidden: Option<bool>,
    pub is_shortcut: Option<bool>,
    pub status: Option<MenuStatus>,
    pub icon: Option<String>,
}

impl UpdateMenu {
    /// `true` when no field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.parent_id.is_none()
            && self.sort_key.is_none()
            && self.module.is_none()
            && self.url.is_none()
            && self.is_hidden.is_none()
            && self.is_shortcut.is_none()
            && self.status.is_none()
            && self.icon.is_none()
    }
}

// ---------------------------------------------------------------------------
// Query filters
// ---------------------------------------------------------------------------

/// Predicate for [`crate::store::MenuStore::find_filtered`].
///
/// Every `None` criterion is ignored. Results are always ordered by sort key
/// ascending, then id ascending.
#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    /// Restrict to these ids. An empty set matches nothing.
    pub ids: Option<MenuIdSet>,
    pub parent_id: Option<DbId>,
    /// Case-insensitive substring of the name, already trimmed.
    pub name_contains: Option<String>,
}

impl MenuFilter {
    /// Menus whose id is in `ids`.
    pub fn permitted(ids: &MenuIdSet) -> Self {
        Self {
            ids: Some(ids.clone()),
            ..Self::default()
        }
    }

    /// All direct children of `parent_id`, regardless of permission.
    pub fn children_of(parent_id: DbId) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Self::default()
        }
    }

    pub fn with_parent(mut self, parent_id: DbId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_name_search(mut self, term: Option<String>) -> Self {
        self.name_contains = term;
        self
    }

    /// In-process evaluation of the predicate.
    pub fn matches(&self, menu: &Menu) -> bool {
        if let Some(ids) = &self.ids {
            if !ids.contains(menu.id) {
                return false;
            }
        }
        if let Some(parent_id) = self.parent_id {
            if menu.parent_id != parent_id {
                return false;
            }
        }
        if let Some(term) = &self.name_contains {
            if !contains_ignore_case(&menu.name, term) {
                return false;
            }
        }
        true
    }
}

/// Parameters of the creation-time ordered search, which matches the term
/// against name, module, or url.
#[derive(Debug, Clone)]
pub struct MenuSearch {
    pub ids: MenuIdSet,
    pub parent_id: DbId,
    /// Trimmed search term; `None` matches every row.
    pub term: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl MenuSearch {
    /// In-process evaluation of the WHERE clause (pagination excluded).
    pub fn matches(&self, menu: &Menu) -> bool {
        if !self.ids.contains(menu.id) || menu.parent_id != self.parent_id {
            return false;
        }
        match &self.term {
            None => true,
            Some(term) => {
                contains_ignore_case(&menu.name, term)
                    || contains_ignore_case(&menu.module, term)
                    || contains_ignore_case(&menu.url, term)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

/// A second-level entry of a [`MenuView`].
#[derive(Debug, Clone, Serialize)]
pub struct MenuChild {
    #[serde(flatten)]
    pub menu: Menu,
    pub is_active: bool,
}

/// A top-level menu with its (filtered) direct children.
#[derive(Debug, Clone, Serialize)]
pub struct MenuView {
    #[serde(flatten)]
    pub menu: Menu,
    pub children: Vec<MenuChild>,
    /// `true` iff `children` is empty.
    pub is_childless: bool,
    pub is_active: bool,
}

impl MenuView {
    pub fn new(menu: Menu, children: Vec<Menu>) -> Self {
        let children: Vec<MenuChild> = children
            .into_iter()
            .map(|menu| MenuChild {
                menu,
                is_active: false,
            })
            .collect();
        Self {
            menu,
            is_childless: children.is_empty(),
            children,
            is_active: false,
        }
    }
}

/// A row of the paginated management listing.
#[derive(Debug, Clone, Serialize)]
pub struct MenuListRow {
    #[serde(flatten)]
    pub menu: Menu,
    /// Number of direct children, counted without permission filtering.
    pub child_count: i64,
}
