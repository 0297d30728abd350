//! Shared fixtures for the navigation unit tests.

use backoffice_core::menu_ids::MenuIdSet;
use backoffice_core::types::DbId;
use chrono::{Duration, TimeZone, Utc};

use crate::models::menu::{Menu, MenuStatus};
use crate::store::MemoryStore;

/// A menu row with a name derived from its id and a creation time that
/// increases with the id.
pub fn menu(id: DbId, parent_id: DbId, sort_key: i32) -> Menu {
    named(id, &format!("Menu {id}"), parent_id, sort_key)
}

pub fn named(id: DbId, name: &str, parent_id: DbId, sort_key: i32) -> Menu {
    let created_at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(id);
    Menu {
        id,
        name: name.to_string(),
        parent_id,
        sort_key,
        module: "admin".to_string(),
        url: format!("/menu-{id}"),
        is_hidden: false,
        is_shortcut: false,
        status: MenuStatus::Active,
        icon: None,
        created_at,
        updated_at: created_at,
    }
}

/// The reference tree:
///
/// ```text
/// 1 "Main Menu"      (root, sort 10)
/// └── 2 "Menu List"  (sort 1)
/// 3 "Documents"      (root, sort 20)
/// └── 4 "Archive"    (sort 1)
/// 5 "Settings"       (root, sort 30)
/// ```
///
/// plus a member (id 1) whose group grants `1,3,5`.
pub async fn reference_store() -> MemoryStore {
    let store = MemoryStore::new();
    for menu in [
        named(1, "Main Menu", 0, 10),
        named(2, "Menu List", 1, 1),
        named(3, "Documents", 0, 20),
        named(4, "Archive", 3, 1),
        named(5, "Settings", 0, 30),
    ] {
        store.put_menu(menu).await;
    }
    let group = store.add_auth_group("operators", &MenuIdSet::from([1, 3, 5])).await;
    store.add_member("operator", group.id).await;
    store
}
