//! In-process store.
//!
//! Keeps menus, members, and authorization groups in maps behind a tokio
//! `RwLock`. Data is lost when the process exits. Used by the test suites
//! and for running the API without a database.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use backoffice_core::error::CoreError;
use backoffice_core::menu::{DEFAULT_SORT_KEY, ROOT_PARENT_ID};
use backoffice_core::menu_ids::MenuIdSet;
use backoffice_core::types::DbId;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{ensure_update_not_empty, IdentityStore, MenuStore, StoreResult};
use crate::models::auth_group::AuthGroup;
use crate::models::member::Member;
use crate::models::menu::{CreateMenu, Menu, MenuFilter, MenuSearch, UpdateMenu};

#[derive(Default)]
struct State {
    menus: BTreeMap<DbId, Menu>,
    members: HashMap<DbId, Member>,
    groups: HashMap<DbId, AuthGroup>,
    last_menu_id: DbId,
    last_member_id: DbId,
    last_group_id: DbId,
}

impl State {
    fn ensure_unique_name(&self, name: &str, except: Option<DbId>) -> StoreResult<()> {
        let taken = self
            .menus
            .values()
            .any(|m| m.name == name && Some(m.id) != except);
        if taken {
            return Err(CoreError::Conflict(format!("Menu name '{name}' already exists")).into());
        }
        Ok(())
    }
}

/// In-memory menu and identity store. Clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fully formed menu row as-is, replacing any row with the same id.
    ///
    /// Lets callers control ids and timestamps when seeding fixtures.
    pub async fn put_menu(&self, menu: Menu) {
        let mut state = self.state.write().await;
        state.last_menu_id = state.last_menu_id.max(menu.id);
        state.menus.insert(menu.id, menu);
    }

    /// Create an authorization group granting `rules`.
    pub async fn add_auth_group(&self, title: &str, rules: &MenuIdSet) -> AuthGroup {
        let mut state = self.state.write().await;
        state.last_group_id += 1;
        let now = Utc::now();
        let group = AuthGroup {
            id: state.last_group_id,
            title: title.to_string(),
            rules: rules.to_string(),
            created_at: now,
            updated_at: now,
        };
        state.groups.insert(group.id, group.clone());
        group
    }

    /// Create a member of the given authorization group.
    pub async fn add_member(&self, username: &str, auth_group_id: DbId) -> Member {
        let mut state = self.state.write().await;
        state.last_member_id += 1;
        let now = Utc::now();
        let member = Member {
            id: state.last_member_id,
            username: username.to_string(),
            auth_group_id,
            created_at: now,
            updated_at: now,
        };
        state.members.insert(member.id, member.clone());
        member
    }
}

fn paginate(rows: Vec<Menu>, limit: Option<i64>, offset: i64) -> Vec<Menu> {
    let skip = usize::try_from(offset).unwrap_or(0);
    let take = limit
        .map(|l| usize::try_from(l).unwrap_or(0))
        .unwrap_or(usize::MAX);
    rows.into_iter().skip(skip).take(take).collect()
}

#[async_trait]
impl MenuStore for MemoryStore {
    async fn insert(&self, input: &CreateMenu) -> StoreResult<Menu> {
        let mut state = self.state.write().await;
        state.ensure_unique_name(&input.name, None)?;

        state.last_menu_id += 1;
        let now = Utc::now();
        let menu = Menu {
            id: state.last_menu_id,
            name: input.name.clone(),
            parent_id: input.parent_id.unwrap_or(ROOT_PARENT_ID),
            sort_key: input.sort_key.unwrap_or(DEFAULT_SORT_KEY),
            module: input.module.clone(),
            url: input.url.clone(),
            is_hidden: input.is_hidden.unwrap_or(false),
            is_shortcut: input.is_shortcut.unwrap_or(false),
            status: input.status.unwrap_or_default(),
            icon: input.icon.clone(),
            created_at: now,
            updated_at: now,
        };
        state.menus.insert(menu.id, menu.clone());
        Ok(menu)
    }

    async fn update(&self, id: DbId, input: &UpdateMenu) -> StoreResult<Option<Menu>> {
        ensure_update_not_empty(input)?;

        let mut state = self.state.write().await;
        if !state.menus.contains_key(&id) {
            return Ok(None);
        }
        if let Some(name) = &input.name {
            state.ensure_unique_name(name, Some(id))?;
        }

        let Some(menu) = state.menus.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = &input.name {
            menu.name = name.clone();
        }
        if let Some(parent_id) = input.parent_id {
            menu.parent_id = parent_id;
        }
        if let Some(sort_key) = input.sort_key {
            menu.sort_key = sort_key;
        }
        if let Some(module) = &input.module {
            menu.module = module.clone();
        }
        if let Some(url) = &input.url {
            menu.url = url.clone();
        }
        if let Some(is_hidden) = input.is_hidden {
            menu.is_hidden = is_hidden;
        }
        if let Some(is_shortcut) = input.is_shortcut {
            menu.is_shortcut = is_shortcut;
        }
        if let Some(status) = input.status {
            menu.status = status;
        }
        if let Some(icon) = &input.icon {
            menu.icon = Some(icon.clone());
        }
        menu.updated_at = Utc::now();
        Ok(Some(menu.clone()))
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.state.write().await.menus.remove(&id).is_some())
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Menu>> {
        Ok(self.state.read().await.menus.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Menu>> {
        let state = self.state.read().await;
        Ok(state.menus.values().find(|m| m.name == name).cloned())
    }

    async fn count_by_parent(&self, parent_id: DbId) -> StoreResult<i64> {
        let state = self.state.read().await;
        Ok(state.menus.values().filter(|m| m.parent_id == parent_id).count() as i64)
    }

    async fn find_filtered(
        &self,
        filter: &MenuFilter,
        limit: Option<i64>,
        offset: i64,
    ) -> StoreResult<Vec<Menu>> {
        let state = self.state.read().await;
        // BTreeMap iteration is id-ascending; the stable sort keeps that as
        // the tie-break.
        let mut rows: Vec<Menu> = state
            .menus
            .values()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect();
        rows.sort_by_key(|m| m.sort_key);
        Ok(paginate(rows, limit, offset))
    }

    async fn count_filtered(&self, filter: &MenuFilter) -> StoreResult<i64> {
        let state = self.state.read().await;
        Ok(state.menus.values().filter(|m| filter.matches(m)).count() as i64)
    }

    async fn search_by_creation(&self, search: &MenuSearch) -> StoreResult<Vec<Menu>> {
        let state = self.state.read().await;
        let mut rows: Vec<Menu> = state
            .menus
            .values()
            .filter(|m| search.matches(m))
            .cloned()
            .collect();
        rows.sort_by_key(|m| m.created_at);
        Ok(paginate(rows, Some(search.limit), search.offset))
    }

    async fn count_search(&self, search: &MenuSearch) -> StoreResult<i64> {
        let state = self.state.read().await;
        Ok(state.menus.values().filter(|m| search.matches(m)).count() as i64)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[async_trait]
impl IdentityStore for MemoryStore {
    async fn find_member(&self, id: DbId) -> StoreResult<Option<Member>> {
        Ok(self.state.read().await.members.get(&id).cloned())
    }

    async fn find_auth_group(&self, id: DbId) -> StoreResult<Option<AuthGroup>> {
        Ok(self.state.read().await.groups.get(&id).cloned())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
