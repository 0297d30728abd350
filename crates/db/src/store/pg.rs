//! PostgreSQL-backed store delegating to the sqlx repositories.

use async_trait::async_trait;
use backoffice_core::types::DbId;

use super::{ensure_update_not_empty, IdentityStore, MenuStore, StoreResult};
use crate::models::auth_group::AuthGroup;
use crate::models::member::Member;
use crate::models::menu::{CreateMenu, Menu, MenuFilter, MenuSearch, UpdateMenu};
use crate::repositories::{AuthGroupRepo, MemberRepo, MenuRepo};
use crate::DbPool;

/// Store over a PostgreSQL connection pool. Cheap to clone.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuStore for PgStore {
    async fn insert(&self, input: &CreateMenu) -> StoreResult<Menu> {
        Ok(MenuRepo::create(&self.pool, input).await?)
    }

    async fn update(&self, id: DbId, input: &UpdateMenu) -> StoreResult<Option<Menu>> {
        ensure_update_not_empty(input)?;
        Ok(MenuRepo::update(&self.pool, id, input).await?)
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        Ok(MenuRepo::delete(&self.pool, id).await?)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Menu>> {
        Ok(MenuRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Menu>> {
        Ok(MenuRepo::find_by_name(&self.pool, name).await?)
    }

    async fn count_by_parent(&self, parent_id: DbId) -> StoreResult<i64> {
        Ok(MenuRepo::count_by_parent(&self.pool, parent_id).await?)
    }

    async fn find_filtered(
        &self,
        filter: &MenuFilter,
        limit: Option<i64>,
        offset: i64,
    ) -> StoreResult<Vec<Menu>> {
        Ok(MenuRepo::find_filtered(&self.pool, filter, limit, offset).await?)
    }

    async fn count_filtered(&self, filter: &MenuFilter) -> StoreResult<i64> {
        Ok(MenuRepo::count_filtered(&self.pool, filter).await?)
    }

    async fn search_by_creation(&self, search: &MenuSearch) -> StoreResult<Vec<Menu>> {
        Ok(MenuRepo::search_by_creation(&self.pool, search).await?)
    }

    async fn count_search(&self, search: &MenuSearch) -> StoreResult<i64> {
        Ok(MenuRepo::count_search(&self.pool, search).await?)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}

#[async_trait]
impl IdentityStore for PgStore {
    async fn find_member(&self, id: DbId) -> StoreResult<Option<Member>> {
        Ok(MemberRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_auth_group(&self, id: DbId) -> StoreResult<Option<AuthGroup>> {
        Ok(AuthGroupRepo::find_by_id(&self.pool, id).await?)
    }
}
