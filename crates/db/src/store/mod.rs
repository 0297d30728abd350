//! Storage seam for the menu-authorization services.
//!
//! The services in [`crate::navigation`] are written against the
//! [`MenuStore`] and [`IdentityStore`] traits. Two implementations exist:
//!
//! - [`PgStore`] -- PostgreSQL via the sqlx repositories
//! - [`MemoryStore`] -- in-process maps, for tests and local development
//!
//! Stores are constructed explicitly and handed to the application state;
//! there is no process-wide registry.

use async_trait::async_trait;
use backoffice_core::error::CoreError;
use backoffice_core::types::DbId;

use crate::models::auth_group::AuthGroup;
use crate::models::member::Member;
use crate::models::menu::{CreateMenu, Menu, MenuFilter, MenuSearch, UpdateMenu};

pub mod memory;
pub mod pg;

pub use memory::MemoryStore;
pub use pg::PgStore;

/// Errors raised by a store.
///
/// Database errors are passed through unmodified; domain rejections
/// (empty update, duplicate name) are reported as [`CoreError`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations on the flat menu table.
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// Insert a menu, returning the stored row with its generated id.
    async fn insert(&self, input: &CreateMenu) -> StoreResult<Menu>;

    /// Apply the present fields of `input`.
    ///
    /// Rejects a patch without any present field with
    /// [`CoreError::EmptyUpdate`] before writing. Returns `None` if the menu
    /// does not exist.
    async fn update(&self, id: DbId, input: &UpdateMenu) -> StoreResult<Option<Menu>>;

    /// Delete a menu. Returns `true` if a row was removed.
    async fn delete(&self, id: DbId) -> StoreResult<bool>;

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Menu>>;

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Menu>>;

    /// Number of direct children of `parent_id`, ignoring permissions.
    async fn count_by_parent(&self, parent_id: DbId) -> StoreResult<i64>;

    /// Menus matching `filter` ordered by sort key then id, paginated.
    async fn find_filtered(
        &self,
        filter: &MenuFilter,
        limit: Option<i64>,
        offset: i64,
    ) -> StoreResult<Vec<Menu>>;

    async fn count_filtered(&self, filter: &MenuFilter) -> StoreResult<i64>;

    /// Menus matching `search` ordered by creation time then id, paginated.
    async fn search_by_creation(&self, search: &MenuSearch) -> StoreResult<Vec<Menu>>;

    /// Unpaginated match count for [`MenuStore::search_by_creation`].
    async fn count_search(&self, search: &MenuSearch) -> StoreResult<i64>;

    /// Verify the backing storage is reachable.
    async fn health_check(&self) -> StoreResult<()>;
}

/// Key-to-record lookups for members and their authorization groups.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_member(&self, id: DbId) -> StoreResult<Option<Member>>;

    async fn find_auth_group(&self, id: DbId) -> StoreResult<Option<AuthGroup>>;
}

/// Shared guard for [`MenuStore::update`] implementations.
fn ensure_update_not_empty(input: &UpdateMenu) -> StoreResult<()> {
    if input.is_empty() {
        return Err(CoreError::EmptyUpdate.into());
    }
    Ok(())
}
