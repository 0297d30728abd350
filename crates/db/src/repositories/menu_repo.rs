//! Repository for the `menu` table.

use backoffice_core::menu::{contains_pattern, DEFAULT_SORT_KEY, ROOT_PARENT_ID};
use backoffice_core::types::DbId;
use sqlx::PgPool;

use crate::models::menu::{CreateMenu, Menu, MenuFilter, MenuSearch, UpdateMenu};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, pid, sort, module, url, is_hide, is_shortcut, status, icon, \
                       create_at, update_at";

/// Table-qualified column list for the raw creation-ordered search.
const QUALIFIED_COLUMNS: &str = "menu.id, menu.name, menu.pid, menu.sort, menu.module, \
                                 menu.url, menu.is_hide, menu.is_shortcut, menu.status, \
                                 menu.icon, menu.create_at, menu.update_at";

/// WHERE clause for [`MenuFilter`]. `$1` ids, `$2` parent, `$3` name pattern.
const FILTER_CLAUSE: &str = "($1::BIGINT[] IS NULL OR id = ANY($1)) \
                             AND ($2::BIGINT IS NULL OR pid = $2) \
                             AND ($3::TEXT IS NULL OR name ILIKE $3 ESCAPE '\\')";

/// Provides CRUD and filtered listing for menus.
pub struct MenuRepo;

impl MenuRepo {
    /// Insert a new menu, returning the created row.
    ///
    /// Absent optional fields take their defaults (root parent, sort key 1,
    /// visible, not a shortcut, active).
    pub async fn create(pool: &PgPool, input: &CreateMenu) -> Result<Menu, sqlx::Error> {
        let query = format!(
            "INSERT INTO menu (name, pid, sort, module, url, is_hide, is_shortcut, status, icon)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Menu>(&query)
            .bind(&input.name)
            .bind(input.parent_id.unwrap_or(ROOT_PARENT_ID))
            .bind(input.sort_key.unwrap_or(DEFAULT_SORT_KEY))
            .bind(&input.module)
            .bind(&input.url)
            .bind(input.is_hidden.unwrap_or(false))
            .bind(input.is_shortcut.unwrap_or(false))
            .bind(input.status.unwrap_or_default())
            .bind(&input.icon)
            .fetch_one(pool)
            .await
    }

    /// Find a menu by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Menu>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM menu WHERE id = $1");
        sqlx::query_as::<_, Menu>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a menu by its unique name (case-sensitive).
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Menu>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM menu WHERE name = $1");
        sqlx::query_as::<_, Menu>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Update a menu. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMenu,
    ) -> Result<Option<Menu>, sqlx::Error> {
        let query = format!(
            "UPDATE menu SET
                name = COALESCE($2, name),
                pid = COALESCE($3, pid),
                sort = COALESCE($4, sort),
                module = COALESCE($5, module),
                url = COALESCE($6, url),
                is_hide = COALESCE($7, is_hide),
                is_shortcut = COALESCE($8, is_shortcut),
                status = COALESCE($9, status),
                icon = COALESCE($10, icon),
                update_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Menu>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.parent_id)
            .bind(input.sort_key)
            .bind(&input.module)
            .bind(&input.url)
            .bind(input.is_hidden)
            .bind(input.is_shortcut)
            .bind(input.status)
            .bind(&input.icon)
            .fetch_optional(pool)
            .await
    }

    /// Delete a menu. Returns `true` if a row was removed.
    ///
    /// Children are left in place with a dangling `pid`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM menu WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the direct children of a menu, without permission filtering.
    pub async fn count_by_parent(pool: &PgPool, parent_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM menu WHERE pid = $1")
            .bind(parent_id)
            .fetch_one(pool)
            .await
    }

    /// List menus matching `filter`, ordered by sort key then id.
    ///
    /// A `limit` of `None` returns every matching row.
    pub async fn find_filtered(
        pool: &PgPool,
        filter: &MenuFilter,
        limit: Option<i64>,
        offset: i64,
    ) -> Result<Vec<Menu>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM menu
             WHERE {FILTER_CLAUSE}
             ORDER BY sort ASC, id ASC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Menu>(&query)
            .bind(filter.ids.as_ref().map(|ids| ids.to_vec()))
            .bind(filter.parent_id)
            .bind(filter.name_contains.as_deref().map(contains_pattern))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count menus matching `filter`.
    pub async fn count_filtered(pool: &PgPool, filter: &MenuFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM menu WHERE {FILTER_CLAUSE}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(filter.ids.as_ref().map(|ids| ids.to_vec()))
            .bind(filter.parent_id)
            .bind(filter.name_contains.as_deref().map(contains_pattern))
            .fetch_one(pool)
            .await
    }

    /// Raw search ordered by creation time, with the permitted ids embedded
    /// in the statement as a literal list.
    ///
    /// The term is matched against name, module, and url. An empty id set
    /// yields no rows without touching the database.
    pub async fn search_by_creation(
        pool: &PgPool,
        search: &MenuSearch,
    ) -> Result<Vec<Menu>, sqlx::Error> {
        let Some(id_list) = search.ids.to_sql_list() else {
            return Ok(Vec::new());
        };
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS} FROM menu
             WHERE {}
             ORDER BY menu.create_at ASC, menu.id ASC
             LIMIT $3 OFFSET $4",
            search_clause(&id_list)
        );
        sqlx::query_as::<_, Menu>(&query)
            .bind(search.parent_id)
            .bind(search_pattern(search))
            .bind(search.limit)
            .bind(search.offset)
            .fetch_all(pool)
            .await
    }

    /// Count the rows [`MenuRepo::search_by_creation`] would match without
    /// pagination.
    pub async fn count_search(pool: &PgPool, search: &MenuSearch) -> Result<i64, sqlx::Error> {
        let Some(id_list) = search.ids.to_sql_list() else {
            return Ok(0);
        };
        let query = format!("SELECT COUNT(*) FROM menu WHERE {}", search_clause(&id_list));
        sqlx::query_scalar::<_, i64>(&query)
            .bind(search.parent_id)
            .bind(search_pattern(search))
            .fetch_one(pool)
            .await
    }
}

/// `$1` parent, `$2` pattern. `id_list` comes from `MenuIdSet::to_sql_list`
/// and holds only digits and commas.
fn search_clause(id_list: &str) -> String {
    format!(
        "(menu.id IN ({id_list})) AND menu.pid = $1 \
         AND (menu.name ILIKE $2 OR menu.module ILIKE $2 OR menu.url ILIKE $2)"
    )
}

fn search_pattern(search: &MenuSearch) -> String {
    contains_pattern(search.term.as_deref().unwrap_or(""))
}
