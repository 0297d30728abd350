//! Repository for the `auth_groups` table.

use backoffice_core::menu_ids::MenuIdSet;
use backoffice_core::types::DbId;
use sqlx::PgPool;

use crate::models::auth_group::AuthGroup;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, rules, created_at, updated_at";

/// Provides lookups for authorization groups.
pub struct AuthGroupRepo;

impl AuthGroupRepo {
    /// Insert a group granting `rules`, returning the created row.
    ///
    /// The rules are stored in their canonical comma-delimited form.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        rules: &MenuIdSet,
    ) -> Result<AuthGroup, sqlx::Error> {
        let query = format!(
            "INSERT INTO auth_groups (title, rules)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuthGroup>(&query)
            .bind(title)
            .bind(rules.to_string())
            .fetch_one(pool)
            .await
    }

    /// Find a group by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AuthGroup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM auth_groups WHERE id = $1");
        sqlx::query_as::<_, AuthGroup>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
