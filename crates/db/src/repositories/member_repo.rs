//! Repository for the `members` table.

use backoffice_core::types::DbId;
use sqlx::PgPool;

use crate::models::member::Member;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, auth_group_id, created_at, updated_at";

/// Provides lookups for console members.
pub struct MemberRepo;

impl MemberRepo {
    /// Insert a member into an authorization group, returning the created row.
    pub async fn create(
        pool: &PgPool,
        username: &str,
        auth_group_id: DbId,
    ) -> Result<Member, sqlx::Error> {
        let query = format!(
            "INSERT INTO members (username, auth_group_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(username)
            .bind(auth_group_id)
            .fetch_one(pool)
            .await
    }

    /// Find a member by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE id = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
