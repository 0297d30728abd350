//! Member entity model.

use backoffice_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A console member row from the `members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Member {
    pub id: DbId,
    pub username: String,
    /// The single authorization group this member belongs to.
    pub auth_group_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
