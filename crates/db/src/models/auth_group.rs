//! Authorization group entity model.

use backoffice_core::menu_ids::MenuIdSet;
use backoffice_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An authorization group row from the `auth_groups` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuthGroup {
    pub id: DbId,
    pub title: String,
    /// Comma-delimited menu ids granted to the group, as stored.
    pub rules: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AuthGroup {
    /// The granted menu ids, parsed from [`AuthGroup::rules`].
    pub fn permitted_ids(&self) -> MenuIdSet {
        MenuIdSet::parse(&self.rules)
    }
}
