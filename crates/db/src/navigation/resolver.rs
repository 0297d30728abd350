//! Permission resolution: member -> authorization group -> permitted ids.

use backoffice_core::menu_ids::MenuIdSet;
use backoffice_core::types::DbId;

use crate::store::{IdentityStore, StoreResult};

/// Derive the menu ids a member's authorization group grants.
///
/// A missing member or group yields an empty set rather than an error, so
/// callers treat it as "no permissions". Storage failures are propagated.
/// The result is recomputed on every call.
pub async fn resolve_permitted_ids<S>(store: &S, member_id: DbId) -> StoreResult<MenuIdSet>
where
    S: IdentityStore + ?Sized,
{
    let Some(member) = store.find_member(member_id).await? else {
        tracing::debug!(member_id, "Member not found, no menu permissions");
        return Ok(MenuIdSet::new());
    };

    let Some(group) = store.find_auth_group(member.auth_group_id).await? else {
        tracing::debug!(
            member_id,
            auth_group_id = member.auth_group_id,
            "Authorization group not found, no menu permissions"
        );
        return Ok(MenuIdSet::new());
    };

    Ok(group.permitted_ids())
}
