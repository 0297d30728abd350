//! Handlers for editing authorization groups.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use backoffice_core::error::CoreError;
use backoffice_core::types::DbId;
use backoffice_db::navigation::tree::build_selection_tree;
use backoffice_db::store::IdentityStore;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::MemberMenus;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /auth-groups/{id}/menus
// ---------------------------------------------------------------------------

/// Menu selection tree for a group editor.
///
/// The caller can only hand out what they hold themselves, so the top level
/// is limited to the caller's permitted root menus. Nodes the group already
/// grants are flagged active.
pub async fn group_menu_selection(
    auth: MemberMenus,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let group = state
        .identities
        .find_auth_group(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AuthGroup",
            id,
        }))?;

    let nodes =
        build_selection_tree(state.menus.as_ref(), &auth.permitted, &group.permitted_ids()).await?;
    tracing::debug!(
        auth_group_id = id,
        member_id = auth.member_id,
        roots = nodes.len(),
        "Built group menu selection"
    );
    Ok(Json(DataResponse { data: nodes }))
}
