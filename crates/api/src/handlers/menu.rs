//! Handlers for menu administration and navigation.
//!
//! Every endpoint works inside the caller's permitted id-set, resolved per
//! request by the [`MemberMenus`] extractor.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use backoffice_core::error::CoreError;
use backoffice_core::menu::ROOT_PARENT_ID;
use backoffice_core::menu_ids::MenuIdSet;
use backoffice_core::pagination::clamp_page_size;
use backoffice_core::types::DbId;
use backoffice_db::models::menu::{CreateMenu, Menu, UpdateMenu};
use backoffice_db::navigation::admin::{self, ensure_permitted};
use backoffice_db::navigation::catalog;
use backoffice_db::navigation::pager::{self, ListQuery};
use backoffice_db::navigation::tree;
use backoffice_db::store::MenuStore;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::MemberMenus;
use crate::query::{ListOrder, LookupParams, MenuListParams, TreeParams};
use crate::response::{DataResponse, PagedResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn menu_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Menu", id })
}

/// A non-root parent must itself be visible to the caller.
fn ensure_parent_permitted(permitted: &MenuIdSet, parent_id: Option<DbId>) -> AppResult<()> {
    match parent_id {
        Some(pid) if pid != ROOT_PARENT_ID => Ok(ensure_permitted(permitted, pid)?),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// GET /menus
// ---------------------------------------------------------------------------

/// List one level of the permitted hierarchy, paginated and searchable.
pub async fn list_menus(
    auth: MemberMenus,
    State(state): State<AppState>,
    Query(params): Query<MenuListParams>,
) -> AppResult<impl IntoResponse> {
    let query = ListQuery {
        page: params.page.unwrap_or(1),
        page_size: clamp_page_size(params.page_size),
        search: params.search,
        parent_id: params.parent_id.unwrap_or(ROOT_PARENT_ID),
    };

    let store = state.menus.as_ref();
    let page = match params.order {
        ListOrder::Sort => pager::list_menus(store, &query, &auth.permitted).await?,
        ListOrder::Created => pager::list_menus_by_creation(store, &query, &auth.permitted).await?,
    };

    tracing::debug!(
        member_id = auth.member_id,
        count = page.rows.len(),
        total = page.total,
        "Listed menus"
    );
    Ok(Json(PagedResponse {
        data: page.rows,
        total: page.total,
    }))
}

// ---------------------------------------------------------------------------
// POST /menus
// ---------------------------------------------------------------------------

/// Create a menu.
pub async fn create_menu(
    auth: MemberMenus,
    State(state): State<AppState>,
    Json(input): Json<CreateMenu>,
) -> AppResult<impl IntoResponse> {
    ensure_parent_permitted(&auth.permitted, input.parent_id)?;

    let created = admin::create_menu(state.menus.as_ref(), &input).await?;
    tracing::info!(
        menu_id = created.id,
        name = %created.name,
        member_id = auth.member_id,
        "Menu created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /menus/{id}
// ---------------------------------------------------------------------------

/// Get a single permitted menu.
pub async fn get_menu(
    auth: MemberMenus,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_permitted(&auth.permitted, id)?;
    let menu = state
        .menus
        .find_by_id(id)
        .await?
        .ok_or_else(|| menu_not_found(id))?;
    Ok(Json(DataResponse { data: menu }))
}

// ---------------------------------------------------------------------------
// PUT /menus/{id}
// ---------------------------------------------------------------------------

/// Apply a partial update. Only present fields are written.
pub async fn update_menu(
    auth: MemberMenus,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMenu>,
) -> AppResult<impl IntoResponse> {
    ensure_permitted(&auth.permitted, id)?;
    ensure_parent_permitted(&auth.permitted, input.parent_id)?;

    let updated = admin::update_menu(state.menus.as_ref(), id, &input)
        .await?
        .ok_or_else(|| menu_not_found(id))?;
    tracing::info!(menu_id = id, member_id = auth.member_id, "Menu updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /menus/{id}
// ---------------------------------------------------------------------------

/// Delete a menu. Its children are left in place.
pub async fn delete_menu(
    auth: MemberMenus,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ensure_permitted(&auth.permitted, id)?;

    if !admin::delete_menu(state.menus.as_ref(), id).await? {
        return Err(menu_not_found(id));
    }
    tracing::info!(menu_id = id, member_id = auth.member_id, "Menu deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// GET /menus/lookup
// ---------------------------------------------------------------------------

/// Find a menu by its unique name.
///
/// Responds with `data: null` when no menu has that name.
pub async fn lookup_menu(
    auth: MemberMenus,
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> AppResult<impl IntoResponse> {
    let found: Option<Menu> = state.menus.find_by_name(params.name.trim()).await?;
    if let Some(menu) = &found {
        ensure_permitted(&auth.permitted, menu.id)?;
    }
    Ok(Json(DataResponse { data: found }))
}

// ---------------------------------------------------------------------------
// GET /menus/tree
// ---------------------------------------------------------------------------

/// Two-level navigation tree, optionally with active marking.
pub async fn menu_tree(
    auth: MemberMenus,
    State(state): State<AppState>,
    Query(params): Query<TreeParams>,
) -> AppResult<impl IntoResponse> {
    let store = state.menus.as_ref();
    let nodes = match params.active.as_deref() {
        Some(active) => {
            let active = MenuIdSet::parse(active);
            tree::build_active_tree(store, &auth.permitted, &active, params.root).await?
        }
        None => tree::build_tree(store, &auth.permitted, params.root).await?,
    };
    Ok(Json(DataResponse { data: nodes }))
}

// ---------------------------------------------------------------------------
// GET /menus/shortcuts
// ---------------------------------------------------------------------------

/// Every permitted menu in sort order, with the count.
pub async fn list_shortcuts(
    auth: MemberMenus,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let (menus, total) = catalog::list_shortcuts(state.menus.as_ref(), &auth.permitted).await?;
    Ok(Json(PagedResponse { data: menus, total }))
}

// ---------------------------------------------------------------------------
// GET /menus/routes
// ---------------------------------------------------------------------------

/// Map of `/module/url` routes to menu names for the caller.
pub async fn route_map(
    auth: MemberMenus,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let routes = catalog::route_map(state.menus.as_ref(), &auth.permitted).await?;
    Ok(Json(DataResponse { data: routes }))
}
