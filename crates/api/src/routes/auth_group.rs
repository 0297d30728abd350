//! Route definitions for authorization groups, mounted at `/auth-groups`.

use axum::routing::get;
use axum::Router;

use crate::handlers::auth_group;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/menus", get(auth_group::group_menu_selection))
}
