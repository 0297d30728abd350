pub mod auth_group;
pub mod health;
pub mod menu;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /menus                                   list, create
/// /menus/lookup                            find by name (GET)
/// /menus/tree                              navigation tree (GET)
/// /menus/shortcuts                         shortcut listing (GET)
/// /menus/routes                            route map (GET)
/// /menus/{id}                              get, update, delete
///
/// /auth-groups/{id}/menus                  group menu selection (GET)
/// ```
///
/// Every route requires a bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/menus", menu::router())
        .nest("/auth-groups", auth_group::router())
}
