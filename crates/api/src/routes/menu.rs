//! Route definitions for menus, mounted at `/menus`.
//!
//! ```text
//! GET    /              list_menus
//! POST   /              create_menu
//! GET    /lookup        lookup_menu
//! GET    /tree          menu_tree
//! GET    /shortcuts     list_shortcuts
//! GET    /routes        route_map
//! GET    /{id}          get_menu
//! PUT    /{id}          update_menu
//! DELETE /{id}          delete_menu
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::menu;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(menu::list_menus).post(menu::create_menu))
        .route("/lookup", get(menu::lookup_menu))
        .route("/tree", get(menu::menu_tree))
        .route("/shortcuts", get(menu::list_shortcuts))
        .route("/routes", get(menu::route_map))
        .route(
            "/{id}",
            get(menu::get_menu)
                .put(menu::update_menu)
                .delete(menu::delete_menu),
        )
}
