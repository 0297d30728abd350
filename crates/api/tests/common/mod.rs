#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use backoffice_api::auth::jwt::{generate_access_token, JwtConfig};
use backoffice_api::config::ServerConfig;
use backoffice_api::router::build_app_router;
use backoffice_api::state::AppState;
use backoffice_core::menu_ids::MenuIdSet;
use backoffice_core::types::DbId;
use backoffice_db::models::menu::CreateMenu;
use backoffice_db::store::{MemoryStore, MenuStore};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Member whose group grants menus `1,3,5`.
pub const OPERATOR_ID: DbId = 1;
/// Member whose group grants every seeded menu.
pub const EDITOR_ID: DbId = 2;
/// Member pointing at a group that does not exist.
pub const ORPHAN_ID: DbId = 3;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_url: None,
        jwt: JwtConfig {
            secret: "test-secret-for-menu-api".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router over the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: MemoryStore) -> Router {
    let config = test_config();
    build_app_router(AppState::new(store, config.clone()), &config).unwrap()
}

fn new_menu(name: &str, parent_id: DbId, sort_key: i32, url: &str) -> CreateMenu {
    CreateMenu {
        name: name.to_string(),
        parent_id: Some(parent_id),
        sort_key: Some(sort_key),
        module: "admin".to_string(),
        url: url.to_string(),
        ..CreateMenu::default()
    }
}

/// Seed the reference menus and members:
///
/// ```text
/// 1 "Main Menu"      (root, sort 10)  /admin/main
/// └── 2 "Menu List"  (sort 1)         /admin/menus
/// 3 "Documents"      (root, sort 20)  /admin/documents
/// └── 4 "Archive"    (sort 1)         /admin/archive
/// 5 "Settings"       (root, sort 30)  /admin/settings
/// ```
pub async fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    for input in [
        new_menu("Main Menu", 0, 10, "/main"),
        new_menu("Menu List", 1, 1, "/menus"),
        new_menu("Documents", 0, 20, "/documents"),
        new_menu("Archive", 3, 1, "/archive"),
        new_menu("Settings", 0, 30, "/settings"),
    ] {
        store.insert(&input).await.unwrap();
    }

    let operators = store
        .add_auth_group("operators", &MenuIdSet::from([1, 3, 5]))
        .await;
    let editors = store
        .add_auth_group("editors", &MenuIdSet::from([1, 2, 3, 4, 5]))
        .await;
    store.add_member("operator", operators.id).await;
    store.add_member("editor", editors.id).await;
    store.add_member("orphan", 999).await;
    store
}

/// Mint a bearer token for the given member with the test secret.
pub fn token_for(member_id: DbId) -> String {
    generate_access_token(member_id, &test_config().jwt).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn authorized(method: Method, uri: &str, member_id: DbId) -> axum::http::request::Builder {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token_for(member_id)))
}

/// Send an unauthenticated GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send a GET request as `member_id`.
pub async fn get_as(app: Router, uri: &str, member_id: DbId) -> Response<Body> {
    let request = authorized(Method::GET, uri, member_id)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send a POST request with a JSON body as `member_id`.
pub async fn post_json_as(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    member_id: DbId,
) -> Response<Body> {
    let request = authorized(Method::POST, uri, member_id)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Send a PUT request with a JSON body as `member_id`.
pub async fn put_json_as(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    member_id: DbId,
) -> Response<Body> {
    let request = authorized(Method::PUT, uri, member_id)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Send a DELETE request as `member_id`.
pub async fn delete_as(app: Router, uri: &str, member_id: DbId) -> Response<Body> {
    let request = authorized(Method::DELETE, uri, member_id)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
