//! HTTP-level integration tests for the menu endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener, over the in-process store.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_as, get, get_as, post_json_as, put_json_as, seeded_store, EDITOR_ID,
    OPERATOR_ID, ORPHAN_ID,
};
use serde_json::json;

fn ids(items: &serde_json::Value) -> Vec<i64> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_missing_token_returns_401() {
    let app = common::build_test_app(seeded_store().await);
    let response = get(app, "/api/v1/menus").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_member_without_group_sees_nothing() {
    let app = common::build_test_app(seeded_store().await);
    let response = get_as(app, "/api/v1/menus/tree", ORPHAN_ID).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], json!([]));
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_roots_with_child_counts() {
    let app = common::build_test_app(seeded_store().await);
    let response = get_as(app, "/api/v1/menus", OPERATOR_ID).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(ids(&json["data"]), vec![1, 3, 5]);
    assert_eq!(json["total"], 3);
    // Child counts ignore permissions.
    assert_eq!(json["data"][0]["child_count"], 1);
    assert_eq!(json["data"][2]["child_count"], 0);
}

#[tokio::test]
async fn test_list_search_paginates_with_stable_total() {
    let store = seeded_store().await;

    let app = common::build_test_app(store.clone());
    let response = get_as(app, "/api/v1/menus?search=men&page_size=1", OPERATOR_ID).await;
    let json = body_json(response).await;
    assert_eq!(ids(&json["data"]), vec![1]);
    assert_eq!(json["total"], 2);

    let app = common::build_test_app(store);
    let response = get_as(
        app,
        "/api/v1/menus?search=men&page_size=1&page=2",
        OPERATOR_ID,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(ids(&json["data"]), vec![3]);
    assert_eq!(json["total"], 2);
}

#[tokio::test]
async fn test_list_children_of_parent() {
    let app = common::build_test_app(seeded_store().await);
    let response = get_as(app, "/api/v1/menus?parent_id=3", EDITOR_ID).await;

    let json = body_json(response).await;
    assert_eq!(ids(&json["data"]), vec![4]);
    assert_eq!(json["total"], 1);
}

#[tokio::test]
async fn test_list_by_creation_searches_url() {
    let app = common::build_test_app(seeded_store().await);
    let response = get_as(
        app,
        "/api/v1/menus?order=created&search=settings",
        OPERATOR_ID,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(ids(&json["data"]), vec![5]);
    assert_eq!(json["total"], 1);
}

// ---------------------------------------------------------------------------
// Tree
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_tree_filters_both_levels() {
    let app = common::build_test_app(seeded_store().await);
    let response = get_as(app, "/api/v1/menus/tree", OPERATOR_ID).await;

    let json = body_json(response).await;
    assert_eq!(ids(&json["data"]), vec![1, 3, 5]);
    for node in json["data"].as_array().unwrap() {
        assert_eq!(node["is_childless"], true);
        assert_eq!(node["children"], json!([]));
    }
}

#[tokio::test]
async fn test_tree_under_root_includes_permitted_children() {
    let app = common::build_test_app(seeded_store().await);
    let response = get_as(app, "/api/v1/menus/tree?root=0", EDITOR_ID).await;

    let json = body_json(response).await;
    assert_eq!(ids(&json["data"]), vec![1, 3, 5]);
    assert_eq!(ids(&json["data"][0]["children"]), vec![2]);
    assert_eq!(json["data"][0]["is_childless"], false);
    assert_eq!(json["data"][2]["is_childless"], true);
}

#[tokio::test]
async fn test_tree_marks_active_nodes() {
    let app = common::build_test_app(seeded_store().await);
    let response = get_as(app, "/api/v1/menus/tree?root=0&active=3,4", EDITOR_ID).await;

    let json = body_json(response).await;
    let nodes = json["data"].as_array().unwrap();
    assert_eq!(nodes[0]["is_active"], false);
    assert_eq!(nodes[1]["is_active"], true);
    assert_eq!(nodes[1]["children"][0]["is_active"], true);
    assert_eq!(nodes[2]["is_active"], false);
}

// ---------------------------------------------------------------------------
// Shortcuts and routes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_shortcuts_list_all_permitted_menus() {
    let app = common::build_test_app(seeded_store().await);
    let response = get_as(app, "/api/v1/menus/shortcuts", OPERATOR_ID).await;

    let json = body_json(response).await;
    assert_eq!(ids(&json["data"]), vec![1, 3, 5]);
    assert_eq!(json["total"], 3);
}

#[tokio::test]
async fn test_route_map_keys_module_and_url() {
    let app = common::build_test_app(seeded_store().await);
    let response = get_as(app, "/api/v1/menus/routes", OPERATOR_ID).await;

    let json = body_json(response).await;
    assert_eq!(
        json["data"],
        json!({
            "/admin/documents": "Documents",
            "/admin/main": "Main Menu",
            "/admin/settings": "Settings",
        })
    );
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_lookup_by_name() {
    let store = seeded_store().await;

    let app = common::build_test_app(store.clone());
    let response = get_as(app, "/api/v1/menus/lookup?name=Settings", OPERATOR_ID).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["id"], 5);

    let app = common::build_test_app(store.clone());
    let response = get_as(app, "/api/v1/menus/lookup?name=Archive", OPERATOR_ID).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(store);
    let response = get_as(app, "/api/v1/menus/lookup?name=Nowhere", OPERATOR_ID).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"].is_null());
}

#[tokio::test]
async fn test_padded_names_are_stored_trimmed_and_found_by_lookup() {
    let store = seeded_store().await;

    let app = common::build_test_app(store.clone());
    let response = put_json_as(
        app,
        "/api/v1/menus/5",
        json!({"name": "  Preferences "}),
        OPERATOR_ID,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["name"], "Preferences");

    let app = common::build_test_app(store.clone());
    let response = get_as(app, "/api/v1/menus/lookup?name=Preferences", OPERATOR_ID).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["id"], 5);

    let app = common::build_test_app(store.clone());
    let response = post_json_as(
        app,
        "/api/v1/menus",
        json!({"name": " Reports ", "module": "admin", "url": "/reports"}),
        EDITOR_ID,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["name"], "Reports");

    // Found, but not granted to the editor's group.
    let app = common::build_test_app(store);
    let response = get_as(app, "/api/v1/menus/lookup?name=Reports", EDITOR_ID).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_menu_outside_permissions_is_forbidden() {
    let store = seeded_store().await;

    let app = common::build_test_app(store.clone());
    let response = get_as(app, "/api/v1/menus/1", OPERATOR_ID).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["name"], "Main Menu");

    let app = common::build_test_app(store);
    let response = get_as(app, "/api/v1/menus/2", OPERATOR_ID).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_create_menu_returns_201() {
    let store = seeded_store().await;
    let app = common::build_test_app(store.clone());
    let response = post_json_as(
        app,
        "/api/v1/menus",
        json!({"name": "Reports", "module": "admin", "url": "/reports", "parent_id": 3}),
        EDITOR_ID,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], 6);
    assert_eq!(json["data"]["parent_id"], 3);
    assert_eq!(json["data"]["sort_key"], 1);
    assert_eq!(json["data"]["status"], "active");

    // Not granted to anyone yet.
    let app = common::build_test_app(store);
    let response = get_as(app, "/api/v1/menus/6", EDITOR_ID).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_menu_reports_first_missing_field() {
    let app = common::build_test_app(seeded_store().await);
    let response = post_json_as(
        app,
        "/api/v1/menus",
        json!({"module": "admin"}),
        EDITOR_ID,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "name can not be empty");
}

#[tokio::test]
async fn test_create_duplicate_name_returns_409() {
    let app = common::build_test_app(seeded_store().await);
    let response = post_json_as(
        app,
        "/api/v1/menus",
        json!({"name": "Settings", "module": "admin", "url": "/other"}),
        EDITOR_ID,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_under_foreign_parent_is_forbidden() {
    let app = common::build_test_app(seeded_store().await);
    let response = post_json_as(
        app,
        "/api/v1/menus",
        json!({"name": "Sub", "module": "admin", "url": "/sub", "parent_id": 2}),
        OPERATOR_ID,
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_update_menu_writes_present_fields() {
    let app = common::build_test_app(seeded_store().await);
    let response = put_json_as(
        app,
        "/api/v1/menus/1",
        json!({"name": "Dashboard", "icon": "home"}),
        OPERATOR_ID,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Dashboard");
    assert_eq!(json["data"]["icon"], "home");
    assert_eq!(json["data"]["url"], "/main");
    assert_eq!(json["data"]["sort_key"], 10);
}

#[tokio::test]
async fn test_empty_update_returns_400() {
    let app = common::build_test_app(seeded_store().await);
    let response = put_json_as(app, "/api/v1/menus/1", json!({}), OPERATOR_ID).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "EMPTY_UPDATE");
    assert_eq!(json["error"], "Update field is empty");
}

#[tokio::test]
async fn test_update_into_own_subtree_returns_400() {
    let app = common::build_test_app(seeded_store().await);
    let response = put_json_as(
        app,
        "/api/v1/menus/1",
        json!({"parent_id": 2}),
        EDITOR_ID,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_menu_then_404() {
    let store = seeded_store().await;

    let app = common::build_test_app(store.clone());
    let response = delete_as(app, "/api/v1/menus/5", EDITOR_ID).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Still granted by the group, but gone.
    let app = common::build_test_app(store.clone());
    let response = delete_as(app, "/api/v1/menus/5", EDITOR_ID).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(store);
    let response = get_as(app, "/api/v1/menus/5", EDITOR_ID).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Authorization group selection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_group_selection_marks_granted_menus() {
    let app = common::build_test_app(seeded_store().await);
    // Group 1 ("operators") grants 1,3,5.
    let response = get_as(app, "/api/v1/auth-groups/1/menus", EDITOR_ID).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let nodes = json["data"].as_array().unwrap();
    assert_eq!(ids(&json["data"]), vec![1, 3, 5]);
    assert_eq!(nodes[0]["is_active"], true);
    assert_eq!(ids(&nodes[0]["children"]), vec![2]);
    assert_eq!(nodes[0]["children"][0]["is_active"], false);
}

#[tokio::test]
async fn test_group_selection_for_missing_group_returns_404() {
    let app = common::build_test_app(seeded_store().await);
    let response = get_as(app, "/api/v1/auth-groups/99/menus", EDITOR_ID).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
