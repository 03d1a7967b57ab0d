use axum::http::{HeaderName, HeaderValue, StatusCode};
use serde_json::{Value, json};

use boxops_testing::db::MockStore;

use crate::helpers::{invalid_data_body, not_found_body, server, user_row};

#[tokio::test]
async fn should_list_users_including_empty() {
    let server = server(
        MockStore::new()
            .rows(vec![user_row(1, "alice", "packer"), user_row(2, "bob", "driver")])
            .empty(),
    );

    let first = server.get("/api/users").await;
    let second = server.get("/api/users").await;

    assert_eq!(first.status_code(), StatusCode::OK);
    assert_eq!(
        first.json::<Value>(),
        json!([user_row(1, "alice", "packer"), user_row(2, "bob", "driver")])
    );
    assert_eq!(second.status_code(), StatusCode::OK);
    assert_eq!(second.json::<Value>(), json!([]));
}

#[tokio::test]
async fn should_return_500_with_message_when_listing_fails() {
    let server = server(MockStore::new().error("connection refused"));

    let response = server.get("/api/users").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Error al obtener usuarios" })
    );
}

#[tokio::test]
async fn should_walk_create_get_delete_get_scenario() {
    let alice = user_row(7, "alice", "packer");
    let server = server(
        MockStore::new()
            .rows(vec![alice.clone()]) // INSERT ... RETURNING *
            .rows(vec![alice.clone()]) // SELECT by id
            .rows(vec![alice.clone()]) // DELETE ... RETURNING *
            .empty(), // SELECT by id after delete
    );

    let created = server
        .post("/api/users")
        .json(&json!({ "username": "alice", "role": "packer" }))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    assert_eq!(created.json::<Value>(), alice);

    let id = created.json::<Value>()["user_id"].as_i64().unwrap();

    let fetched = server.get(&format!("/api/users/{id}")).await;
    assert_eq!(fetched.status_code(), StatusCode::OK);
    assert_eq!(fetched.json::<Value>(), alice);

    let deleted = server.delete(&format!("/api/users/{id}")).await;
    assert_eq!(deleted.status_code(), StatusCode::OK);
    assert_eq!(deleted.json::<Value>(), alice);

    let gone = server.get(&format!("/api/users/{id}")).await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(gone.json::<Value>(), not_found_body());
}

#[tokio::test]
async fn should_delete_once_then_return_404() {
    let server = server(
        MockStore::new()
            .rows(vec![user_row(3, "carol", "lead")])
            .empty(),
    );

    let first = server.delete("/api/users/3").await;
    let second = server.delete("/api/users/3").await;

    assert_eq!(first.status_code(), StatusCode::OK);
    assert_eq!(second.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(second.json::<Value>(), not_found_body());
}

#[tokio::test]
async fn should_update_existing_user() {
    let server = server(MockStore::new().rows(vec![user_row(4, "dave", "supervisor")]));

    let response = server
        .put("/api/users/4")
        .json(&json!({ "username": "dave", "role": "supervisor" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["role"], "supervisor");
}

#[tokio::test]
async fn should_return_404_when_updating_unknown_user() {
    let server = server(MockStore::new().empty());

    let response = server
        .put("/api/users/999")
        .json(&json!({ "username": "ghost", "role": "none" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), not_found_body());
}

#[tokio::test]
async fn should_return_500_when_store_rejects_new_user() {
    let server = server(MockStore::new().error("null value in column \"role\""));

    let response = server
        .post("/api/users")
        .json(&json!({ "username": "eve" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Error al crear usuario" })
    );
}

#[tokio::test]
async fn should_reject_non_integer_id_before_store() {
    let server = server(MockStore::new());

    let response = server.get("/api/users/abc").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), invalid_data_body());
}

#[tokio::test]
async fn should_reject_non_json_body_with_envelope() {
    let server = server(MockStore::new());

    let response = server.post("/api/users").text("username=alice").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), invalid_data_body());
}

#[tokio::test]
async fn should_allow_any_origin_and_tag_request_id() {
    let server = server(MockStore::new().empty());

    let response = server
        .get("/api/users")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://warehouse.example"),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "*"
    );
    assert!(headers.get("x-request-id").is_some());
}

#[tokio::test]
async fn should_answer_liveness_without_store() {
    let server = server(MockStore::new());

    let response = server.get("/healthz").await;

    assert_eq!(response.status_code(), StatusCode::OK);
}
