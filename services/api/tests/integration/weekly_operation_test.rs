use axum::http::StatusCode;
use serde_json::{Value, json};

use boxops_testing::db::MockStore;

use crate::helpers::{invalid_data_body, server};

fn body(user_id: Value, total_minutes: Value) -> Value {
    json!({
        "user_id": user_id,
        "product_id": 3,
        "week_start": "2024-03-04",
        "number_of_boxes": 50,
        "total_minutes": total_minutes
    })
}

fn stored(total_minutes: i32, average: Value) -> Value {
    json!({
        "weekly_operation_id": 11,
        "user_id": 1,
        "product_id": 3,
        "week_start": "2024-03-04",
        "number_of_boxes": 50,
        "total_minutes": total_minutes,
        "average_boxes_per_minute": average
    })
}

#[tokio::test]
async fn should_create_weekly_operation() {
    let server = server(MockStore::new().rows(vec![stored(10, json!(5.0))]));

    let response = server
        .post("/api/weekly-operations")
        .json(&body(json!(1), json!(10)))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Value>(), stored(10, json!(5.0)));
}

#[tokio::test]
async fn should_echo_null_average_for_zero_minutes() {
    let server = server(MockStore::new().rows(vec![stored(0, Value::Null)]));

    let response = server
        .post("/api/weekly-operations")
        .json(&body(json!(1), json!(0)))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["average_boxes_per_minute"], Value::Null);
}

#[tokio::test]
async fn should_reject_non_numeric_user_id_without_insert() {
    // No result queued: any statement reaching the store would fail with 500.
    let server = server(MockStore::new());

    let response = server
        .post("/api/weekly-operations")
        .json(&body(json!("abc"), json!(10)))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), invalid_data_body());
}

#[tokio::test]
async fn should_reject_unparseable_week_start() {
    let server = server(MockStore::new());
    let mut payload = body(json!(1), json!(10));
    payload["week_start"] = json!("not a date");

    let response = server.post("/api/weekly-operations").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_reject_missing_fields() {
    let server = server(MockStore::new());

    let response = server
        .post("/api/weekly-operations")
        .json(&json!({ "user_id": 1 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), invalid_data_body());
}

#[tokio::test]
async fn should_return_500_when_insert_fails() {
    let server = server(MockStore::new().error("violates foreign key constraint"));

    let response = server
        .post("/api/weekly-operations")
        .json(&body(json!(1), json!(10)))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Error al crear operación semanal" })
    );
}

#[tokio::test]
async fn should_echo_inserted_row_without_key_column() {
    let mut row = stored(10, json!(5.0));
    row.as_object_mut().unwrap().remove("weekly_operation_id");
    let server = server(MockStore::new().rows(vec![row.clone()]));

    let response = server
        .post("/api/weekly-operations")
        .json(&body(json!(1), json!(10)))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Value>(), row);
}

#[tokio::test]
async fn should_accept_slashed_and_named_week_starts() {
    let server = server(
        MockStore::new()
            .rows(vec![stored(10, json!(5.0))])
            .rows(vec![stored(10, json!(5.0))]),
    );

    for week_start in ["2024/03/04", "March 4, 2024"] {
        let mut payload = body(json!(1), json!(10));
        payload["week_start"] = json!(week_start);

        let response = server.post("/api/weekly-operations").json(&payload).await;

        assert_eq!(response.status_code(), StatusCode::CREATED, "{week_start}");
    }
}
