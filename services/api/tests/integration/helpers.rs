use axum_test::TestServer;
use serde_json::{Value, json};

use boxops_api::router::build_router;
use boxops_api::state::AppState;
use boxops_testing::db::MockStore;

/// Serve the real router over a mock store; one queued result per statement.
pub fn server(store: MockStore) -> TestServer {
    TestServer::new(build_router(AppState::new(store.into_gateway())))
        .expect("failed to start test server")
}

pub fn user_row(user_id: i32, username: &str, role: &str) -> Value {
    json!({ "user_id": user_id, "username": username, "role": role })
}

pub fn not_found_body() -> Value {
    json!({ "error": "Usuario no encontrado" })
}

pub fn invalid_data_body() -> Value {
    json!({ "error": "Datos inválidos" })
}
