use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;

use boxops_api::router::build_router;
use boxops_api::state::AppState;
use boxops_core::gateway::SeaGateway;
use boxops_testing::db::MockStore;

use crate::helpers::server;

#[tokio::test]
async fn should_report_ready_when_store_answers() {
    let server = server(MockStore::new());

    let response = server.get("/readyz").await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_report_unavailable_when_store_unreachable() {
    let state = AppState::new(SeaGateway::new(DatabaseConnection::Disconnected));
    let server = TestServer::new(build_router(state)).expect("failed to start test server");

    let ready = server.get("/readyz").await;
    let live = server.get("/healthz").await;

    assert_eq!(ready.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(live.status_code(), StatusCode::OK);
}
