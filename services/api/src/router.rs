use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use boxops_core::health::healthz;
use boxops_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    health::readyz,
    report::{get_user_details, get_weekly_operations},
    user::{create_user, delete_user, get_user, list_users, update_user},
    weekly_operation::create_weekly_operation,
};
use crate::state::AppState;

/// Resource routes, mounted under `/api`.
fn api_router() -> Router<AppState> {
    Router::new()
        // Users
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        // Reports
        .route("/user-details", get(get_user_details))
        .route("/weekly-operations/{product_id}", get(get_weekly_operations))
        // Weekly operations
        .route("/weekly-operations", post(create_weekly_operation))
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Outermost first: the request id must exist before the trace span opens.
    let middleware = ServiceBuilder::new()
        .layer(request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(cors);

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .nest("/api", api_router())
        .layer(middleware)
        .with_state(state)
}
