use axum::extract::State;
use axum::http::StatusCode;

use crate::state::AppState;

/// Handler for `GET /readyz`: ready once the store answers a ping.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    match state.gateway.ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "store not ready");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
