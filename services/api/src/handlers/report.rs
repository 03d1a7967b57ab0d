use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;

use crate::domain::types::{UserDetail, WeeklyOperationSummary};
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::report::{UserDetailsUseCase, WeeklyOperationsByProductUseCase};

// ── GET /user-details ────────────────────────────────────────────────────────

pub async fn get_user_details(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserDetail>>, ApiError> {
    let usecase = UserDetailsUseCase {
        repo: state.report_repo(),
    };
    Ok(Json(usecase.execute().await?))
}

// ── GET /weekly-operations/{product_id} ──────────────────────────────────────

pub async fn get_weekly_operations(
    State(state): State<AppState>,
    WithRejection(Path(product_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<Vec<WeeklyOperationSummary>>, ApiError> {
    let usecase = WeeklyOperationsByProductUseCase {
        repo: state.report_repo(),
    };
    Ok(Json(usecase.execute(product_id).await?))
}
