use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::domain::types::WeeklyOperation;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::weekly_operation::{
    CreateWeeklyOperationInput, CreateWeeklyOperationUseCase,
};

// ── POST /weekly-operations ──────────────────────────────────────────────────

/// Fields stay untyped here so a wrong type is reported as invalid data by
/// the use case rather than as a body rejection.
#[derive(Deserialize)]
pub struct CreateWeeklyOperationRequest {
    #[serde(default)]
    pub user_id: JsonValue,
    #[serde(default)]
    pub product_id: JsonValue,
    #[serde(default)]
    pub week_start: JsonValue,
    #[serde(default)]
    pub number_of_boxes: JsonValue,
    #[serde(default)]
    pub total_minutes: JsonValue,
}

pub async fn create_weekly_operation(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<CreateWeeklyOperationRequest>, ApiError>,
) -> Result<(StatusCode, Json<WeeklyOperation>), ApiError> {
    let usecase = CreateWeeklyOperationUseCase {
        repo: state.weekly_operation_repo(),
    };
    let created = usecase
        .execute(CreateWeeklyOperationInput {
            user_id: body.user_id,
            product_id: body.product_id,
            week_start: body.week_start,
            number_of_boxes: body.number_of_boxes,
            total_minutes: body.total_minutes,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}
