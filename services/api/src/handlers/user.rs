use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use crate::domain::types::{User, UserChanges};
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::user::{
    CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserUseCase,
};

/// Body of `POST /users` and `PUT /users/{id}`. Missing fields become NULL.
#[derive(Deserialize)]
pub struct UserRequest {
    pub username: Option<String>,
    pub role: Option<String>,
}

impl From<UserRequest> for UserChanges {
    fn from(body: UserRequest) -> Self {
        Self {
            username: body.username,
            role: body.role,
        }
    }
}

// ── GET /users ───────────────────────────────────────────────────────────────

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    Ok(Json(usecase.execute().await?))
}

// ── GET /users/{id} ──────────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<User>, ApiError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    Ok(Json(usecase.execute(id).await?))
}

// ── POST /users ──────────────────────────────────────────────────────────────

pub async fn create_user(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<UserRequest>, ApiError>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

// ── PUT /users/{id} ──────────────────────────────────────────────────────────

pub async fn update_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<UserRequest>, ApiError>,
) -> Result<Json<User>, ApiError> {
    let usecase = UpdateUserUseCase {
        repo: state.user_repo(),
    };
    Ok(Json(usecase.execute(id, body.into()).await?))
}

// ── DELETE /users/{id} ───────────────────────────────────────────────────────

pub async fn delete_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<User>, ApiError> {
    let usecase = DeleteUserUseCase {
        repo: state.user_repo(),
    };
    Ok(Json(usecase.execute(id).await?))
}
