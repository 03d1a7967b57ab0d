use crate::domain::repository::UserRepository;
use crate::domain::types::{User, UserChanges};
use crate::error::{ApiError, message};

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, ApiError> {
        self.repo
            .list()
            .await
            .map_err(ApiError::store(message::LIST_USERS))
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: i32) -> Result<User, ApiError> {
        self.repo
            .find_by_id(user_id)
            .await
            .map_err(ApiError::store(message::GET_USER))?
            .ok_or(ApiError::UserNotFound)
    }
}

// ── CreateUser ───────────────────────────────────────────────────────────────

/// No content checks: the store is the only judge of username/role.
pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: UserChanges) -> Result<User, ApiError> {
        self.repo
            .create(&input)
            .await
            .map_err(ApiError::store(message::CREATE_USER))
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

pub struct UpdateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    pub async fn execute(&self, user_id: i32, input: UserChanges) -> Result<User, ApiError> {
        self.repo
            .update(user_id, &input)
            .await
            .map_err(ApiError::store(message::UPDATE_USER))?
            .ok_or(ApiError::UserNotFound)
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    pub async fn execute(&self, user_id: i32) -> Result<User, ApiError> {
        self.repo
            .delete(user_id)
            .await
            .map_err(ApiError::store(message::DELETE_USER))?
            .ok_or(ApiError::UserNotFound)
    }
}
