use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use boxops_core::error::ErrorBody;
use boxops_core::gateway::StoreError;

/// Client-facing messages, one per failing operation.
pub mod message {
    pub const LIST_USERS: &str = "Error al obtener usuarios";
    pub const GET_USER: &str = "Error al obtener usuario";
    pub const CREATE_USER: &str = "Error al crear usuario";
    pub const UPDATE_USER: &str = "Error al actualizar usuario";
    pub const DELETE_USER: &str = "Error al eliminar usuario";
    pub const USER_DETAILS: &str = "Error al obtener la información de los usuarios";
    pub const WEEKLY_OPERATIONS: &str = "Error al obtener operaciones semanales";
    pub const CREATE_WEEKLY_OPERATION: &str = "Error al crear operación semanal";
}

/// API error variants. The display string is the message sent to clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Usuario no encontrado")]
    UserNotFound,
    #[error("Datos inválidos")]
    InvalidData,
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    /// Lift a store failure, attaching the operation's client message.
    /// Use as `.map_err(ApiError::store(message::LIST_USERS))`.
    pub fn store(message: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Store { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::InvalidData => StatusCode::BAD_REQUEST,
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // 4xx are already visible through the trace layer; only store failures are logged.
        if let Self::Store {
            message,
            ref source,
        } = self
        {
            tracing::error!(error = %source, operation = message, "store error");
        }
        ErrorBody::new(self.to_string()).with_status(self.status())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected request body");
        Self::InvalidData
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected path parameter");
        Self::InvalidData
    }
}
