use serde_json::Value as JsonValue;

use crate::domain::repository::WeeklyOperationRepository;
use crate::domain::types::{NewWeeklyOperation, WeeklyOperation, integer_field, parse_week_start};
use crate::error::{ApiError, message};

/// Raw request fields, checked before anything reaches the store.
pub struct CreateWeeklyOperationInput {
    pub user_id: JsonValue,
    pub product_id: JsonValue,
    pub week_start: JsonValue,
    pub number_of_boxes: JsonValue,
    pub total_minutes: JsonValue,
}

impl CreateWeeklyOperationInput {
    /// All five fields must pass; any failure is [`ApiError::InvalidData`].
    pub fn validate(&self) -> Result<NewWeeklyOperation, ApiError> {
        self.parse().ok_or(ApiError::InvalidData)
    }

    fn parse(&self) -> Option<NewWeeklyOperation> {
        Some(NewWeeklyOperation {
            user_id: integer_field(&self.user_id)?,
            product_id: integer_field(&self.product_id)?,
            week_start: parse_week_start(&self.week_start)?,
            number_of_boxes: integer_field(&self.number_of_boxes)?,
            total_minutes: integer_field(&self.total_minutes)?,
        })
    }
}

pub struct CreateWeeklyOperationUseCase<R: WeeklyOperationRepository> {
    pub repo: R,
}

impl<R: WeeklyOperationRepository> CreateWeeklyOperationUseCase<R> {
    pub async fn execute(
        &self,
        input: CreateWeeklyOperationInput,
    ) -> Result<WeeklyOperation, ApiError> {
        let op = input.validate()?;
        self.repo
            .create(&op)
            .await
            .map_err(ApiError::store(message::CREATE_WEEKLY_OPERATION))
    }
}
