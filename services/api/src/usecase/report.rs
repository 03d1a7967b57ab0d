use crate::domain::repository::ReportRepository;
use crate::domain::types::{UserDetail, WeeklyOperationSummary};
use crate::error::{ApiError, message};

// ── UserDetails ──────────────────────────────────────────────────────────────

pub struct UserDetailsUseCase<R: ReportRepository> {
    pub repo: R,
}

impl<R: ReportRepository> UserDetailsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<UserDetail>, ApiError> {
        self.repo
            .user_details()
            .await
            .map_err(ApiError::store(message::USER_DETAILS))
    }
}

// ── WeeklyOperationsByProduct ────────────────────────────────────────────────

pub struct WeeklyOperationsByProductUseCase<R: ReportRepository> {
    pub repo: R,
}

impl<R: ReportRepository> WeeklyOperationsByProductUseCase<R> {
    /// An unknown product yields an empty list, not 404.
    pub async fn execute(&self, product_id: i32) -> Result<Vec<WeeklyOperationSummary>, ApiError> {
        self.repo
            .weekly_summaries(product_id)
            .await
            .map_err(ApiError::store(message::WEEKLY_OPERATIONS))
    }
}
