#![allow(async_fn_in_trait)]

use boxops_core::gateway::StoreError;

use crate::domain::types::{
    NewWeeklyOperation, User, UserChanges, UserDetail, WeeklyOperation, WeeklyOperationSummary,
};

/// Repository for `users`.
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, StoreError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, StoreError>;
    async fn create(&self, changes: &UserChanges) -> Result<User, StoreError>;
    /// Returns `None` when no user has this id.
    async fn update(&self, id: i32, changes: &UserChanges) -> Result<Option<User>, StoreError>;
    /// Returns the deleted user, or `None` when no user has this id.
    async fn delete(&self, id: i32) -> Result<Option<User>, StoreError>;
}

/// Read-only reports joining users, weekly operations and locations.
pub trait ReportRepository: Send + Sync {
    async fn user_details(&self) -> Result<Vec<UserDetail>, StoreError>;
    /// Aggregates for one product, ordered by `week_start` ascending.
    async fn weekly_summaries(
        &self,
        product_id: i32,
    ) -> Result<Vec<WeeklyOperationSummary>, StoreError>;
}

/// Repository for `weekly_operations`.
pub trait WeeklyOperationRepository: Send + Sync {
    /// Insert with the derived average already computed.
    async fn create(&self, op: &NewWeeklyOperation) -> Result<WeeklyOperation, StoreError>;
}
