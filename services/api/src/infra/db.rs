use sea_orm::Value;

use boxops_core::gateway::{Gateway, StoreError};

use crate::domain::repository::{ReportRepository, UserRepository, WeeklyOperationRepository};
use crate::domain::types::{
    NewWeeklyOperation, User, UserChanges, UserDetail, WeeklyOperation, WeeklyOperationSummary,
};

// ── User repository ──────────────────────────────────────────────────────────

const LIST_USERS: &str = "SELECT * FROM users";
const FIND_USER: &str = "SELECT * FROM users WHERE user_id = $1";
const CREATE_USER: &str = "INSERT INTO users (username, role) VALUES ($1, $2) RETURNING *";
const UPDATE_USER: &str =
    "UPDATE users SET username = $1, role = $2 WHERE user_id = $3 RETURNING *";
const DELETE_USER: &str = "DELETE FROM users WHERE user_id = $1 RETURNING *";

#[derive(Clone)]
pub struct DbUserRepository<G> {
    pub gateway: G,
}

impl<G: Gateway> UserRepository for DbUserRepository<G> {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        self.gateway.fetch_all(LIST_USERS, vec![]).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, StoreError> {
        self.gateway.fetch_optional(FIND_USER, vec![id.into()]).await
    }

    async fn create(&self, changes: &UserChanges) -> Result<User, StoreError> {
        self.gateway
            .fetch_one(CREATE_USER, user_values(changes))
            .await
    }

    async fn update(&self, id: i32, changes: &UserChanges) -> Result<Option<User>, StoreError> {
        let mut values = user_values(changes);
        values.push(id.into());
        self.gateway.fetch_optional(UPDATE_USER, values).await
    }

    async fn delete(&self, id: i32) -> Result<Option<User>, StoreError> {
        self.gateway
            .fetch_optional(DELETE_USER, vec![id.into()])
            .await
    }
}

fn user_values(changes: &UserChanges) -> Vec<Value> {
    vec![changes.username.clone().into(), changes.role.clone().into()]
}

// ── Report repository ────────────────────────────────────────────────────────

const USER_DETAILS: &str = r#"
    SELECT
        u.user_id,
        u.username,
        u.role,
        l.location_id,
        l.location_type,
        w.number_of_boxes,
        w.total_minutes,
        w.average_boxes_per_minute
    FROM users u
    JOIN weekly_operations w ON u.user_id = w.user_id
    JOIN locations l ON w.product_id = l.location_id
"#;

const WEEKLY_SUMMARIES: &str = r#"
    SELECT
        u.username,
        l.location_type AS product_type,
        wo.week_start,
        SUM(wo.number_of_boxes) AS total_boxes,
        SUM(wo.total_minutes) AS total_minutes,
        AVG(wo.average_boxes_per_minute) AS average_boxes_per_minute
    FROM weekly_operations wo
    JOIN users u ON wo.user_id = u.user_id
    JOIN locations l ON wo.product_id = l.location_id
    WHERE wo.product_id = $1
    GROUP BY u.username, l.location_type, wo.week_start
    ORDER BY wo.week_start
"#;

#[derive(Clone)]
pub struct DbReportRepository<G> {
    pub gateway: G,
}

impl<G: Gateway> ReportRepository for DbReportRepository<G> {
    async fn user_details(&self) -> Result<Vec<UserDetail>, StoreError> {
        self.gateway.fetch_all(USER_DETAILS, vec![]).await
    }

    async fn weekly_summaries(
        &self,
        product_id: i32,
    ) -> Result<Vec<WeeklyOperationSummary>, StoreError> {
        self.gateway
            .fetch_all(WEEKLY_SUMMARIES, vec![product_id.into()])
            .await
    }
}

// ── Weekly operation repository ──────────────────────────────────────────────

const CREATE_WEEKLY_OPERATION: &str = r#"
    INSERT INTO weekly_operations
        (user_id, product_id, week_start, number_of_boxes, total_minutes, average_boxes_per_minute)
    VALUES ($1, $2, $3, $4, $5, $6)
    RETURNING *
"#;

#[derive(Clone)]
pub struct DbWeeklyOperationRepository<G> {
    pub gateway: G,
}

impl<G: Gateway> WeeklyOperationRepository for DbWeeklyOperationRepository<G> {
    async fn create(&self, op: &NewWeeklyOperation) -> Result<WeeklyOperation, StoreError> {
        self.gateway
            .fetch_one(
                CREATE_WEEKLY_OPERATION,
                vec![
                    op.user_id.into(),
                    op.product_id.into(),
                    op.week_start.into(),
                    op.number_of_boxes.into(),
                    op.total_minutes.into(),
                    op.average_boxes_per_minute().into(),
                ],
            )
            .await
    }
}
