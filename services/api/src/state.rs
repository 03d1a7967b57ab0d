use boxops_core::gateway::SeaGateway;

use crate::infra::db::{DbReportRepository, DbUserRepository, DbWeeklyOperationRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub gateway: SeaGateway,
}

impl AppState {
    pub fn new(gateway: SeaGateway) -> Self {
        Self { gateway }
    }

    pub fn user_repo(&self) -> DbUserRepository<SeaGateway> {
        DbUserRepository {
            gateway: self.gateway.clone(),
        }
    }

    pub fn report_repo(&self) -> DbReportRepository<SeaGateway> {
        DbReportRepository {
            gateway: self.gateway.clone(),
        }
    }

    pub fn weekly_operation_repo(&self) -> DbWeeklyOperationRepository<SeaGateway> {
        DbWeeklyOperationRepository {
            gateway: self.gateway.clone(),
        }
    }
}
