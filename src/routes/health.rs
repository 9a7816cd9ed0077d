use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;

use super::ApiResponse;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub employees: u64,
}

/// Health check endpoint, also probes the storage gateway.
///
/// Answers 503 while storage cannot be reached.
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<HealthStatus>>) {
    match state.directory.gateway().count_employees().await {
        Ok(employees) => (
            StatusCode::OK,
            Json(ApiResponse::success(HealthStatus {
                status: "healthy".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                employees,
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::error("storage unavailable")),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use sea_orm::DbErr;

    use super::*;
    use crate::config::Config;
    use crate::gateway::{EmployeeGateway, MemoryGateway};
    use crate::model::{Compensation, Employee};
    use crate::service::DirectoryService;

    /// Gateway whose storage is gone
    struct Unreachable;

    fn down() -> DbErr {
        DbErr::Custom("connection refused".to_string())
    }

    #[async_trait]
    impl EmployeeGateway for Unreachable {
        async fn get_by_id(&self, _id: &str) -> Result<Option<Employee>, DbErr> {
            Err(down())
        }

        async fn get_by_id_with_reports(&self, _id: &str) -> Result<Option<Employee>, DbErr> {
            Err(down())
        }

        async fn insert_employee(
            &self,
            _employee: &Employee,
            _report_ids: &[String],
        ) -> Result<Employee, DbErr> {
            Err(down())
        }

        async fn delete_employee(&self, _employee: &Employee) -> Result<Employee, DbErr> {
            Err(down())
        }

        async fn get_compensations_by_employee(
            &self,
            _employee_id: &str,
        ) -> Result<Vec<Compensation>, DbErr> {
            Err(down())
        }

        async fn insert_compensation(
            &self,
            _compensation: &Compensation,
        ) -> Result<Compensation, DbErr> {
            Err(down())
        }

        async fn count_employees(&self) -> Result<u64, DbErr> {
            Err(down())
        }

        async fn commit(&self) -> Result<(), DbErr> {
            Err(down())
        }
    }

    fn state(gateway: Arc<dyn EmployeeGateway>) -> AppState {
        AppState::new(DirectoryService::new(gateway), Config::default())
    }

    #[tokio::test]
    async fn test_healthy_storage() {
        let (status, Json(body)) = health_check(State(state(Arc::new(MemoryGateway::new())))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.code);
        assert_eq!(body.data.map(|d| d.employees), Some(0));
    }

    #[tokio::test]
    async fn test_unreachable_storage_is_unavailable() {
        let (status, Json(body)) = health_check(State(state(Arc::new(Unreachable)))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(!body.code);
        assert_eq!(body.message, "storage unavailable");
        assert!(body.data.is_none());
    }
}
