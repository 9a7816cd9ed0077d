use tracing::{debug, info};
use uuid::Uuid;

use super::DirectoryService;
use crate::error::{AppError, AppResult};
use crate::model::{Compensation, CompensationDraft};

impl DirectoryService {
    /// Record a compensation entry for an existing employee.
    ///
    /// The subject is resolved before anything is written, so an unknown employee
    /// leaves the history untouched.
    pub async fn create_comp(&self, draft: CompensationDraft) -> AppResult<Compensation> {
        let employee = self.get_by_id(draft.subject.employee_id()).await?;

        let compensation = Compensation {
            compensation_id: Uuid::new_v4().to_string(),
            employee_id: employee.employee_id,
            salary: draft.salary,
            effective_date: draft.effective_date,
        };
        debug!(
            "Creating compensation {} for employee {}: {} from {}",
            compensation.compensation_id,
            compensation.employee_id,
            compensation.salary,
            compensation.effective_date
        );

        let created = self.gateway.insert_compensation(&compensation).await?;
        self.gateway.commit().await?;

        info!("Created compensation {}", created.compensation_id);
        Ok(created)
    }

    /// Compensation history of an employee, oldest effective date first.
    ///
    /// An existing employee without records yields an empty list.
    pub async fn get_comp_by_emp_id(&self, employee_id: &str) -> AppResult<Vec<Compensation>> {
        if employee_id.is_empty() {
            return Err(AppError::employee_not_found(employee_id));
        }

        let employee = self.get_by_id(employee_id).await?;

        let mut history = self
            .gateway
            .get_compensations_by_employee(&employee.employee_id)
            .await?;
        history.sort_by_key(|c| c.effective_date);

        Ok(history)
    }
}
