//! Directory service
//!
//! Owns the employee lifecycle, the reporting-structure computation and the
//! compensation history. All state lives behind the [`EmployeeGateway`].

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::gateway::EmployeeGateway;
use crate::model::{Employee, NewEmployee};

mod compensation;
mod reporting;

#[derive(Clone)]
pub struct DirectoryService {
    gateway: Arc<dyn EmployeeGateway>,
}

impl DirectoryService {
    pub fn new(gateway: Arc<dyn EmployeeGateway>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Arc<dyn EmployeeGateway> {
        &self.gateway
    }

    /// Store a new employee under a freshly generated id
    pub async fn create(&self, new: NewEmployee) -> AppResult<Employee> {
        let employee = new.to_employee(Uuid::new_v4().to_string(), None);
        debug!(
            "Creating employee {} '{} {}'",
            employee.employee_id, employee.first_name, employee.last_name
        );

        let created = self
            .gateway
            .insert_employee(&employee, &new.report_ids())
            .await?;
        self.gateway.commit().await?;

        info!("Created employee {}", created.employee_id);
        Ok(created)
    }

    /// Fetch an employee without its direct reports
    pub async fn get_by_id(&self, id: &str) -> AppResult<Employee> {
        if id.is_empty() {
            return Err(AppError::employee_not_found(id));
        }

        self.gateway
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::employee_not_found(id))
    }

    /// Replace `original` with `replacement`, keeping the original id.
    ///
    /// The delete is committed before the insert. A failure in between leaves the
    /// employee deleted. With no replacement only the delete happens.
    pub async fn replace(
        &self,
        original: &Employee,
        replacement: Option<NewEmployee>,
    ) -> AppResult<Option<Employee>> {
        debug!("Replacing employee {}", original.employee_id);

        self.gateway.delete_employee(original).await?;
        self.gateway.commit().await?;

        let Some(replacement) = replacement else {
            info!("Deleted employee {} without replacement", original.employee_id);
            return Ok(None);
        };

        let employee = replacement.to_employee(
            original.employee_id.clone(),
            original.manager_id.clone(),
        );
        let inserted = self
            .gateway
            .insert_employee(&employee, &replacement.report_ids())
            .await?;
        self.gateway.commit().await?;

        info!("Replaced employee {}", inserted.employee_id);
        Ok(Some(inserted))
    }
}
