//! In-memory gateway
//!
//! Reads see committed rows only. Writes are staged and applied in order on `commit`,
//! and inserting an employee whose id is still committed fails like a duplicate key.
//! Staged writes are shared by all callers: a commit applies everything staged so far
//! while holding the staging lock, so once any `commit` returns, every write staged
//! before it is visible.

use async_trait::async_trait;
use dashmap::DashMap;
use sea_orm::DbErr;
use tokio::sync::Mutex;

use super::EmployeeGateway;
use crate::entity::{compensation, employee};
use crate::model::{Compensation, Employee};

/// A write waiting for the next commit
#[derive(Debug, Clone)]
enum PendingWrite {
    InsertEmployee {
        row: employee::Model,
        report_ids: Vec<String>,
    },
    DeleteEmployee(String),
    InsertCompensation(compensation::Model),
}

#[derive(Default)]
pub struct MemoryGateway {
    employees: DashMap<String, employee::Model>,
    /// Records per employee id, in insertion order
    compensations: DashMap<String, Vec<compensation::Model>>,
    pending: Mutex<Vec<PendingWrite>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored compensation records across all employees
    pub fn compensation_count(&self) -> usize {
        self.compensations.iter().map(|rows| rows.len()).sum()
    }

    fn apply(&self, write: PendingWrite) {
        match write {
            PendingWrite::InsertEmployee { row, report_ids } => {
                let manager_id = row.id.clone();
                self.employees.insert(row.id.clone(), row);

                for report_id in report_ids {
                    match self.employees.get_mut(&report_id) {
                        Some(mut report) => report.manager_id = Some(manager_id.clone()),
                        None => tracing::warn!(
                            "Direct report {} of employee {} does not exist, skipping",
                            report_id,
                            manager_id
                        ),
                    }
                }
            }
            PendingWrite::DeleteEmployee(id) => {
                self.employees.remove(&id);
                for mut report in self.employees.iter_mut() {
                    if report.manager_id.as_deref() == Some(id.as_str()) {
                        report.manager_id = None;
                    }
                }
            }
            PendingWrite::InsertCompensation(row) => {
                self.compensations
                    .entry(row.employee_id.clone())
                    .or_default()
                    .push(row);
            }
        }
    }
}

#[async_trait]
impl EmployeeGateway for MemoryGateway {
    async fn get_by_id(&self, id: &str) -> Result<Option<Employee>, DbErr> {
        Ok(self
            .employees
            .get(id)
            .map(|row| Employee::from(row.value().clone())))
    }

    async fn get_by_id_with_reports(&self, id: &str) -> Result<Option<Employee>, DbErr> {
        let Some(mut found) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        found.direct_reports = self
            .employees
            .iter()
            .filter(|row| row.manager_id.as_deref() == Some(id))
            .map(|row| Employee::from(row.value().clone()))
            .collect();

        Ok(Some(found))
    }

    async fn insert_employee(
        &self,
        employee: &Employee,
        report_ids: &[String],
    ) -> Result<Employee, DbErr> {
        let mut pending = self.pending.lock().await;
        if self.employees.contains_key(&employee.employee_id) {
            return Err(DbErr::Custom(format!(
                "duplicate key: employee {} already exists",
                employee.employee_id
            )));
        }

        let row = employee::Model::from(employee);
        pending.push(PendingWrite::InsertEmployee {
            row: row.clone(),
            report_ids: report_ids.to_vec(),
        });

        Ok(Employee::from(row))
    }

    async fn delete_employee(&self, employee: &Employee) -> Result<Employee, DbErr> {
        self.pending
            .lock()
            .await
            .push(PendingWrite::DeleteEmployee(employee.employee_id.clone()));

        Ok(employee.clone())
    }

    async fn get_compensations_by_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<Compensation>, DbErr> {
        Ok(self
            .compensations
            .get(employee_id)
            .map(|rows| rows.iter().cloned().map(Compensation::from).collect())
            .unwrap_or_default())
    }

    async fn insert_compensation(
        &self,
        compensation: &Compensation,
    ) -> Result<Compensation, DbErr> {
        let row = compensation::Model::from(compensation);
        self.pending
            .lock()
            .await
            .push(PendingWrite::InsertCompensation(row.clone()));

        Ok(Compensation::from(row))
    }

    async fn count_employees(&self) -> Result<u64, DbErr> {
        Ok(self.employees.len() as u64)
    }

    async fn commit(&self) -> Result<(), DbErr> {
        // Applied under the lock, so a commit finding the queue empty sees every earlier write
        let mut pending = self.pending.lock().await;
        for write in pending.drain(..) {
            self.apply(write);
        }
        Ok(())
    }
}
