//! Storage gateways backing the directory service
//!
//! The service only talks to storage through [`EmployeeGateway`]. Two backends exist:
//! a SeaORM one for PostgreSQL and an in-memory one used by tests and local runs.

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::model::{Compensation, Employee};

pub mod memory;
pub mod sea;

pub use memory::MemoryGateway;
pub use sea::SeaOrmGateway;

/// Storage contract for employees and compensation records.
///
/// Writes are durable once [`EmployeeGateway::commit`] returns. A backend may make
/// them visible earlier.
#[async_trait]
pub trait EmployeeGateway: Send + Sync {
    /// Point lookup. `direct_reports` is left empty.
    async fn get_by_id(&self, id: &str) -> Result<Option<Employee>, DbErr>;

    /// Point lookup that also loads the immediate direct reports.
    async fn get_by_id_with_reports(&self, id: &str) -> Result<Option<Employee>, DbErr>;

    /// Insert `employee` under its own id and attach the listed existing employees as its
    /// direct reports. Unknown report ids are skipped.
    async fn insert_employee(
        &self,
        employee: &Employee,
        report_ids: &[String],
    ) -> Result<Employee, DbErr>;

    /// Delete `employee`. Its direct reports are left without a manager.
    async fn delete_employee(&self, employee: &Employee) -> Result<Employee, DbErr>;

    /// All compensation records of an employee, in the backend's storage order.
    /// The in-memory gateway returns them in insertion order.
    async fn get_compensations_by_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<Compensation>, DbErr>;

    async fn insert_compensation(&self, compensation: &Compensation)
        -> Result<Compensation, DbErr>;

    /// Number of stored employees
    async fn count_employees(&self) -> Result<u64, DbErr>;

    /// Durability barrier for the writes issued so far.
    async fn commit(&self) -> Result<(), DbErr>;
}
