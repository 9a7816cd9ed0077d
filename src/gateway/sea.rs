//! SeaORM gateway
//!
//! Every write runs in its own transaction and is committed before the call returns,
//! so `commit` has nothing left to flush.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set, TransactionTrait, Value,
};

use super::EmployeeGateway;
use crate::entity::{compensation, employee};
use crate::model::{Compensation, Employee};

pub struct SeaOrmGateway {
    db: DatabaseConnection,
}

impl SeaOrmGateway {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeGateway for SeaOrmGateway {
    async fn get_by_id(&self, id: &str) -> Result<Option<Employee>, DbErr> {
        let found = employee::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?;

        Ok(found.map(Employee::from))
    }

    async fn get_by_id_with_reports(&self, id: &str) -> Result<Option<Employee>, DbErr> {
        let Some(model) = employee::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let reports = employee::Entity::find()
            .filter(employee::Column::ManagerId.eq(id))
            .all(&self.db)
            .await?;

        let mut found = Employee::from(model);
        found.direct_reports = reports.into_iter().map(Employee::from).collect();
        Ok(Some(found))
    }

    async fn insert_employee(
        &self,
        employee: &Employee,
        report_ids: &[String],
    ) -> Result<Employee, DbErr> {
        let txn = self.db.begin().await?;

        let new_employee = employee::ActiveModel {
            id: Set(employee.employee_id.clone()),
            first_name: Set(employee.first_name.clone()),
            last_name: Set(employee.last_name.clone()),
            position: Set(employee.position.clone()),
            department: Set(employee.department.clone()),
            manager_id: Set(employee.manager_id.clone()),
        };
        let inserted = new_employee.insert(&txn).await?;

        if !report_ids.is_empty() {
            let res = employee::Entity::update_many()
                .col_expr(
                    employee::Column::ManagerId,
                    Expr::value(employee.employee_id.clone()),
                )
                .filter(employee::Column::Id.is_in(report_ids.iter().cloned()))
                .exec(&txn)
                .await?;

            if res.rows_affected < report_ids.len() as u64 {
                tracing::warn!(
                    "Attached {} of {} direct reports to employee {}",
                    res.rows_affected,
                    report_ids.len(),
                    employee.employee_id
                );
            }
        }

        txn.commit().await?;

        Ok(Employee::from(inserted))
    }

    async fn delete_employee(&self, employee: &Employee) -> Result<Employee, DbErr> {
        let txn = self.db.begin().await?;

        employee::Entity::update_many()
            .col_expr(employee::Column::ManagerId, Expr::value(Value::String(None)))
            .filter(employee::Column::ManagerId.eq(employee.employee_id.as_str()))
            .exec(&txn)
            .await?;

        employee::Entity::delete_by_id(employee.employee_id.clone())
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(employee.clone())
    }

    async fn get_compensations_by_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<Compensation>, DbErr> {
        let records = compensation::Entity::find()
            .filter(compensation::Column::EmployeeId.eq(employee_id))
            .all(&self.db)
            .await?;

        Ok(records.into_iter().map(Compensation::from).collect())
    }

    async fn insert_compensation(
        &self,
        compensation: &Compensation,
    ) -> Result<Compensation, DbErr> {
        let new_record = compensation::ActiveModel {
            id: Set(compensation.compensation_id.clone()),
            employee_id: Set(compensation.employee_id.clone()),
            salary: Set(compensation.salary),
            effective_date: Set(compensation.effective_date),
        };

        let inserted = new_record.insert(&self.db).await?;
        Ok(Compensation::from(inserted))
    }

    async fn count_employees(&self) -> Result<u64, DbErr> {
        employee::Entity::find().count(&self.db).await
    }

    async fn commit(&self) -> Result<(), DbErr> {
        Ok(())
    }
}
