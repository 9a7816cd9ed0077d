//! Employee entity
//!
//! Table: employee

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::model::Employee;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(Some(36))")]
    pub id: String,

    #[sea_orm(column_type = "String(Some(64))")]
    pub first_name: String,

    #[sea_orm(column_type = "String(Some(64))")]
    pub last_name: String,

    #[sea_orm(column_type = "String(Some(64))", nullable)]
    pub position: Option<String>,

    #[sea_orm(column_type = "String(Some(64))", nullable)]
    pub department: Option<String>,

    /// Manager's employee id (None for the top of a hierarchy)
    #[sea_orm(column_type = "String(Some(36))", nullable)]
    pub manager_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

// The manager link is resolved by manual queries. No foreign key, so a replaced
// employee can be deleted and reinserted under the same id.

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Employee {
    fn from(model: Model) -> Self {
        Self {
            employee_id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            position: model.position,
            department: model.department,
            manager_id: model.manager_id,
            direct_reports: Vec::new(),
        }
    }
}

impl From<&Employee> for Model {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.employee_id.clone(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            position: employee.position.clone(),
            department: employee.department.clone(),
            manager_id: employee.manager_id.clone(),
        }
    }
}
