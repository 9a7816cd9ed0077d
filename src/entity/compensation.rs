//! Compensation entity
//!
//! Table: compensation

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::model::Compensation;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "compensation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(Some(36))")]
    pub id: String,

    /// Owning employee id
    #[sea_orm(column_type = "String(Some(36))")]
    pub employee_id: String,

    #[sea_orm(column_type = "Double")]
    pub salary: f64,

    /// Date from which the salary applies
    pub effective_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Compensation {
    fn from(model: Model) -> Self {
        Self {
            compensation_id: model.id,
            employee_id: model.employee_id,
            salary: model.salary,
            effective_date: model.effective_date,
        }
    }
}

impl From<&Compensation> for Model {
    fn from(compensation: &Compensation) -> Self {
        Self {
            id: compensation.compensation_id.clone(),
            employee_id: compensation.employee_id.clone(),
            salary: compensation.salary,
            effective_date: compensation.effective_date,
        }
    }
}
