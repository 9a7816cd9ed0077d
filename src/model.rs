//! Domain types shared by the directory service, the storage gateways and the API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// An employee as seen by the directory service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    /// Manager link, kept in storage only
    #[serde(skip)]
    pub manager_id: Option<String>,
    /// Only filled by the hierarchy-aware fetch
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub direct_reports: Vec<Employee>,
}

/// Reference to an existing employee by id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRef {
    pub employee_id: String,
}

/// Employee attributes supplied by a client on create or replace.
///
/// Any `employeeId` in the payload is ignored; the service owns identifiers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    /// Existing employees to attach as direct reports
    #[serde(default)]
    pub direct_reports: Vec<EmployeeRef>,
}

impl NewEmployee {
    /// Build the stored employee for the given identifier and manager link
    pub fn to_employee(&self, employee_id: String, manager_id: Option<String>) -> Employee {
        Employee {
            employee_id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            manager_id,
            direct_reports: Vec::new(),
        }
    }

    pub fn report_ids(&self) -> Vec<String> {
        self.direct_reports
            .iter()
            .map(|r| r.employee_id.clone())
            .collect()
    }
}

/// A dated salary entry in an employee's compensation history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compensation {
    pub compensation_id: String,
    pub employee_id: String,
    pub salary: f64,
    pub effective_date: NaiveDate,
}

/// Compensation payload as posted by a client.
///
/// Either `employeeId` or an attached `employee` must be present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompensation {
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub employee: Option<EmployeeRef>,
    pub salary: f64,
    pub effective_date: NaiveDate,
}

/// Whom a new compensation record belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompensationSubject {
    EmployeeId(String),
    Employee(EmployeeRef),
}

impl CompensationSubject {
    pub fn employee_id(&self) -> &str {
        match self {
            CompensationSubject::EmployeeId(id) => id,
            CompensationSubject::Employee(employee) => &employee.employee_id,
        }
    }
}

/// Validated compensation input accepted by the directory service.
#[derive(Clone, Debug, PartialEq)]
pub struct CompensationDraft {
    pub subject: CompensationSubject,
    pub salary: f64,
    pub effective_date: NaiveDate,
}

impl TryFrom<NewCompensation> for CompensationDraft {
    type Error = AppError;

    fn try_from(value: NewCompensation) -> Result<Self, Self::Error> {
        // An attached employee wins; both are assumed to agree when present
        let subject = match (value.employee, value.employee_id) {
            (Some(employee), _) => CompensationSubject::Employee(employee),
            (None, Some(id)) => CompensationSubject::EmployeeId(id),
            (None, None) => {
                // No subject means no employee to attach the record to
                return Err(AppError::employee_not_found(""))
            }
        };

        Ok(Self {
            subject,
            salary: value.salary,
            effective_date: value.effective_date,
        })
    }
}

/// Computed view pairing an employee with its total number of reports. Never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingStructure {
    pub employee: Employee,
    pub number_of_reports: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_employee_ignores_supplied_id() {
        let json = r#"{
            "employeeId": "should-be-ignored",
            "firstName": "Debbie",
            "lastName": "Downer",
            "department": "Complaints",
            "position": "Receiver"
        }"#;

        let new: NewEmployee = serde_json::from_str(json).unwrap();
        let employee = new.to_employee("abc".to_string(), None);
        assert_eq!(employee.employee_id, "abc");
        assert_eq!(employee.department.as_deref(), Some("Complaints"));
        assert!(new.report_ids().is_empty());
    }

    #[test]
    fn test_employee_serializes_camel_case_without_manager() {
        let employee = Employee {
            employee_id: "1".to_string(),
            first_name: "John".to_string(),
            last_name: "Lennon".to_string(),
            position: None,
            department: None,
            manager_id: Some("0".to_string()),
            direct_reports: vec![],
        };

        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(value["employeeId"], "1");
        assert_eq!(value["firstName"], "John");
        assert!(value.get("managerId").is_none());
        assert!(value.get("directReports").is_none());
    }

    #[test]
    fn test_draft_prefers_attached_employee() {
        let new = NewCompensation {
            employee_id: Some("by-id".to_string()),
            employee: Some(EmployeeRef {
                employee_id: "attached".to_string(),
            }),
            salary: 1.0,
            effective_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        };

        let draft = CompensationDraft::try_from(new).unwrap();
        assert_eq!(draft.subject.employee_id(), "attached");
    }

    #[test]
    fn test_draft_without_subject_is_not_found() {
        let json = r#"{"salary": 551234, "effectiveDate": "2024-04-23"}"#;
        let new: NewCompensation = serde_json::from_str(json).unwrap();

        let result = CompensationDraft::try_from(new);
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
