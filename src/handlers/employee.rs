//! Employee handlers
//!
//! Create, fetch, replace and reporting-structure endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

use crate::error::{AppError, AppResult};
use crate::model::{Employee, NewEmployee, ReportingStructure};
use crate::state::AppState;

/// Reject employees without a name
fn validate_employee(req: &NewEmployee) -> AppResult<()> {
    if req.first_name.trim().is_empty() {
        return Err(AppError::invalid("firstName", "is required"));
    }
    if req.last_name.trim().is_empty() {
        return Err(AppError::invalid("lastName", "is required"));
    }
    Ok(())
}

/// POST /api/employee
pub async fn create_employee(
    State(state): State<AppState>,
    Json(req): Json<NewEmployee>,
) -> AppResult<impl IntoResponse> {
    tracing::debug!(
        "Received employee create request for '{} {}'",
        req.first_name,
        req.last_name
    );
    validate_employee(&req)?;

    let employee = state.directory.create(req).await?;
    let location = format!("/api/employee/{}", employee.employee_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(employee),
    ))
}

/// GET /api/employee/:id
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    tracing::debug!("Received employee get request for '{}'", id);

    let employee = state.directory.get_by_id(&id).await?;
    Ok(Json(employee))
}

/// PUT /api/employee/:id
pub async fn replace_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<NewEmployee>,
) -> AppResult<Json<Employee>> {
    tracing::debug!("Received employee update request for '{}'", id);
    validate_employee(&req)?;

    let existing = state.directory.get_by_id(&id).await?;
    let replaced = state
        .directory
        .replace(&existing, Some(req))
        .await?
        .ok_or_else(|| AppError::employee_not_found(id))?;

    Ok(Json(replaced))
}

/// GET /api/employee/reportingstructure/:id
pub async fn get_reporting_structure(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ReportingStructure>> {
    tracing::debug!("Received reporting structure get request for employee '{}'", id);

    let employee = state.directory.get_by_id(&id).await?;
    let structure = state.directory.get_reporting_structure(employee).await?;

    Ok(Json(structure))
}
