//! Compensation handlers

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

use crate::error::{AppError, AppResult};
use crate::model::{Compensation, CompensationDraft, NewCompensation};
use crate::state::AppState;

/// POST /api/employee/compensation
pub async fn create_compensation(
    State(state): State<AppState>,
    Json(req): Json<NewCompensation>,
) -> AppResult<impl IntoResponse> {
    tracing::debug!(
        "Received compensation create request for '{:?}' '{}' '{}'",
        req.employee_id,
        req.salary,
        req.effective_date
    );

    if !req.salary.is_finite() || req.salary < 0.0 {
        return Err(AppError::invalid("salary", "must be a non-negative amount"));
    }

    let draft = CompensationDraft::try_from(req)?;
    let compensation = state.directory.create_comp(draft).await?;
    let location = format!("/api/employee/compensation/{}", compensation.employee_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(compensation),
    ))
}

/// GET /api/employee/compensation/:id
pub async fn get_compensation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Compensation>>> {
    tracing::debug!("Received compensation get request for employee '{}'", id);

    let history = state.directory.get_comp_by_emp_id(&id).await?;
    Ok(Json(history))
}
