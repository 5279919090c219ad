//! Employee HTTP handlers

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crm_core::services::RouteRequirements;

use crate::dto::EmployeeDto;
use crate::response::{domain_error_response, ApiResponse, ErrorResponse};
use crate::session::authorize;
use crate::state::AppState;

/// List handler - GET /api/v1/employees
pub async fn list_employees(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<Vec<EmployeeDto>>>, ErrorResponse> {
    let employee = authorize(&headers, RouteRequirements::default())?;

    let employees = state
        .leads
        .list_employees(&employee.tenant_id)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(
        employees.iter().map(EmployeeDto::from).collect(),
    )))
}
