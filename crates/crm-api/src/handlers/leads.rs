// ============================================================================
// CRM API - Lead Handlers
// File: crates/crm-api/src/handlers/leads.rs
// ============================================================================
//! Dashboard lead routes. All of them run through the access guard; listing
//! and status updates are open to any staff, assignment is admin-only.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crm_core::domain::LeadStatus;
use crm_core::error::DomainError;
use crm_core::services::RouteRequirements;
use crm_shared::types::Pagination;

use crate::dto::{LeadDto, LeadWithAssigneeDto};
use crate::response::{domain_error_response, ApiResponse, ErrorResponse};
use crate::session::authorize;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListLeadsQuery {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// List handler - GET /api/v1/leads
pub async fn list_leads(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListLeadsQuery>,
) -> Result<Json<ApiResponse<Vec<LeadWithAssigneeDto>>>, ErrorResponse> {
    let employee = authorize(&headers, RouteRequirements::default())?;

    let defaults = Pagination::default();
    let pagination = Pagination {
        page: query.page.unwrap_or(defaults.page),
        per_page: query.per_page.unwrap_or(defaults.per_page),
    };

    let rows = state
        .leads
        .list(&employee.tenant_id, pagination)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(
        rows.iter().map(LeadWithAssigneeDto::from).collect(),
    )))
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Status update handler - PATCH /api/v1/leads/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(lead_id): Path<Uuid>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<ApiResponse<LeadDto>>, ErrorResponse> {
    let employee = authorize(&headers, RouteRequirements::default())?;

    let status = LeadStatus::from_str(&body.status)
        .ok_or_else(|| domain_error_response(DomainError::InvalidStatus(body.status.clone())))?;

    let lead = state
        .leads
        .update_status(&employee.tenant_id, &lead_id, status)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(LeadDto::from(&lead))))
}

#[derive(Debug, Deserialize)]
pub struct AssignEmployeeRequest {
    pub employee_id: Uuid,
}

/// Assignment handler - PATCH /api/v1/leads/{id}/assign (admin only)
pub async fn assign_employee(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(lead_id): Path<Uuid>,
    Json(body): Json<AssignEmployeeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LeadDto>>), ErrorResponse> {
    let employee = authorize(&headers, RouteRequirements { require_admin: true })?;

    let lead = state
        .leads
        .assign_employee(&employee.tenant_id, &lead_id, &body.employee_id)
        .await
        .map_err(domain_error_response)?;

    Ok((StatusCode::OK, Json(ApiResponse::success(LeadDto::from(&lead)))))
}
