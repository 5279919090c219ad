// ============================================================================
// CRM API - Webhook Handlers
// File: crates/crm-api/src/handlers/webhook.rs
// ============================================================================
//! Chatbot webhook intake. The transport retries delivery at least once;
//! the intake service converges repeats onto one lead, so this handler stays
//! a thin mapping from pipeline outcome to HTTP status.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::info;
use validator::Validate;

use crm_core::domain::LeadPayload;
use crm_core::services::IntakeAction;

use crate::dto::IntakeResponseDto;
use crate::response::{domain_error_response, error_response, ApiResponse, ErrorResponse};
use crate::state::AppState;

/// Webhook intake handler - POST /api/v1/webhook/leads
///
/// 201 when a lead was created, 200 when the delivery merged into an
/// existing one.
pub async fn receive_lead(
    State(state): State<AppState>,
    Json(payload): Json<LeadPayload>,
) -> Result<(StatusCode, Json<ApiResponse<IntakeResponseDto>>), ErrorResponse> {
    payload.validate().map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", &e.to_string())
    })?;

    let outcome = state
        .intake
        .ingest(&payload)
        .await
        .map_err(domain_error_response)?;

    info!(
        action = outcome.action.as_str(),
        lead_id = %outcome.lead.id,
        origin = %outcome.lead.origin,
        "Webhook delivery processed"
    );

    let status = match outcome.action {
        IntakeAction::Created => StatusCode::CREATED,
        IntakeAction::Merged => StatusCode::OK,
    };

    Ok((status, Json(ApiResponse::success(IntakeResponseDto::from(&outcome)))))
}
