//! API Response wrapper

use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crm_core::error::DomainError;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

pub type ErrorResponse = (StatusCode, Json<ApiResponse<()>>);

pub fn error_response(status: StatusCode, code: &str, message: &str) -> ErrorResponse {
    (status, Json(ApiResponse::error(code, message)))
}

/// Single place mapping domain errors onto HTTP statuses. Persistence
/// failures surface as 500 unchanged; retry policy belongs to the caller.
pub fn domain_error_response(err: DomainError) -> ErrorResponse {
    let (status, code) = match &err {
        DomainError::MissingTenant => (StatusCode::UNPROCESSABLE_ENTITY, "MISSING_TENANT"),
        DomainError::LeadNotFound => (StatusCode::NOT_FOUND, "LEAD_NOT_FOUND"),
        DomainError::EmployeeNotFound => (StatusCode::NOT_FOUND, "EMPLOYEE_NOT_FOUND"),
        DomainError::InvalidStatus(_) => (StatusCode::BAD_REQUEST, "INVALID_STATUS"),
        DomainError::DuplicateLead => (StatusCode::CONFLICT, "DUPLICATE_LEAD"),
        DomainError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        DomainError::DatabaseError(_) | DomainError::InternalError(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
        }
    };
    error_response(status, code, &err.to_string())
}
