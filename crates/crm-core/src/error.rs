//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Missing required field: empresa_id")]
    MissingTenant,

    #[error("Lead not found")]
    LeadNotFound,

    #[error("Employee not found")]
    EmployeeNotFound,

    #[error("Unknown lead status: {0}")]
    InvalidStatus(String),

    #[error("Lead already exists for this tenant and dedup key")]
    DuplicateLead,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
