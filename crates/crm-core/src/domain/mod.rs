//! # CRM Core - Domain Module
//!
//! Domain entities for the lead-ingestion pipeline.

pub mod employee;
pub mod lead;
pub mod payload;
pub mod session;

// Re-export all entities and enums
pub use employee::{AccessLevel, EmployeeProfile, EmployeeRef};
pub use lead::{DedupKey, Lead, LeadStatus, LeadWithAssignee};
pub use payload::LeadPayload;
pub use session::SessionContext;
