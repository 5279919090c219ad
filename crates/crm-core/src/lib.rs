//! # CRM Core
//!
//! Domain entities, text normalization, services, and repository traits for
//! the lead-ingestion pipeline.

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;
pub mod text;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
