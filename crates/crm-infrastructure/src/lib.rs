//! # CRM Infrastructure
//!
//! PostgreSQL implementations of the core repository ports (adapters).

pub mod database;

pub use database::{create_pool, PgEmployeeRepository, PgLeadRepository};
