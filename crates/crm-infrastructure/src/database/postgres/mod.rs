//! PostgreSQL repository implementations

pub mod employee_repo_impl;
pub mod lead_repo_impl;

pub use employee_repo_impl::PgEmployeeRepository;
pub use lead_repo_impl::PgLeadRepository;
