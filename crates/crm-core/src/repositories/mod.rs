//! Repository traits (ports)

pub mod employee_repository;
pub mod lead_repository;

pub use employee_repository::EmployeeRepository;
pub use lead_repository::LeadRepository;
