//! Domain services (business logic)

pub mod access_guard;
pub mod intake_service;
pub mod lead_service;

pub use access_guard::{evaluate_access, AccessDecision, RouteRequirements};
pub use intake_service::{build_lead, IntakeAction, IntakeOutcome, LeadIntakeService};
pub use lead_service::LeadService;
