use std::sync::Arc;

use crm_core::services::{LeadIntakeService, LeadService};
use crm_infrastructure::{PgEmployeeRepository, PgLeadRepository};
use crm_shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub intake: Arc<LeadIntakeService<PgLeadRepository>>,
    pub leads: Arc<LeadService<PgLeadRepository, PgEmployeeRepository>>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(pool: sqlx::PgPool, config: AppConfig) -> Self {
        let lead_repo = Arc::new(PgLeadRepository::new(pool.clone()));
        let employee_repo = Arc::new(PgEmployeeRepository::new(pool));
        Self {
            intake: Arc::new(LeadIntakeService::new(lead_repo.clone())),
            leads: Arc::new(LeadService::new(lead_repo, employee_repo)),
            config,
        }
    }
}
