// ============================================================================
// CRM Core - Lead Management Service
// File: crates/crm-core/src/services/lead_service.rs
// ============================================================================
//! Dashboard-facing lead operations: listing with assignee names, employee
//! assignment, and lifecycle updates. Everything is tenant-scoped; ids from
//! another tenant behave as not-found.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::{EmployeeProfile, Lead, LeadStatus, LeadWithAssignee};
use crate::error::DomainError;
use crate::repositories::{EmployeeRepository, LeadRepository};
use crm_shared::types::Pagination;

pub struct LeadService<L: LeadRepository, E: EmployeeRepository> {
    leads: Arc<L>,
    employees: Arc<E>,
}

impl<L: LeadRepository, E: EmployeeRepository> LeadService<L, E> {
    pub fn new(leads: Arc<L>, employees: Arc<E>) -> Self {
        Self { leads, employees }
    }

    pub async fn list(
        &self,
        tenant_id: &Uuid,
        pagination: Pagination,
    ) -> Result<Vec<LeadWithAssignee>, DomainError> {
        self.leads
            .list_with_assignee(tenant_id, &pagination.clamped())
            .await
    }

    /// Assigns a staff member to a lead. The employee must belong to the
    /// same tenant and still be active.
    pub async fn assign_employee(
        &self,
        tenant_id: &Uuid,
        lead_id: &Uuid,
        employee_id: &Uuid,
    ) -> Result<Lead, DomainError> {
        let employee = self
            .employees
            .find_by_id(tenant_id, employee_id)
            .await?
            .filter(|e| e.is_active && !e.is_deleted())
            .ok_or(DomainError::EmployeeNotFound)?;

        let mut lead = self
            .leads
            .find_by_id(tenant_id, lead_id)
            .await?
            .ok_or(DomainError::LeadNotFound)?;

        lead.assigned_employee_id = Some(employee.id);
        lead.updated_at = Utc::now();

        let lead = self.leads.update(&lead).await?;
        info!(tenant_id = %tenant_id, lead_id = %lead.id, employee_id = %employee.id, "Lead assigned");
        Ok(lead)
    }

    /// Active staff of a tenant, for the assignment dropdown.
    pub async fn list_employees(
        &self,
        tenant_id: &Uuid,
    ) -> Result<Vec<EmployeeProfile>, DomainError> {
        let employees = self.employees.list_by_tenant(tenant_id).await?;
        Ok(employees.into_iter().filter(|e| e.is_active).collect())
    }

    pub async fn update_status(
        &self,
        tenant_id: &Uuid,
        lead_id: &Uuid,
        status: LeadStatus,
    ) -> Result<Lead, DomainError> {
        let mut lead = self
            .leads
            .find_by_id(tenant_id, lead_id)
            .await?
            .ok_or(DomainError::LeadNotFound)?;

        lead.status = status;
        lead.updated_at = Utc::now();

        let lead = self.leads.update(&lead).await?;
        info!(tenant_id = %tenant_id, lead_id = %lead.id, status = status.as_str(), "Lead status updated");
        Ok(lead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccessLevel, EmployeeProfile};
    use crate::repositories::employee_repository::MockEmployeeRepository;
    use crate::repositories::lead_repository::MockLeadRepository;
    use chrono::Utc;
    use crm_shared::types::new_id;

    fn employee(tenant_id: Uuid, active: bool) -> EmployeeProfile {
        EmployeeProfile {
            id: new_id(),
            tenant_id,
            display_name: "Carlos".to_string(),
            access_level: AccessLevel::Staff,
            is_active: active,
            created_at: Utc::now(),
            removed_at: None,
        }
    }

    fn lead(tenant_id: Uuid) -> Lead {
        Lead {
            id: new_id(),
            tenant_id,
            name: Some("Maria Silva".to_string()),
            phone: Some("61999998888".to_string()),
            phone_invalid: false,
            email: None,
            origin: "chatbot".to_string(),
            status: LeadStatus::New,
            assigned_employee_id: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_assign_employee_sets_reference() {
        let tenant = new_id();
        let emp = employee(tenant, true);
        let emp_id = emp.id;
        let target = lead(tenant);
        let target_id = target.id;

        let mut leads = MockLeadRepository::new();
        let mut employees = MockEmployeeRepository::new();

        employees
            .expect_find_by_id()
            .returning(move |_, _| Ok(Some(emp.clone())));
        leads
            .expect_find_by_id()
            .returning(move |_, _| Ok(Some(target.clone())));
        leads.expect_update().returning(|l| Ok(l.clone()));

        let service = LeadService::new(Arc::new(leads), Arc::new(employees));
        let updated = service
            .assign_employee(&tenant, &target_id, &emp_id)
            .await
            .unwrap();

        assert_eq!(updated.assigned_employee_id, Some(emp_id));
    }

    #[tokio::test]
    async fn test_assign_inactive_employee_fails() {
        let tenant = new_id();
        let emp = employee(tenant, false);

        let mut leads = MockLeadRepository::new();
        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_find_by_id()
            .returning(move |_, _| Ok(Some(emp.clone())));
        leads.expect_find_by_id().never();

        let service = LeadService::new(Arc::new(leads), Arc::new(employees));
        let err = service
            .assign_employee(&tenant, &new_id(), &new_id())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::EmployeeNotFound));
    }

    #[tokio::test]
    async fn test_update_status_on_unknown_lead_fails() {
        let mut leads = MockLeadRepository::new();
        let employees = MockEmployeeRepository::new();
        leads.expect_find_by_id().returning(|_, _| Ok(None));

        let service = LeadService::new(Arc::new(leads), Arc::new(employees));
        let err = service
            .update_status(&new_id(), &new_id(), LeadStatus::Contacted)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::LeadNotFound));
    }
}
