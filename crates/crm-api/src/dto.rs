//! Response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crm_core::domain::{EmployeeProfile, Lead, LeadWithAssignee};
use crm_core::services::IntakeOutcome;

/// Lead DTO for responses; the phone goes out in display form,
/// `(DD) DDDDD-DDDD`.
#[derive(Debug, Serialize)]
pub struct LeadDto {
    pub id: Uuid,
    pub tenant_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub phone_invalid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub origin: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_employee_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Lead> for LeadDto {
    fn from(lead: &Lead) -> Self {
        Self {
            id: lead.id,
            tenant_id: lead.tenant_id,
            name: lead.name.clone(),
            phone: lead.display_phone(),
            phone_invalid: lead.phone_invalid,
            email: lead.email.clone(),
            origin: lead.origin.clone(),
            status: lead.status.as_str().to_string(),
            assigned_employee_id: lead.assigned_employee_id,
            notes: lead.notes.clone(),
            created_at: lead.created_at,
            updated_at: lead.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LeadWithAssigneeDto {
    #[serde(flatten)]
    pub lead: LeadDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_employee_name: Option<String>,
}

impl From<&LeadWithAssignee> for LeadWithAssigneeDto {
    fn from(row: &LeadWithAssignee) -> Self {
        Self {
            lead: LeadDto::from(&row.lead),
            assigned_employee_name: row.assigned_employee_name.clone(),
        }
    }
}

/// Webhook intake response
#[derive(Debug, Serialize)]
pub struct IntakeResponseDto {
    pub action: String,
    pub lead: LeadDto,
}

impl From<&IntakeOutcome> for IntakeResponseDto {
    fn from(outcome: &IntakeOutcome) -> Self {
        Self {
            action: outcome.action.as_str().to_string(),
            lead: LeadDto::from(&outcome.lead),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EmployeeDto {
    pub id: Uuid,
    pub display_name: String,
    pub access_level: String,
}

impl From<&EmployeeProfile> for EmployeeDto {
    fn from(employee: &EmployeeProfile) -> Self {
        Self {
            id: employee.id,
            display_name: employee.display_name.clone(),
            access_level: employee.access_level.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_core::domain::LeadStatus;
    use crm_shared::types::new_id;

    #[test]
    fn test_lead_dto_formats_phone_for_display() {
        let lead = Lead {
            id: new_id(),
            tenant_id: new_id(),
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
        };
        let dto = LeadDto::from(&lead);
        assert_eq!(dto.phone.as_deref(), Some("(61) 99999-8888"));
        assert_eq!(dto.status, "new");
    }
}
