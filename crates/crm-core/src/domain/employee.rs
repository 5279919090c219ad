// ============================================================================
// CRM Core - Employee Profile Entity
// File: crates/crm-core/src/domain/employee.rs
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Admin,
    Staff,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Admin => "admin",
            AccessLevel::Staff => "staff",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(AccessLevel::Admin),
            "staff" => Some(AccessLevel::Staff),
            _ => None,
        }
    }
}

impl Default for AccessLevel {
    fn default() -> Self {
        AccessLevel::Staff
    }
}

/// Staff member profile, linked to an authenticated account by the external
/// auth subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub display_name: String,
    pub access_level: AccessLevel,
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub removed_at: Option<DateTime<Utc>>,
}

impl EmployeeProfile {
    pub fn is_deleted(&self) -> bool {
        self.removed_at.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.access_level == AccessLevel::Admin
    }
}

/// The slice of an employee profile the session layer carries around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRef {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub display_name: String,
    pub access_level: AccessLevel,
}

impl From<&EmployeeProfile> for EmployeeRef {
    fn from(profile: &EmployeeProfile) -> Self {
        Self {
            id: profile.id,
            tenant_id: profile.tenant_id,
            display_name: profile.display_name.clone(),
            access_level: profile.access_level,
        }
    }
}
