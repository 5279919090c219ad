//! Session context consumed by the access guard
//!
//! Owned and refreshed by the external auth subsystem; this core only reads
//! it.

use serde::{Deserialize, Serialize};

use super::EmployeeRef;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    /// True while the auth subsystem is still resolving the session.
    pub resolving: bool,
    pub is_authenticated: bool,
    /// Present once the authenticated account is linked to a staff profile.
    pub employee: Option<EmployeeRef>,
}

impl SessionContext {
    pub fn resolving() -> Self {
        Self { resolving: true, is_authenticated: false, employee: None }
    }

    pub fn anonymous() -> Self {
        Self { resolving: false, is_authenticated: false, employee: None }
    }

    pub fn authenticated(employee: Option<EmployeeRef>) -> Self {
        Self { resolving: false, is_authenticated: true, employee }
    }
}
