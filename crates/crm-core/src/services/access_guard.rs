// ============================================================================
// CRM Core - Access Guard
// File: crates/crm-core/src/services/access_guard.rs
// ============================================================================
//! Stateless route-access classifier.
//!
//! Re-evaluated on every route entry and session change; nothing is retained
//! between calls and no outcome is ever "no decision".

use serde::Serialize;

use crate::domain::{AccessLevel, SessionContext};

/// Per-route requirements supplied by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteRequirements {
    pub require_admin: bool,
}

/// What the caller should do with the request. Callers pattern-match on this
/// to render, redirect, or reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    /// Session still resolving; render nothing yet.
    Loading,
    RedirectLogin,
    /// Authenticated account without a linked staff profile.
    NeedsEmployeeSetup,
    AccessDenied,
    Allow,
}

/// First matching rule wins, in this exact order: resolving, unauthenticated,
/// no employee profile, insufficient access level, allow.
pub fn evaluate_access(
    session: &SessionContext,
    requirements: &RouteRequirements,
) -> AccessDecision {
    if session.resolving {
        return AccessDecision::Loading;
    }
    if !session.is_authenticated {
        return AccessDecision::RedirectLogin;
    }
    let Some(employee) = &session.employee else {
        return AccessDecision::NeedsEmployeeSetup;
    };
    if requirements.require_admin && employee.access_level != AccessLevel::Admin {
        return AccessDecision::AccessDenied;
    }
    AccessDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EmployeeRef;
    use crm_shared::types::new_id;

    fn employee(level: AccessLevel) -> EmployeeRef {
        EmployeeRef {
            id: new_id(),
            tenant_id: new_id(),
            display_name: "Carlos".to_string(),
            access_level: level,
        }
    }

    const ANY: RouteRequirements = RouteRequirements { require_admin: false };
    const ADMIN_ONLY: RouteRequirements = RouteRequirements { require_admin: true };

    #[test]
    fn test_resolving_session_is_loading() {
        let decision = evaluate_access(&SessionContext::resolving(), &ADMIN_ONLY);
        assert_eq!(decision, AccessDecision::Loading);
    }

    #[test]
    fn test_unauthenticated_redirects_to_login() {
        let decision = evaluate_access(&SessionContext::anonymous(), &ANY);
        assert_eq!(decision, AccessDecision::RedirectLogin);
    }

    #[test]
    fn test_authenticated_without_profile_needs_setup() {
        let decision = evaluate_access(&SessionContext::authenticated(None), &ANY);
        assert_eq!(decision, AccessDecision::NeedsEmployeeSetup);
    }

    #[test]
    fn test_staff_denied_on_admin_route() {
        let session = SessionContext::authenticated(Some(employee(AccessLevel::Staff)));
        assert_eq!(evaluate_access(&session, &ADMIN_ONLY), AccessDecision::AccessDenied);
    }

    #[test]
    fn test_admin_allowed_on_admin_route() {
        let session = SessionContext::authenticated(Some(employee(AccessLevel::Admin)));
        assert_eq!(evaluate_access(&session, &ADMIN_ONLY), AccessDecision::Allow);
    }

    #[test]
    fn test_staff_allowed_on_plain_route() {
        let session = SessionContext::authenticated(Some(employee(AccessLevel::Staff)));
        assert_eq!(evaluate_access(&session, &ANY), AccessDecision::Allow);
    }
}
