//! Session extraction and route guarding
//!
//! The auth gateway in front of this service resolves the session and
//! forwards it as `x-session-*` / `x-employee-*` headers; this module turns
//! those into a [`SessionContext`] and applies the access guard.

use axum::http::{HeaderMap, StatusCode};

use crm_core::domain::{AccessLevel, EmployeeRef, SessionContext};
use crm_core::services::{evaluate_access, AccessDecision, RouteRequirements};

use crate::response::{error_response, ErrorResponse};

pub const HEADER_SESSION_STATUS: &str = "x-session-status";
pub const HEADER_EMPLOYEE_ID: &str = "x-employee-id";
pub const HEADER_EMPLOYEE_NAME: &str = "x-employee-name";
pub const HEADER_EMPLOYEE_ACCESS_LEVEL: &str = "x-employee-access-level";
pub const HEADER_TENANT_ID: &str = "x-tenant-id";

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Rebuilds the session context from gateway headers. Anything malformed
/// degrades to an anonymous session; the guard then redirects to login.
pub fn session_from_headers(headers: &HeaderMap) -> SessionContext {
    match header_str(headers, HEADER_SESSION_STATUS) {
        Some("resolving") => SessionContext::resolving(),
        Some("authenticated") => SessionContext::authenticated(employee_from_headers(headers)),
        _ => SessionContext::anonymous(),
    }
}

fn employee_from_headers(headers: &HeaderMap) -> Option<EmployeeRef> {
    let id = header_str(headers, HEADER_EMPLOYEE_ID)?.parse().ok()?;
    let tenant_id = header_str(headers, HEADER_TENANT_ID)?.parse().ok()?;
    let display_name = header_str(headers, HEADER_EMPLOYEE_NAME)?.to_string();
    let access_level = header_str(headers, HEADER_EMPLOYEE_ACCESS_LEVEL)
        .and_then(AccessLevel::from_str)
        .unwrap_or_default();
    Some(EmployeeRef { id, tenant_id, display_name, access_level })
}

/// Runs the access guard over the request headers and either yields the
/// acting employee or the HTTP rendition of the guard's decision.
pub fn authorize(
    headers: &HeaderMap,
    requirements: RouteRequirements,
) -> Result<EmployeeRef, ErrorResponse> {
    let session = session_from_headers(headers);
    match evaluate_access(&session, &requirements) {
        AccessDecision::Allow => session.employee.ok_or_else(|| {
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Access allowed without an employee profile",
            )
        }),
        AccessDecision::Loading => Err(error_response(
            StatusCode::UNAUTHORIZED,
            "SESSION_LOADING",
            "Session still resolving, retry shortly",
        )),
        AccessDecision::RedirectLogin => Err(error_response(
            StatusCode::UNAUTHORIZED,
            "LOGIN_REQUIRED",
            "Authentication required",
        )),
        AccessDecision::NeedsEmployeeSetup => Err(error_response(
            StatusCode::FORBIDDEN,
            "EMPLOYEE_SETUP_REQUIRED",
            "Account has no linked employee profile",
        )),
        AccessDecision::AccessDenied => Err(error_response(
            StatusCode::FORBIDDEN,
            "ACCESS_DENIED",
            "Admin access required",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use uuid::Uuid;

    fn authenticated_headers(level: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_SESSION_STATUS, HeaderValue::from_static("authenticated"));
        headers.insert(
            HEADER_EMPLOYEE_ID,
            HeaderValue::from_str(&Uuid::new_v4().to_string()).unwrap(),
        );
        headers.insert(
            HEADER_TENANT_ID,
            HeaderValue::from_str(&Uuid::new_v4().to_string()).unwrap(),
        );
        headers.insert(HEADER_EMPLOYEE_NAME, HeaderValue::from_static("Carlos"));
        headers.insert(HEADER_EMPLOYEE_ACCESS_LEVEL, HeaderValue::from_str(level).unwrap());
        headers
    }

    #[test]
    fn test_missing_headers_mean_anonymous() {
        let session = session_from_headers(&HeaderMap::new());
        assert!(!session.resolving);
        assert!(!session.is_authenticated);
    }

    #[test]
    fn test_authenticated_headers_carry_employee() {
        let session = session_from_headers(&authenticated_headers("admin"));
        assert!(session.is_authenticated);
        let employee = session.employee.unwrap();
        assert_eq!(employee.access_level, AccessLevel::Admin);
    }

    #[test]
    fn test_authorize_staff_on_admin_route_is_forbidden() {
        let headers = authenticated_headers("staff");
        let err = authorize(&headers, RouteRequirements { require_admin: true }).unwrap_err();
        assert_eq!(err.0, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_authorize_admin_on_admin_route_passes() {
        let headers = authenticated_headers("admin");
        let employee = authorize(&headers, RouteRequirements { require_admin: true }).unwrap();
        assert_eq!(employee.access_level, AccessLevel::Admin);
    }

    #[test]
    fn test_resolving_session_is_unauthorized_with_retry_code() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_SESSION_STATUS, HeaderValue::from_static("resolving"));
        let err = authorize(&headers, RouteRequirements::default()).unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);
    }
}
