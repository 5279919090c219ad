//! Route table

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{employees, health, leads, webhook};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Webhook intake
        .route("/api/v1/webhook/leads", post(webhook::receive_lead))
        // Dashboard routes
        .route("/api/v1/leads", get(leads::list_leads))
        .route("/api/v1/leads/{id}/status", patch(leads::update_status))
        .route("/api/v1/leads/{id}/assign", patch(leads::assign_employee))
        .route("/api/v1/employees", get(employees::list_employees))
        .with_state(state)
}
