//! Lead repository trait (port)
//!
//! The adapter must back `create` with a unique constraint on
//! `(tenant_id, phone_normalized)` scoped to rows where `removed_at IS NULL
//! AND NOT phone_invalid`, and surface violations as
//! [`DomainError::DuplicateLead`] so the intake service can converge
//! concurrent deliveries onto one record. Invalid digits stay out of the
//! index: leads flagged `phone_invalid` carry no dedup key and must always
//! insert.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{DedupKey, Lead, LeadWithAssignee};
use crate::error::DomainError;
use crm_shared::types::Pagination;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn find_by_id(&self, tenant_id: &Uuid, id: &Uuid) -> Result<Option<Lead>, DomainError>;

    /// Lookup scoped to one tenant by normalized phone digits or lowercase
    /// email, soft-deleted rows excluded.
    async fn find_by_dedup_key(
        &self,
        tenant_id: &Uuid,
        key: &DedupKey,
    ) -> Result<Option<Lead>, DomainError>;

    async fn create(&self, lead: &Lead) -> Result<Lead, DomainError>;

    async fn update(&self, lead: &Lead) -> Result<Lead, DomainError>;

    /// Leads joined with their assigned employee's display name, newest
    /// first.
    async fn list_with_assignee(
        &self,
        tenant_id: &Uuid,
        pagination: &Pagination,
    ) -> Result<Vec<LeadWithAssignee>, DomainError>;
}
