// ============================================================================
// CRM Core - Lead Intake Service
// File: crates/crm-core/src/services/intake_service.rs
// ============================================================================
//! Lead intake pipeline: payload normalization, record building, and the
//! dedup/upsert coordinator.
//!
//! The webhook transport delivers at least once; this service guarantees at
//! most one record per tenant and dedup key by merging repeated deliveries
//! into the existing lead.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::domain::{DedupKey, Lead, LeadPayload};
use crate::error::DomainError;
use crate::repositories::LeadRepository;
use crate::text;
use crm_shared::types::new_id;
use crm_shared::utils::{mask_email, mask_phone};

/// What the coordinator did with an inbound payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeAction {
    Created,
    Merged,
}

impl IntakeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntakeAction::Created => "created",
            IntakeAction::Merged => "merged",
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntakeOutcome {
    pub action: IntakeAction,
    pub lead: Lead,
}

/// Builds a canonical [`Lead`] from a raw inbound payload. Pure: no
/// persistence happens here.
///
/// The only hard failure is a missing tenant scope. An invalid phone is
/// flagged, never rejected; the business prefers a partial lead over a lost
/// one.
pub fn build_lead(payload: &LeadPayload, now: DateTime<Utc>) -> Result<Lead, DomainError> {
    let tenant_id = payload.tenant_id.ok_or(DomainError::MissingTenant)?;

    let (phone, phone_invalid) = match payload
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
    {
        Some(raw) => {
            let digits = text::extract_digits(raw);
            let invalid = !text::is_valid_brazilian_phone(raw);
            if invalid {
                warn!(
                    tenant_id = %tenant_id,
                    phone = %mask_phone(raw),
                    "Capturing lead with invalid phone"
                );
            }
            (Some(digits), invalid)
        }
        None => (None, false),
    };

    let name = payload
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from)
        .or_else(|| {
            payload
                .message
                .as_deref()
                .filter(|m| text::looks_like_name(m))
                .map(|m| text::capitalize_words(m.trim()))
        });

    let email = payload
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(String::from);

    let notes = payload
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from);

    Ok(Lead {
        id: new_id(),
        tenant_id,
        name,
        phone,
        phone_invalid,
        email,
        origin: payload.origin.clone(),
        status: payload.status.unwrap_or_default(),
        assigned_employee_id: None,
        notes,
        created_at: now,
        updated_at: now,
    })
}

/// Dedup & upsert coordinator over a [`LeadRepository`].
pub struct LeadIntakeService<R: LeadRepository> {
    repo: Arc<R>,
}

impl<R: LeadRepository> LeadIntakeService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Ingests one webhook delivery. Idempotent per (tenant, dedup key):
    /// the first delivery creates, every repeat merges into the same record.
    pub async fn ingest(&self, payload: &LeadPayload) -> Result<IntakeOutcome, DomainError> {
        let candidate = build_lead(payload, Utc::now())?;

        let Some(key) = candidate.dedup_key() else {
            // no usable phone or email: nothing to dedup against
            let lead = self.repo.create(&candidate).await?;
            info!(tenant_id = %lead.tenant_id, lead_id = %lead.id, "Lead created without dedup key");
            return Ok(IntakeOutcome { action: IntakeAction::Created, lead });
        };

        if let Some(existing) = self.repo.find_by_dedup_key(&candidate.tenant_id, &key).await? {
            let lead = self.merge_into(existing, &candidate, payload).await?;
            return Ok(IntakeOutcome { action: IntakeAction::Merged, lead });
        }

        match self.repo.create(&candidate).await {
            Ok(lead) => {
                info!(tenant_id = %lead.tenant_id, lead_id = %lead.id, "Lead created");
                Ok(IntakeOutcome { action: IntakeAction::Created, lead })
            }
            Err(DomainError::DuplicateLead) => {
                // a concurrent delivery won the lookup-then-create race; the
                // unique constraint is the arbiter, so converge by merging
                warn!(
                    tenant_id = %candidate.tenant_id,
                    key = %masked_key(&key),
                    "Duplicate create detected, retrying as merge"
                );
                let existing = self
                    .repo
                    .find_by_dedup_key(&candidate.tenant_id, &key)
                    .await?
                    .ok_or_else(|| {
                        DomainError::InternalError(
                            "duplicate reported but no existing lead found".to_string(),
                        )
                    })?;
                let lead = self.merge_into(existing, &candidate, payload).await?;
                Ok(IntakeOutcome { action: IntakeAction::Merged, lead })
            }
            Err(e) => Err(e),
        }
    }

    async fn merge_into(
        &self,
        mut existing: Lead,
        candidate: &Lead,
        payload: &LeadPayload,
    ) -> Result<Lead, DomainError> {
        existing.merge_from(candidate, Utc::now());
        // status only moves when the payload carried one explicitly; a
        // defaulted `new` must not reset an advanced lifecycle
        if let Some(status) = payload.status {
            existing.status = status;
        }
        let lead = self.repo.update(&existing).await?;
        info!(tenant_id = %lead.tenant_id, lead_id = %lead.id, "Lead merged");
        Ok(lead)
    }
}

/// Dedup keys carry contact data; logs only ever see the masked form.
fn masked_key(key: &DedupKey) -> String {
    match key {
        DedupKey::Phone(phone) => mask_phone(phone),
        DedupKey::Email(email) => mask_email(email),
    }
}
