// ============================================================================
// CRM Infrastructure - PostgreSQL Lead Repository
// File: crates/crm-infrastructure/src/database/postgres/lead_repo_impl.rs
// ============================================================================
//! The `leads` table carries a partial unique index on
//! `(tenant_id, phone_normalized) WHERE removed_at IS NULL AND NOT
//! phone_invalid`; this adapter surfaces violations as
//! `DomainError::DuplicateLead` so the intake coordinator can retry the
//! create as a merge. Rows flagged `phone_invalid` are outside the index, so
//! a garbage number can never block a capture.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use crm_core::domain::{DedupKey, Lead, LeadStatus, LeadWithAssignee};
use crm_core::error::DomainError;
use crm_core::repositories::LeadRepository;
use crm_shared::types::Pagination;

pub struct PgLeadRepository {
    pool: PgPool,
}

impl PgLeadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct LeadRow {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: Option<String>,
    pub phone_normalized: Option<String>,
    pub phone_invalid: bool,
    pub email: Option<String>,
    pub origin: String,
    pub status: String,
    pub assigned_employee_id: Option<Uuid>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LeadRow> for Lead {
    fn from(row: LeadRow) -> Self {
        Lead {
            id: row.id,
            tenant_id: row.tenant_id,
            name: row.name,
            phone: row.phone_normalized,
            phone_invalid: row.phone_invalid,
            email: row.email,
            origin: row.origin,
            status: LeadStatus::from_str(&row.status).unwrap_or_default(),
            assigned_employee_id: row.assigned_employee_id,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct LeadWithAssigneeRow {
    #[sqlx(flatten)]
    lead: LeadRow,
    assigned_employee_name: Option<String>,
}

#[async_trait]
impl LeadRepository for PgLeadRepository {
    async fn find_by_id(&self, tenant_id: &Uuid, id: &Uuid) -> Result<Option<Lead>, DomainError> {
        let row: Option<LeadRow> = sqlx::query_as(
            r#"
            SELECT
                id, tenant_id, name, phone_normalized, phone_invalid,
                email, origin, status, assigned_employee_id, notes,
                created_at, updated_at
            FROM leads
            WHERE tenant_id = $1 AND id = $2 AND removed_at IS NULL
            "#,
        )
        .bind(tenant_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding lead by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_dedup_key(
        &self,
        tenant_id: &Uuid,
        key: &DedupKey,
    ) -> Result<Option<Lead>, DomainError> {
        let query = match key {
            DedupKey::Phone(_) => {
                r#"
                SELECT
                    id, tenant_id, name, phone_normalized, phone_invalid,
                    email, origin, status, assigned_employee_id, notes,
                    created_at, updated_at
                FROM leads
                WHERE tenant_id = $1 AND phone_normalized = $2 AND removed_at IS NULL
                "#
            }
            DedupKey::Email(_) => {
                r#"
                SELECT
                    id, tenant_id, name, phone_normalized, phone_invalid,
                    email, origin, status, assigned_employee_id, notes,
                    created_at, updated_at
                FROM leads
                WHERE tenant_id = $1 AND LOWER(email) = LOWER($2) AND removed_at IS NULL
                "#
            }
        };

        let row: Option<LeadRow> = sqlx::query_as(query)
            .bind(tenant_id)
            .bind(key.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error finding lead by dedup key: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, lead: &Lead) -> Result<Lead, DomainError> {
        info!("Creating lead for tenant: {}", lead.tenant_id);

        let row: LeadRow = sqlx::query_as(
            r#"
            INSERT INTO leads (
                id, tenant_id, name, phone_normalized, phone_invalid,
                email, origin, status, assigned_employee_id, notes,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING
                id, tenant_id, name, phone_normalized, phone_invalid,
                email, origin, status, assigned_employee_id, notes,
                created_at, updated_at
            "#,
        )
        .bind(lead.id)
        .bind(lead.tenant_id)
        .bind(&lead.name)
        .bind(&lead.phone)
        .bind(lead.phone_invalid)
        .bind(&lead.email)
        .bind(&lead.origin)
        .bind(lead.status.as_str())
        .bind(lead.assigned_employee_id)
        .bind(&lead.notes)
        .bind(lead.created_at)
        .bind(lead.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::DuplicateLead
            } else {
                error!("Database error creating lead: {}", e);
                DomainError::DatabaseError(msg)
            }
        })?;

        info!("Lead created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, lead: &Lead) -> Result<Lead, DomainError> {
        let row: Option<LeadRow> = sqlx::query_as(
            r#"
            UPDATE leads
            SET
                name = $3,
                phone_normalized = $4,
                phone_invalid = $5,
                email = $6,
                origin = $7,
                status = $8,
                assigned_employee_id = $9,
                notes = $10,
                updated_at = $11
            WHERE tenant_id = $1 AND id = $2 AND removed_at IS NULL
            RETURNING
                id, tenant_id, name, phone_normalized, phone_invalid,
                email, origin, status, assigned_employee_id, notes,
                created_at, updated_at
            "#,
        )
        .bind(lead.tenant_id)
        .bind(lead.id)
        .bind(&lead.name)
        .bind(&lead.phone)
        .bind(lead.phone_invalid)
        .bind(&lead.email)
        .bind(&lead.origin)
        .bind(lead.status.as_str())
        .bind(lead.assigned_employee_id)
        .bind(&lead.notes)
        .bind(lead.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating lead: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(|r| r.into()).ok_or(DomainError::LeadNotFound)
    }

    async fn list_with_assignee(
        &self,
        tenant_id: &Uuid,
        pagination: &Pagination,
    ) -> Result<Vec<LeadWithAssignee>, DomainError> {
        let rows: Vec<LeadWithAssigneeRow> = sqlx::query_as(
            r#"
            SELECT
                l.id, l.tenant_id, l.name, l.phone_normalized, l.phone_invalid,
                l.email, l.origin, l.status, l.assigned_employee_id, l.notes,
                l.created_at, l.updated_at,
                e.display_name AS assigned_employee_name
            FROM leads l
            LEFT JOIN employees e
                ON e.id = l.assigned_employee_id AND e.removed_at IS NULL
            WHERE l.tenant_id = $1 AND l.removed_at IS NULL
            ORDER BY l.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(tenant_id)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing leads: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows
            .into_iter()
            .map(|r| LeadWithAssignee {
                lead: r.lead.into(),
                assigned_employee_name: r.assigned_employee_name,
            })
            .collect())
    }
}
