// ============================================================================
// CRM Infrastructure - PostgreSQL Employee Repository
// File: crates/crm-infrastructure/src/database/postgres/employee_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

use crm_core::domain::{AccessLevel, EmployeeProfile};
use crm_core::error::DomainError;
use crm_core::repositories::EmployeeRepository;

pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct EmployeeRow {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub display_name: String,
    pub access_level: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub removed_at: Option<DateTime<Utc>>,
}

impl From<EmployeeRow> for EmployeeProfile {
    fn from(row: EmployeeRow) -> Self {
        EmployeeProfile {
            id: row.id,
            tenant_id: row.tenant_id,
            display_name: row.display_name,
            access_level: AccessLevel::from_str(&row.access_level).unwrap_or_default(),
            is_active: row.is_active,
            created_at: row.created_at,
            removed_at: row.removed_at,
        }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_by_id(
        &self,
        tenant_id: &Uuid,
        id: &Uuid,
    ) -> Result<Option<EmployeeProfile>, DomainError> {
        let row: Option<EmployeeRow> = sqlx::query_as(
            r#"
            SELECT
                id, tenant_id, display_name, access_level,
                is_active, created_at, removed_at
            FROM employees
            WHERE tenant_id = $1 AND id = $2 AND removed_at IS NULL
            "#,
        )
        .bind(tenant_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding employee by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn list_by_tenant(
        &self,
        tenant_id: &Uuid,
    ) -> Result<Vec<EmployeeProfile>, DomainError> {
        let rows: Vec<EmployeeRow> = sqlx::query_as(
            r#"
            SELECT
                id, tenant_id, display_name, access_level,
                is_active, created_at, removed_at
            FROM employees
            WHERE tenant_id = $1 AND removed_at IS NULL
            ORDER BY display_name
            "#,
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing employees: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}
