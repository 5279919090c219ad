//! Employee repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::EmployeeProfile;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(
        &self,
        tenant_id: &Uuid,
        id: &Uuid,
    ) -> Result<Option<EmployeeProfile>, DomainError>;

    async fn list_by_tenant(&self, tenant_id: &Uuid) -> Result<Vec<EmployeeProfile>, DomainError>;
}
