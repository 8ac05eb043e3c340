//! Employee service
//!
//! Employees carry an audit trail: every write records the acting user, and
//! removal is normally a soft delete (`archive`) rather than a hard delete.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::audit::{self, Auditable};
use crate::entity::{to_patch_document, DeleteAck};
use crate::error::{DomainError, Result};
use crate::ids::RecordId;
use crate::ports::{EmployeeRepository, Filter};
use crate::records::{CreateEmployee, Employee, UpdateEmployee};

pub struct EmployeeService {
    repository: Arc<EmployeeRepository>,
}

impl EmployeeService {
    /// Create a new EmployeeService with the repository port injected
    pub fn new(repository: Arc<EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Register a new employee, recording `actor` as creator
    pub async fn create(&self, draft: CreateEmployee, actor: &str) -> Result<Employee> {
        let employee = self
            .repository
            .create_with(&draft, audit::created_by(actor))
            .await?;
        info!(id = %employee.id, actor, "Employee created");
        Ok(employee)
    }

    pub async fn get(&self, id: RecordId) -> Result<Employee> {
        self.repository.get(id).await
    }

    /// List employees matching `filter`; archived employees only on request
    pub async fn list(&self, filter: &Filter, include_archived: bool) -> Result<Vec<Employee>> {
        let employees = self.repository.list(filter).await?;
        Ok(employees
            .into_iter()
            .filter(|employee| include_archived || !employee.is_soft_deleted())
            .collect())
    }

    pub async fn update(
        &self,
        id: RecordId,
        patch: UpdateEmployee,
        actor: &str,
    ) -> Result<Employee> {
        let mut fields = to_patch_document(&patch)?;
        fields.extend(audit::updated_by(actor));
        self.repository.patch_fields(id, fields).await
    }

    /// Soft-delete: stamp `deletedAt`/`deletedBy` and keep the record
    ///
    /// # Errors
    ///
    /// - `DomainError::NotFound` if no employee has this id
    /// - `DomainError::Conflict` if the employee is already archived
    pub async fn archive(&self, id: RecordId, actor: &str) -> Result<Employee> {
        let current = self.repository.get(id).await?;
        if current.is_soft_deleted() {
            return Err(DomainError::conflict(format!(
                "employee {id} is already archived"
            )));
        }
        let employee = self
            .repository
            .patch_fields(id, audit::soft_deleted(actor, Utc::now()))
            .await?;
        info!(id = %id, actor, "Employee archived");
        Ok(employee)
    }

    /// Hard delete
    pub async fn delete(&self, id: RecordId) -> Result<DeleteAck> {
        self.repository.delete(id).await?;
        info!(id = %id, "Employee deleted");
        Ok(DeleteAck::ok())
    }
}
