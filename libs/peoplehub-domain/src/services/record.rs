//! Generic create / read / update / delete service
//!
//! Most bounded contexts are this service over their repository port plus a
//! handful of context-specific operations added in their own module.

use std::sync::Arc;

use tracing::{debug, info};

use crate::entity::{apply_patch, to_patch_document, DeleteAck, Entity};
use crate::error::Result;
use crate::ids::RecordId;
use crate::ports::{CrudRepository, Filter};

/// Service over one entity's repository port
pub struct RecordService<E: Entity> {
    repository: Arc<dyn CrudRepository<E>>,
}

impl<E: Entity> RecordService<E> {
    /// Create a new service with the repository port injected
    pub fn new(repository: Arc<dyn CrudRepository<E>>) -> Self {
        Self { repository }
    }

    /// Persist a new record from a validated create DTO
    pub async fn create(&self, draft: E::Create) -> Result<E> {
        E::check(&draft)?;
        let record = self.repository.create(&draft).await?;
        info!(collection = E::COLLECTION, id = %record.id(), "Record created");
        Ok(record)
    }

    pub async fn get(&self, id: RecordId) -> Result<E> {
        self.repository.get(id).await
    }

    pub async fn list(&self, filter: &Filter) -> Result<Vec<E>> {
        self.repository.list(filter).await
    }

    /// Merge-patch the supplied fields into an existing record
    ///
    /// The merged result goes through the entity's business rules before
    /// anything is written.
    ///
    /// # Errors
    ///
    /// - `DomainError::NotFound` if no record has this id
    /// - whatever [`Entity::check_merged`] reports for the merged record
    pub async fn update(&self, id: RecordId, patch: E::Update) -> Result<E> {
        let changes = to_patch_document(&patch)?;
        let current = self.repository.get(id).await?;
        apply_patch(&current, &changes)?.check_merged()?;

        let record = self.repository.patch_fields(id, changes).await?;
        debug!(collection = E::COLLECTION, id = %id, "Record updated");
        Ok(record)
    }

    /// Remove exactly one record
    ///
    /// Not idempotent: deleting an id that is already gone reports
    /// `DomainError::NotFound`.
    pub async fn delete(&self, id: RecordId) -> Result<DeleteAck> {
        self.repository.delete(id).await?;
        info!(collection = E::COLLECTION, id = %id, "Record deleted");
        Ok(DeleteAck::ok())
    }

    pub(crate) fn repository(&self) -> &Arc<dyn CrudRepository<E>> {
        &self.repository
    }
}
