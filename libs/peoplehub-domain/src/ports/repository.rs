//! Repository ports
//!
//! [`CrudRepository`] is the typed contract a bounded context's service is
//! built against. Each context names its port with a type alias; the
//! composition root decides which adapter satisfies it.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use super::persistence::{Document, Filter, PersistenceClient};
use crate::entity::{from_document, to_document, to_patch_document, Entity, Record};
use crate::error::{DomainError, Result};
use crate::ids::RecordId;
use crate::records::{
    Career, Employee, Feedback, KnowledgeArticle, Mentoring, Notification, Recognition,
    Recommendation, Training,
};

/// Typed persistence operations for one entity
#[async_trait]
pub trait CrudRepository<E: Entity>: Send + Sync {
    /// Persist a new record built from `draft` plus `extra` fields
    async fn create_with(&self, draft: &E::Create, extra: Document) -> Result<E>;

    /// Persist a new record built from `draft`
    async fn create(&self, draft: &E::Create) -> Result<E> {
        self.create_with(draft, Document::new()).await
    }

    /// Fetch one record
    ///
    /// # Errors
    ///
    /// `DomainError::NotFound` if no record has this id
    async fn get(&self, id: RecordId) -> Result<E>;

    async fn list(&self, filter: &Filter) -> Result<Vec<E>>;

    /// Merge arbitrary fields into a stored record
    async fn patch_fields(&self, id: RecordId, fields: Document) -> Result<E>;

    /// Merge the supplied fields of `patch`; absent fields keep their values
    /// and explicit nulls clear nullable ones
    async fn update(&self, id: RecordId, patch: &E::Update) -> Result<E> {
        self.patch_fields(id, to_patch_document(patch)?).await
    }

    /// Remove exactly one record
    ///
    /// # Errors
    ///
    /// `DomainError::NotFound` if no record has this id
    async fn delete(&self, id: RecordId) -> Result<()>;
}

pub type EmployeeRepository = dyn CrudRepository<Employee>;
pub type TrainingRepository = dyn CrudRepository<Training>;
pub type RecognitionRepository = dyn CrudRepository<Recognition>;
pub type RecommendationRepository = dyn CrudRepository<Recommendation>;
pub type CareerRepository = dyn CrudRepository<Career>;
pub type MentoringRepository = dyn CrudRepository<Mentoring>;
pub type NotificationRepository = dyn CrudRepository<Notification>;
pub type FeedbackRepository = dyn CrudRepository<Feedback>;
pub type KnowledgeBaseRepository = dyn CrudRepository<KnowledgeArticle>;

/// Typed access to one collection of the shared persistence client
///
/// This is the default adapter for every repository port, and the thing the
/// simpler services use directly when they have no port of their own.
pub struct ClientRepository<R> {
    client: Arc<dyn PersistenceClient>,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for ClientRepository<R> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            _record: PhantomData,
        }
    }
}

impl<R: Record> ClientRepository<R> {
    pub fn new(client: Arc<dyn PersistenceClient>) -> Self {
        Self {
            client,
            _record: PhantomData,
        }
    }

    /// Insert raw fields
    #[instrument(skip(self, data), fields(collection = R::COLLECTION))]
    pub async fn insert(&self, data: Document) -> Result<R> {
        let stored = self.client.insert(R::COLLECTION, data).await?;
        from_document(stored)
    }

    /// Insert raw fields unless a record already matches `unique`
    #[instrument(skip(self, data, unique), fields(collection = R::COLLECTION))]
    pub async fn insert_unique(&self, data: Document, unique: &Filter) -> Result<R> {
        let stored = self.client.insert_unique(R::COLLECTION, data, unique).await?;
        from_document(stored)
    }

    pub async fn find(&self, id: RecordId) -> Result<Option<R>> {
        match self.client.find(R::COLLECTION, id).await? {
            Some(document) => from_document(document).map(Some),
            None => Ok(None),
        }
    }

    pub async fn fetch(&self, id: RecordId) -> Result<R> {
        self.find(id)
            .await?
            .ok_or_else(|| DomainError::not_found(R::COLLECTION, id))
    }

    pub async fn select(&self, filter: &Filter) -> Result<Vec<R>> {
        self.client
            .list(R::COLLECTION, filter)
            .await?
            .into_iter()
            .map(from_document)
            .collect()
    }

    #[instrument(skip(self, id, patch), fields(collection = R::COLLECTION, id = %id))]
    pub async fn merge(&self, id: RecordId, patch: Document) -> Result<R> {
        let stored = self.client.update(R::COLLECTION, id, patch).await?;
        from_document(stored)
    }

    #[instrument(skip(self, id), fields(collection = R::COLLECTION, id = %id))]
    pub async fn remove(&self, id: RecordId) -> Result<()> {
        self.client.delete(R::COLLECTION, id).await?;
        debug!("Record removed");
        Ok(())
    }
}

#[async_trait]
impl<E: Entity> CrudRepository<E> for ClientRepository<E> {
    async fn create_with(&self, draft: &E::Create, extra: Document) -> Result<E> {
        let mut fields = to_document(draft)?;
        fields.extend(extra);
        self.insert(fields).await
    }

    async fn get(&self, id: RecordId) -> Result<E> {
        self.fetch(id).await
    }

    async fn list(&self, filter: &Filter) -> Result<Vec<E>> {
        self.select(filter).await
    }

    async fn patch_fields(&self, id: RecordId, fields: Document) -> Result<E> {
        self.merge(id, fields).await
    }

    async fn delete(&self, id: RecordId) -> Result<()> {
        self.remove(id).await
    }
}
