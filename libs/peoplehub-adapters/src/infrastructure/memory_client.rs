//! In-memory persistence client
//!
//! Implements the `PersistenceClient` port over process memory. Collections
//! keep insertion order, which is the order `list` returns.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use peoplehub_domain::ports::{
    Document, Filter, PersistenceClient, PersistenceError, IDENTITY_FIELDS,
};
use peoplehub_domain::RecordId;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

/// Persistence engine selected by `DATABASE_URL=memory://`
///
/// ## Identity
///
/// The client owns `id`, `createdAt` and `updatedAt`: ids are UUID v4,
/// timestamps are RFC 3339 UTC. Patches never overwrite identity fields.
#[derive(Default)]
pub struct InMemoryClient {
    collections: RwLock<HashMap<&'static str, Vec<Document>>>,
}

impl InMemoryClient {
    pub fn new() -> Self {
        info!("Initializing InMemoryClient");
        Self::default()
    }

    fn position(documents: &[Document], id: RecordId) -> Option<usize> {
        let key = id.to_string();
        documents
            .iter()
            .position(|d| d.get("id").and_then(Value::as_str) == Some(key.as_str()))
    }
}

fn now() -> Value {
    Value::String(Utc::now().to_rfc3339())
}

fn stamped(mut data: Document) -> (RecordId, Document) {
    let id = RecordId::new();
    let stamp = now();
    data.insert("id".into(), Value::String(id.to_string()));
    data.insert("createdAt".into(), stamp.clone());
    data.insert("updatedAt".into(), stamp);
    (id, data)
}

#[async_trait]
impl PersistenceClient for InMemoryClient {
    #[instrument(skip(self, data), fields(collection = collection))]
    async fn insert(
        &self,
        collection: &'static str,
        data: Document,
    ) -> Result<Document, PersistenceError> {
        let (id, data) = stamped(data);
        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(data.clone());
        debug!(id = %id, "Document inserted");
        Ok(data)
    }

    #[instrument(skip(self, data, unique), fields(collection = collection))]
    async fn insert_unique(
        &self,
        collection: &'static str,
        data: Document,
        unique: &Filter,
    ) -> Result<Document, PersistenceError> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection).or_default();
        if documents.iter().any(|d| unique.matches(d)) {
            debug!("Duplicate document refused");
            return Err(PersistenceError::Conflict(format!(
                "duplicate document in {collection}"
            )));
        }
        let (id, data) = stamped(data);
        documents.push(data.clone());
        debug!(id = %id, "Document inserted");
        Ok(data)
    }

    #[instrument(skip(self, id, patch), fields(collection = collection, id = %id))]
    async fn update(
        &self,
        collection: &'static str,
        id: RecordId,
        patch: Document,
    ) -> Result<Document, PersistenceError> {
        let mut collections = self.collections.write().await;
        let documents = collections
            .get_mut(collection)
            .ok_or_else(|| PersistenceError::not_found(collection, id))?;
        let index = Self::position(documents, id)
            .ok_or_else(|| PersistenceError::not_found(collection, id))?;

        let document = &mut documents[index];
        for (field, value) in patch {
            if IDENTITY_FIELDS.contains(&field.as_str()) || field == "updatedAt" {
                continue;
            }
            document.insert(field, value);
        }
        document.insert("updatedAt".into(), now());
        debug!("Document updated");
        Ok(document.clone())
    }

    #[instrument(skip(self, id), fields(collection = collection, id = %id))]
    async fn delete(
        &self,
        collection: &'static str,
        id: RecordId,
    ) -> Result<Document, PersistenceError> {
        let mut collections = self.collections.write().await;
        let documents = collections
            .get_mut(collection)
            .ok_or_else(|| PersistenceError::not_found(collection, id))?;
        let index = Self::position(documents, id)
            .ok_or_else(|| PersistenceError::not_found(collection, id))?;
        debug!("Document deleted");
        Ok(documents.remove(index))
    }

    async fn find(
        &self,
        collection: &'static str,
        id: RecordId,
    ) -> Result<Option<Document>, PersistenceError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).and_then(|documents| {
            Self::position(documents, id).map(|index| documents[index].clone())
        }))
    }

    async fn list(
        &self,
        collection: &'static str,
        filter: &Filter,
    ) -> Result<Vec<Document>, PersistenceError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|d| filter.matches(d))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), PersistenceError> {
        Ok(())
    }
}
