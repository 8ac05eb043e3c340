//! In-memory persistence double shared by service tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::ids::RecordId;
use crate::ports::{Document, Filter, PersistenceClient, PersistenceError, IDENTITY_FIELDS};

#[derive(Default)]
pub struct StubClient {
    data: Mutex<HashMap<&'static str, Vec<Document>>>,
    down: AtomicBool,
}

impl StubClient {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn go_down(&self) {
        self.down.store(true, Ordering::SeqCst);
    }

    fn check_up(&self) -> Result<(), PersistenceError> {
        if self.down.load(Ordering::SeqCst) {
            Err(PersistenceError::backend("connection refused"))
        } else {
            Ok(())
        }
    }
}

fn stamped(mut data: Document) -> Document {
    let now = Value::String(Utc::now().to_rfc3339());
    data.insert("id".into(), Value::String(RecordId::new().to_string()));
    data.insert("createdAt".into(), now.clone());
    data.insert("updatedAt".into(), now);
    data
}

fn id_of(document: &Document) -> Option<&str> {
    document.get("id").and_then(Value::as_str)
}

#[async_trait]
impl PersistenceClient for StubClient {
    async fn insert(
        &self,
        collection: &'static str,
        data: Document,
    ) -> Result<Document, PersistenceError> {
        self.check_up()?;
        let data = stamped(data);
        self.data
            .lock()
            .unwrap()
            .entry(collection)
            .or_default()
            .push(data.clone());
        Ok(data)
    }

    async fn insert_unique(
        &self,
        collection: &'static str,
        data: Document,
        unique: &Filter,
    ) -> Result<Document, PersistenceError> {
        self.check_up()?;
        let mut all = self.data.lock().unwrap();
        let docs = all.entry(collection).or_default();
        if docs.iter().any(|d| unique.matches(d)) {
            return Err(PersistenceError::Conflict(format!(
                "duplicate document in {collection}"
            )));
        }
        let data = stamped(data);
        docs.push(data.clone());
        Ok(data)
    }

    async fn update(
        &self,
        collection: &'static str,
        id: RecordId,
        patch: Document,
    ) -> Result<Document, PersistenceError> {
        self.check_up()?;
        let key = id.to_string();
        let mut data = self.data.lock().unwrap();
        let document = data
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| id_of(d) == Some(key.as_str())))
            .ok_or_else(|| PersistenceError::not_found(collection, id))?;
        for (field, value) in patch {
            if !IDENTITY_FIELDS.contains(&field.as_str()) {
                document.insert(field, value);
            }
        }
        document.insert("updatedAt".into(), Value::String(Utc::now().to_rfc3339()));
        Ok(document.clone())
    }

    async fn delete(
        &self,
        collection: &'static str,
        id: RecordId,
    ) -> Result<Document, PersistenceError> {
        self.check_up()?;
        let key = id.to_string();
        let mut data = self.data.lock().unwrap();
        let docs = data.entry(collection).or_default();
        let index = docs
            .iter()
            .position(|d| id_of(d) == Some(key.as_str()))
            .ok_or_else(|| PersistenceError::not_found(collection, id))?;
        Ok(docs.remove(index))
    }

    async fn find(
        &self,
        collection: &'static str,
        id: RecordId,
    ) -> Result<Option<Document>, PersistenceError> {
        self.check_up()?;
        let key = id.to_string();
        Ok(self
            .data
            .lock()
            .unwrap()
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| id_of(d) == Some(key.as_str())).cloned()))
    }

    async fn list(
        &self,
        collection: &'static str,
        filter: &Filter,
    ) -> Result<Vec<Document>, PersistenceError> {
        self.check_up()?;
        Ok(self
            .data
            .lock()
            .unwrap()
            .get(collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).cloned().collect())
            .unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), PersistenceError> {
        self.check_up()
    }
}
