//! Persistence engine port
//!
//! This is the contract the shared persistence client must satisfy. It is
//! document-shaped: records travel as JSON objects so one client can serve
//! every collection, and typed access is layered on top by
//! [`ClientRepository`](super::ClientRepository).

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::ids::RecordId;

/// A stored record in wire form
pub type Document = Map<String, Value>;

/// Fields assigned on insert that no update may overwrite
pub const IDENTITY_FIELDS: &[&str] = &["id", "createdAt", "createdBy"];

/// Failures reported by a persistence client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// No record with this id in the collection
    #[error("No record {id} in {collection}")]
    NotFound { collection: &'static str, id: String },

    /// A uniqueness or integrity constraint rejected the write
    #[error("Constraint violation: {0}")]
    Conflict(String),

    /// The backend itself failed (connection loss, I/O, ...)
    #[error("Persistence backend failure: {0}")]
    Backend(String),

    /// A stored document could not be decoded
    #[error("Corrupt document: {0}")]
    Corrupt(String),
}

impl PersistenceError {
    pub fn not_found(collection: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            collection,
            id: id.to_string(),
        }
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Equality filter applied by [`PersistenceClient::list`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, Value)>,
}

impl Filter {
    /// Filter matching every record
    pub fn all() -> Self {
        Self::default()
    }

    /// Add a `field == value` condition
    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Whether a document satisfies every condition
    ///
    /// A string condition also matches the textual form of a non-string
    /// value (query parameters arrive as strings), and a condition on an
    /// array field matches when the array contains the value.
    pub fn matches(&self, document: &Document) -> bool {
        self.conditions.iter().all(|(field, expected)| {
            document
                .get(field)
                .is_some_and(|actual| value_matches(actual, expected))
        })
    }
}

fn value_matches(actual: &Value, expected: &Value) -> bool {
    if actual == expected {
        return true;
    }
    match (actual, expected) {
        (Value::Array(items), _) => items.iter().any(|item| value_matches(item, expected)),
        (Value::String(_), _) => false,
        (other, Value::String(text)) => other.to_string() == *text,
        _ => false,
    }
}

/// Shared persistence client
///
/// Implementations generate the `id` (UUID v4) and the `createdAt` /
/// `updatedAt` timestamps, apply updates with merge-patch semantics and leave
/// [`IDENTITY_FIELDS`] untouched after insert.
#[async_trait]
pub trait PersistenceClient: Send + Sync {
    /// Insert a new document and return it with generated fields
    async fn insert(
        &self,
        collection: &'static str,
        data: Document,
    ) -> Result<Document, PersistenceError>;

    /// Insert unless a stored document already matches `unique`
    ///
    /// The check and the insert are one step: of two concurrent calls with
    /// the same key, exactly one succeeds.
    ///
    /// # Errors
    ///
    /// `PersistenceError::Conflict` if a matching document exists
    async fn insert_unique(
        &self,
        collection: &'static str,
        data: Document,
        unique: &Filter,
    ) -> Result<Document, PersistenceError>;

    /// Merge `patch` into the stored document
    ///
    /// # Errors
    ///
    /// `PersistenceError::NotFound` if no record has this id
    async fn update(
        &self,
        collection: &'static str,
        id: RecordId,
        patch: Document,
    ) -> Result<Document, PersistenceError>;

    /// Remove exactly one document and return it
    ///
    /// # Errors
    ///
    /// `PersistenceError::NotFound` if no record has this id
    async fn delete(
        &self,
        collection: &'static str,
        id: RecordId,
    ) -> Result<Document, PersistenceError>;

    /// Fetch one document by id
    async fn find(
        &self,
        collection: &'static str,
        id: RecordId,
    ) -> Result<Option<Document>, PersistenceError>;

    /// Fetch every document matching `filter`, oldest first
    async fn list(
        &self,
        collection: &'static str,
        filter: &Filter,
    ) -> Result<Vec<Document>, PersistenceError>;

    /// Cheap liveness check
    async fn ping(&self) -> Result<(), PersistenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(Filter::all().matches(&doc(json!({"a": 1}))));
    }

    #[test]
    fn test_filter_equality() {
        let filter = Filter::all().where_eq("employeeId", "e-1");
        assert!(filter.matches(&doc(json!({"employeeId": "e-1"}))));
        assert!(!filter.matches(&doc(json!({"employeeId": "e-2"}))));
        assert!(!filter.matches(&doc(json!({}))));
    }

    #[test]
    fn test_string_condition_matches_textual_number_and_bool() {
        assert!(Filter::all()
            .where_eq("rating", "4")
            .matches(&doc(json!({"rating": 4}))));
        assert!(Filter::all()
            .where_eq("read", "false")
            .matches(&doc(json!({"read": false}))));
    }

    #[test]
    fn test_array_field_contains() {
        let filter = Filter::all().where_eq("tags", "onboarding");
        assert!(filter.matches(&doc(json!({"tags": ["culture", "onboarding"]}))));
        assert!(!filter.matches(&doc(json!({"tags": ["culture"]}))));
    }
}
