//! Record traits shared by every stored entity

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DomainError, Result};
use crate::ids::RecordId;
use crate::ports::{Document, IDENTITY_FIELDS};
use crate::validation::Dto;

/// Anything stored in a persistence collection
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection name in the persistence engine
    const COLLECTION: &'static str;

    fn id(&self) -> RecordId;
}

/// A record with create and update input shapes
///
/// `Update` must be the partial projection of `Create`: same fields, all
/// optional.
pub trait Entity: Record {
    type Create: Dto + Serialize + Send + Sync + 'static;
    type Update: Dto + Serialize + Send + Sync + 'static;

    /// Business rules on a create input that its schema cannot express
    fn check(_draft: &Self::Create) -> Result<()> {
        Ok(())
    }

    /// Business rules on the record an update would produce
    ///
    /// Runs before the patch is written, so a rejected update leaves the
    /// stored record untouched.
    fn check_merged(&self) -> Result<()> {
        Ok(())
    }
}

/// Uniform acknowledgement returned by delete operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DeleteAck {
    pub success: bool,
}

impl DeleteAck {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Serialise an input shape into a persistence document
///
/// Absent (`None`) fields are dropped so that an update only carries what the
/// caller supplied.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map.into_iter().filter(|(_, v)| !v.is_null()).collect()),
        Ok(other) => Err(DomainError::Persistence(format!(
            "expected an object document, got {other}"
        ))),
        Err(err) => Err(DomainError::Persistence(err.to_string())),
    }
}

/// Serialise an update shape into a merge-patch document
///
/// Absent fields are dropped. An explicit `null` survives on fields the
/// schema declares nullable, where it clears the stored value.
pub fn to_patch_document<D: Dto + Serialize>(patch: &D) -> Result<Document> {
    let schema = D::schema();
    match serde_json::to_value(patch) {
        Ok(Value::Object(map)) => Ok(map
            .into_iter()
            .filter(|(name, value)| {
                !value.is_null() || schema.field(name).is_some_and(|spec| spec.nullable)
            })
            .collect()),
        Ok(other) => Err(DomainError::Persistence(format!(
            "expected an object document, got {other}"
        ))),
        Err(err) => Err(DomainError::Persistence(err.to_string())),
    }
}

/// The record as it would read after merging `changes`
///
/// Identity fields are never overwritten.
pub fn apply_patch<R: Record>(record: &R, changes: &Document) -> Result<R> {
    let mut document = match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            return Err(DomainError::Persistence(format!(
                "expected an object document, got {other}"
            )))
        }
        Err(err) => return Err(DomainError::Persistence(err.to_string())),
    };
    for (field, value) in changes {
        if !IDENTITY_FIELDS.contains(&field.as_str()) {
            document.insert(field.clone(), value.clone());
        }
    }
    from_document(document)
}

/// Decode a stored document into its record type
pub fn from_document<R: DeserializeOwned>(document: Document) -> Result<R> {
    serde_json::from_value(Value::Object(document))
        .map_err(|err| DomainError::Persistence(format!("stored document is malformed: {err}")))
}
