//! Optional audit / soft-delete metadata
//!
//! Any entity may carry an [`AuditTrail`] (flattened into its wire form) and
//! advertise it through [`Auditable`]. The field set is the same for every
//! entity that opts in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who created, last changed, or soft-deleted a record, and when it was deleted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AuditTrail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_by: Option<String>,
}

impl AuditTrail {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Entities carrying an audit trail
pub trait Auditable {
    fn audit(&self) -> &AuditTrail;

    fn is_soft_deleted(&self) -> bool {
        self.audit().is_deleted()
    }
}

/// Audit fields written by a create call
pub fn created_by(actor: &str) -> serde_json::Map<String, serde_json::Value> {
    single("createdBy", serde_json::Value::String(actor.to_string()))
}

/// Audit fields written by an update call
pub fn updated_by(actor: &str) -> serde_json::Map<String, serde_json::Value> {
    single("updatedBy", serde_json::Value::String(actor.to_string()))
}

/// Audit fields written by a soft delete
pub fn soft_deleted(actor: &str, at: DateTime<Utc>) -> serde_json::Map<String, serde_json::Value> {
    let mut fields = single("deletedBy", serde_json::Value::String(actor.to_string()));
    fields.insert(
        "deletedAt".to_string(),
        serde_json::Value::String(at.to_rfc3339()),
    );
    fields
}

fn single(key: &str, value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    let mut fields = serde_json::Map::new();
    fields.insert(key.to_string(), value);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_trail_serializes_to_nothing() {
        let json = serde_json::to_value(AuditTrail::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_soft_deleted_fields_round_trip_into_trail() {
        let at = Utc::now();
        let trail: AuditTrail =
            serde_json::from_value(serde_json::Value::Object(soft_deleted("hr", at))).unwrap();
        assert!(trail.is_deleted());
        assert_eq!(trail.deleted_by.as_deref(), Some("hr"));
    }
}
