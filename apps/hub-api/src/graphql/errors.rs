//! Domain failures as GraphQL errors
//!
//! Every error carries `extensions.code`; validation errors also carry the
//! violation list in the same shape as the REST body.

use async_graphql::{Error, ErrorExtensions, Value, ID};
use peoplehub_domain::validation::{is_uuid_v4, Constraint, ValidationErrors};
use peoplehub_domain::{DomainError, RecordId};
use tracing::{error, warn};

pub fn graphql_error(err: DomainError) -> Error {
    match err {
        DomainError::Validation(errors) => {
            warn!(violations = %errors, "GraphQL input rejected by validation");
            let violations = serde_json::to_value(&errors)
                .ok()
                .and_then(|json| Value::from_json(json).ok())
                .unwrap_or(Value::Null);
            Error::new("Validation failed").extend_with(|_, e| {
                e.set("code", "BAD_USER_INPUT");
                e.set("violations", violations);
            })
        }
        err @ DomainError::NotFound { .. } => {
            Error::new(err.to_string()).extend_with(|_, e| e.set("code", "NOT_FOUND"))
        }
        DomainError::Conflict(message) => {
            Error::new(message).extend_with(|_, e| e.set("code", "CONFLICT"))
        }
        DomainError::Unavailable(message) => {
            warn!(reason = %message, "Dependency unavailable");
            Error::new(message).extend_with(|_, e| e.set("code", "UNAVAILABLE"))
        }
        err @ (DomainError::Persistence(_) | DomainError::Upstream(_)) => {
            error!(error = ?err, "GraphQL operation failed");
            Error::new("Internal server error").extend_with(|_, e| e.set("code", "INTERNAL"))
        }
    }
}

/// Parse an `ID` argument, which must be a UUID v4
pub fn record_id(field: &str, id: &ID) -> async_graphql::Result<RecordId> {
    let invalid = || {
        graphql_error(DomainError::Validation(ValidationErrors::single(
            field,
            Constraint::IsUuid,
        )))
    };
    if !is_uuid_v4(id.as_str()) {
        return Err(invalid());
    }
    id.as_str().parse().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(err: &Error) -> Option<Value> {
        err.extensions.as_ref().and_then(|ext| ext.get("code").cloned())
    }

    #[test]
    fn test_not_found_code() {
        let err = graphql_error(DomainError::not_found("careers", "abc"));
        assert_eq!(code(&err), Some(Value::from("NOT_FOUND")));
        assert_eq!(err.message, "careers abc not found");
    }

    #[test]
    fn test_persistence_detail_is_hidden() {
        let err = graphql_error(DomainError::Persistence("disk on fire".into()));
        assert_eq!(err.message, "Internal server error");
        assert_eq!(code(&err), Some(Value::from("INTERNAL")));
    }

    #[test]
    fn test_record_id_requires_v4() {
        assert!(record_id("id", &ID::from("not-a-uuid")).is_err());
        let id = RecordId::new();
        assert_eq!(record_id("id", &ID(id.to_string())).unwrap(), id);
    }

    #[test]
    fn test_validation_carries_violations() {
        let err = record_id("employeeId", &ID::from("x")).unwrap_err();
        assert_eq!(code(&err), Some(Value::from("BAD_USER_INPUT")));
        let violations = err
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("violations").cloned());
        assert!(matches!(violations, Some(Value::List(ref list)) if list.len() == 1));
    }
}
