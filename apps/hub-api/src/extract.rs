//! Request extractors enforcing the validation contract

use std::collections::HashMap;

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use peoplehub_domain::ports::Filter;
use peoplehub_domain::validation::{is_uuid_v4, parse, Constraint, Dto, ValidationErrors};
use peoplehub_domain::RecordId;
use serde_json::Value;

use crate::error::ApiError;

/// Header naming the acting user for audited writes
pub const ACTOR_HEADER: &str = "x-actor";
pub const DEFAULT_ACTOR: &str = "system";

/// JSON body checked against `T`'s schema before the handler runs
///
/// A rejected body answers 400 with every violation; the handler, and so
/// the service, is never invoked.
pub struct Validated<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Validated<T>
where
    T: Dto + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await.map_err(|rejection| {
            ValidationErrors::single("$", Constraint::Malformed(rejection.body_text()))
        })?;
        Ok(Self(parse::<T>(body)?))
    }
}

/// Acting user from the `x-actor` header, `system` when absent
pub struct Actor(pub String);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Actor {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let actor = parts
            .headers
            .get(ACTOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_ACTOR);
        Ok(Self(actor.to_string()))
    }
}

/// Equality filter built from the query string
///
/// `?status=ACTIVE&departmentId=...` keeps records whose fields equal every
/// supplied value.
pub struct ListFilter {
    pub filter: Filter,
    params: HashMap<String, String>,
}

impl ListFilter {
    /// Whether a boolean control parameter (never a field filter) is set
    pub fn flag(&self, name: &str) -> bool {
        self.params.get(name).is_some_and(|v| v == "true")
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ListFilter {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ValidationErrors::single("$query", Constraint::Malformed(rejection.body_text()))
            })?;
        let filter = params
            .iter()
            .filter(|(name, _)| !CONTROL_PARAMS.contains(&name.as_str()))
            .fold(Filter::all(), |filter, (name, value)| {
                filter.where_eq(name.clone(), value.clone())
            });
        Ok(Self { filter, params })
    }
}

const CONTROL_PARAMS: &[&str] = &["includeArchived"];

/// Parse a path segment as a record id, reporting `field` on failure
pub fn record_id(field: &str, raw: &str) -> Result<RecordId, ApiError> {
    if !is_uuid_v4(raw) {
        return Err(ApiError::invalid_id(field));
    }
    raw.parse().map_err(|_| ApiError::invalid_id(field))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use peoplehub_domain::records::CreateSkill;

    use super::*;

    fn json_request(body: &str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/skills")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_is_typed() {
        let Validated(skill) =
            Validated::<CreateSkill>::from_request(json_request(r#"{"name":"Rust"}"#), &())
                .await
                .unwrap();
        assert_eq!(skill.name, "Rust");
    }

    #[tokio::test]
    async fn test_schema_violation_rejected() {
        let rejection =
            Validated::<CreateSkill>::from_request(json_request(r#"{"label":"Rust"}"#), &())
                .await
                .err()
                .unwrap();
        match &rejection.0 {
            peoplehub_domain::DomainError::Validation(errors) => {
                assert!(errors.has("name"));
                assert!(errors.has("label"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unparseable_json_is_bad_request() {
        let rejection = Validated::<CreateSkill>::from_request(json_request("{"), &())
            .await
            .err()
            .unwrap();
        assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_actor_header() {
        let (mut parts, _) = axum::http::Request::builder()
            .header(ACTOR_HEADER, "alice")
            .body(())
            .unwrap()
            .into_parts();
        let Actor(actor) = Actor::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(actor, "alice");

        let (mut parts, _) = axum::http::Request::builder().body(()).unwrap().into_parts();
        let Actor(actor) = Actor::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(actor, DEFAULT_ACTOR);
    }

    #[test]
    fn test_record_id_requires_v4() {
        assert!(record_id("id", &RecordId::new().to_string()).is_ok());
        assert!(record_id("id", "not-a-uuid").is_err());
        assert!(record_id("id", "00000000-0000-1000-8000-000000000000").is_err());
    }
}
