//! Generic create / read / update / delete handlers
//!
//! Every context whose service is a plain [`RecordService`] mounts these
//! through [`routes`].

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use peoplehub_domain::services::RecordService;
use peoplehub_domain::{DeleteAck, Entity};
use tracing::info;

use crate::error::ApiError;
use crate::extract::{record_id, ListFilter, Validated};

type Service<E> = State<Arc<RecordService<E>>>;

/// `GET|POST {path}` and `GET|PATCH|DELETE {path}/:id`
pub fn routes<E: Entity>(path: &str, service: Arc<RecordService<E>>) -> Router {
    Router::new()
        .route(path, get(list::<E>).post(create::<E>))
        .route(
            &format!("{path}/:id"),
            get(fetch::<E>).patch(update::<E>).delete(remove::<E>),
        )
        .with_state(service)
}

pub async fn create<E: Entity>(
    State(service): Service<E>,
    Validated(draft): Validated<E::Create>,
) -> Result<(StatusCode, Json<E>), ApiError> {
    let record = service.create(draft).await?;
    info!(collection = E::COLLECTION, "Record created via API");
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn list<E: Entity>(
    State(service): Service<E>,
    query: ListFilter,
) -> Result<Json<Vec<E>>, ApiError> {
    Ok(Json(service.list(&query.filter).await?))
}

pub async fn fetch<E: Entity>(
    State(service): Service<E>,
    Path(id): Path<String>,
) -> Result<Json<E>, ApiError> {
    let id = record_id("id", &id)?;
    Ok(Json(service.get(id).await?))
}

pub async fn update<E: Entity>(
    State(service): Service<E>,
    Path(id): Path<String>,
    Validated(patch): Validated<E::Update>,
) -> Result<Json<E>, ApiError> {
    let id = record_id("id", &id)?;
    Ok(Json(service.update(id, patch).await?))
}

pub async fn remove<E: Entity>(
    State(service): Service<E>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, ApiError> {
    let id = record_id("id", &id)?;
    Ok(Json(service.delete(id).await?))
}
