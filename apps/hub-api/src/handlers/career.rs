//! Career journeys and recommendation status handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use peoplehub_domain::records::{
    EmployeeJourney, Recommendation, RecordJourneyEvent, SetRecommendationStatus,
};
use peoplehub_domain::services::{CareerService, RecommendationsService};

use crate::error::ApiError;
use crate::extract::{record_id, Validated};

pub async fn record_journey(
    State(service): State<Arc<CareerService>>,
    Validated(event): Validated<RecordJourneyEvent>,
) -> Result<(StatusCode, Json<EmployeeJourney>), ApiError> {
    let recorded = service.record_journey(event).await?;
    Ok((StatusCode::CREATED, Json(recorded)))
}

pub async fn journey(
    State(service): State<Arc<CareerService>>,
    Path(employee_id): Path<String>,
) -> Result<Json<Vec<EmployeeJourney>>, ApiError> {
    let employee_id = record_id("employeeId", &employee_id)?;
    Ok(Json(service.journey(employee_id).await?))
}

pub async fn set_recommendation_status(
    State(service): State<Arc<RecommendationsService>>,
    Path(id): Path<String>,
    Validated(body): Validated<SetRecommendationStatus>,
) -> Result<Json<Recommendation>, ApiError> {
    let id = record_id("id", &id)?;
    Ok(Json(service.set_status(id, body.status).await?))
}
