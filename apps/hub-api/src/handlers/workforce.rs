//! Workforce planning handlers

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use peoplehub_domain::services::{DepartmentHeadcount, WorkforcePlanningService};

use crate::error::ApiError;

/// Active headcount per department
#[utoipa::path(
    get,
    path = "/workforce/headcount",
    responses(
        (status = 200, description = "Headcount per department", body = [DepartmentHeadcount])
    ),
    tag = "workforce"
)]
pub async fn headcount(
    State(service): State<Arc<WorkforcePlanningService>>,
) -> Result<Json<Vec<DepartmentHeadcount>>, ApiError> {
    Ok(Json(service.headcount().await?))
}
