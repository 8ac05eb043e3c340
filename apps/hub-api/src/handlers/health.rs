//! Health check handler

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use peoplehub_domain::services::{HealthReport, HealthService};

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthReport),
        (status = 503, description = "Persistence is unreachable", body = HealthReport)
    ),
    tag = "health"
)]
pub async fn health_handler(
    State(service): State<Arc<HealthService>>,
) -> (StatusCode, Json<HealthReport>) {
    let report = service.check().await;
    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(report))
}
