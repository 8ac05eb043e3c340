//! Employee handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use peoplehub_domain::records::{CreateEmployee, Employee, UpdateEmployee};
use peoplehub_domain::services::EmployeeService;
use peoplehub_domain::DeleteAck;
use tracing::info;

use crate::dto::{ErrorResponse, ValidationErrorResponse};
use crate::error::ApiError;
use crate::extract::{record_id, Actor, ListFilter, Validated};

type Service = State<Arc<EmployeeService>>;

/// Register an employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = CreateEmployee,
    params(("x-actor" = Option<String>, Header, description = "Acting user recorded in the audit trail")),
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "employees"
)]
pub async fn create_employee(
    State(service): Service,
    Actor(actor): Actor,
    Validated(draft): Validated<CreateEmployee>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = service.create(draft, &actor).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// List employees
///
/// Query parameters filter by field equality; archived employees are only
/// listed with `includeArchived=true`.
#[utoipa::path(
    get,
    path = "/employees",
    params(("includeArchived" = Option<bool>, Query, description = "Include soft-deleted employees")),
    responses(
        (status = 200, description = "Matching employees", body = [Employee])
    ),
    tag = "employees"
)]
pub async fn list_employees(
    State(service): Service,
    query: ListFilter,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = service
        .list(&query.filter, query.flag("includeArchived"))
        .await?;
    Ok(Json(employees))
}

#[utoipa::path(
    get,
    path = "/employees/{id}",
    params(("id" = String, Path, description = "Employee id (UUID v4)")),
    responses(
        (status = 200, description = "The employee", body = Employee),
        (status = 404, description = "No such employee", body = ErrorResponse)
    ),
    tag = "employees"
)]
pub async fn get_employee(
    State(service): Service,
    Path(id): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    let id = record_id("id", &id)?;
    Ok(Json(service.get(id).await?))
}

/// Merge-patch an employee
#[utoipa::path(
    patch,
    path = "/employees/{id}",
    request_body = UpdateEmployee,
    params(
        ("id" = String, Path, description = "Employee id (UUID v4)"),
        ("x-actor" = Option<String>, Header, description = "Acting user recorded in the audit trail")
    ),
    responses(
        (status = 200, description = "Updated employee", body = Employee),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 404, description = "No such employee", body = ErrorResponse)
    ),
    tag = "employees"
)]
pub async fn update_employee(
    State(service): Service,
    Path(id): Path<String>,
    Actor(actor): Actor,
    Validated(patch): Validated<UpdateEmployee>,
) -> Result<Json<Employee>, ApiError> {
    let id = record_id("id", &id)?;
    Ok(Json(service.update(id, patch, &actor).await?))
}

/// Soft-delete an employee
#[utoipa::path(
    post,
    path = "/employees/{id}/archive",
    params(
        ("id" = String, Path, description = "Employee id (UUID v4)"),
        ("x-actor" = Option<String>, Header, description = "Acting user recorded in the audit trail")
    ),
    responses(
        (status = 200, description = "Archived employee", body = Employee),
        (status = 404, description = "No such employee", body = ErrorResponse),
        (status = 409, description = "Already archived", body = ErrorResponse)
    ),
    tag = "employees"
)]
pub async fn archive_employee(
    State(service): Service,
    Path(id): Path<String>,
    Actor(actor): Actor,
) -> Result<Json<Employee>, ApiError> {
    let id = record_id("id", &id)?;
    let employee = service.archive(id, &actor).await?;
    info!(id = %id, actor = %actor, "Employee archived via API");
    Ok(Json(employee))
}

#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(("id" = String, Path, description = "Employee id (UUID v4)")),
    responses(
        (status = 200, description = "Employee removed", body = DeleteAck),
        (status = 404, description = "No such employee", body = ErrorResponse)
    ),
    tag = "employees"
)]
pub async fn delete_employee(
    State(service): Service,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, ApiError> {
    let id = record_id("id", &id)?;
    Ok(Json(service.delete(id).await?))
}
