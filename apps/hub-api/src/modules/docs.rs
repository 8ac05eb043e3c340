//! OpenAPI document and Swagger UI

use peoplehub_domain::audit::AuditTrail;
use peoplehub_domain::enums::EmployeeStatus;
use peoplehub_domain::records::{CreateEmployee, Employee, UpdateEmployee};
use peoplehub_domain::services::{DepartmentHeadcount, HealthReport};
use peoplehub_domain::{DeleteAck, RecordId};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::composition::{CompositionError, FeatureModule, ModuleContext};
use crate::dto::{ErrorResponse, ValidationErrorResponse, ViolationResponse};
use crate::handlers::{employee, health, workforce};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        employee::create_employee,
        employee::list_employees,
        employee::get_employee,
        employee::update_employee,
        employee::archive_employee,
        employee::delete_employee,
        workforce::headcount,
        health::health_handler
    ),
    components(
        schemas(
            Employee, CreateEmployee, UpdateEmployee, EmployeeStatus, AuditTrail, RecordId,
            DeleteAck, DepartmentHeadcount, HealthReport,
            ErrorResponse, ValidationErrorResponse, ViolationResponse
        )
    ),
    tags(
        (name = "employees", description = "Employee records and archiving"),
        (name = "workforce", description = "Workforce planning"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "PeopleHub API",
        version = "0.1.0",
        description = "HR backend: employees, careers, skills, development and insights",
        contact(
            name = "PeopleHub Team"
        )
    )
)]
pub struct ApiDoc;

/// Serves `/docs` (Swagger UI) and `/openapi.json`
pub struct DocsModule;

impl FeatureModule for DocsModule {
    fn name(&self) -> &'static str {
        "docs"
    }

    fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
        ctx.mount(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()).into());
        Ok(())
    }
}
