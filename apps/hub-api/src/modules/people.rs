//! Employee, user and workforce-planning modules

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use peoplehub_domain::services::{EmployeeService, UserService, WorkforcePlanningService};

use super::{client, provide_repository, tokens};
use crate::composition::{CompositionError, FeatureModule, ModuleContext};
use crate::handlers::{crud, employee, workforce};

pub struct EmployeeModule;

impl FeatureModule for EmployeeModule {
    fn name(&self) -> &'static str {
        "employee"
    }

    fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
        let repository = provide_repository(ctx, tokens::EMPLOYEE_REPOSITORY)?;
        let service = Arc::new(EmployeeService::new(repository));
        ctx.provide_exported(tokens::EMPLOYEE_SERVICE, service.clone())?;

        ctx.mount(
            Router::new()
                .route(
                    "/employees",
                    get(employee::list_employees).post(employee::create_employee),
                )
                .route(
                    "/employees/:id",
                    get(employee::get_employee)
                        .patch(employee::update_employee)
                        .delete(employee::delete_employee),
                )
                .route("/employees/:id/archive", post(employee::archive_employee))
                .with_state(service),
        );
        Ok(())
    }
}

pub struct UserModule;

impl FeatureModule for UserModule {
    fn name(&self) -> &'static str {
        "user"
    }

    fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
        let service = Arc::new(UserService::new(client(ctx)?));
        ctx.provide_exported(tokens::USER_SERVICE, service.clone())?;

        ctx.mount(crud::routes("/users", service.users().clone()));
        ctx.mount(crud::routes("/admins", service.admins().clone()));
        Ok(())
    }
}

pub struct WorkforcePlanningModule;

impl FeatureModule for WorkforcePlanningModule {
    fn name(&self) -> &'static str {
        "workforce-planning"
    }

    fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
        let service = Arc::new(WorkforcePlanningService::new(client(ctx)?));
        ctx.provide_exported(tokens::WORKFORCE_PLANNING_SERVICE, service.clone())?;

        ctx.mount(crud::routes("/departments", service.departments().clone()));
        ctx.mount(crud::routes("/positions", service.positions().clone()));
        ctx.mount(
            Router::new()
                .route("/workforce/headcount", get(workforce::headcount))
                .with_state(service),
        );
        Ok(())
    }
}
