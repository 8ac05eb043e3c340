//! Career, recommendations, skills and projects modules

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use peoplehub_domain::services::{
    CareerService, ProjectsService, RecommendationsService, SkillsService,
};

use super::{client, provide_repository, tokens};
use crate::composition::{CompositionError, FeatureModule, ModuleContext};
use crate::handlers::{career, crud, skills};

pub struct CareerModule;

impl FeatureModule for CareerModule {
    fn name(&self) -> &'static str {
        "career"
    }

    fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
        let repository = provide_repository(ctx, tokens::CAREER_REPOSITORY)?;
        let service = Arc::new(CareerService::new(repository, client(ctx)?));
        ctx.provide_exported(tokens::CAREER_SERVICE, service.clone())?;

        ctx.mount(crud::routes("/careers", service.records().clone()));
        ctx.mount(
            Router::new()
                .route("/careers/journeys", post(career::record_journey))
                .route("/careers/journeys/:employee_id", get(career::journey))
                .with_state(service),
        );
        Ok(())
    }
}

pub struct RecommendationsModule;

impl FeatureModule for RecommendationsModule {
    fn name(&self) -> &'static str {
        "recommendations"
    }

    fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
        let repository = provide_repository(ctx, tokens::RECOMMENDATION_REPOSITORY)?;
        let service = Arc::new(RecommendationsService::new(repository));
        ctx.provide_exported(tokens::RECOMMENDATIONS_SERVICE, service.clone())?;

        ctx.mount(crud::routes("/recommendations", service.clone()));
        ctx.mount(
            Router::new()
                .route(
                    "/recommendations/:id/status",
                    put(career::set_recommendation_status),
                )
                .with_state(service),
        );
        Ok(())
    }
}

pub struct SkillsModule;

impl FeatureModule for SkillsModule {
    fn name(&self) -> &'static str {
        "skills"
    }

    fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
        let service = Arc::new(SkillsService::new(client(ctx)?));
        ctx.provide_exported(tokens::SKILLS_SERVICE, service.clone())?;

        ctx.mount(crud::routes("/skills", service.skills().clone()));
        ctx.mount(
            Router::new()
                .route(
                    "/skills/:id/employees/:employee_id/progress",
                    post(skills::track_progress),
                )
                .route("/skills/progress/:employee_id", get(skills::progress_for))
                .with_state(service),
        );
        Ok(())
    }
}

pub struct ProjectsModule;

impl FeatureModule for ProjectsModule {
    fn name(&self) -> &'static str {
        "projects"
    }

    fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
        let service = Arc::new(ProjectsService::new(client(ctx)?));
        ctx.provide_exported(tokens::PROJECTS_SERVICE, service.clone())?;

        ctx.mount(crud::routes("/projects", service.projects().clone()));
        ctx.mount(
            Router::new()
                .route("/projects/:id/skills", get(skills::project_skills))
                .route(
                    "/projects/:id/skills/:skill_id",
                    post(skills::link_skill).delete(skills::unlink_skill),
                )
                .with_state(service),
        );
        Ok(())
    }
}
