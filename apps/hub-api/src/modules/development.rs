//! Training, recognition, mentoring and feedback modules

use std::sync::Arc;

use axum::routing::post;
use axum::Router;
use peoplehub_domain::services::{
    FeedbackService, MentoringService, RecognitionService, TrainingService,
};

use super::{provide_repository, tokens};
use crate::composition::{CompositionError, FeatureModule, ModuleContext};
use crate::handlers::{crud, engagement};

pub struct TrainingModule;

impl FeatureModule for TrainingModule {
    fn name(&self) -> &'static str {
        "training"
    }

    fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
        let repository = provide_repository(ctx, tokens::TRAINING_REPOSITORY)?;
        let service = Arc::new(TrainingService::new(repository));
        ctx.provide_exported(tokens::TRAINING_SERVICE, service.clone())?;

        ctx.mount(crud::routes("/trainings", service.clone()));
        ctx.mount(
            Router::new()
                .route("/trainings/:id/complete", post(engagement::complete_training))
                .with_state(service),
        );
        Ok(())
    }
}

pub struct RecognitionModule;

impl FeatureModule for RecognitionModule {
    fn name(&self) -> &'static str {
        "recognition"
    }

    fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
        let repository = provide_repository(ctx, tokens::RECOGNITION_REPOSITORY)?;
        let service = Arc::new(RecognitionService::new(repository));
        ctx.provide_exported(tokens::RECOGNITION_SERVICE, service.clone())?;
        ctx.mount(crud::routes("/recognitions", service));
        Ok(())
    }
}

pub struct MentoringModule;

impl FeatureModule for MentoringModule {
    fn name(&self) -> &'static str {
        "mentoring"
    }

    fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
        let repository = provide_repository(ctx, tokens::MENTORING_REPOSITORY)?;
        let service = Arc::new(MentoringService::new(repository));
        ctx.provide_exported(tokens::MENTORING_SERVICE, service.clone())?;
        ctx.mount(crud::routes("/mentorings", service));
        Ok(())
    }
}

pub struct FeedbackModule;

impl FeatureModule for FeedbackModule {
    fn name(&self) -> &'static str {
        "feedback"
    }

    fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
        let repository = provide_repository(ctx, tokens::FEEDBACK_REPOSITORY)?;
        let service = Arc::new(FeedbackService::new(repository));
        ctx.provide_exported(tokens::FEEDBACK_SERVICE, service.clone())?;
        ctx.mount(crud::routes("/feedback", service));
        Ok(())
    }
}
