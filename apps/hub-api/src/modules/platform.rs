//! Health module

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use peoplehub_domain::services::HealthService;

use super::{client, tokens};
use crate::composition::{CompositionError, FeatureModule, ModuleContext};
use crate::handlers::health::health_handler;

pub struct HealthModule;

impl FeatureModule for HealthModule {
    fn name(&self) -> &'static str {
        "health"
    }

    fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
        let service = Arc::new(HealthService::new(client(ctx)?));
        ctx.provide_exported(tokens::HEALTH_SERVICE, service.clone())?;

        ctx.mount(
            Router::new()
                .route("/health", get(health_handler))
                .with_state(service),
        );
        Ok(())
    }
}
