//! Notifications, knowledge base, chatbot and insights modules

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use peoplehub_domain::services::{
    ChatbotService, InsightsService, KnowledgeBaseService, NotificationsService,
};

use super::{ai_backend, client, provide_repository, tokens};
use crate::composition::{CompositionError, FeatureModule, ModuleContext};
use crate::handlers::{crud, engagement};

pub struct NotificationsModule;

impl FeatureModule for NotificationsModule {
    fn name(&self) -> &'static str {
        "notifications"
    }

    fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
        let repository = provide_repository(ctx, tokens::NOTIFICATION_REPOSITORY)?;
        let service = Arc::new(NotificationsService::new(repository));
        ctx.provide_exported(tokens::NOTIFICATIONS_SERVICE, service.clone())?;

        ctx.mount(crud::routes("/notifications", service.clone()));
        ctx.mount(
            Router::new()
                .route(
                    "/notifications/:id/read",
                    post(engagement::mark_notification_read),
                )
                .with_state(service),
        );
        Ok(())
    }
}

pub struct KnowledgeBaseModule;

impl FeatureModule for KnowledgeBaseModule {
    fn name(&self) -> &'static str {
        "knowledge-base"
    }

    fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
        let repository = provide_repository(ctx, tokens::KNOWLEDGE_BASE_REPOSITORY)?;
        let service = Arc::new(KnowledgeBaseService::new(repository));
        ctx.provide_exported(tokens::KNOWLEDGE_BASE_SERVICE, service.clone())?;

        ctx.mount(crud::routes("/knowledge-base", service.clone()));
        ctx.mount(
            Router::new()
                .route(
                    "/knowledge-base/search",
                    get(engagement::search_knowledge_base),
                )
                .with_state(service),
        );
        Ok(())
    }
}

pub struct ChatbotModule;

impl FeatureModule for ChatbotModule {
    fn name(&self) -> &'static str {
        "chatbot"
    }

    fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
        let service = Arc::new(ChatbotService::new(ai_backend(ctx)?));
        ctx.provide_exported(tokens::CHATBOT_SERVICE, service.clone())?;

        ctx.mount(
            Router::new()
                .route("/chatbot/ask", post(engagement::ask_chatbot))
                .with_state(service),
        );
        Ok(())
    }
}

pub struct InsightsModule;

impl FeatureModule for InsightsModule {
    fn name(&self) -> &'static str {
        "insights"
    }

    fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
        let service = Arc::new(InsightsService::new(client(ctx)?, ai_backend(ctx)?));
        ctx.provide_exported(tokens::INSIGHTS_SERVICE, service.clone())?;

        ctx.mount(
            Router::new()
                .route("/insights/analytics", get(engagement::analytics))
                .with_state(service),
        );
        Ok(())
    }
}
