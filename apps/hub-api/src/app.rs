//! Composition root
//!
//! Binds the root capabilities from configuration, assembles every feature
//! module and exposes the resulting router as a request handler.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::Request;
use axum::response::Response;
use axum::Router;
use peoplehub_adapters::{DisabledAiBackend, HttpAiBackend, InMemoryClient};
use peoplehub_domain::ports::{AiBackend, PersistenceClient};
use tokio::sync::OnceCell;
use tower::ServiceExt;
use tracing::info;

use crate::composition::{Assembly, Bindings, CompositionError};
use crate::config::AppConfig;
use crate::graphql::GraphqlModule;
use crate::modules::{
    tokens, CareerModule, ChatbotModule, DocsModule, EmployeeModule, FeedbackModule,
    HealthModule, InsightsModule, KnowledgeBaseModule, MentoringModule, NotificationsModule,
    ProjectsModule, RecognitionModule, RecommendationsModule, SkillsModule, TrainingModule,
    UserModule, WorkforcePlanningModule,
};

const MEMORY_SCHEME: &str = "memory://";

/// Root bindings for a configuration
///
/// # Errors
///
/// `UnsupportedPersistence` for any database URL other than `memory://`
pub fn bindings_from_config(config: &AppConfig) -> Result<Bindings, CompositionError> {
    if !config.database_url.starts_with(MEMORY_SCHEME) {
        return Err(CompositionError::UnsupportedPersistence(
            config.database_url.clone(),
        ));
    }
    let persistence: Arc<dyn PersistenceClient> = Arc::new(InMemoryClient::new());

    let ai_backend: Arc<dyn AiBackend> = match &config.ai_backend_url {
        Some(endpoint) => {
            info!(endpoint = %endpoint, "AI backend configured");
            Arc::new(HttpAiBackend::new(
                endpoint.clone(),
                config.ai_timeout,
                reqwest::Client::new(),
            ))
        }
        None => {
            info!("AI_BACKEND_URL not set, AI features are disabled");
            Arc::new(DisabledAiBackend)
        }
    };

    Ok(Bindings::new()
        .bind(tokens::PERSISTENCE, persistence)
        .bind(tokens::AI_BACKEND, ai_backend))
}

/// A fully wired application
pub struct Application {
    router: Router,
    modules: Vec<&'static str>,
}

impl Application {
    /// Assemble every feature module against `bindings`
    pub fn build(config: &AppConfig, bindings: Bindings) -> Result<Self, CompositionError> {
        let assembled = Assembly::new()
            .with(HealthModule)
            .with(EmployeeModule)
            .with(UserModule)
            .with(WorkforcePlanningModule)
            .with(TrainingModule)
            .with(RecognitionModule)
            .with(MentoringModule)
            .with(FeedbackModule)
            .with(CareerModule)
            .with(RecommendationsModule)
            .with(SkillsModule)
            .with(ProjectsModule)
            .with(NotificationsModule)
            .with(KnowledgeBaseModule)
            .with(ChatbotModule)
            .with(InsightsModule)
            .with(GraphqlModule::new(&config.mount_root))
            .with(DocsModule)
            .build(&bindings)?;

        info!(modules = assembled.order().len(), "Application assembled");
        Ok(Self {
            router: assembled.router(),
            modules: assembled.order().to_vec(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, CompositionError> {
        Self::build(config, bindings_from_config(config)?)
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Module names in build order
    pub fn modules(&self) -> &[&'static str] {
        &self.modules
    }

    /// Dispatch one request whose path is already relative to the mount root
    pub async fn handle(&self, request: Request) -> Response {
        let result: Result<Response, Infallible> = self.router().oneshot(request).await;
        match result {
            Ok(response) => response,
            Err(never) => match never {},
        }
    }
}

/// Application built on first use and shared afterwards
pub struct LazyApplication {
    config: AppConfig,
    cell: OnceCell<Arc<Application>>,
}

impl LazyApplication {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            cell: OnceCell::new(),
        }
    }

    /// The application, built on the first call
    ///
    /// Concurrent first calls build once; a failed build is not cached.
    pub async fn get(&self) -> Result<Arc<Application>, CompositionError> {
        self.cell
            .get_or_try_init(|| async {
                Application::from_config(&self.config).map(Arc::new)
            })
            .await
            .cloned()
    }
}
