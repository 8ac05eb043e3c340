//! Feature modules, one per bounded context
//!
//! Each module provides its repository port (a root override wins over the
//! default client-backed adapter), builds its service, exports the service
//! and mounts its routes.

mod career;
mod development;
mod docs;
mod engagement;
mod people;
mod platform;

pub use career::{CareerModule, ProjectsModule, RecommendationsModule, SkillsModule};
pub use development::{FeedbackModule, MentoringModule, RecognitionModule, TrainingModule};
pub use docs::{ApiDoc, DocsModule};
pub use engagement::{ChatbotModule, InsightsModule, KnowledgeBaseModule, NotificationsModule};
pub use people::{EmployeeModule, UserModule, WorkforcePlanningModule};
pub use platform::HealthModule;

use std::sync::Arc;

use peoplehub_domain::ports::{AiBackend, ClientRepository, CrudRepository, PersistenceClient};
use peoplehub_domain::Entity;

use crate::composition::{CompositionError, ModuleContext, Token};

/// Capability names shared by the root and the modules
pub mod tokens {
    use peoplehub_domain::ports::{
        AiBackend, CareerRepository, EmployeeRepository, FeedbackRepository,
        KnowledgeBaseRepository, MentoringRepository, NotificationRepository, PersistenceClient,
        RecognitionRepository, RecommendationRepository, TrainingRepository,
    };
    use peoplehub_domain::services::{
        CareerService, ChatbotService, EmployeeService, FeedbackService, HealthService,
        InsightsService, KnowledgeBaseService, MentoringService, NotificationsService,
        ProjectsService, RecognitionService, RecommendationsService, SkillsService,
        TrainingService, UserService, WorkforcePlanningService,
    };

    use crate::composition::Token;

    // Root bindings
    pub const PERSISTENCE: Token<dyn PersistenceClient> = Token::new("PersistenceClient");
    pub const AI_BACKEND: Token<dyn AiBackend> = Token::new("AiBackend");

    // Repository ports
    pub const EMPLOYEE_REPOSITORY: Token<EmployeeRepository> = Token::new("EmployeeRepository");
    pub const TRAINING_REPOSITORY: Token<TrainingRepository> = Token::new("TrainingRepository");
    pub const RECOGNITION_REPOSITORY: Token<RecognitionRepository> =
        Token::new("RecognitionRepository");
    pub const RECOMMENDATION_REPOSITORY: Token<RecommendationRepository> =
        Token::new("RecommendationRepository");
    pub const CAREER_REPOSITORY: Token<CareerRepository> = Token::new("CareerRepository");
    pub const MENTORING_REPOSITORY: Token<MentoringRepository> = Token::new("MentoringRepository");
    pub const NOTIFICATION_REPOSITORY: Token<NotificationRepository> =
        Token::new("NotificationRepository");
    pub const FEEDBACK_REPOSITORY: Token<FeedbackRepository> = Token::new("FeedbackRepository");
    pub const KNOWLEDGE_BASE_REPOSITORY: Token<KnowledgeBaseRepository> =
        Token::new("KnowledgeBaseRepository");

    // Services
    pub const EMPLOYEE_SERVICE: Token<EmployeeService> = Token::new("EmployeeService");
    pub const TRAINING_SERVICE: Token<TrainingService> = Token::new("TrainingService");
    pub const RECOGNITION_SERVICE: Token<RecognitionService> = Token::new("RecognitionService");
    pub const RECOMMENDATIONS_SERVICE: Token<RecommendationsService> =
        Token::new("RecommendationsService");
    pub const CAREER_SERVICE: Token<CareerService> = Token::new("CareerService");
    pub const MENTORING_SERVICE: Token<MentoringService> = Token::new("MentoringService");
    pub const NOTIFICATIONS_SERVICE: Token<NotificationsService> =
        Token::new("NotificationsService");
    pub const FEEDBACK_SERVICE: Token<FeedbackService> = Token::new("FeedbackService");
    pub const KNOWLEDGE_BASE_SERVICE: Token<KnowledgeBaseService> =
        Token::new("KnowledgeBaseService");
    pub const PROJECTS_SERVICE: Token<ProjectsService> = Token::new("ProjectsService");
    pub const SKILLS_SERVICE: Token<SkillsService> = Token::new("SkillsService");
    pub const USER_SERVICE: Token<UserService> = Token::new("UserService");
    pub const WORKFORCE_PLANNING_SERVICE: Token<WorkforcePlanningService> =
        Token::new("WorkforcePlanningService");
    pub const HEALTH_SERVICE: Token<HealthService> = Token::new("HealthService");
    pub const CHATBOT_SERVICE: Token<ChatbotService> = Token::new("ChatbotService");
    pub const INSIGHTS_SERVICE: Token<InsightsService> = Token::new("InsightsService");
}

/// Provide a repository port privately: the root override if bound, else
/// the client-backed adapter
fn provide_repository<E: Entity>(
    ctx: &mut ModuleContext<'_>,
    token: Token<dyn CrudRepository<E>>,
) -> Result<Arc<dyn CrudRepository<E>>, CompositionError> {
    let repository: Arc<dyn CrudRepository<E>> = match ctx.try_binding(token)? {
        Some(overridden) => overridden,
        None => Arc::new(ClientRepository::<E>::new(client(ctx)?)),
    };
    ctx.provide(token, repository.clone());
    Ok(repository)
}

fn client(ctx: &ModuleContext<'_>) -> Result<Arc<dyn PersistenceClient>, CompositionError> {
    ctx.binding(tokens::PERSISTENCE)
}

fn ai_backend(ctx: &ModuleContext<'_>) -> Result<Arc<dyn AiBackend>, CompositionError> {
    ctx.binding(tokens::AI_BACKEND)
}
