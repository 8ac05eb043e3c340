//! Domain services
//!
//! One service per bounded context. Services are stateless apart from the
//! ports they hold and are shared behind `Arc` by the composition root.

mod career;
mod chatbot;
mod employee;
mod feedback;
mod health;
mod insights;
mod knowledge_base;
mod mentoring;
mod notifications;
mod projects;
mod recognition;
mod recommendations;
mod record;
mod skills;
mod training;
mod users;
mod workforce;

#[cfg(test)]
pub(crate) mod testing;

pub use career::CareerService;
pub use chatbot::{ChatAnswer, ChatbotService};
pub use employee::EmployeeService;
pub use feedback::FeedbackService;
pub use health::{HealthReport, HealthService};
pub use insights::{AnalyticsSummary, InsightsService};
pub use knowledge_base::KnowledgeBaseService;
pub use mentoring::MentoringService;
pub use notifications::NotificationsService;
pub use projects::ProjectsService;
pub use recognition::RecognitionService;
pub use recommendations::RecommendationsService;
pub use record::RecordService;
pub use skills::SkillsService;
pub use training::TrainingService;
pub use users::UserService;
pub use workforce::{DepartmentHeadcount, WorkforcePlanningService};
