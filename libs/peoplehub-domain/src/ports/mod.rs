//! Ports (trait definitions) for external dependencies
//!
//! The domain defines what it needs; adapters in other crates provide it.

mod ai;
mod persistence;
mod repository;

pub use ai::AiBackend;
#[cfg(test)]
pub use ai::MockAiBackend;
pub use persistence::{Document, Filter, PersistenceClient, PersistenceError, IDENTITY_FIELDS};
pub use repository::{
    CareerRepository, ClientRepository, CrudRepository, EmployeeRepository, FeedbackRepository,
    KnowledgeBaseRepository, MentoringRepository, NotificationRepository, RecognitionRepository,
    RecommendationRepository, TrainingRepository,
};
