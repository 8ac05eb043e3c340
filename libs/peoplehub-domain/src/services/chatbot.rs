//! HR assistant backed by the AI port

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::ports::AiBackend;
use crate::records::ChatPrompt;

const PREAMBLE: &str = "You are the PeopleHub HR assistant. Answer the employee's \
question concisely and point to the relevant HR process when there is one.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ChatAnswer {
    pub question: String,
    pub answer: String,
    pub answered_at: DateTime<Utc>,
}

pub struct ChatbotService {
    backend: Arc<dyn AiBackend>,
}

impl ChatbotService {
    pub fn new(backend: Arc<dyn AiBackend>) -> Self {
        Self { backend }
    }

    /// Ask the assistant a question
    ///
    /// # Errors
    ///
    /// - `DomainError::Unavailable` when no AI backend is configured
    /// - `DomainError::Upstream` when the backend fails
    #[instrument(skip_all)]
    pub async fn ask(&self, prompt: ChatPrompt) -> Result<ChatAnswer> {
        let question = prompt.question.trim().to_string();
        let answer = self
            .backend
            .complete(&format!("{PREAMBLE}\n\nQuestion: {question}"))
            .await?;
        debug!(answer_len = answer.len(), "Chatbot answered");
        Ok(ChatAnswer {
            question,
            answer: answer.trim().to_string(),
            answered_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use crate::ports::MockAiBackend;

    #[tokio::test]
    async fn test_ask_forwards_question() {
        let mut backend = MockAiBackend::new();
        backend
            .expect_complete()
            .withf(|prompt: &str| prompt.ends_with("Question: How many leave days?"))
            .times(1)
            .returning(|_| Ok("  25 days per year.\n".to_string()));

        let service = ChatbotService::new(Arc::new(backend));
        let answer = service
            .ask(ChatPrompt {
                question: " How many leave days? ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(answer.question, "How many leave days?");
        assert_eq!(answer.answer, "25 days per year.");
    }

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let mut backend = MockAiBackend::new();
        backend
            .expect_complete()
            .returning(|_| Err(DomainError::unavailable("AI backend not configured")));

        let service = ChatbotService::new(Arc::new(backend));
        let result = service
            .ask(ChatPrompt {
                question: "Hello".to_string(),
            })
            .await;
        assert!(matches!(result, Err(DomainError::Unavailable(_))));
    }
}
