//! AI backend port used by the chatbot and insights contexts

use async_trait::async_trait;

use crate::error::Result;

/// Text completion backend
///
/// Failures are reported as `DomainError::Unavailable` when no backend is
/// configured and `DomainError::Upstream` when the backend errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiBackend: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}
