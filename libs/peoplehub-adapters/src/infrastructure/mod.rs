//! Infrastructure adapters

mod http_ai_backend;
mod memory_client;

pub use http_ai_backend::{DisabledAiBackend, HttpAiBackend};
pub use memory_client::InMemoryClient;
