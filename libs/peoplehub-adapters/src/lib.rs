//! # PeopleHub Adapters
//!
//! Infrastructure implementations of the domain ports:
//!
//! - [`InMemoryClient`]: the `PersistenceClient` behind `memory://`
//! - [`HttpAiBackend`]: the `AiBackend` talking to a completion endpoint
//! - [`DisabledAiBackend`]: the `AiBackend` bound when none is configured

pub mod infrastructure;

pub use infrastructure::{DisabledAiBackend, HttpAiBackend, InMemoryClient};
