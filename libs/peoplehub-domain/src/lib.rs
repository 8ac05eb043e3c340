//! # PeopleHub Domain Layer
//!
//! This crate contains the business logic and domain models of the PeopleHub
//! HR backend. It follows hexagonal architecture principles:
//!
//! - **Records**: Entities and their create/update input shapes
//! - **Validation**: Explicit per-input schemas checked by one generic validator
//! - **Ports**: Trait definitions for external dependencies (PersistenceClient,
//!   CrudRepository, AiBackend)
//! - **Services**: One service per bounded context
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (HTTP, GraphQL,
//! the persistence engine, the AI provider). Everything external is a port
//! implemented by an adapter crate and wired by the composition root.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use peoplehub_domain::ports::{ClientRepository, PersistenceClient};
//! use peoplehub_domain::records::{CreateTraining, Training};
//! use peoplehub_domain::services::TrainingService;
//! use peoplehub_domain::validation::parse;
//!
//! async fn example(client: Arc<dyn PersistenceClient>, body: serde_json::Value) {
//!     let service = TrainingService::new(Arc::new(ClientRepository::<Training>::new(client)));
//!     let draft: CreateTraining = parse(body).unwrap();
//!     let training = service.create(draft).await.unwrap();
//!     println!("Created training: {}", training.id);
//! }
//! ```

pub mod audit;
pub mod entity;
pub mod enums;
pub mod error;
pub mod ids;
pub mod nullable;
pub mod ports;
pub mod records;
pub mod services;
pub mod validation;

// Re-export commonly used types
pub use entity::{DeleteAck, Entity, Record};
pub use error::{DomainError, Result};
pub use ids::RecordId;
pub use validation::{Dto, ValidationErrors};
