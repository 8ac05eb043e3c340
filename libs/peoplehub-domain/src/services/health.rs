//! Liveness of the service and its persistence engine

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::ports::PersistenceClient;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    /// `ok` or `degraded`
    pub status: String,
    /// `up` or `down`
    pub persistence: String,
    pub checked_at: DateTime<Utc>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == "ok"
    }
}

pub struct HealthService {
    client: Arc<dyn PersistenceClient>,
}

impl HealthService {
    pub fn new(client: Arc<dyn PersistenceClient>) -> Self {
        Self { client }
    }

    /// Check the persistence engine; never fails
    pub async fn check(&self) -> HealthReport {
        let persistence = match self.client.ping().await {
            Ok(()) => "up",
            Err(err) => {
                warn!(error = %err, "Persistence health check failed");
                "down"
            }
        };
        HealthReport {
            status: if persistence == "up" { "ok" } else { "degraded" }.to_string(),
            persistence: persistence.to_string(),
            checked_at: Utc::now(),
        }
    }
}
