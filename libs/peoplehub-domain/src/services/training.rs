//! Training context

use crate::enums::TrainingStatus;
use crate::error::Result;
use crate::ids::RecordId;
use crate::ports::Filter;
use crate::records::{Training, UpdateTraining};

use super::RecordService;

/// Service bound to the `TrainingRepository` port
pub type TrainingService = RecordService<Training>;

impl RecordService<Training> {
    pub async fn for_employee(&self, employee_id: RecordId) -> Result<Vec<Training>> {
        self.list(&Filter::all().where_eq("employeeId", employee_id.to_string()))
            .await
    }

    /// Mark a training as completed
    pub async fn complete(&self, id: RecordId) -> Result<Training> {
        let patch = UpdateTraining {
            status: Some(TrainingStatus::Completed),
            ..Default::default()
        };
        self.update(id, patch).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::ports::ClientRepository;
    use crate::records::CreateTraining;
    use crate::services::testing::StubClient;

    #[tokio::test]
    async fn test_complete_and_filter_by_employee() {
        let service =
            TrainingService::new(Arc::new(ClientRepository::<Training>::new(StubClient::shared())));
        let employee = RecordId::new();

        let draft = |employee_id| CreateTraining {
            employee_id,
            title: "Negotiation".to_string(),
            status: TrainingStatus::Planned,
            provider: None,
            due_date: None,
        };
        let mine = service.create(draft(employee)).await.unwrap();
        service.create(draft(RecordId::new())).await.unwrap();

        let done = service.complete(mine.id).await.unwrap();
        assert_eq!(done.status, TrainingStatus::Completed);

        let listed = service.for_employee(employee).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, mine.id);
    }
}
