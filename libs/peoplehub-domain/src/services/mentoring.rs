//! Mentoring context

use crate::error::Result;
use crate::ids::RecordId;
use crate::ports::Filter;
use crate::records::Mentoring;

use super::RecordService;

/// Service bound to the `MentoringRepository` port
pub type MentoringService = RecordService<Mentoring>;

impl RecordService<Mentoring> {
    /// Pairings where the employee is either mentor or mentee
    pub async fn for_employee(&self, employee_id: RecordId) -> Result<Vec<Mentoring>> {
        let id = employee_id.to_string();
        let mut pairings = self
            .list(&Filter::all().where_eq("mentorId", id.clone()))
            .await?;
        pairings.extend(self.list(&Filter::all().where_eq("menteeId", id)).await?);
        Ok(pairings)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::enums::MentoringStatus;
    use crate::error::DomainError;
    use crate::ports::ClientRepository;
    use crate::records::{CreateMentoring, UpdateMentoring};
    use crate::services::testing::StubClient;

    fn service() -> MentoringService {
        MentoringService::new(Arc::new(ClientRepository::<Mentoring>::new(
            StubClient::shared(),
        )))
    }

    fn pairing(mentor_id: RecordId, mentee_id: RecordId) -> CreateMentoring {
        CreateMentoring {
            mentor_id,
            mentee_id,
            goal: "Lead a design review".to_string(),
            status: MentoringStatus::Proposed,
            start_date: None,
        }
    }

    #[tokio::test]
    async fn test_self_mentoring_rejected() {
        let service = service();
        let employee = RecordId::new();

        let result = service.create(pairing(employee, employee)).await;
        assert!(matches!(result, Err(DomainError::Conflict(_))));
        assert!(service.list(&Filter::all()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_cannot_pair_employee_with_themselves() {
        let service = service();
        let (a, b) = (RecordId::new(), RecordId::new());
        let created = service.create(pairing(a, b)).await.unwrap();

        let patch = UpdateMentoring {
            mentee_id: Some(a),
            ..Default::default()
        };
        let result = service.update(created.id, patch).await;
        assert!(matches!(result, Err(DomainError::Conflict(_))));
        assert_eq!(service.get(created.id).await.unwrap(), created);

        let patch = UpdateMentoring {
            mentor_id: Some(b),
            ..Default::default()
        };
        assert!(matches!(
            service.update(created.id, patch).await,
            Err(DomainError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_update_swapping_roles_is_allowed() {
        let service = service();
        let (a, b) = (RecordId::new(), RecordId::new());
        let created = service.create(pairing(a, b)).await.unwrap();

        let patch = UpdateMentoring {
            mentor_id: Some(b),
            mentee_id: Some(a),
            ..Default::default()
        };
        let updated = service.update(created.id, patch).await.unwrap();
        assert_eq!((updated.mentor_id, updated.mentee_id), (b, a));
    }

    #[tokio::test]
    async fn test_for_employee_covers_both_roles() {
        let service = service();
        let (a, b, c) = (RecordId::new(), RecordId::new(), RecordId::new());

        service.create(pairing(a, b)).await.unwrap();
        service.create(pairing(c, a)).await.unwrap();
        service.create(pairing(b, c)).await.unwrap();

        assert_eq!(service.for_employee(a).await.unwrap().len(), 2);
    }
}
