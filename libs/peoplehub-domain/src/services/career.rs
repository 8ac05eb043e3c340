//! Career context
//!
//! Career goals go through the `CareerRepository` port; the append-only
//! journey of each employee is kept in its own collection on the shared
//! persistence client.

use std::sync::Arc;

use tracing::info;

use crate::entity::to_document;
use crate::error::Result;
use crate::ids::RecordId;
use crate::ports::{CareerRepository, ClientRepository, Filter, PersistenceClient};
use crate::records::{Career, EmployeeJourney, RecordJourneyEvent};

use super::RecordService;

pub struct CareerService {
    careers: Arc<RecordService<Career>>,
    journeys: ClientRepository<EmployeeJourney>,
}

impl CareerService {
    /// Create a new CareerService
    ///
    /// # Arguments
    ///
    /// * `repository` - Career repository port
    /// * `client` - Shared persistence client holding journey events
    pub fn new(repository: Arc<CareerRepository>, client: Arc<dyn PersistenceClient>) -> Self {
        Self {
            careers: Arc::new(RecordService::new(repository)),
            journeys: ClientRepository::new(client),
        }
    }

    /// Create / read / update / delete on career goals
    pub fn records(&self) -> &Arc<RecordService<Career>> {
        &self.careers
    }

    pub async fn for_employee(&self, employee_id: RecordId) -> Result<Vec<Career>> {
        self.careers
            .list(&Filter::all().where_eq("employeeId", employee_id.to_string()))
            .await
    }

    /// Append a milestone to an employee's journey
    pub async fn record_journey(&self, event: RecordJourneyEvent) -> Result<EmployeeJourney> {
        let recorded = self.journeys.insert(to_document(&event)?).await?;
        info!(
            employee_id = %recorded.employee_id,
            kind = %recorded.kind,
            "Journey event recorded"
        );
        Ok(recorded)
    }

    /// Journey of one employee in chronological order
    pub async fn journey(&self, employee_id: RecordId) -> Result<Vec<EmployeeJourney>> {
        let mut events = self
            .journeys
            .select(&Filter::all().where_eq("employeeId", employee_id.to_string()))
            .await?;
        events.sort_by(|a, b| {
            a.occurred_on
                .cmp(&b.occurred_on)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::enums::{CareerStatus, JourneyEventKind};
    use crate::records::CreateCareer;
    use crate::services::testing::StubClient;

    fn service() -> CareerService {
        let client = StubClient::shared();
        CareerService::new(
            Arc::new(ClientRepository::<Career>::new(client.clone())),
            client,
        )
    }

    fn event(employee_id: RecordId, kind: JourneyEventKind, on: &str) -> RecordJourneyEvent {
        RecordJourneyEvent {
            employee_id,
            kind,
            title: kind.to_string(),
            occurred_on: NaiveDate::parse_from_str(on, "%Y-%m-%d").unwrap(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_journey_is_chronological_and_scoped() {
        let service = service();
        let employee = RecordId::new();

        service
            .record_journey(event(employee, JourneyEventKind::Promoted, "2023-06-01"))
            .await
            .unwrap();
        service
            .record_journey(event(employee, JourneyEventKind::Hired, "2020-01-15"))
            .await
            .unwrap();
        service
            .record_journey(event(RecordId::new(), JourneyEventKind::Hired, "2019-03-01"))
            .await
            .unwrap();

        let kinds: Vec<JourneyEventKind> = service
            .journey(employee)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![JourneyEventKind::Hired, JourneyEventKind::Promoted]
        );
    }

    #[tokio::test]
    async fn test_for_employee_lists_career_goals() {
        let service = service();
        let employee = RecordId::new();

        service
            .records()
            .create(CreateCareer {
                employee_id: employee,
                title: "Staff engineer".to_string(),
                status: CareerStatus::Active,
                description: None,
                current_position_id: None,
                target_position_id: None,
                target_date: None,
            })
            .await
            .unwrap();

        let goals = service.for_employee(employee).await.unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].title, "Staff engineer");
        assert!(service.for_employee(RecordId::new()).await.unwrap().is_empty());
    }
}
