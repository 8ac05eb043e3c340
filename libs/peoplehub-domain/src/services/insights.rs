//! Workforce analytics with an optional AI-written narrative

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use crate::enums::DomainEnum;
use crate::error::{DomainError, Result};
use crate::ports::{AiBackend, ClientRepository, Filter, PersistenceClient};
use crate::records::{AnalyticsRange, Employee, Feedback, Recommendation};

use super::feedback::mean_rating;

/// Figures for one date window
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Employees hired in the window
    pub hires: usize,
    pub feedback_count: usize,
    pub average_rating: Option<f64>,
    /// Recommendations created in the window, keyed by status wire name
    pub recommendations_by_status: BTreeMap<String, usize>,
    /// Absent when the AI backend is not configured or failed
    pub narrative: Option<String>,
}

pub struct InsightsService {
    employees: ClientRepository<Employee>,
    feedback: ClientRepository<Feedback>,
    recommendations: ClientRepository<Recommendation>,
    backend: Arc<dyn AiBackend>,
}

impl InsightsService {
    pub fn new(client: Arc<dyn PersistenceClient>, backend: Arc<dyn AiBackend>) -> Self {
        Self {
            employees: ClientRepository::new(client.clone()),
            feedback: ClientRepository::new(client.clone()),
            recommendations: ClientRepository::new(client),
            backend,
        }
    }

    /// Aggregate figures for `range` (inclusive; open bounds allowed)
    ///
    /// The narrative is best-effort: an AI failure is logged and leaves it
    /// empty, it never fails the request.
    pub async fn analytics(&self, range: &AnalyticsRange) -> Result<AnalyticsSummary> {
        let hires = self
            .employees
            .select(&Filter::all())
            .await?
            .into_iter()
            .filter(|e| range.contains(e.hire_date))
            .count();

        let feedback: Vec<Feedback> = self
            .feedback
            .select(&Filter::all())
            .await?
            .into_iter()
            .filter(|f| range.contains(f.created_at.date_naive()))
            .collect();

        let mut recommendations_by_status = BTreeMap::new();
        for recommendation in self.recommendations.select(&Filter::all()).await? {
            if range.contains(recommendation.created_at.date_naive()) {
                *recommendations_by_status
                    .entry(recommendation.status.as_str().to_string())
                    .or_insert(0) += 1;
            }
        }

        let mut summary = AnalyticsSummary {
            start_date: range.start_date,
            end_date: range.end_date,
            hires,
            feedback_count: feedback.len(),
            average_rating: mean_rating(&feedback),
            recommendations_by_status,
            narrative: None,
        };
        summary.narrative = self.narrate(&summary).await;
        info!(hires, feedback = summary.feedback_count, "Analytics computed");
        Ok(summary)
    }

    async fn narrate(&self, summary: &AnalyticsSummary) -> Option<String> {
        let figures = serde_json::to_string(summary).ok()?;
        let prompt = format!(
            "Summarise these workforce figures for an HR leadership audience in two \
             sentences:\n{figures}"
        );
        match self.backend.complete(&prompt).await {
            Ok(text) => Some(text.trim().to_string()),
            Err(DomainError::Unavailable(_)) => None,
            Err(err) => {
                warn!(error = %err, "Analytics narrative unavailable");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;
    use crate::entity::to_document;
    use crate::enums::{Priority, RecommendationStatus, RecommendationType};
    use crate::ports::MockAiBackend;
    use crate::records::{CreateEmployee, CreateFeedback, CreateRecommendation};
    use crate::services::testing::StubClient;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    async fn seed(client: Arc<StubClient>) {
        let employees = ClientRepository::<Employee>::new(client.clone());
        for hired in ["2024-01-10", "2024-03-05", "2023-12-31"] {
            let draft = CreateEmployee {
                first_name: "Alan".to_string(),
                last_name: "Turing".to_string(),
                email: "alan@example.com".to_string(),
                hire_date: date(hired),
                department_id: None,
                position_id: None,
                status: None,
            };
            employees.insert(to_document(&draft).unwrap()).await.unwrap();
        }

        let feedback = ClientRepository::<Feedback>::new(client.clone());
        for rating in [2, 5] {
            let draft = CreateFeedback {
                employee_id: crate::ids::RecordId::new(),
                rating,
                reviewer_id: None,
                comment: None,
            };
            feedback.insert(to_document(&draft).unwrap()).await.unwrap();
        }

        let recommendations = ClientRepository::<Recommendation>::new(client);
        for status in [
            None,
            Some(RecommendationStatus::Accepted),
            Some(RecommendationStatus::Pending),
        ] {
            let draft = CreateRecommendation {
                employee_id: crate::ids::RecordId::new(),
                kind: RecommendationType::Mentoring,
                priority: Priority::Medium,
                title: "Pair with a senior".to_string(),
                description: None,
                status,
                skill_ids: None,
            };
            recommendations
                .insert(to_document(&draft).unwrap())
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_analytics_with_narrative() {
        let client = StubClient::shared();
        seed(client.clone()).await;

        let mut backend = MockAiBackend::new();
        backend
            .expect_complete()
            .times(1)
            .returning(|_| Ok("Hiring is steady.".to_string()));
        let service = InsightsService::new(client, Arc::new(backend));

        let today = Utc::now().date_naive();
        let range = AnalyticsRange {
            start_date: Some(date("2024-01-01")),
            end_date: Some(today),
        };
        let summary = service.analytics(&range).await.unwrap();

        assert_eq!(summary.hires, 2);
        assert_eq!(summary.feedback_count, 2);
        assert_eq!(summary.average_rating, Some(3.5));
        assert_eq!(
            serde_json::to_value(&summary.recommendations_by_status).unwrap(),
            json!({"ACCEPTED": 1, "PENDING": 2})
        );
        assert_eq!(summary.narrative.as_deref(), Some("Hiring is steady."));
    }

    #[tokio::test]
    async fn test_ai_failure_leaves_narrative_empty() {
        let client = StubClient::shared();
        seed(client.clone()).await;

        let mut backend = MockAiBackend::new();
        backend
            .expect_complete()
            .returning(|_| Err(DomainError::upstream("timeout")));
        let service = InsightsService::new(client, Arc::new(backend));

        let summary = service.analytics(&AnalyticsRange::default()).await.unwrap();
        assert_eq!(summary.hires, 3);
        assert_eq!(summary.narrative, None);
    }

    #[tokio::test]
    async fn test_inverted_range_selects_nothing() {
        let client = StubClient::shared();
        seed(client.clone()).await;

        let mut backend = MockAiBackend::new();
        backend
            .expect_complete()
            .returning(|_| Err(DomainError::unavailable("not configured")));
        let service = InsightsService::new(client, Arc::new(backend));

        let range = AnalyticsRange {
            start_date: Some(date("2024-06-01")),
            end_date: Some(date("2024-01-01")),
        };
        let summary = service.analytics(&range).await.unwrap();
        assert_eq!(summary.hires, 0);
        assert_eq!(summary.feedback_count, 0);
        assert!(summary.recommendations_by_status.is_empty());
        assert_eq!(summary.average_rating, None);
    }
}
