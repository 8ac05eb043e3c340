//! Recommendations context

use crate::enums::RecommendationStatus;
use crate::error::Result;
use crate::ids::RecordId;
use crate::ports::Filter;
use crate::records::{Recommendation, UpdateRecommendation};

use super::RecordService;

/// Service bound to the `RecommendationRepository` port
pub type RecommendationsService = RecordService<Recommendation>;

impl RecordService<Recommendation> {
    /// An employee's recommendations, most urgent first, oldest first within
    /// a priority
    pub async fn for_employee(&self, employee_id: RecordId) -> Result<Vec<Recommendation>> {
        let mut recommendations = self
            .list(&Filter::all().where_eq("employeeId", employee_id.to_string()))
            .await?;
        recommendations.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        Ok(recommendations)
    }

    pub async fn set_status(
        &self,
        id: RecordId,
        status: RecommendationStatus,
    ) -> Result<Recommendation> {
        let patch = UpdateRecommendation {
            status: Some(status),
            ..Default::default()
        };
        self.update(id, patch).await
    }
}
