//! Feedback context

use crate::error::Result;
use crate::ids::RecordId;
use crate::ports::Filter;
use crate::records::Feedback;

use super::RecordService;

/// Service bound to the `FeedbackRepository` port
pub type FeedbackService = RecordService<Feedback>;

impl RecordService<Feedback> {
    pub async fn for_employee(&self, employee_id: RecordId) -> Result<Vec<Feedback>> {
        self.list(&Filter::all().where_eq("employeeId", employee_id.to_string()))
            .await
    }

    /// Mean rating received by an employee; `None` without feedback
    pub async fn average_rating(&self, employee_id: RecordId) -> Result<Option<f64>> {
        let received = self.for_employee(employee_id).await?;
        Ok(mean_rating(&received))
    }
}

pub(crate) fn mean_rating(feedback: &[Feedback]) -> Option<f64> {
    if feedback.is_empty() {
        return None;
    }
    let total: i64 = feedback.iter().map(|f| f.rating).sum();
    Some(total as f64 / feedback.len() as f64)
}
