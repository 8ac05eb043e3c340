//! Recognition context

use crate::error::Result;
use crate::ids::RecordId;
use crate::ports::Filter;
use crate::records::Recognition;

use super::RecordService;

/// Service bound to the `RecognitionRepository` port
pub type RecognitionService = RecordService<Recognition>;

impl RecordService<Recognition> {
    /// Recognitions received by an employee, newest first
    pub async fn for_employee(&self, employee_id: RecordId) -> Result<Vec<Recognition>> {
        let mut received = self
            .list(&Filter::all().where_eq("employeeId", employee_id.to_string()))
            .await?;
        received.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(received)
    }
}
