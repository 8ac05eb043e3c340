//! Notifications context

use crate::error::Result;
use crate::ids::RecordId;
use crate::ports::Filter;
use crate::records::{Notification, UpdateNotification};

use super::RecordService;

/// Service bound to the `NotificationRepository` port
pub type NotificationsService = RecordService<Notification>;

impl RecordService<Notification> {
    pub async fn mark_read(&self, id: RecordId) -> Result<Notification> {
        let patch = UpdateNotification {
            read: Some(true),
            ..Default::default()
        };
        self.update(id, patch).await
    }

    pub async fn unread_for(&self, employee_id: RecordId) -> Result<Vec<Notification>> {
        self.list(
            &Filter::all()
                .where_eq("employeeId", employee_id.to_string())
                .where_eq("read", false),
        )
        .await
    }
}
