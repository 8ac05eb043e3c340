//! Notifications, knowledge base articles, and non-persisted inputs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, Record};
use crate::enums::{DomainEnum, NotificationChannel};
use crate::ids::RecordId;
use crate::validation::{dto_schema, to_partial, Dto, FieldKind, Schema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: RecordId,
    pub employee_id: RecordId,
    pub channel: NotificationChannel,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Notification {
    const COLLECTION: &'static str = "notifications";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Notification {
    type Create = CreateNotification;
    type Update = UpdateNotification;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotification {
    pub employee_id: RecordId,
    pub channel: NotificationChannel,
    pub message: String,
    pub read: Option<bool>,
}

dto_schema!(CreateNotification => Schema::new("CreateNotification")
    .required("employeeId", FieldKind::Uuid)
    .required("channel", FieldKind::Enum(NotificationChannel::MEMBERS))
    .required("message", FieldKind::Text)
    .defaulted("read", FieldKind::Boolean));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotification {
    pub employee_id: Option<RecordId>,
    pub channel: Option<NotificationChannel>,
    pub message: Option<String>,
    pub read: Option<bool>,
}

dto_schema!(UpdateNotification => to_partial(CreateNotification::schema(), "UpdateNotification"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeArticle {
    pub id: RecordId,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for KnowledgeArticle {
    const COLLECTION: &'static str = "knowledge_articles";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for KnowledgeArticle {
    type Create = CreateKnowledgeArticle;
    type Update = UpdateKnowledgeArticle;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKnowledgeArticle {
    pub title: String,
    pub body: String,
    pub tags: Option<Vec<String>>,
}

dto_schema!(CreateKnowledgeArticle => Schema::new("CreateKnowledgeArticle")
    .required("title", FieldKind::Text)
    .required("body", FieldKind::Text)
    .defaulted("tags", FieldKind::TextList));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKnowledgeArticle {
    pub title: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
}

dto_schema!(UpdateKnowledgeArticle => to_partial(CreateKnowledgeArticle::schema(), "UpdateKnowledgeArticle"));

/// Date window for analytics; either bound may be absent
///
/// No ordering check is made between the bounds: an inverted range simply
/// selects nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl AnalyticsRange {
    /// Inclusive membership test
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date.map_or(true, |start| date >= start)
            && self.end_date.map_or(true, |end| date <= end)
    }
}

dto_schema!(AnalyticsRange => Schema::new("AnalyticsRange")
    .optional("startDate", FieldKind::Date)
    .optional("endDate", FieldKind::Date));

/// Question put to the chatbot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPrompt {
    pub question: String,
}

dto_schema!(ChatPrompt => Schema::new("ChatPrompt").required("question", FieldKind::Text));
