//! Training, mentoring, recognition and feedback

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, Record};
use crate::enums::{DomainEnum, MentoringStatus, RecognitionCategory, TrainingStatus};
use crate::ids::RecordId;
use crate::validation::{dto_schema, to_partial, Dto, FieldKind, Schema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    pub id: RecordId,
    pub employee_id: RecordId,
    pub title: String,
    pub status: TrainingStatus,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Training {
    const COLLECTION: &'static str = "trainings";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Training {
    type Create = CreateTraining;
    type Update = UpdateTraining;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTraining {
    pub employee_id: RecordId,
    pub title: String,
    pub status: TrainingStatus,
    pub provider: Option<String>,
    pub due_date: Option<NaiveDate>,
}

dto_schema!(CreateTraining => Schema::new("CreateTraining")
    .required("employeeId", FieldKind::Uuid)
    .required("title", FieldKind::Text)
    .required("status", FieldKind::Enum(TrainingStatus::MEMBERS))
    .optional("provider", FieldKind::Text)
    .optional("dueDate", FieldKind::Date));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTraining {
    pub employee_id: Option<RecordId>,
    pub title: Option<String>,
    pub status: Option<TrainingStatus>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub provider: Option<Option<String>>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<NaiveDate>>,
}

dto_schema!(UpdateTraining => to_partial(CreateTraining::schema(), "UpdateTraining"));

/// Mentor/mentee pairing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mentoring {
    pub id: RecordId,
    pub mentor_id: RecordId,
    pub mentee_id: RecordId,
    pub goal: String,
    pub status: MentoringStatus,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Mentoring {
    const COLLECTION: &'static str = "mentorings";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Mentoring {
    type Create = CreateMentoring;
    type Update = UpdateMentoring;

    fn check(draft: &CreateMentoring) -> crate::error::Result<()> {
        distinct_pair(draft.mentor_id, draft.mentee_id)
    }

    fn check_merged(&self) -> crate::error::Result<()> {
        distinct_pair(self.mentor_id, self.mentee_id)
    }
}

fn distinct_pair(mentor_id: RecordId, mentee_id: RecordId) -> crate::error::Result<()> {
    if mentor_id == mentee_id {
        return Err(crate::error::DomainError::conflict(
            "an employee cannot mentor themselves",
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMentoring {
    pub mentor_id: RecordId,
    pub mentee_id: RecordId,
    pub goal: String,
    pub status: MentoringStatus,
    pub start_date: Option<NaiveDate>,
}

dto_schema!(CreateMentoring => Schema::new("CreateMentoring")
    .required("mentorId", FieldKind::Uuid)
    .required("menteeId", FieldKind::Uuid)
    .required("goal", FieldKind::Text)
    .required("status", FieldKind::Enum(MentoringStatus::MEMBERS))
    .optional("startDate", FieldKind::Date));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMentoring {
    pub mentor_id: Option<RecordId>,
    pub mentee_id: Option<RecordId>,
    pub goal: Option<String>,
    pub status: Option<MentoringStatus>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Option<NaiveDate>>,
}

dto_schema!(UpdateMentoring => to_partial(CreateMentoring::schema(), "UpdateMentoring"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recognition {
    pub id: RecordId,
    pub employee_id: RecordId,
    pub awarded_by: RecordId,
    pub category: RecognitionCategory,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Recognition {
    const COLLECTION: &'static str = "recognitions";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Recognition {
    type Create = CreateRecognition;
    type Update = UpdateRecognition;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecognition {
    pub employee_id: RecordId,
    pub awarded_by: RecordId,
    pub category: RecognitionCategory,
    pub message: String,
}

dto_schema!(CreateRecognition => Schema::new("CreateRecognition")
    .required("employeeId", FieldKind::Uuid)
    .required("awardedBy", FieldKind::Uuid)
    .required("category", FieldKind::Enum(RecognitionCategory::MEMBERS))
    .required("message", FieldKind::Text));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecognition {
    pub employee_id: Option<RecordId>,
    pub awarded_by: Option<RecordId>,
    pub category: Option<RecognitionCategory>,
    pub message: Option<String>,
}

dto_schema!(UpdateRecognition => to_partial(CreateRecognition::schema(), "UpdateRecognition"));

/// Rated feedback about an employee (rating 1–5)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: RecordId,
    pub employee_id: RecordId,
    pub rating: i64,
    #[serde(default)]
    pub reviewer_id: Option<RecordId>,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Feedback {
    const COLLECTION: &'static str = "feedback";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Feedback {
    type Create = CreateFeedback;
    type Update = UpdateFeedback;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedback {
    pub employee_id: RecordId,
    pub rating: i64,
    pub reviewer_id: Option<RecordId>,
    pub comment: Option<String>,
}

dto_schema!(CreateFeedback => Schema::new("CreateFeedback")
    .required("employeeId", FieldKind::Uuid)
    .required("rating", FieldKind::integer_between(1, 5))
    .optional("reviewerId", FieldKind::Uuid)
    .optional("comment", FieldKind::Text));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeedback {
    pub employee_id: Option<RecordId>,
    pub rating: Option<i64>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub reviewer_id: Option<Option<RecordId>>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub comment: Option<Option<String>>,
}

dto_schema!(UpdateFeedback => to_partial(CreateFeedback::schema(), "UpdateFeedback"));
