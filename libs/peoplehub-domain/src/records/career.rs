//! Career paths, employee journeys and development recommendations

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::audit::{AuditTrail, Auditable};
use crate::entity::{Entity, Record};
use crate::enums::{
    CareerStatus, DomainEnum, JourneyEventKind, Priority, RecommendationStatus,
    RecommendationType,
};
use crate::ids::RecordId;
use crate::validation::{dto_schema, to_partial, Dto, FieldKind, Schema};

/// A career goal an employee is working towards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub id: RecordId,
    pub employee_id: RecordId,
    pub title: String,
    pub status: CareerStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub current_position_id: Option<RecordId>,
    #[serde(default)]
    pub target_position_id: Option<RecordId>,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Career {
    const COLLECTION: &'static str = "careers";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Career {
    type Create = CreateCareer;
    type Update = UpdateCareer;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCareer {
    pub employee_id: RecordId,
    pub title: String,
    pub status: CareerStatus,
    pub description: Option<String>,
    pub current_position_id: Option<RecordId>,
    pub target_position_id: Option<RecordId>,
    pub target_date: Option<NaiveDate>,
}

dto_schema!(CreateCareer => Schema::new("CreateCareer")
    .required("employeeId", FieldKind::Uuid)
    .required("title", FieldKind::Text)
    .required("status", FieldKind::Enum(CareerStatus::MEMBERS))
    .optional("description", FieldKind::Text)
    .optional("currentPositionId", FieldKind::Uuid)
    .optional("targetPositionId", FieldKind::Uuid)
    .optional("targetDate", FieldKind::Date));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCareer {
    pub employee_id: Option<RecordId>,
    pub title: Option<String>,
    pub status: Option<CareerStatus>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub current_position_id: Option<Option<RecordId>>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub target_position_id: Option<Option<RecordId>>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub target_date: Option<Option<NaiveDate>>,
}

dto_schema!(UpdateCareer => to_partial(CreateCareer::schema(), "UpdateCareer"));

/// One milestone on an employee's journey; append-only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeJourney {
    pub id: RecordId,
    pub employee_id: RecordId,
    pub kind: JourneyEventKind,
    pub title: String,
    pub occurred_on: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for EmployeeJourney {
    const COLLECTION: &'static str = "employee_journeys";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordJourneyEvent {
    pub employee_id: RecordId,
    pub kind: JourneyEventKind,
    pub title: String,
    pub occurred_on: NaiveDate,
    pub notes: Option<String>,
}

dto_schema!(RecordJourneyEvent => Schema::new("RecordJourneyEvent")
    .required("employeeId", FieldKind::Uuid)
    .required("kind", FieldKind::Enum(JourneyEventKind::MEMBERS))
    .required("title", FieldKind::Text)
    .required("occurredOn", FieldKind::Date)
    .optional("notes", FieldKind::Text));

/// A suggested development action for one employee
///
/// `skillIds` relate the recommendation to skills by id only; nothing checks
/// that the skills exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: RecordId,
    pub employee_id: RecordId,
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub priority: Priority,
    #[serde(default)]
    pub status: RecommendationStatus,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub skill_ids: Vec<RecordId>,
    #[serde(flatten)]
    pub audit: AuditTrail,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Recommendation {
    const COLLECTION: &'static str = "recommendations";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Recommendation {
    type Create = CreateRecommendation;
    type Update = UpdateRecommendation;
}

impl Auditable for Recommendation {
    fn audit(&self) -> &AuditTrail {
        &self.audit
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecommendation {
    pub employee_id: RecordId,
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub priority: Priority,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<RecommendationStatus>,
    pub skill_ids: Option<Vec<RecordId>>,
}

dto_schema!(CreateRecommendation => Schema::new("CreateRecommendation")
    .required("employeeId", FieldKind::Uuid)
    .required("type", FieldKind::Enum(RecommendationType::MEMBERS))
    .required("priority", FieldKind::Enum(Priority::MEMBERS))
    .required("title", FieldKind::Text)
    .optional("description", FieldKind::Text)
    .defaulted("status", FieldKind::Enum(RecommendationStatus::MEMBERS))
    .defaulted("skillIds", FieldKind::IdList));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecommendation {
    pub employee_id: Option<RecordId>,
    #[serde(rename = "type")]
    pub kind: Option<RecommendationType>,
    pub priority: Option<Priority>,
    pub title: Option<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    pub status: Option<RecommendationStatus>,
    pub skill_ids: Option<Vec<RecordId>>,
}

dto_schema!(UpdateRecommendation => to_partial(CreateRecommendation::schema(), "UpdateRecommendation"));

/// Body of a status transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetRecommendationStatus {
    pub status: RecommendationStatus,
}

dto_schema!(SetRecommendationStatus => Schema::new("SetRecommendationStatus")
    .required("status", FieldKind::Enum(RecommendationStatus::MEMBERS)));
