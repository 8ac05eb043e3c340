//! Skills, proficiency tracking and projects

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, Record};
use crate::enums::{DomainEnum, ProficiencyLevel, ProjectStatus};
use crate::ids::RecordId;
use crate::validation::{dto_schema, to_partial, Dto, FieldKind, Schema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Skill {
    const COLLECTION: &'static str = "skills";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Skill {
    type Create = CreateSkill;
    type Update = UpdateSkill;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkill {
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
}

dto_schema!(CreateSkill => Schema::new("CreateSkill")
    .required("name", FieldKind::Text)
    .optional("category", FieldKind::Text)
    .optional("description", FieldKind::Text));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSkill {
    pub name: Option<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

dto_schema!(UpdateSkill => to_partial(CreateSkill::schema(), "UpdateSkill"));

/// Append-only proficiency observation
///
/// The skill and employee it belongs to are taken from the request path, not
/// from the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillProgress {
    pub id: RecordId,
    pub skill_id: RecordId,
    pub employee_id: RecordId,
    pub level: ProficiencyLevel,
    #[serde(default)]
    pub evidence: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for SkillProgress {
    const COLLECTION: &'static str = "skill_progress";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSkillProgress {
    pub level: ProficiencyLevel,
    pub evidence: Option<String>,
}

dto_schema!(TrackSkillProgress => Schema::new("TrackSkillProgress")
    .required("level", FieldKind::Enum(ProficiencyLevel::MEMBERS))
    .optional("evidence", FieldKind::Text));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: RecordId,
    pub name: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Project {
    const COLLECTION: &'static str = "projects";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Project {
    type Create = CreateProject;
    type Update = UpdateProject;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub name: String,
    pub status: ProjectStatus,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

dto_schema!(CreateProject => Schema::new("CreateProject")
    .required("name", FieldKind::Text)
    .required("status", FieldKind::Enum(ProjectStatus::MEMBERS))
    .optional("description", FieldKind::Text)
    .optional("startDate", FieldKind::Date)
    .optional("endDate", FieldKind::Date));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub name: Option<String>,
    pub status: Option<ProjectStatus>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Option<NaiveDate>>,
}

dto_schema!(UpdateProject => to_partial(CreateProject::schema(), "UpdateProject"));

/// Join pair linking a project to a required skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSkill {
    pub id: RecordId,
    pub project_id: RecordId,
    pub skill_id: RecordId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for ProjectSkill {
    const COLLECTION: &'static str = "project_skills";

    fn id(&self) -> RecordId {
        self.id
    }
}
