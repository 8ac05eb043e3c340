//! GraphQL input objects and enums
//!
//! Inputs are typed so the schema documents them. A resolver lowers its
//! input to the REST wire shape and parses it with the DTO schema, so both
//! surfaces accept and reject exactly the same values.
//!
//! Create inputs omit absent optional fields. Patch inputs keep the
//! difference between an omitted field and an explicit `null`, which clears
//! nullable fields and is refused on the others.

use async_graphql::{Enum, InputObject, MaybeUndefined, Result, ID};
use chrono::NaiveDate;
use peoplehub_domain::enums::{self as domain, DomainEnum};
use peoplehub_domain::validation::{parse, Dto};
use serde_json::{Map, Value};

use super::errors::graphql_error;

/// Conversion to the JSON value REST clients would send
pub trait ToWire {
    fn to_wire(self) -> Value;
}

impl ToWire for String {
    fn to_wire(self) -> Value {
        Value::String(self)
    }
}

impl ToWire for ID {
    fn to_wire(self) -> Value {
        Value::String(self.0)
    }
}

impl ToWire for NaiveDate {
    fn to_wire(self) -> Value {
        Value::String(self.format("%Y-%m-%d").to_string())
    }
}

impl<T: ToWire> ToWire for Vec<T> {
    fn to_wire(self) -> Value {
        Value::Array(self.into_iter().map(ToWire::to_wire).collect())
    }
}

/// GraphQL mirror of a domain enum with conversions both ways
macro_rules! graphql_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
        pub enum $name {
            $($variant),+
        }

        impl From<$name> for domain::$name {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$variant => Self::$variant),+
                }
            }
        }

        impl From<domain::$name> for $name {
            fn from(value: domain::$name) -> Self {
                match value {
                    $(domain::$name::$variant => Self::$variant),+
                }
            }
        }

        impl ToWire for $name {
            fn to_wire(self) -> Value {
                Value::from(domain::$name::from(self).as_str())
            }
        }
    };
}

graphql_enum! {
    /// Progress of a career goal
    CareerStatus { Exploring, Active, Achieved, Abandoned }
}

graphql_enum! {
    /// Capability-development category of a recommendation
    RecommendationType { Training, Mentoring, Project, Certification, RoleChange }
}

graphql_enum! {
    Priority { Low, Medium, High, Critical }
}

graphql_enum! {
    RecommendationStatus { Pending, Accepted, InProgress, Completed, Dismissed }
}

graphql_enum! {
    ProficiencyLevel { Beginner, Intermediate, Advanced, Expert }
}

/// JSON object in the REST wire shape, built field by field
#[derive(Default)]
struct Wire(Map<String, Value>);

impl Wire {
    fn set(mut self, field: &str, value: impl ToWire) -> Self {
        self.0.insert(field.to_string(), value.to_wire());
        self
    }

    /// Omitted when absent
    fn opt(self, field: &str, value: Option<impl ToWire>) -> Self {
        match value {
            Some(value) => self.set(field, value),
            None => self,
        }
    }

    /// Omitted when undefined, `null` when null
    fn patch(mut self, field: &str, value: MaybeUndefined<impl ToWire>) -> Self {
        match value {
            MaybeUndefined::Undefined => self,
            MaybeUndefined::Null => {
                self.0.insert(field.to_string(), Value::Null);
                self
            }
            MaybeUndefined::Value(value) => self.set(field, value),
        }
    }

    fn parse<D: Dto>(self) -> Result<D> {
        parse(Value::Object(self.0)).map_err(|errors| graphql_error(errors.into()))
    }
}

#[derive(InputObject)]
pub struct CareerInput {
    pub employee_id: ID,
    pub title: String,
    pub status: CareerStatus,
    pub description: Option<String>,
    pub current_position_id: Option<ID>,
    pub target_position_id: Option<ID>,
    pub target_date: Option<NaiveDate>,
}

impl CareerInput {
    pub fn into_dto<D: Dto>(self) -> Result<D> {
        Wire::default()
            .set("employeeId", self.employee_id)
            .set("title", self.title)
            .set("status", self.status)
            .opt("description", self.description)
            .opt("currentPositionId", self.current_position_id)
            .opt("targetPositionId", self.target_position_id)
            .opt("targetDate", self.target_date)
            .parse()
    }
}

#[derive(InputObject)]
pub struct CareerPatch {
    pub employee_id: MaybeUndefined<ID>,
    pub title: MaybeUndefined<String>,
    pub status: MaybeUndefined<CareerStatus>,
    pub description: MaybeUndefined<String>,
    pub current_position_id: MaybeUndefined<ID>,
    pub target_position_id: MaybeUndefined<ID>,
    pub target_date: MaybeUndefined<NaiveDate>,
}

impl CareerPatch {
    pub fn into_dto<D: Dto>(self) -> Result<D> {
        Wire::default()
            .patch("employeeId", self.employee_id)
            .patch("title", self.title)
            .patch("status", self.status)
            .patch("description", self.description)
            .patch("currentPositionId", self.current_position_id)
            .patch("targetPositionId", self.target_position_id)
            .patch("targetDate", self.target_date)
            .parse()
    }
}

#[derive(InputObject)]
pub struct RecommendationInput {
    pub employee_id: ID,
    #[graphql(name = "type")]
    pub kind: RecommendationType,
    pub priority: Priority,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<RecommendationStatus>,
    pub skill_ids: Option<Vec<ID>>,
}

impl RecommendationInput {
    pub fn into_dto<D: Dto>(self) -> Result<D> {
        Wire::default()
            .set("employeeId", self.employee_id)
            .set("type", self.kind)
            .set("priority", self.priority)
            .set("title", self.title)
            .opt("description", self.description)
            .opt("status", self.status)
            .opt("skillIds", self.skill_ids)
            .parse()
    }
}

#[derive(InputObject)]
pub struct RecommendationPatch {
    pub employee_id: MaybeUndefined<ID>,
    #[graphql(name = "type")]
    pub kind: MaybeUndefined<RecommendationType>,
    pub priority: MaybeUndefined<Priority>,
    pub title: MaybeUndefined<String>,
    pub description: MaybeUndefined<String>,
    pub status: MaybeUndefined<RecommendationStatus>,
    pub skill_ids: MaybeUndefined<Vec<ID>>,
}

impl RecommendationPatch {
    pub fn into_dto<D: Dto>(self) -> Result<D> {
        Wire::default()
            .patch("employeeId", self.employee_id)
            .patch("type", self.kind)
            .patch("priority", self.priority)
            .patch("title", self.title)
            .patch("description", self.description)
            .patch("status", self.status)
            .patch("skillIds", self.skill_ids)
            .parse()
    }
}

#[derive(InputObject)]
pub struct SkillProgressInput {
    pub level: ProficiencyLevel,
    pub evidence: Option<String>,
}

impl SkillProgressInput {
    pub fn into_dto<D: Dto>(self) -> Result<D> {
        Wire::default()
            .set("level", self.level)
            .opt("evidence", self.evidence)
            .parse()
    }
}

/// Inclusive reporting window; either bound may be left open
#[derive(InputObject, Default)]
pub struct AnalyticsRangeInput {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl AnalyticsRangeInput {
    pub fn into_dto<D: Dto>(self) -> Result<D> {
        Wire::default()
            .opt("startDate", self.start_date)
            .opt("endDate", self.end_date)
            .parse()
    }
}

#[cfg(test)]
mod tests {
    use peoplehub_domain::records::{CreateCareer, UpdateCareer, UpdateRecommendation};
    use peoplehub_domain::RecordId;

    use super::*;

    fn career_input(employee_id: &str, title: &str) -> CareerInput {
        CareerInput {
            employee_id: ID(employee_id.to_string()),
            title: title.to_string(),
            status: CareerStatus::Active,
            description: None,
            current_position_id: None,
            target_position_id: None,
            target_date: NaiveDate::from_ymd_opt(2025, 6, 30),
        }
    }

    fn empty_career_patch() -> CareerPatch {
        CareerPatch {
            employee_id: MaybeUndefined::Undefined,
            title: MaybeUndefined::Undefined,
            status: MaybeUndefined::Undefined,
            description: MaybeUndefined::Undefined,
            current_position_id: MaybeUndefined::Undefined,
            target_position_id: MaybeUndefined::Undefined,
            target_date: MaybeUndefined::Undefined,
        }
    }

    #[test]
    fn test_enum_converts_to_domain_and_wire() {
        let kind = RecommendationType::RoleChange;
        assert_eq!(
            domain::RecommendationType::from(kind),
            domain::RecommendationType::RoleChange
        );
        assert_eq!(kind.to_wire(), Value::from("ROLE_CHANGE"));
        assert_eq!(
            RecommendationStatus::from(domain::RecommendationStatus::InProgress),
            RecommendationStatus::InProgress
        );
    }

    #[test]
    fn test_typed_input_goes_through_schema() {
        let employee_id = RecordId::new();
        let draft: CreateCareer = career_input(&employee_id.to_string(), "Staff engineer")
            .into_dto()
            .unwrap();
        assert_eq!(draft.employee_id, employee_id);
        assert_eq!(draft.status, domain::CareerStatus::Active);
        assert_eq!(draft.target_date, NaiveDate::from_ymd_opt(2025, 6, 30));
        assert_eq!(draft.description, None);
    }

    #[test]
    fn test_typed_input_rejects_what_rest_rejects() {
        let err = career_input("not-a-uuid", "   ")
            .into_dto::<CreateCareer>()
            .unwrap_err();
        assert_eq!(err.message, "Validation failed");
    }

    #[test]
    fn test_patch_distinguishes_null_from_omitted() {
        let patch = CareerPatch {
            description: MaybeUndefined::Null,
            ..empty_career_patch()
        };
        let dto: UpdateCareer = patch.into_dto().unwrap();
        assert_eq!(dto.description, Some(None));
        assert_eq!(dto.target_date, None);

        let refused = CareerPatch {
            title: MaybeUndefined::Null,
            ..empty_career_patch()
        };
        assert!(refused.into_dto::<UpdateCareer>().is_err());
    }

    #[test]
    fn test_recommendation_patch_wire_names() {
        let patch = RecommendationPatch {
            employee_id: MaybeUndefined::Undefined,
            kind: MaybeUndefined::Value(RecommendationType::Mentoring),
            priority: MaybeUndefined::Value(Priority::High),
            title: MaybeUndefined::Undefined,
            description: MaybeUndefined::Undefined,
            status: MaybeUndefined::Undefined,
            skill_ids: MaybeUndefined::Value(vec![ID(RecordId::new().to_string())]),
        };
        let dto: UpdateRecommendation = patch.into_dto().unwrap();
        assert_eq!(dto.kind, Some(domain::RecommendationType::Mentoring));
        assert_eq!(dto.priority, Some(domain::Priority::High));
        assert_eq!(dto.skill_ids.map(|ids| ids.len()), Some(1));
    }
}
