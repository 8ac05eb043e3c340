//! Domain records and their input shapes
//!
//! Records are flat, identified by a [`RecordId`](crate::RecordId) and
//! timestamped by the persistence engine. Each entity pairs a create DTO with
//! an update DTO whose schema is the partial projection of the create schema.

mod career;
mod content;
mod development;
mod people;
mod skills;

pub use career::{
    Career, CreateCareer, CreateRecommendation, EmployeeJourney, Recommendation,
    RecordJourneyEvent, SetRecommendationStatus, UpdateCareer, UpdateRecommendation,
};
pub use content::{
    AnalyticsRange, ChatPrompt, CreateKnowledgeArticle, CreateNotification, KnowledgeArticle,
    Notification, UpdateKnowledgeArticle, UpdateNotification,
};
pub use development::{
    CreateFeedback, CreateMentoring, CreateRecognition, CreateTraining, Feedback, Mentoring,
    Recognition, Training, UpdateFeedback, UpdateMentoring, UpdateRecognition, UpdateTraining,
};
pub use people::{
    Admin, CreateAdmin, CreateDepartment, CreateEmployee, CreatePosition, CreateUser, Department,
    Employee, Position, UpdateAdmin, UpdateDepartment, UpdateEmployee, UpdatePosition, UpdateUser,
    User,
};
pub use skills::{
    CreateProject, CreateSkill, Project, ProjectSkill, Skill, SkillProgress, TrackSkillProgress,
    UpdateProject, UpdateSkill,
};

#[cfg(test)]
mod tests {
    //! Contract checks run against every entity's create/update pair.

    use std::collections::BTreeSet;

    use serde_json::{json, Map, Value};
    use uuid::Uuid;

    use super::*;
    use crate::entity::{to_patch_document, Entity};
    use crate::validation::{parse, validate, Constraint, Dto, FieldKind, Schema};

    fn sample(kind: FieldKind) -> Value {
        match kind {
            FieldKind::Text => json!("sample"),
            FieldKind::Uuid => json!(Uuid::new_v4().to_string()),
            FieldKind::Enum(members) => json!(members[0]),
            FieldKind::Date => json!("2024-03-15"),
            FieldKind::Integer { min, .. } => json!(min.unwrap_or(1)),
            FieldKind::Boolean => json!(true),
            FieldKind::IdList => json!([Uuid::new_v4().to_string()]),
            FieldKind::TextList => json!(["tag"]),
        }
    }

    fn minimal_body(schema: &Schema) -> Map<String, Value> {
        schema
            .required_fields()
            .map(|spec| (spec.name.to_string(), sample(spec.kind)))
            .collect()
    }

    fn full_body(schema: &Schema) -> Map<String, Value> {
        schema
            .fields()
            .iter()
            .map(|spec| (spec.name.to_string(), sample(spec.kind)))
            .collect()
    }

    fn assert_contract<E: Entity>() {
        let create = E::Create::schema();
        let update = E::Update::schema();

        // Required fields only, optional fields omitted: accepted and typed.
        let minimal = Value::Object(minimal_body(create));
        parse::<E::Create>(minimal.clone())
            .unwrap_or_else(|err| panic!("{} minimal body rejected: {err}", create.name()));

        // Every field populated: accepted and typed.
        parse::<E::Create>(Value::Object(full_body(create)))
            .unwrap_or_else(|err| panic!("{} full body rejected: {err}", create.name()));

        // Dropping any single required field fails on exactly that field.
        for spec in create.required_fields() {
            let mut body = minimal_body(create);
            body.remove(spec.name);
            let err = validate(create, &Value::Object(body)).unwrap_err();
            assert!(
                err.violations()
                    .iter()
                    .any(|v| v.field == spec.name && v.constraint == Constraint::Required),
                "{}: dropping {} was not reported",
                create.name(),
                spec.name
            );
        }

        // Enum fields reject values outside their members.
        for spec in create.fields() {
            if let FieldKind::Enum(_) = spec.kind {
                let mut body = minimal_body(create);
                body.insert(spec.name.to_string(), json!("NOT_A_MEMBER"));
                let err = validate(create, &Value::Object(body)).unwrap_err();
                assert!(err.has(spec.name), "{}.{}", create.name(), spec.name);
            }
        }

        // Update is the partial projection of create.
        assert_eq!(
            create.field_names().into_iter().collect::<BTreeSet<_>>(),
            update.field_names().into_iter().collect::<BTreeSet<_>>(),
            "{} and {} diverged",
            create.name(),
            update.name()
        );
        assert_eq!(update.required_fields().count(), 0);

        // Empty update and every single-field update validate and deserialize.
        parse::<E::Update>(json!({})).expect("empty update");
        for spec in update.fields() {
            let mut body = Map::new();
            body.insert(spec.name.to_string(), sample(spec.kind));
            let typed = parse::<E::Update>(Value::Object(body)).unwrap_or_else(|err| {
                panic!("{} rejected {}: {err}", update.name(), spec.name)
            });
            // Only the supplied field survives into the patch document.
            let patch = to_patch_document(&typed).unwrap();
            assert_eq!(
                patch.keys().collect::<Vec<_>>(),
                vec![spec.name],
                "{} struct fields do not match its schema",
                update.name()
            );
        }

        // An explicit null clears nullable fields and is refused elsewhere.
        for spec in update.fields() {
            let mut body = Map::new();
            body.insert(spec.name.to_string(), Value::Null);
            let body = Value::Object(body);
            if spec.nullable {
                let typed = parse::<E::Update>(body.clone()).unwrap_or_else(|err| {
                    panic!("{} rejected null {}: {err}", update.name(), spec.name)
                });
                assert_eq!(
                    Value::Object(to_patch_document(&typed).unwrap()),
                    body,
                    "{}.{} does not carry its clear",
                    update.name(),
                    spec.name
                );
            } else {
                let err = validate(update, &body).unwrap_err();
                assert!(
                    err.violations()
                        .iter()
                        .any(|v| v.field == spec.name && v.constraint == Constraint::NotNull),
                    "{}.{} accepted null",
                    update.name(),
                    spec.name
                );
            }
        }
    }

    #[test]
    fn test_people_contracts() {
        assert_contract::<Employee>();
        assert_contract::<Department>();
        assert_contract::<Position>();
        assert_contract::<Admin>();
        assert_contract::<User>();
    }

    #[test]
    fn test_career_contracts() {
        assert_contract::<Career>();
        assert_contract::<Recommendation>();
    }

    #[test]
    fn test_skill_and_project_contracts() {
        assert_contract::<Skill>();
        assert_contract::<Project>();
    }

    #[test]
    fn test_development_contracts() {
        assert_contract::<Training>();
        assert_contract::<Mentoring>();
        assert_contract::<Recognition>();
        assert_contract::<Feedback>();
    }

    #[test]
    fn test_content_contracts() {
        assert_contract::<Notification>();
        assert_contract::<KnowledgeArticle>();
    }

    #[test]
    fn test_standalone_inputs() {
        parse::<TrackSkillProgress>(json!({"level": "EXPERT"})).unwrap();
        assert!(parse::<TrackSkillProgress>(json!({"level": "GURU"})).is_err());
        assert!(parse::<TrackSkillProgress>(json!({"level": "EXPERT", "skillId": Uuid::new_v4().to_string()})).is_err());

        parse::<AnalyticsRange>(json!({})).unwrap();
        parse::<AnalyticsRange>(json!({"endDate": "2024-01-01"})).unwrap();
        parse::<AnalyticsRange>(json!({"startDate": "2024-02-01", "endDate": "2024-01-01"}))
            .unwrap();

        parse::<RecordJourneyEvent>(json!({
            "employeeId": Uuid::new_v4().to_string(),
            "kind": "HIRED",
            "title": "Joined",
            "occurredOn": "2023-09-01",
        }))
        .unwrap();

        assert!(parse::<ChatPrompt>(json!({"question": ""})).is_err());
    }

    #[test]
    fn test_recommendation_type_uses_wire_name() {
        let body = json!({
            "employeeId": Uuid::new_v4().to_string(),
            "type": "MENTORING",
            "priority": "HIGH",
            "title": "Pair with a staff engineer",
        });
        let dto: CreateRecommendation = parse(body).unwrap();
        assert_eq!(dto.kind, crate::enums::RecommendationType::Mentoring);
        assert_eq!(dto.priority, crate::enums::Priority::High);
    }
}
