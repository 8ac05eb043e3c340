//! Generic validator interpreting [`Schema`] descriptions

use std::fmt;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;
use uuid::Uuid;

use super::schema::{FieldKind, Schema};

/// The rule a field value broke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Required field missing or null
    Required,
    /// Explicit `null` on a field that cannot be empty
    NotNull,
    /// Body is not a JSON object
    IsObject,
    /// Field not declared on the schema
    Whitelist,
    IsString,
    NotEmpty,
    IsUuid,
    IsDate,
    IsInt,
    Min(i64),
    Max(i64),
    IsBoolean,
    IsArray,
    /// Value outside the declared enum members
    IsEnum(&'static [&'static str]),
    /// Shape accepted by the schema but rejected by deserialisation
    Malformed(String),
}

impl Constraint {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::NotNull => "notNull",
            Self::IsObject => "isObject",
            Self::Whitelist => "whitelist",
            Self::IsString => "isString",
            Self::NotEmpty => "notEmpty",
            Self::IsUuid => "isUuid",
            Self::IsDate => "isDate",
            Self::IsInt => "isInt",
            Self::Min(_) => "min",
            Self::Max(_) => "max",
            Self::IsBoolean => "isBoolean",
            Self::IsArray => "isArray",
            Self::IsEnum(_) => "isEnum",
            Self::Malformed(_) => "malformed",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "is required"),
            Self::NotNull => write!(f, "must not be null"),
            Self::IsObject => write!(f, "must be a JSON object"),
            Self::Whitelist => write!(f, "is not an accepted field"),
            Self::IsString => write!(f, "must be a string"),
            Self::NotEmpty => write!(f, "must not be empty"),
            Self::IsUuid => write!(f, "must be a UUID v4"),
            Self::IsDate => write!(f, "must be an ISO-8601 date (YYYY-MM-DD)"),
            Self::IsInt => write!(f, "must be an integer"),
            Self::Min(min) => write!(f, "must not be less than {min}"),
            Self::Max(max) => write!(f, "must not be greater than {max}"),
            Self::IsBoolean => write!(f, "must be a boolean"),
            Self::IsArray => write!(f, "must be an array"),
            Self::IsEnum(members) => write!(f, "must be one of: {}", members.join(", ")),
            Self::Malformed(detail) => write!(f, "is malformed: {detail}"),
        }
    }
}

/// A single field-level failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Field path, e.g. `skillIds[1]`; `$` for the whole body
    pub field: String,
    pub constraint: Constraint,
}

impl Violation {
    pub fn new(field: impl Into<String>, constraint: Constraint) -> Self {
        Self {
            field: field.into(),
            constraint,
        }
    }
}

impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Violation", 3)?;
        state.serialize_field("field", &self.field)?;
        state.serialize_field("constraint", self.constraint.code())?;
        state.serialize_field("message", &self.constraint.to_string())?;
        state.end()
    }
}

/// Every violation found for one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self(violations)
    }

    pub fn single(field: impl Into<String>, constraint: Constraint) -> Self {
        Self(vec![Violation::new(field, constraint)])
    }

    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    /// Whether any violation concerns `field`
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|v| format!("{} {}", v.field, v.constraint))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Binds a typed input shape to its schema
pub trait Dto: DeserializeOwned + Sized {
    fn schema() -> &'static Schema;
}

/// Check `value` against `schema`, collecting every violation
pub fn validate(schema: &Schema, value: &Value) -> Result<(), ValidationErrors> {
    let Some(object) = value.as_object() else {
        return Err(ValidationErrors::single("$", Constraint::IsObject));
    };

    let mut violations = Vec::new();

    for key in object.keys() {
        if schema.field(key).is_none() {
            violations.push(Violation::new(key.as_str(), Constraint::Whitelist));
        }
    }

    for spec in schema.fields() {
        match object.get(spec.name) {
            None | Some(Value::Null) if spec.required => {
                violations.push(Violation::new(spec.name, Constraint::Required));
            }
            None => {}
            Some(Value::Null) if !spec.nullable => {
                violations.push(Violation::new(spec.name, Constraint::NotNull));
            }
            Some(Value::Null) => {}
            Some(value) => check_value(spec.name, spec.kind, value, &mut violations),
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(violations))
    }
}

/// Validate then deserialise into the typed DTO
///
/// Nulls that survive validation sit on nullable fields only and reach the
/// DTO as they are.
pub fn parse<D: Dto>(value: Value) -> Result<D, ValidationErrors> {
    validate(D::schema(), &value)?;
    serde_json::from_value(value)
        .map_err(|err| ValidationErrors::single("$", Constraint::Malformed(err.to_string())))
}

fn check_value(field: &str, kind: FieldKind, value: &Value, out: &mut Vec<Violation>) {
    match kind {
        FieldKind::Text => match value.as_str() {
            Some(s) if s.trim().is_empty() => out.push(Violation::new(field, Constraint::NotEmpty)),
            Some(_) => {}
            None => out.push(Violation::new(field, Constraint::IsString)),
        },
        FieldKind::Uuid => {
            if !value.as_str().is_some_and(is_uuid_v4) {
                out.push(Violation::new(field, Constraint::IsUuid));
            }
        }
        FieldKind::Enum(members) => {
            if !value.as_str().is_some_and(|s| members.contains(&s)) {
                out.push(Violation::new(field, Constraint::IsEnum(members)));
            }
        }
        FieldKind::Date => {
            if !value.as_str().is_some_and(is_iso_date) {
                out.push(Violation::new(field, Constraint::IsDate));
            }
        }
        FieldKind::Integer { min, max } => match value.as_i64() {
            Some(n) if min.is_some_and(|min| n < min) => {
                out.push(Violation::new(field, Constraint::Min(min.unwrap_or_default())))
            }
            Some(n) if max.is_some_and(|max| n > max) => {
                out.push(Violation::new(field, Constraint::Max(max.unwrap_or_default())))
            }
            Some(_) => {}
            None => out.push(Violation::new(field, Constraint::IsInt)),
        },
        FieldKind::Boolean => {
            if !value.is_boolean() {
                out.push(Violation::new(field, Constraint::IsBoolean));
            }
        }
        FieldKind::IdList => check_each(field, value, out, |item| {
            (!item.as_str().is_some_and(is_uuid_v4)).then_some(Constraint::IsUuid)
        }),
        FieldKind::TextList => check_each(field, value, out, |item| {
            (!item.is_string()).then_some(Constraint::IsString)
        }),
    }
}

fn check_each(
    field: &str,
    value: &Value,
    out: &mut Vec<Violation>,
    check: impl Fn(&Value) -> Option<Constraint>,
) {
    let Some(items) = value.as_array() else {
        out.push(Violation::new(field, Constraint::IsArray));
        return;
    };
    for (index, item) in items.iter().enumerate() {
        if let Some(constraint) = check(item) {
            out.push(Violation::new(format!("{field}[{index}]"), constraint));
        }
    }
}

/// UUID in canonical form with version 4
pub fn is_uuid_v4(s: &str) -> bool {
    Uuid::parse_str(s).is_ok_and(|uuid| uuid.get_version_num() == 4)
}

/// ISO-8601 calendar date
pub fn is_iso_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}
