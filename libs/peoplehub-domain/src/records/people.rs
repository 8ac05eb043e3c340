//! Employees, organisation structure and accounts

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::audit::{AuditTrail, Auditable};
use crate::entity::{Entity, Record};
use crate::enums::{AdminRole, DomainEnum, EmployeeStatus};
use crate::ids::RecordId;
use crate::validation::{dto_schema, to_partial, Dto, FieldKind, Schema};

/// A person employed by the organisation
///
/// Employee is the "one" side of recommendations, journeys, feedback and
/// mentoring records, which reference it by `employeeId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub hire_date: NaiveDate,
    #[serde(default)]
    pub department_id: Option<RecordId>,
    #[serde(default)]
    pub position_id: Option<RecordId>,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(flatten)]
    pub audit: AuditTrail,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for Employee {
    const COLLECTION: &'static str = "employees";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Employee {
    type Create = CreateEmployee;
    type Update = UpdateEmployee;
}

impl Auditable for Employee {
    fn audit(&self) -> &AuditTrail {
        &self.audit
    }
}

/// Input for creating an employee; `status` defaults to ACTIVE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub hire_date: NaiveDate,
    pub department_id: Option<RecordId>,
    pub position_id: Option<RecordId>,
    pub status: Option<EmployeeStatus>,
}

dto_schema!(CreateEmployee => Schema::new("CreateEmployee")
    .required("firstName", FieldKind::Text)
    .required("lastName", FieldKind::Text)
    .required("email", FieldKind::Text)
    .required("hireDate", FieldKind::Date)
    .optional("departmentId", FieldKind::Uuid)
    .optional("positionId", FieldKind::Uuid)
    .defaulted("status", FieldKind::Enum(EmployeeStatus::MEMBERS)));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployee {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub hire_date: Option<NaiveDate>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<RecordId>))]
    pub department_id: Option<Option<RecordId>>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<RecordId>))]
    pub position_id: Option<Option<RecordId>>,
    pub status: Option<EmployeeStatus>,
}

dto_schema!(UpdateEmployee => to_partial(CreateEmployee::schema(), "UpdateEmployee"));

/// Department; has many positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Department {
    const COLLECTION: &'static str = "departments";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Department {
    type Create = CreateDepartment;
    type Update = UpdateDepartment;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartment {
    pub name: String,
    pub description: Option<String>,
}

dto_schema!(CreateDepartment => Schema::new("CreateDepartment")
    .required("name", FieldKind::Text)
    .optional("description", FieldKind::Text));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartment {
    pub name: Option<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

dto_schema!(UpdateDepartment => to_partial(CreateDepartment::schema(), "UpdateDepartment"));

/// Position; optionally belongs to one department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub level: Option<i64>,
    #[serde(default)]
    pub department_id: Option<RecordId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Position {
    const COLLECTION: &'static str = "positions";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Position {
    type Create = CreatePosition;
    type Update = UpdatePosition;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePosition {
    pub title: String,
    pub level: Option<i64>,
    pub department_id: Option<RecordId>,
}

dto_schema!(CreatePosition => Schema::new("CreatePosition")
    .required("title", FieldKind::Text)
    .optional("level", FieldKind::integer_between(1, 10))
    .optional("departmentId", FieldKind::Uuid));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePosition {
    pub title: Option<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub level: Option<Option<i64>>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub department_id: Option<Option<RecordId>>,
}

dto_schema!(UpdatePosition => to_partial(CreatePosition::schema(), "UpdatePosition"));

/// Administrative privileges held by one employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: RecordId,
    pub employee_id: RecordId,
    pub role: AdminRole,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub audit: AuditTrail,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Admin {
    const COLLECTION: &'static str = "admins";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Admin {
    type Create = CreateAdmin;
    type Update = UpdateAdmin;
}

impl Auditable for Admin {
    fn audit(&self) -> &AuditTrail {
        &self.audit
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdmin {
    pub employee_id: RecordId,
    pub role: AdminRole,
    pub notes: Option<String>,
}

dto_schema!(CreateAdmin => Schema::new("CreateAdmin")
    .required("employeeId", FieldKind::Uuid)
    .required("role", FieldKind::Enum(AdminRole::MEMBERS))
    .optional("notes", FieldKind::Text));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdmin {
    pub employee_id: Option<RecordId>,
    pub role: Option<AdminRole>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

dto_schema!(UpdateAdmin => to_partial(CreateAdmin::schema(), "UpdateAdmin"));

/// Login account, optionally linked to an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub employee_id: Option<RecordId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for User {
    type Create = CreateUser;
    type Update = UpdateUser;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub email: String,
    pub display_name: String,
    pub employee_id: Option<RecordId>,
}

dto_schema!(CreateUser => Schema::new("CreateUser")
    .required("email", FieldKind::Text)
    .required("displayName", FieldKind::Text)
    .optional("employeeId", FieldKind::Uuid));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub email: Option<String>,
    pub display_name: Option<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<Option<RecordId>>,
}

dto_schema!(UpdateUser => to_partial(CreateUser::schema(), "UpdateUser"));
