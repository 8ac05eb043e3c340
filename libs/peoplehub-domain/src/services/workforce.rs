//! Workforce planning: departments, positions and headcount

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::audit::Auditable;
use crate::enums::EmployeeStatus;
use crate::error::Result;
use crate::ids::RecordId;
use crate::ports::{ClientRepository, Filter, PersistenceClient};
use crate::records::{Department, Employee, Position};

use super::RecordService;

/// Active headcount of one department
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DepartmentHeadcount {
    /// `None` groups employees without a department
    pub department_id: Option<RecordId>,
    pub department_name: Option<String>,
    pub headcount: usize,
}

pub struct WorkforcePlanningService {
    departments: Arc<RecordService<Department>>,
    positions: Arc<RecordService<Position>>,
    employees: ClientRepository<Employee>,
}

impl WorkforcePlanningService {
    pub fn new(client: Arc<dyn PersistenceClient>) -> Self {
        Self {
            departments: Arc::new(RecordService::new(Arc::new(
                ClientRepository::<Department>::new(client.clone()),
            ))),
            positions: Arc::new(RecordService::new(Arc::new(
                ClientRepository::<Position>::new(client.clone()),
            ))),
            employees: ClientRepository::new(client),
        }
    }

    pub fn departments(&self) -> &Arc<RecordService<Department>> {
        &self.departments
    }

    pub fn positions(&self) -> &Arc<RecordService<Position>> {
        &self.positions
    }

    /// Headcount per department
    ///
    /// Archived and terminated employees are not counted. Every department is
    /// listed, including empty ones.
    pub async fn headcount(&self) -> Result<Vec<DepartmentHeadcount>> {
        let mut counts: BTreeMap<Option<RecordId>, usize> = BTreeMap::new();
        for employee in self.employees.select(&Filter::all()).await? {
            if employee.is_soft_deleted() || employee.status == EmployeeStatus::Terminated {
                continue;
            }
            *counts.entry(employee.department_id).or_default() += 1;
        }

        let mut report: Vec<DepartmentHeadcount> = self
            .departments
            .list(&Filter::all())
            .await?
            .into_iter()
            .map(|department| DepartmentHeadcount {
                department_id: Some(department.id),
                headcount: counts.remove(&Some(department.id)).unwrap_or(0),
                department_name: Some(department.name),
            })
            .collect();
        report.sort_by(|a, b| a.department_name.cmp(&b.department_name));

        // Leftovers: no department, or one that no longer exists
        report.extend(counts.into_iter().map(|(department_id, headcount)| {
            DepartmentHeadcount {
                department_id,
                department_name: None,
                headcount,
            }
        }));
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;
    use crate::audit;
    use crate::entity::to_document;
    use crate::records::{CreateDepartment, CreateEmployee};
    use crate::services::testing::StubClient;

    #[tokio::test]
    async fn test_headcount_excludes_archived_and_terminated() {
        let client = StubClient::shared();
        let service = WorkforcePlanningService::new(client.clone());
        let employees = ClientRepository::<Employee>::new(client);

        let engineering = service
            .departments()
            .create(CreateDepartment {
                name: "Engineering".to_string(),
                description: None,
            })
            .await
            .unwrap();
        service
            .departments()
            .create(CreateDepartment {
                name: "Sales".to_string(),
                description: None,
            })
            .await
            .unwrap();

        let hire = |department_id, status| CreateEmployee {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            hire_date: Utc::now().date_naive(),
            department_id,
            position_id: None,
            status: Some(status),
        };
        for draft in [
            hire(Some(engineering.id), EmployeeStatus::Active),
            hire(Some(engineering.id), EmployeeStatus::OnLeave),
            hire(Some(engineering.id), EmployeeStatus::Terminated),
            hire(None, EmployeeStatus::Active),
        ] {
            employees.insert(to_document(&draft).unwrap()).await.unwrap();
        }
        let archived = employees
            .insert(to_document(&hire(Some(engineering.id), EmployeeStatus::Active)).unwrap())
            .await
            .unwrap();
        employees
            .merge(archived.id, audit::soft_deleted("hr", Utc::now()))
            .await
            .unwrap();

        let report = service.headcount().await.unwrap();
        let as_json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            as_json,
            json!([
                {"departmentId": engineering.id, "departmentName": "Engineering", "headcount": 2},
                {"departmentId": report[1].department_id, "departmentName": "Sales", "headcount": 0},
                {"departmentId": null, "departmentName": null, "headcount": 1},
            ])
        );
    }
}
